//! Binder Configuration
//!
//! Read from the host page. Sources, first hit wins:
//! - an inline `<script type="application/json" id="todo-checkbox-config">`
//! - a global `window.todoCheckboxConfig` object
//! - built-in defaults

use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::error::ConfigError;

pub const CONFIG_ELEMENT_ID: &str = "todo-checkbox-config";
pub const CONFIG_GLOBAL: &str = "todoCheckboxConfig";

pub const DEFAULT_MARKER_CLASS: &str = "todo-checkbox";
pub const DEFAULT_ENDPOINT: &str = "/complete/";
pub const DEFAULT_ID_PARAM: &str = "id";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct BinderConfig {
    /// Class that marks a todo checkbox
    pub marker_class: String,
    /// Path of the completion endpoint, query string excluded
    pub endpoint: String,
    /// Query parameter carrying the todo id
    pub id_param: String,
    /// Percent-encode the id. Off: ids are concatenated as-is.
    pub escape_identifier: bool,
    /// Max `tracing` level sent to the console
    pub log_level: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            id_param: DEFAULT_ID_PARAM.to_string(),
            escape_identifier: false,
            log_level: "info".to_string(),
        }
    }
}

impl BinderConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validated()
    }

    pub fn from_js(value: JsValue) -> Result<Self, ConfigError> {
        let config: Self =
            serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Object(e.to_string()))?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))?;
        Ok(self)
    }

    /// Parsed `log_level`; INFO if it does not parse.
    pub fn max_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }
}

/// Resolve the page's config.
pub fn load(window: &Window) -> Result<BinderConfig, ConfigError> {
    if let Some(el) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
    {
        return BinderConfig::from_json(&el.text_content().unwrap_or_default());
    }

    let global = js_sys::Reflect::get(window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| ConfigError::Object(format!("{:?}", e)))?;
    if global.is_undefined() || global.is_null() {
        return Ok(BinderConfig::default());
    }
    BinderConfig::from_js(global)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use js_sys::{Reflect, JSON};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn window() -> Window {
        web_sys::window().unwrap()
    }

    fn set_global(json: &str) {
        Reflect::set(&window(), &CONFIG_GLOBAL.into(), &JSON::parse(json).unwrap()).unwrap();
    }

    fn mount_script(json: &str) {
        let doc = window().document().unwrap();
        let script = doc.create_element("script").unwrap();
        script.set_attribute("type", "application/json").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_text_content(Some(json));
        doc.body().unwrap().append_child(&script).unwrap();
    }

    /// Drop both config sources so tests start from a bare page.
    fn clear() {
        let window = window();
        Reflect::delete_property(&window, &CONFIG_GLOBAL.into()).unwrap();
        if let Some(el) = window
            .document()
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        {
            el.remove();
        }
    }

    #[wasm_bindgen_test]
    fn bare_page_gets_defaults() {
        clear();
        assert_eq!(load(&window()).unwrap(), BinderConfig::default());
    }

    #[wasm_bindgen_test]
    fn global_object_is_read() {
        clear();
        set_global(r#"{"endpoint":"/from-global","escapeIdentifier":true}"#);

        let config = load(&window()).unwrap();
        clear();
        assert_eq!(config.endpoint, "/from-global");
        assert!(config.escape_identifier);
        assert_eq!(config.marker_class, DEFAULT_MARKER_CLASS);
    }

    #[wasm_bindgen_test]
    fn inline_script_wins_over_global() {
        clear();
        set_global(r#"{"endpoint":"/from-global"}"#);
        mount_script(r#"{"endpoint":"/from-script"}"#);

        let config = load(&window()).unwrap();
        clear();
        assert_eq!(config.endpoint, "/from-script");
    }

    #[wasm_bindgen_test]
    fn mistyped_global_is_an_object_error() {
        clear();
        set_global(r#"{"endpoint":5}"#);

        let err = load(&window()).unwrap_err();
        clear();
        assert!(matches!(err, ConfigError::Object(_)));
    }

    #[wasm_bindgen_test]
    fn bad_log_level_in_global_is_rejected() {
        clear();
        set_global(r#"{"logLevel":"loud"}"#);

        let err = load(&window()).unwrap_err();
        clear();
        assert!(matches!(err, ConfigError::LogLevel(level) if level == "loud"));
    }
}
