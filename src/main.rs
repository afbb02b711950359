//! Todo Checkbox Frontend Entry Point
//!
//! Progressive enhancement for the server-rendered todo list: clicking a todo
//! checkbox posts that todo to the completion endpoint.

mod binder;
mod commands;
mod config;
mod endpoint;
mod error;
mod models;

use std::rc::Rc;

use binder::CheckboxBinder;
use commands::FetchSink;
use config::BinderConfig;
use console_logger::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };

    let config = config::load(&window);
    let max_level = config
        .as_ref()
        .map(BinderConfig::max_level)
        .unwrap_or(LevelFilter::INFO);
    if let Err(e) = console_logger::init_logger(max_level) {
        web_sys::console::warn_1(&e.to_string().into());
    }

    let config = config.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "ignoring page config, using defaults");
        BinderConfig::default()
    });

    let checkboxes = Rc::new(CheckboxBinder::new(config, FetchSink));
    if let Err(e) = binder::web::install(&window, checkboxes) {
        tracing::warn!(error = %e, "todo checkboxes not installed");
    }
}
