//! DOM Adapters
//!
//! `web-sys` side of the binder: the live page, DOM checkboxes, and the
//! load-lifecycle hook.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use super::{Checkbox, CheckboxBinder, ClickHandler, CompletionSink, Page};
use crate::error::BindError;

pub struct DomCheckbox(Element);

impl Checkbox for DomCheckbox {
    fn parent_id(&self) -> Option<String> {
        self.0.parent_element().map(|parent| parent.id())
    }
}

pub struct WebPage {
    document: Document,
}

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Page for WebPage {
    type Element = Element;

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        let live = self.document.get_elements_by_class_name(class);
        (0..live.length()).filter_map(|i| live.item(i)).collect()
    }

    fn on_click(&self, element: &Element, handler: ClickHandler) -> Result<(), BindError> {
        web_listeners::listen(element, "click", move |ev: Event| {
            // Identifier comes from the event target, not the bound element
            let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            handler(&DomCheckbox(target));
        })
        .map_err(|e| BindError::Listener(format!("{:?}", e)))
    }
}

/// Bind `binder` to the window's document once the page has loaded.
pub fn install<S>(window: &Window, binder: Rc<CheckboxBinder<S>>) -> Result<(), BindError>
where
    S: CompletionSink + 'static,
{
    let document = window.document().ok_or(BindError::NoDocument)?;
    web_listeners::on_load(window, move || {
        binder.initialize(&WebPage::new(document));
    })
    .map_err(|e| BindError::Listener(format!("{:?}", e)))
}
