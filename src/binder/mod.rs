//! Checkbox Binder
//!
//! Wires todo checkboxes to the completion endpoint. Page access goes
//! through [`Page`] and requests leave through [`CompletionSink`], so the
//! binding logic runs unchanged against a synthetic page in tests.

pub mod web;

use std::cell::Cell;
use std::rc::Rc;

use crate::config::BinderConfig;
use crate::endpoint::completion_url;
use crate::error::BindError;
use crate::models::{CompletionRequest, TodoId};

/// Something a click can land on.
pub trait Checkbox {
    /// `id` of the immediate parent element. `None` without a parent element,
    /// `Some("")` when the parent carries no `id`.
    fn parent_id(&self) -> Option<String>;
}

/// Runs with the click target.
pub type ClickHandler = Rc<dyn Fn(&dyn Checkbox)>;

/// Document the binder scans for checkboxes.
pub trait Page {
    /// Handle to one element on the page.
    type Element;

    /// Elements whose class list contains `class`, in document order.
    /// A snapshot: elements inserted afterwards are not included.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// Register `handler` for clicks on `element`.
    fn on_click(&self, element: &Self::Element, handler: ClickHandler) -> Result<(), BindError>;
}

/// Where completion requests go once a click resolves to a todo.
pub trait CompletionSink {
    /// Send `request` without waiting for its outcome.
    fn dispatch(&self, request: CompletionRequest);
}

/// Todo id of a checkbox, read from its parent element.
pub fn extract_identifier<C: Checkbox + ?Sized>(element: &C) -> Option<TodoId> {
    element.parent_id().map(TodoId::new)
}

/// Whether the binder has scanned its page yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderState {
    Unbound,
    Bound,
}

/// Binds marked checkboxes and turns their clicks into completion requests.
pub struct CheckboxBinder<S> {
    config: BinderConfig,
    sink: S,
    state: Cell<BinderState>,
}

impl<S: CompletionSink + 'static> CheckboxBinder<S> {
    /// Unbound binder sending through `sink`.
    pub fn new(config: BinderConfig, sink: S) -> Self {
        Self {
            config,
            sink,
            state: Cell::new(BinderState::Unbound),
        }
    }

    /// Current bound / unbound state.
    pub fn state(&self) -> BinderState {
        self.state.get()
    }

    /// Attach a click handler to every marked checkbox on `page`.
    ///
    /// Binding happens once per binder; later calls bind nothing and return 0.
    /// An element whose listener cannot be attached is logged and skipped;
    /// the rest are still bound. Returns how many were bound.
    pub fn initialize<P: Page>(self: &Rc<Self>, page: &P) -> usize {
        if self.state.get() == BinderState::Bound {
            tracing::debug!("todo checkboxes already bound");
            return 0;
        }
        self.state.set(BinderState::Bound);

        let elements = page.elements_by_class(&self.config.marker_class);
        let mut bound = 0;
        for (index, element) in elements.iter().enumerate() {
            let binder = Rc::clone(self);
            let handler: ClickHandler =
                Rc::new(move |target: &dyn Checkbox| binder.on_toggle(target));
            match page.on_click(element, handler) {
                Ok(()) => bound += 1,
                Err(e) => tracing::warn!(index, error = %e, "skipping todo checkbox"),
            }
        }

        tracing::info!(
            count = bound,
            found = elements.len(),
            marker = %self.config.marker_class,
            "todo checkboxes bound"
        );
        bound
    }

    /// Turn a click into a completion request.
    pub fn on_toggle(&self, target: &dyn Checkbox) {
        let Some(id) = extract_identifier(target) else {
            tracing::debug!("clicked checkbox has no parent element");
            return;
        };
        if id.is_empty() {
            tracing::debug!("checkbox parent has no id, sending empty identifier");
        }

        let url = completion_url(&self.config, &id);
        tracing::debug!(%id, %url, "dispatching completion");
        self.sink.dispatch(CompletionRequest { id, url });
    }
}
