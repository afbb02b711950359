//! Web Listener Utilities
//!
//! Attach DOM event listeners backed by leaked closures.
//! Listeners live for the rest of the page, so nothing is kept to remove them.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, EventTarget, Window};

/// `document.readyState` once every subresource has loaded
const READY_STATE_COMPLETE: &str = "complete";

/// Attach `handler` to `event` on `target`.
///
/// The closure is leaked on success, so the handler stays registered until
/// the page goes away.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Whether the window's document already fired `load`.
pub fn is_loaded(window: &Window) -> bool {
    window
        .document()
        .map(|doc| doc.ready_state() == READY_STATE_COMPLETE)
        .unwrap_or(false)
}

/// Run `f` once, on the window `load` event.
///
/// The wasm module may be instantiated after `load` already fired; in that
/// case `f` runs immediately instead of waiting for an event that never comes.
pub fn on_load<F>(window: &Window, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if is_loaded(window) {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    listen(window, "load", move |_ev: Event| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}
