//! Completion Commands
//!
//! Frontend binding to the server's completion endpoint.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{RequestInit, Response};

use crate::binder::CompletionSink;
use crate::error::CompleteError;
use crate::models::CompletionRequest;

const COMPLETE_METHOD: &str = "POST";

/// Any 2xx status counts as success.
pub fn check_status(status: u16) -> Result<u16, CompleteError> {
    if (200..300).contains(&status) {
        Ok(status)
    } else {
        Err(CompleteError::Status(status))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// POST the request (no body) and wait for the server's answer.
pub async fn complete_todo(request: &CompletionRequest) -> Result<u16, CompleteError> {
    let window = web_sys::window().ok_or(CompleteError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method(COMPLETE_METHOD);

    let promise = window.fetch_with_str_and_init(&request.url, &init);
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| CompleteError::Network(describe(&e)))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| CompleteError::Network(describe(&e)))?;

    check_status(response.status())
}

/// Fire-and-forget sink backed by `fetch`.
///
/// Each request runs on its own local task; clicks never wait on the network
/// and the outcome is never shown on the page. It only reaches the debug log.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchSink;

impl CompletionSink for FetchSink {
    fn dispatch(&self, request: CompletionRequest) {
        spawn_local(async move {
            match complete_todo(&request).await {
                Ok(status) => tracing::debug!(id = %request.id, status, "completion acknowledged"),
                Err(e) => tracing::debug!(id = %request.id, error = %e, "completion dropped"),
            }
        });
    }
}
