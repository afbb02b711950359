//! Frontend Models
//!
//! Values passed from the page to the completion endpoint.

use std::fmt;

/// Todo identifier: the raw `id` attribute of a checkbox's parent element.
///
/// Opaque and unvalidated; the server-rendered markup is trusted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// One outbound completion call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub id: TodoId,
    pub url: String,
}
