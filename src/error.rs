//! Error types for the todo checkbox frontend

use thiserror::Error;

/// Page configuration could not be read
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config object: {0}")]
    Object(String),

    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// A completion call did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompleteError {
    #[error("no global window")]
    NoWindow,

    #[error("request failed: {0}")]
    Network(String),

    #[error("completion endpoint answered {0}")]
    Status(u16),
}

/// Checkbox listeners could not be attached
#[derive(Debug, Error)]
pub enum BindError {
    #[error("window has no document")]
    NoDocument,

    #[error("failed to attach listener: {0}")]
    Listener(String),
}
