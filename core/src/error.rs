//! Error types for the blog data layer.
//!
//! # Design
//! `NotFound` and `Backend` are kept apart from `Http` because the backend
//! reports most logical failures inside a `200 OK` envelope (`code != 0`).
//! A non-2xx status lands in `Http` with the raw body for debugging, and a
//! request that never produced a response lands in `Network`.

use thiserror::Error;

/// Errors returned by the transport, the mock provider and every parse step.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received: connection failure or the request timed out.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The envelope arrived but reported `code != 0`.
    #[error("{message}")]
    Backend { code: i64, message: String },

    /// The requested entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build a `Backend` error, preferring the backend's own message.
    pub(crate) fn backend(code: i64, message: Option<String>, fallback: &str) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::Backend { code, message }
    }
}
