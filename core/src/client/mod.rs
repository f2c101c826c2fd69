//! Stateless request builder and response parser for the blog backend.
//!
//! # Design
//! `BlogClient` holds only a `base_url`. Every endpoint is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse` and returns view models. The submodules
//! group these pairs per resource; the helpers below implement the backend's
//! uniform envelope protocol.
//!
//! Three response forms exist:
//! - legacy endpoints return the view-model shape directly, no envelope;
//! - envelope endpoints return `{code, message, data}` with `code == 0` as
//!   success;
//! - list envelopes additionally require `data` to be an array and degrade
//!   to an empty list otherwise.

mod about;
mod articles;
mod banners;
mod directory;
mod search;
mod taxonomy;

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::wire::Envelope;

/// Synchronous, stateless client for the blog backend.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Any 2xx passes; everything else becomes `ApiError::Http`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Legacy endpoints: the body is the payload.
fn parse_raw<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    decode(&response.body)
}

fn parse_envelope<T: DeserializeOwned>(response: HttpResponse) -> Result<Envelope<T>, ApiError> {
    check_status(&response)?;
    decode(&response.body)
}

/// Decode `{code: 0, data: [...]}` into mapped items, or an empty list when
/// the code is non-zero or `data` is not an array.
fn parse_list<R, V>(
    response: HttpResponse,
    endpoint: &str,
    map: impl FnMut(R) -> V,
) -> Result<Vec<V>, ApiError>
where
    R: DeserializeOwned,
{
    let envelope: Envelope<serde_json::Value> = parse_envelope(response)?;
    match envelope.data {
        Some(serde_json::Value::Array(items)) if envelope.code == 0 => {
            let raw: Vec<R> = serde_json::from_value(serde_json::Value::Array(items))
                .map_err(|e| ApiError::Deserialization(e.to_string()))?;
            Ok(raw.into_iter().map(map).collect())
        }
        _ => {
            warn!(endpoint, code = envelope.code, "unexpected list envelope, using empty list");
            Ok(Vec::new())
        }
    }
}
