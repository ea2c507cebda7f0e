//! HTTP plumbing shared by every page.
//!
//! The pages never talk to the network directly. They go through
//! [`ApiClient`], which formats URLs, encodes bodies and decodes responses,
//! and hands the actual exchange to a [`Transport`]. The browser build plugs a
//! `gloo-net` transport in; tests plug an in-memory one.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

pub mod client;
pub mod endpoints;
#[cfg(test)]
pub(crate) mod mock;

pub use client::ApiClient;

// ── Error ───────────────────────────────────────────────────────────

/// Failure of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("network: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("decode: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("encode: {0}")]
    Encode(#[source] serde_json::Error),
}

// ── Request / response ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// One outgoing call. `body` is already-serialised JSON when present.
///
/// Every request must bypass the HTTP cache; transports are expected to send
/// it with the `no-store` cache mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Raw response: status code plus the body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decodes the body regardless of the status code, the way `fetch`
    /// callers do with `res.json()`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(ApiError::Decode)
    }

    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }
}

// ── Transport ───────────────────────────────────────────────────────

/// Performs one HTTP exchange.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
