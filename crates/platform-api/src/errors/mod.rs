//! Error types for the platform API crate.
//!
//! [`PlatformApiError`] covers every failure mode of a management API call:
//! transport problems, auth rejections, rate limits, and undecodable bodies.
//! Callers convert these into display state; nothing in this crate retries.

use thiserror::Error;

/// Errors that can occur while calling the platform management API.
#[derive(Error, Debug)]
pub enum PlatformApiError {
    /// The request timed out at the transport layer.
    #[error("Request timed out")]
    Timeout,

    /// The platform rate limited the request (HTTP 429).
    #[error("Rate limited by the platform API")]
    RateLimited,

    /// The request was rejected for missing or invalid credentials
    /// (HTTP 401 or 403).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The requested resource does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The platform returned a non-success status.
    /// Carries the parsed `message` from the error body when one is present,
    /// otherwise the raw body text.
    #[error("Platform API error: HTTP {status} - {message}")]
    Api {
        /// The HTTP status code of the response
        status: u16,
        /// The error message from the platform
        message: String,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("Failed to decode {0}")]
    Decode(String),

    /// A network error occurred while communicating with the platform.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
