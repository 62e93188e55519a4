//! Core error types for the Paydeck console.
//!
//! Fetch and action failures are captured into display state by the detail
//! service and never escape it; the variants here cover the layer below
//! (platform calls) and input validation at the service boundary.

use thiserror::Error;

use paydeck_platform_api::PlatformApiError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the console core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Platform API call failed: {0}")]
    PlatformApi(#[from] PlatformApiError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
