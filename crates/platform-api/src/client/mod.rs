//! HTTP client for the platform management API.
//!
//! This module provides the five calls the console core depends on:
//! - Account holder profile via /accountHolders/{id}
//! - Payment instruments via /accountHolders/{id}/payment-instruments
//! - Transactions via /accountHolders/{id}/transactions
//! - Lifecycle actions via /accountHolders/{id}/activate and /suspend
//!
//! The client applies a transport timeout but no retries and no client-side
//! rate limiting; the platform's 429s surface as typed errors.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::PlatformApiError;
use crate::models::{
    AccountHolderRecord, InstrumentsEnvelope, LifecycleResultRecord, TransactionsEnvelope,
};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Error body shape used by the platform for non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// ============================================================================
// PlatformClient
// ============================================================================

/// Typed client for the platform management API.
///
/// Cheap to clone is not a goal; the console holds one instance behind an
/// `Arc` for the lifetime of the process.
pub struct PlatformClient {
    client: Client,
    base_url: String,
}

impl PlatformClient {
    /// Create a new client against the given base URL
    /// (e.g. `http://localhost:8080/api`).
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the account holder profile.
    pub async fn get_account_holder(
        &self,
        account_holder_id: &str,
    ) -> Result<AccountHolderRecord, PlatformApiError> {
        let url = self.holder_url(account_holder_id, None);
        let text = self.get(&url).await?;

        serde_json::from_str(&text)
            .map_err(|e| PlatformApiError::Decode(format!("account holder response: {}", e)))
    }

    /// Fetch the payment instruments linked to the account holder.
    pub async fn get_payment_instruments(
        &self,
        account_holder_id: &str,
    ) -> Result<InstrumentsEnvelope, PlatformApiError> {
        let url = self.holder_url(account_holder_id, Some("payment-instruments"));
        let text = self.get(&url).await?;

        serde_json::from_str(&text)
            .map_err(|e| PlatformApiError::Decode(format!("payment instruments response: {}", e)))
    }

    /// Fetch the account holder's transaction history.
    pub async fn get_transactions(
        &self,
        account_holder_id: &str,
    ) -> Result<TransactionsEnvelope, PlatformApiError> {
        let url = self.holder_url(account_holder_id, Some("transactions"));
        let text = self.get(&url).await?;

        serde_json::from_str(&text)
            .map_err(|e| PlatformApiError::Decode(format!("transactions response: {}", e)))
    }

    /// Activate the account holder.
    pub async fn activate_account_holder(
        &self,
        account_holder_id: &str,
    ) -> Result<LifecycleResultRecord, PlatformApiError> {
        let url = self.holder_url(account_holder_id, Some("activate"));
        let text = self.post(&url).await?;

        serde_json::from_str(&text)
            .map_err(|e| PlatformApiError::Decode(format!("activate response: {}", e)))
    }

    /// Suspend the account holder.
    pub async fn suspend_account_holder(
        &self,
        account_holder_id: &str,
    ) -> Result<LifecycleResultRecord, PlatformApiError> {
        let url = self.holder_url(account_holder_id, Some("suspend"));
        let text = self.post(&url).await?;

        serde_json::from_str(&text)
            .map_err(|e| PlatformApiError::Decode(format!("suspend response: {}", e)))
    }

    /// Build the URL for an account holder resource, percent-encoding the
    /// identifier.
    fn holder_url(&self, account_holder_id: &str, suffix: Option<&str>) -> String {
        let encoded = urlencoding::encode(account_holder_id);
        match suffix {
            Some(suffix) => format!("{}/accountHolders/{}/{}", self.base_url, encoded, suffix),
            None => format!("{}/accountHolders/{}", self.base_url, encoded),
        }
    }

    async fn get(&self, url: &str) -> Result<String, PlatformApiError> {
        debug!("Platform API request: GET {}", url);
        self.execute(self.client.get(url), url).await
    }

    async fn post(&self, url: &str) -> Result<String, PlatformApiError> {
        debug!("Platform API request: POST {}", url);
        self.execute(self.client.post(url), url).await
    }

    /// Send the request and map the response status to a typed error.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<String, PlatformApiError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                PlatformApiError::Timeout
            } else {
                PlatformApiError::Network(e)
            }
        })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(PlatformApiError::RateLimited);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(PlatformApiError::Unauthorized(
                "Invalid or missing credentials".to_string(),
            ));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(PlatformApiError::Unauthorized("Access denied".to_string()));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(PlatformApiError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // Surface the platform's own message when the body carries one
            if let Ok(error_body) = serde_json::from_str::<ErrorBody>(&body) {
                if let Some(message) = error_body.message {
                    return Err(PlatformApiError::Api {
                        status: status.as_u16(),
                        message,
                    });
                }
            }

            return Err(PlatformApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        response.text().await.map_err(PlatformApiError::Network)
    }
}

// ============================================================================
// Tests
// ============================================================================
