//! Gateway trait the detail service depends on.

use async_trait::async_trait;

use crate::errors::Result;
use crate::holders::AccountHolderProfile;
use crate::instruments::PaymentInstrument;
use crate::transactions::Transaction;

/// Backend collaborator for the detail view. One implementation wraps the
/// platform HTTP client; tests supply mocks.
#[async_trait]
pub trait DetailGateway: Send + Sync {
    /// Fetch the account holder profile.
    async fn fetch_profile(&self, entity_id: &str) -> Result<AccountHolderProfile>;

    /// Fetch payment instruments. `None` means the platform supplied no
    /// instrument data (the fallback seed applies); `Some(vec![])` is a
    /// genuine empty result.
    async fn fetch_instruments(&self, entity_id: &str) -> Result<Option<Vec<PaymentInstrument>>>;

    /// Fetch the transaction history. An absent collection is already
    /// normalized to empty.
    async fn fetch_transactions(&self, entity_id: &str) -> Result<Vec<Transaction>>;

    /// Activate the account holder, returning the status the platform
    /// reported back, if any.
    async fn activate(&self, entity_id: &str) -> Result<Option<String>>;

    /// Suspend the account holder, returning the status the platform
    /// reported back, if any.
    async fn suspend(&self, entity_id: &str) -> Result<Option<String>>;
}
