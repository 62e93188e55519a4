//! Detail gateway over the platform HTTP client.

use async_trait::async_trait;
use log::warn;
use paydeck_platform_api::{
    AccountHolderRecord, CapabilityRecord, InstrumentRecord, PlatformClient, TransactionRecord,
    TransferInstrumentRecord,
};

use crate::detail::DetailGateway;
use crate::errors::Result;
use crate::holders::{AccountHolderProfile, CapabilityState, TransferInstrumentState};
use crate::instruments::{BankAccountInstrument, CardInstrument, PaymentInstrument};
use crate::transactions::{Transaction, TransactionKind, TransactionStatus};

/// Gateway mapping platform wire records onto the console's domain models.
pub struct PlatformGateway {
    client: PlatformClient,
}

impl PlatformGateway {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DetailGateway for PlatformGateway {
    async fn fetch_profile(&self, entity_id: &str) -> Result<AccountHolderProfile> {
        let record = self.client.get_account_holder(entity_id).await?;
        Ok(map_profile(record))
    }

    async fn fetch_instruments(&self, entity_id: &str) -> Result<Option<Vec<PaymentInstrument>>> {
        let envelope = self.client.get_payment_instruments(entity_id).await?;
        Ok(envelope.payment_instruments.map(|records| {
            records.into_iter().filter_map(classify_instrument).collect()
        }))
    }

    async fn fetch_transactions(&self, entity_id: &str) -> Result<Vec<Transaction>> {
        let envelope = self.client.get_transactions(entity_id).await?;
        Ok(envelope.transactions.into_iter().map(map_transaction).collect())
    }

    async fn activate(&self, entity_id: &str) -> Result<Option<String>> {
        let record = self.client.activate_account_holder(entity_id).await?;
        Ok(record.status)
    }

    async fn suspend(&self, entity_id: &str) -> Result<Option<String>> {
        let record = self.client.suspend_account_holder(entity_id).await?;
        Ok(record.status)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn map_profile(record: AccountHolderRecord) -> AccountHolderProfile {
    AccountHolderProfile {
        id: record.id,
        legal_entity_id: record.legal_entity_id,
        description: record.description,
        legal_name: record.legal_name,
        country: record.country,
        country_code: record.country_code,
        status: record.status,
        verification_status: record.verification_status,
        reference: record.reference,
        capabilities: record.capabilities.map(|capabilities| {
            capabilities
                .into_iter()
                .map(|(key, capability)| (key, map_capability(capability)))
                .collect()
        }),
    }
}

pub(crate) fn map_capability(record: CapabilityRecord) -> CapabilityState {
    CapabilityState {
        allowed: record.allowed,
        requested: record.requested,
        verification_status: record
            .verification_status
            .unwrap_or_else(|| "unknown".to_string()),
        transfer_instruments: record.transfer_instruments.map(|instruments| {
            instruments.into_iter().map(map_transfer_instrument).collect()
        }),
    }
}

pub(crate) fn map_transfer_instrument(record: TransferInstrumentRecord) -> TransferInstrumentState {
    TransferInstrumentState {
        id: record.id.unwrap_or_default(),
        allowed: record.allowed,
        requested: record.requested,
        verification_status: record
            .verification_status
            .unwrap_or_else(|| "unknown".to_string()),
    }
}

/// Classify an instrument record by the sub-object it carries. Records
/// without an id, bank accounts without any account details, and records
/// carrying neither sub-object are dropped.
pub(crate) fn classify_instrument(record: InstrumentRecord) -> Option<PaymentInstrument> {
    let Some(id) = record.id else {
        warn!("Dropping payment instrument without an id");
        return None;
    };

    if let Some(bank) = record.bank_account {
        let Some(iban) = bank.iban.or(bank.account_number) else {
            warn!("Dropping bank account instrument {} without account details", id);
            return None;
        };
        return Some(PaymentInstrument::BankAccount(BankAccountInstrument {
            id,
            description: record.description,
            iban,
            account_type: bank.account_type,
            currency: record.currency,
            status: record.status.unwrap_or_default(),
            balance_account_id: record.balance_account_id,
        }));
    }

    if let Some(card) = record.card {
        let expiry = card.expiration.and_then(|expiration| {
            match (expiration.month, expiration.year) {
                (Some(month), Some(year)) => Some(format!("{}/{}", month, year)),
                _ => None,
            }
        });
        return Some(PaymentInstrument::Card(CardInstrument {
            id,
            description: record.description,
            number: card.number.unwrap_or_default(),
            brand: card.brand,
            expiry,
            cardholder_name: card.cardholder_name,
            form_factor: card.form_factor,
            status: record.status.unwrap_or_default(),
            balance_account_id: record.balance_account_id,
        }));
    }

    warn!("Dropping unclassifiable payment instrument {}", id);
    None
}

pub(crate) fn map_transaction(record: TransactionRecord) -> Transaction {
    Transaction {
        id: record.id.unwrap_or_default(),
        created_at: record.created_at.unwrap_or_default(),
        amount_minor_units: record.amount_minor_units.unwrap_or_default(),
        currency: record.currency.unwrap_or_default(),
        kind: TransactionKind::from_wire(record.transaction_type.as_deref()),
        status: TransactionStatus::from_wire(record.status.as_deref()),
        reference: record.reference,
    }
}
