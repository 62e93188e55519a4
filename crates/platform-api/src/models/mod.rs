//! Wire records for the platform management API.
//!
//! Every field the platform may omit is an `Option`; the consuming layer
//! decides how absent data is presented. The one distinction that matters at
//! this level: an instruments response without a `paymentInstruments` field
//! is "no instrument data supplied", while an empty array is a genuine empty
//! result, so the envelope keeps the `Option` around the vector. Transactions
//! make no such distinction and default to empty.

use std::collections::BTreeMap;

use serde::Deserialize;

// ============================================================================
// Account Holder
// ============================================================================

/// Account holder profile as returned by `GET /accountHolders/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolderRecord {
    /// Platform-assigned account holder id
    pub id: Option<String>,
    /// Id of the backing legal entity
    pub legal_entity_id: Option<String>,
    /// Free-form merchant description
    pub description: Option<String>,
    /// Registered legal name
    pub legal_name: Option<String>,
    /// Country name or code, whichever the platform recorded
    pub country: Option<String>,
    /// ISO country code
    pub country_code: Option<String>,
    /// Operational status (e.g. "Active", "Suspended")
    pub status: Option<String>,
    /// KYC verification status
    pub verification_status: Option<String>,
    /// Merchant-supplied reference
    pub reference: Option<String>,
    /// Capability name to capability state
    pub capabilities: Option<BTreeMap<String, CapabilityRecord>>,
}

/// One capability entry inside an account holder record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityRecord {
    /// Whether the capability is currently granted
    #[serde(default)]
    pub allowed: bool,
    /// Whether the capability has been requested
    #[serde(default)]
    pub requested: bool,
    /// Verification status for this capability (open set)
    pub verification_status: Option<String>,
    /// Present only for capabilities delegated to transfer instruments
    pub transfer_instruments: Option<Vec<TransferInstrumentRecord>>,
}

/// Transfer instrument entry nested under a capability.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInstrumentRecord {
    pub id: Option<String>,
    #[serde(default)]
    pub allowed: bool,
    #[serde(default)]
    pub requested: bool,
    pub verification_status: Option<String>,
}

// ============================================================================
// Payment Instruments
// ============================================================================

/// Envelope returned by `GET /accountHolders/{id}/payment-instruments`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentsEnvelope {
    /// `None` when the platform supplied no instrument data at all,
    /// `Some(vec![])` when it supplied an empty list.
    pub payment_instruments: Option<Vec<InstrumentRecord>>,
}

/// One payment instrument record. The kind is disambiguated by which
/// sub-object is present: `bank_account`, `card`, or neither (unusable).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentRecord {
    pub id: Option<String>,
    /// Lifecycle status of the instrument itself
    pub status: Option<String>,
    /// Display label (e.g. "Payout account", "Business card")
    pub description: Option<String>,
    /// Currency of the instrument, where applicable
    pub currency: Option<String>,
    /// Id of the owning balance account
    pub balance_account_id: Option<String>,
    pub bank_account: Option<BankAccountRecord>,
    pub card: Option<CardRecord>,
}

/// Bank account details of an instrument.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRecord {
    pub iban: Option<String>,
    /// Local account number, used when no IBAN exists
    pub account_number: Option<String>,
    /// Account scheme (e.g. "iban", "usLocal")
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub form_factor: Option<String>,
}

/// Card details of an instrument. The number is always masked by the
/// platform; it is passed through verbatim.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub brand: Option<String>,
    pub number: Option<String>,
    pub cardholder_name: Option<String>,
    pub expiration: Option<CardExpirationRecord>,
    pub form_factor: Option<String>,
}

/// Card expiry as the platform reports it (string month/year).
#[derive(Debug, Deserialize)]
pub struct CardExpirationRecord {
    pub month: Option<String>,
    pub year: Option<String>,
}

// ============================================================================
// Transactions
// ============================================================================

/// Envelope returned by `GET /accountHolders/{id}/transactions`.
/// An absent `transactions` field is equivalent to an empty list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsEnvelope {
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// One transaction row.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: Option<String>,
    /// Booking timestamp as a display string, passed through verbatim
    pub created_at: Option<String>,
    /// Signed amount in minor units; refunds and payouts are negative
    pub amount_minor_units: Option<i64>,
    pub currency: Option<String>,
    /// Transaction kind (e.g. "payment", "refund", "payout")
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Booking status (e.g. "booked", "pending", "failed")
    pub status: Option<String>,
    pub reference: Option<String>,
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Response to `POST /accountHolders/{id}/activate` and `/suspend`.
///
/// The platform may return either a full profile-shaped body or a bare
/// status object; only the resulting status is consumed either way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleResultRecord {
    /// Operational status after the action
    pub status: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================
