//! Payment instrument domain models.

use serde::{Deserialize, Serialize};

/// A payment instrument linked to an account holder.
///
/// The variant tag travels with the serialized value so consumers can
/// partition rows without inspecting field presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PaymentInstrument {
    BankAccount(BankAccountInstrument),
    Card(CardInstrument),
}

/// Bank account instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountInstrument {
    pub id: String,
    /// Display label (e.g. "Payout account")
    pub description: Option<String>,
    /// IBAN, or the local account number when no IBAN exists
    pub iban: String,
    /// Account scheme (e.g. "iban", "usLocal")
    pub account_type: Option<String>,
    pub currency: Option<String>,
    pub status: String,
    pub balance_account_id: Option<String>,
}

/// Card instrument. The number is masked by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInstrument {
    pub id: String,
    /// Display label (e.g. "Business card")
    pub description: Option<String>,
    pub number: String,
    pub brand: Option<String>,
    /// Formatted as "MM/YYYY" when the platform supplied an expiry
    pub expiry: Option<String>,
    pub cardholder_name: Option<String>,
    pub form_factor: Option<String>,
    pub status: String,
    /// Id of the owning bank account, when linked
    pub balance_account_id: Option<String>,
}
