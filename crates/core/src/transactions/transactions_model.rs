//! Transaction domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One booked or pending transaction on an account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Booking timestamp as the platform formatted it; passed through for
    /// display
    pub created_at: String,
    /// Signed amount in minor units; refunds and payouts are negative
    pub amount_minor_units: i64,
    pub currency: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub reference: Option<String>,
}

impl Transaction {
    /// Amount in major units (two decimal places).
    pub fn amount_major(&self) -> Decimal {
        Decimal::new(self.amount_minor_units, 2)
    }

    /// Amount formatted for display, e.g. "129.95 EUR" or "-29.99 EUR".
    pub fn formatted_amount(&self) -> String {
        format!("{} {}", self.amount_major(), self.currency)
            .trim_end()
            .to_string()
    }
}

/// Transaction kind. Wire values the console does not recognize map
/// to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionKind {
    Payment,
    Refund,
    Payout,
    Chargeback,
    Incoming,
    Outgoing,
    Other,
}

impl TransactionKind {
    /// Map a wire `type` value to a kind.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.unwrap_or_default().to_lowercase().as_str() {
            "payment" => TransactionKind::Payment,
            "refund" => TransactionKind::Refund,
            "payout" => TransactionKind::Payout,
            "chargeback" => TransactionKind::Chargeback,
            "incoming" => TransactionKind::Incoming,
            "outgoing" => TransactionKind::Outgoing,
            _ => TransactionKind::Other,
        }
    }
}

/// Booking status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionStatus {
    Booked,
    Pending,
    Failed,
    Unknown,
}

impl TransactionStatus {
    /// Map a wire `status` value to a status.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value.unwrap_or_default().to_lowercase().as_str() {
            "booked" => TransactionStatus::Booked,
            "pending" => TransactionStatus::Pending,
            "failed" => TransactionStatus::Failed,
            _ => TransactionStatus::Unknown,
        }
    }

    /// Chip severity for the status, used by the transactions panel.
    pub fn tone(&self) -> StatusTone {
        match self {
            TransactionStatus::Booked => StatusTone::Success,
            TransactionStatus::Pending => StatusTone::Warning,
            TransactionStatus::Failed => StatusTone::Error,
            TransactionStatus::Unknown => StatusTone::Default,
        }
    }
}

/// Display severity of a status chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Warning,
    Error,
    Default,
}
