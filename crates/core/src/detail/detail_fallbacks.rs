//! Fallback catalog for the detail view.

use std::collections::BTreeMap;

use crate::holders::{CapabilityState, TransferInstrumentState};
use crate::instruments::{BankAccountInstrument, CardInstrument, PaymentInstrument};

/// Seed data shown when the platform has not supplied the corresponding
/// section. Constructed at composition time and injected into
/// [`DetailService`](crate::detail::DetailService); `Default` supplies the
/// standard seed.
#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    /// Static fallback for the Name display field.
    pub legal_name: String,
    /// Static fallback for the Country display field.
    pub country: String,
    /// Capability map used when the profile carries no capability data.
    pub capabilities: BTreeMap<String, CapabilityState>,
    /// Instrument list used when the instruments read resolves without a
    /// `paymentInstruments` field.
    pub instruments: Vec<PaymentInstrument>,
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        FallbackCatalog {
            legal_name: "Luna Bistro BV".to_string(),
            country: "NL".to_string(),
            capabilities: seed_capabilities(),
            instruments: seed_instruments(),
        }
    }
}

fn pending_capability() -> CapabilityState {
    CapabilityState {
        allowed: false,
        requested: true,
        verification_status: "pending".to_string(),
        transfer_instruments: None,
    }
}

fn seed_capabilities() -> BTreeMap<String, CapabilityState> {
    let mut capabilities = BTreeMap::new();
    capabilities.insert(
        "receiveFromBalanceAccount".to_string(),
        pending_capability(),
    );
    capabilities.insert(
        "receiveFromPlatformPayments".to_string(),
        pending_capability(),
    );
    capabilities.insert("receivePayments".to_string(), pending_capability());
    capabilities.insert("sendToBalanceAccount".to_string(), pending_capability());
    capabilities.insert(
        "sendToTransferInstrument".to_string(),
        CapabilityState {
            transfer_instruments: Some(vec![TransferInstrumentState {
                id: "SE322KH223222F5GXZFNM3BGP".to_string(),
                allowed: false,
                requested: true,
                verification_status: "pending".to_string(),
            }]),
            ..pending_capability()
        },
    );
    capabilities
}

fn seed_instruments() -> Vec<PaymentInstrument> {
    vec![
        PaymentInstrument::BankAccount(BankAccountInstrument {
            id: "acc_001".to_string(),
            description: Some("Bank account".to_string()),
            iban: "NL91 ABNA 0417 1643 00".to_string(),
            account_type: None,
            currency: Some("EUR".to_string()),
            status: "Active".to_string(),
            balance_account_id: None,
        }),
        PaymentInstrument::BankAccount(BankAccountInstrument {
            id: "acc_002".to_string(),
            description: Some("Payout account".to_string()),
            iban: "NL12 RABO 0101 3129 74".to_string(),
            account_type: None,
            currency: Some("EUR".to_string()),
            status: "Pending review".to_string(),
            balance_account_id: None,
        }),
        PaymentInstrument::Card(CardInstrument {
            id: "card_013".to_string(),
            description: Some("Business card".to_string()),
            number: "•••• 3941".to_string(),
            brand: None,
            expiry: None,
            cardholder_name: Some("Sofia Nguyen".to_string()),
            form_factor: None,
            status: "Active".to_string(),
            balance_account_id: Some("acc_001".to_string()),
        }),
    ]
}
