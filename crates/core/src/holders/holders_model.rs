//! Account holder domain models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Domain model for an account holder profile.
///
/// Every field may be absent; the platform routinely returns partial
/// records and the display layer resolves fallbacks on top of this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHolderProfile {
    pub id: Option<String>,
    pub legal_entity_id: Option<String>,
    pub description: Option<String>,
    pub legal_name: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub status: Option<String>,
    pub verification_status: Option<String>,
    pub reference: Option<String>,
    /// Capability name to capability state; `BTreeMap` keeps summaries in
    /// deterministic key order
    pub capabilities: Option<BTreeMap<String, CapabilityState>>,
}

/// State of one capability on an account holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityState {
    pub allowed: bool,
    pub requested: bool,
    /// Always present in the domain; absent wire values are normalized to
    /// "unknown" at the gateway
    pub verification_status: String,
    /// Present only for capabilities delegated to transfer instruments
    pub transfer_instruments: Option<Vec<TransferInstrumentState>>,
}

/// Transfer instrument entry nested under a capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInstrumentState {
    pub id: String,
    pub allowed: bool,
    pub requested: bool,
    pub verification_status: String,
}

/// Display summary of one capability, derived from a capability map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySummary {
    /// Raw capability key (e.g. "sendToTransferInstrument")
    pub key: String,
    /// Humanized label (e.g. "Send To Transfer Instrument")
    pub label: String,
    pub allowed: bool,
    pub requested: bool,
    pub verification_status: String,
    pub transfer_instruments: Vec<TransferInstrumentState>,
}

/// Humanize a camelCase capability key for display: a space is inserted
/// before each uppercase letter and every word is title-cased.
/// Unknown keys get the same generic treatment.
pub fn humanize_capability(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for ch in name.chars() {
        if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .into_iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Build display summaries for a capability map, in key order.
pub fn summarize_capabilities(
    capabilities: &BTreeMap<String, CapabilityState>,
) -> Vec<CapabilitySummary> {
    capabilities
        .iter()
        .map(|(key, capability)| CapabilitySummary {
            key: key.clone(),
            label: humanize_capability(key),
            allowed: capability.allowed,
            requested: capability.requested,
            verification_status: capability.verification_status.clone(),
            transfer_instruments: capability.transfer_instruments.clone().unwrap_or_default(),
        })
        .collect()
}
