//! Detail view model and lifecycle action outcomes.

use serde::Serialize;

use super::detail_fetch::{CollectionView, SlotView};
use super::detail_fields::DisplayFields;
use super::detail_panels::ActivePanel;
use crate::holders::{AccountHolderProfile, CapabilitySummary};
use crate::instruments::PaymentInstrument;
use crate::transactions::Transaction;

/// Lifecycle action on an account holder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Activate,
    Suspend,
}

/// Progress of one lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionStatus {
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Outcome of the most recent invocation of a lifecycle action. Each
/// action kind tracks its own outcome independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOutcome {
    pub kind: ActionKind,
    pub status: ActionStatus,
    /// Status the platform reported back on success, if any
    pub resulting_status: Option<String>,
    pub error_message: Option<String>,
}

impl ActionOutcome {
    pub fn idle(kind: ActionKind) -> Self {
        ActionOutcome {
            kind,
            status: ActionStatus::Idle,
            resulting_status: None,
            error_message: None,
        }
    }
}

/// Full display state of the detail view: header fields, capability
/// summaries, the three source sections, the active panel, and both
/// action outcomes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailViewModel {
    pub entity_id: Option<String>,
    pub fields: DisplayFields,
    pub capabilities: Vec<CapabilitySummary>,
    pub profile: SlotView<AccountHolderProfile>,
    pub instruments: CollectionView<PaymentInstrument>,
    pub transactions: CollectionView<Transaction>,
    pub active_panel: ActivePanel,
    pub activate: ActionOutcome,
    pub suspend: ActionOutcome,
}
