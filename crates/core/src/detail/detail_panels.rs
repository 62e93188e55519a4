//! Tabbed panel projections of the detail view model.

use serde::{Deserialize, Serialize};

use super::detail_fields::DisplayFields;
use super::detail_model::{ActionOutcome, DetailViewModel};
use crate::constants::{CARD_ACTIONS, INSTRUMENTS_EMPTY, NO_CARDS, TRANSACTIONS_EMPTY};
use crate::holders::CapabilitySummary;
use crate::instruments::PaymentInstrument;
use crate::transactions::{StatusTone, TransactionKind, TransactionStatus};

/// Which tab of the detail view is active. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivePanel {
    #[default]
    Overview,
    Transactions,
    Actions,
}

impl ActivePanel {
    /// Map a tab index to a panel. Out-of-range indices clamp to the last
    /// panel.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => ActivePanel::Overview,
            1 => ActivePanel::Transactions,
            _ => ActivePanel::Actions,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ActivePanel::Overview => 0,
            ActivePanel::Transactions => 1,
            ActivePanel::Actions => 2,
        }
    }
}

/// Projection of the view model for one panel. Tagged so consumers can
/// match exhaustively on the active panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "camelCase")]
pub enum PanelView {
    Overview(OverviewPanel),
    Transactions(TransactionsPanel),
    Actions(ActionsPanel),
}

impl PanelView {
    /// Project the active panel of a view model. Pure; issues no reads.
    pub fn project(model: &DetailViewModel) -> Self {
        match model.active_panel {
            ActivePanel::Overview => PanelView::Overview(OverviewPanel::project(model)),
            ActivePanel::Transactions => {
                PanelView::Transactions(TransactionsPanel::project(model))
            }
            ActivePanel::Actions => PanelView::Actions(ActionsPanel::project(model)),
        }
    }
}

/// Overview tab: header fields, capability summary, and the instrument
/// table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewPanel {
    pub fields: DisplayFields,
    pub capabilities: Vec<CapabilitySummary>,
    pub instruments: InstrumentsSection,
}

impl OverviewPanel {
    fn project(model: &DetailViewModel) -> Self {
        OverviewPanel {
            fields: model.fields.clone(),
            capabilities: model.capabilities.clone(),
            instruments: InstrumentsSection::project(model),
        }
    }
}

/// Instrument table partitioned by variant: bank accounts first, then the
/// cards attached to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentsSection {
    pub loading: bool,
    pub error: Option<String>,
    /// Set when the section loaded cleanly but holds no instruments at all
    pub empty_message: Option<String>,
    pub bank_accounts: Vec<BankAccountRow>,
    pub cards: Vec<CardRow>,
    /// Set when bank accounts are present but no cards are attached
    pub cards_empty_message: Option<String>,
}

impl InstrumentsSection {
    fn project(model: &DetailViewModel) -> Self {
        let view = &model.instruments;
        let mut bank_accounts = Vec::new();
        let mut cards = Vec::new();

        for instrument in &view.items {
            match instrument {
                PaymentInstrument::BankAccount(bank) => {
                    bank_accounts.push(BankAccountRow {
                        id: bank.id.clone(),
                        label: bank
                            .description
                            .clone()
                            .unwrap_or_else(|| "Bank account".to_string()),
                        iban: bank.iban.clone(),
                        currency: bank.currency.clone(),
                        status: bank.status.clone(),
                    });
                }
                PaymentInstrument::Card(card) => {
                    cards.push(CardRow {
                        id: card.id.clone(),
                        label: card.description.clone().unwrap_or_else(|| "Card".to_string()),
                        number: card.number.clone(),
                        brand: card.brand.clone(),
                        expiry: card.expiry.clone(),
                        cardholder_name: card.cardholder_name.clone(),
                        status: card.status.clone(),
                        owner_account_id: card.balance_account_id.clone(),
                        actions: CARD_ACTIONS.iter().map(|a| a.to_string()).collect(),
                    });
                }
            }
        }

        let loaded = !view.loading && view.error.is_none();
        let empty_message = if loaded && bank_accounts.is_empty() && cards.is_empty() {
            Some(INSTRUMENTS_EMPTY.to_string())
        } else {
            None
        };
        let cards_empty_message = if loaded && !bank_accounts.is_empty() && cards.is_empty() {
            Some(NO_CARDS.to_string())
        } else {
            None
        };

        InstrumentsSection {
            loading: view.loading,
            error: view.error.clone(),
            empty_message,
            bank_accounts,
            cards,
            cards_empty_message,
        }
    }
}

/// One bank account row of the instrument table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountRow {
    pub id: String,
    pub label: String,
    pub iban: String,
    pub currency: Option<String>,
    pub status: String,
}

/// One card row of the instrument table. The actions are declared for
/// future wiring and never issue network calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRow {
    pub id: String,
    pub label: String,
    pub number: String,
    pub brand: Option<String>,
    pub expiry: Option<String>,
    pub cardholder_name: Option<String>,
    pub status: String,
    pub owner_account_id: Option<String>,
    pub actions: Vec<String>,
}

/// Transactions tab with its own loading, error, and empty sub-states.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPanel {
    pub loading: bool,
    pub error: Option<String>,
    pub empty_message: Option<String>,
    pub rows: Vec<TransactionRow>,
}

impl TransactionsPanel {
    fn project(model: &DetailViewModel) -> Self {
        let view = &model.transactions;
        let rows: Vec<TransactionRow> = view
            .items
            .iter()
            .map(|txn| TransactionRow {
                id: txn.id.clone(),
                created_at: txn.created_at.clone(),
                amount: txn.formatted_amount(),
                kind: txn.kind,
                status: txn.status,
                tone: txn.status.tone(),
                reference: txn.reference.clone(),
            })
            .collect();

        let loaded = !view.loading && view.error.is_none();
        let empty_message = if loaded && rows.is_empty() {
            Some(TRANSACTIONS_EMPTY.to_string())
        } else {
            None
        };

        TransactionsPanel {
            loading: view.loading,
            error: view.error.clone(),
            empty_message,
            rows,
        }
    }
}

/// One formatted transaction row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRow {
    pub id: String,
    pub created_at: String,
    pub amount: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub tone: StatusTone,
    pub reference: Option<String>,
}

/// Actions tab: both lifecycle action outcomes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsPanel {
    pub activate: ActionOutcome,
    pub suspend: ActionOutcome,
}

impl ActionsPanel {
    fn project(model: &DetailViewModel) -> Self {
        ActionsPanel {
            activate: model.activate.clone(),
            suspend: model.suspend.clone(),
        }
    }
}
