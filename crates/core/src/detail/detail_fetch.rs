//! Fetch slot state machine for asynchronous reads.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle of one asynchronous read. A slot starts `Idle`, moves to
/// `Pending` when a fetch is issued, and settles as `Resolved` or
/// `Rejected`. Re-issuing a fetch moves a settled slot back to `Pending`
/// and discards the previous outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchSlot<T> {
    Idle,
    Pending,
    Resolved { value: T, as_of: DateTime<Utc> },
    Rejected(String),
}

impl<T> FetchSlot<T> {
    /// A slot resolved now with the given value.
    pub fn resolved(value: T) -> Self {
        FetchSlot::Resolved {
            value,
            as_of: Utc::now(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchSlot::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchSlot::Rejected(message) => Some(message),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchSlot::Resolved { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_of(&self) -> Option<DateTime<Utc>> {
        match self {
            FetchSlot::Resolved { as_of, .. } => Some(*as_of),
            _ => None,
        }
    }
}

impl<T: Clone> FetchSlot<T> {
    /// Projection of the slot for the view model.
    pub fn view(&self) -> SlotView<T> {
        SlotView {
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
            as_of: self.as_of(),
            data: self.value().cloned(),
        }
    }
}

impl<T: Clone> FetchSlot<Vec<T>> {
    /// Projection of a list-valued slot. Items are empty until the slot
    /// resolves.
    pub fn collection_view(&self) -> CollectionView<T> {
        CollectionView {
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
            as_of: self.as_of(),
            items: self.value().cloned().unwrap_or_default(),
        }
    }
}

/// Display-ready snapshot of a single-valued slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView<T> {
    pub loading: bool,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    pub data: Option<T>,
}

/// Display-ready snapshot of a list-valued slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionView<T> {
    pub loading: bool,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_of: Option<DateTime<Utc>>,
    pub items: Vec<T>,
}
