//! Account holders module - profile and capability domain models.

mod holders_model;


pub use holders_model::{
    humanize_capability, summarize_capabilities, AccountHolderProfile, CapabilityState,
    CapabilitySummary, TransferInstrumentState,
};
