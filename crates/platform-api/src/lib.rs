//! Paydeck Platform API Crate
//!
//! Typed HTTP client for the payments platform management API that backs the
//! Paydeck console.
//!
//! # Overview
//!
//! The crate covers exactly the surface the console consumes:
//! - Account holder profile reads
//! - Payment instrument reads (bank accounts and cards)
//! - Transaction history reads
//! - Lifecycle actions: activate and suspend
//!
//! All wire fields are optional; partial records are the norm, and the
//! consuming layer applies its own fallback rules. The client performs no
//! retries and holds no state beyond the base URL and the HTTP client.
//!
//! # Core Types
//!
//! - [`PlatformClient`] - the API client
//! - [`PlatformApiError`] - typed failure modes of a call
//! - [`AccountHolderRecord`] - profile wire record
//! - [`InstrumentsEnvelope`] / [`InstrumentRecord`] - payment instruments
//! - [`TransactionsEnvelope`] / [`TransactionRecord`] - transaction history
//! - [`LifecycleResultRecord`] - activate/suspend result

pub mod client;
pub mod errors;
pub mod models;

// Re-export the client and error type
pub use client::PlatformClient;
pub use errors::PlatformApiError;

// Re-export all wire records
pub use models::{
    AccountHolderRecord, BankAccountRecord, CapabilityRecord, CardExpirationRecord, CardRecord,
    InstrumentRecord, InstrumentsEnvelope, LifecycleResultRecord, TransactionRecord,
    TransactionsEnvelope, TransferInstrumentRecord,
};
