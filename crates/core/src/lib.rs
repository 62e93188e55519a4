//! Paydeck Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the Paydeck console.
//! It is transport-agnostic: the detail view talks to the platform through
//! the [`detail::DetailGateway`] trait, implemented over the platform API
//! client by the `platform` module.

pub mod constants;
pub mod detail;
pub mod errors;
pub mod holders;
pub mod instruments;
pub mod platform;
pub mod transactions;

// Re-export common types from the detail module
pub use detail::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
