//! Paydeck console server.
//!
//! Library target so integration tests can build the router and state the
//! same way the binary does.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
