//! Transactions module - transaction history domain models.

mod transactions_model;


pub use transactions_model::{StatusTone, Transaction, TransactionKind, TransactionStatus};
