//! Payment instruments module - bank account and card domain models.

mod instruments_model;


pub use instruments_model::{BankAccountInstrument, CardInstrument, PaymentInstrument};
