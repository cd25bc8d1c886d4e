//! Account ledger

mod account;

pub use account::Ledger;
