//! Error types for the engine

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using our EngineError
pub type Result<T> = std::result::Result<T, EngineError>;

/// Main error type for ledger and pricing operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// Deposit or withdrawal with a non-positive amount
    #[error("invalid amount: {amount} (must be positive)")]
    InvalidAmount { amount: Decimal },

    /// Withdrawal exceeding the available balance
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Strategy key not present in the registry
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A writer-backed sink failed
    #[error("sink error: {0}")]
    Sink(#[from] std::io::Error),
}

impl EngineError {
    /// True for failures the caller can handle by retrying or adjusting
    /// the request. The ledger state is guaranteed unchanged.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidAmount { .. } | EngineError::InsufficientFunds { .. }
        )
    }
}
