//! Core value types shared by the ledger, strategies, and sinks

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monetary amount
///
/// All balances, deposits, and discount results use exact decimal
/// arithmetic. Binary floating point is never used for money.
pub type Money = Decimal;

/// Stable account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Kind of ledger mutation
///
/// Closed set: every consumer matches exhaustively, so adding a kind
/// without handling it everywhere is a compile-time error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("deposit"),
            TransactionKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

/// One applied ledger mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Money,
    /// Balance immediately after this mutation was applied
    pub balance_after: Money,
    pub at: DateTime<Utc>,
}

/// Read-only view of a ledger handed to reporting sinks
///
/// Sinks receive snapshots, never the ledger itself, so reporting code
/// cannot mutate account state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account_id: AccountId,
    pub balance: Money,
    pub taken_at: DateTime<Utc>,
}

/// Payload handed to notification sinks after a successful mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionNotice {
    pub account_id: AccountId,
    pub kind: TransactionKind,
    pub amount: Money,
    pub balance_after: Money,
}
