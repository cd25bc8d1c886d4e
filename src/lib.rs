//! Ledger Engine Library
//!
//! A small, synchronous accounts engine: pluggable discount strategies
//! composed over monetary amounts, an account ledger with guarded
//! mutation, and capability-scoped reporting sinks fed read-only
//! snapshots.

pub mod common;
pub mod config;
pub mod ledger;
pub mod report;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{EngineError, Result};
pub use common::types::{
    AccountId, AccountSnapshot, Money, TransactionKind, TransactionNotice, TransactionRecord,
};
pub use config::{AccountConfig, AppConfig, AppSettings};
pub use ledger::Ledger;
pub use report::{
    ConsoleNotificationSink, ConsoleStatementSink, NotificationService, NotificationSink,
    StatementReporter, StatementSink, WriterStatementSink,
};
pub use strategy::{
    BoxedDiscount, CompositeCalculator, DiscountKind, DiscountStrategy, FlatDiscount,
    PercentageDiscount, StrategyRegistry,
};
