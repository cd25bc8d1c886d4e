//! Common test utilities and fixtures

use std::sync::{Arc, Mutex};

use ledger_engine::{
    CompositeCalculator, Ledger, NotificationSink, PercentageDiscount, Result, StrategyRegistry,
    TransactionNotice,
};
use rust_decimal_macros::dec;

/// Open the canonical demo account: BANK123 with a balance of 1000
pub fn sample_ledger() -> Ledger {
    Ledger::open("BANK123", dec!(1000.0)).expect("opening balance is valid")
}

/// The stock seasonal (10%) + loyalty (15%) calculator
pub fn stock_calculator() -> CompositeCalculator {
    stock_registry()
        .composite_for(["seasonal", "loyalty"])
        .expect("stock strategies are registered")
}

/// Registry holding the stock strategies
pub fn stock_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    registry.register(Box::new(PercentageDiscount::seasonal()));
    registry.register(Box::new(PercentageDiscount::loyalty()));
    registry
}

/// Notification sink that records every notice it receives
#[derive(Clone, Default)]
pub struct RecordingNotificationSink {
    notices: Arc<Mutex<Vec<TransactionNotice>>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<TransactionNotice> {
        self.notices.lock().expect("sink lock").clone()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&mut self, notice: &TransactionNotice) -> Result<()> {
        self.notices.lock().expect("sink lock").push(notice.clone());
        Ok(())
    }
}
