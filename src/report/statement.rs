//! Statement and notification services
//!
//! Both services are stateless orchestrators around an injected sink.
//! They take snapshots and notices themselves, so sinks never see a
//! mutable ledger: balance logic changes only in the ledger, output
//! formatting changes only here.

use crate::common::errors::Result;
use crate::common::types::TransactionNotice;
use crate::ledger::Ledger;
use crate::report::sinks::{NotificationSink, StatementSink};

/// Renders account statements through an injected sink
pub struct StatementReporter {
    sink: Box<dyn StatementSink>,
}

impl StatementReporter {
    pub fn new(sink: Box<dyn StatementSink>) -> Self {
        Self { sink }
    }

    /// Snapshot the ledger and emit one statement
    pub fn report(&mut self, ledger: &Ledger) -> Result<()> {
        self.sink.statement(&ledger.snapshot())
    }
}

/// Forwards transaction notices through an injected sink
pub struct NotificationService {
    sink: Box<dyn NotificationSink>,
}

impl NotificationService {
    pub fn new(sink: Box<dyn NotificationSink>) -> Self {
        Self { sink }
    }

    pub fn notify(&mut self, notice: &TransactionNotice) -> Result<()> {
        self.sink.notify(notice)
    }
}
