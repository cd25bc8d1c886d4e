//! Output sinks for statements and notifications
//!
//! Sinks are capability-scoped: a statement sink cannot receive
//! transaction notices and a notification sink cannot receive
//! statements. An implementation supports exactly the capabilities it
//! declares, so an unsupported call is unrepresentable rather than a
//! runtime failure.

use std::io::Write;

use tracing::info;

use crate::common::errors::Result;
use crate::common::types::{AccountSnapshot, TransactionNotice};

/// Receives read-only account snapshots for statement output
#[cfg_attr(test, mockall::automock)]
pub trait StatementSink: Send {
    fn statement(&mut self, snapshot: &AccountSnapshot) -> Result<()>;
}

/// Receives transaction notices after successful mutations
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send {
    fn notify(&mut self, notice: &TransactionNotice) -> Result<()>;
}

/// Statement sink emitting structured log lines
#[derive(Debug, Default)]
pub struct ConsoleStatementSink;

impl StatementSink for ConsoleStatementSink {
    fn statement(&mut self, snapshot: &AccountSnapshot) -> Result<()> {
        info!(
            account_id = %snapshot.account_id,
            balance = %snapshot.balance,
            "account statement"
        );
        Ok(())
    }
}

/// Notification sink emitting structured log lines
#[derive(Debug, Default)]
pub struct ConsoleNotificationSink;

impl NotificationSink for ConsoleNotificationSink {
    fn notify(&mut self, notice: &TransactionNotice) -> Result<()> {
        info!(
            account_id = %notice.account_id,
            kind = %notice.kind,
            amount = %notice.amount,
            balance = %notice.balance_after,
            "transaction applied"
        );
        Ok(())
    }
}

/// Statement sink writing formatted lines to any writer
///
/// I/O failures propagate to the caller as [`EngineError::Sink`],
/// never swallowed.
///
/// [`EngineError::Sink`]: crate::common::errors::EngineError::Sink
pub struct WriterStatementSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> WriterStatementSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> StatementSink for WriterStatementSink<W> {
    fn statement(&mut self, snapshot: &AccountSnapshot) -> Result<()> {
        writeln!(
            self.writer,
            "account statement for {}: balance {}",
            snapshot.account_id, snapshot.balance
        )?;
        Ok(())
    }
}
