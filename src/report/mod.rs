//! Statement and notification output

mod sinks;
mod statement;

pub use sinks::{
    ConsoleNotificationSink, ConsoleStatementSink, NotificationSink, StatementSink,
    WriterStatementSink,
};
pub use statement::{NotificationService, StatementReporter};

#[cfg(test)]
pub use sinks::{MockNotificationSink, MockStatementSink};
