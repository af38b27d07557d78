//! Deploy Log Port
//!
//! The logger a deploy writes to. It is handed to the session and the
//! command runner explicitly; nothing in the library installs or mutates a
//! process-wide sink.

/// Leveled log sink for one deploy
///
/// Implementations can be:
/// - TracingLog: forwards to `tracing` events tagged with the host
/// - NoopLog: silent operation
pub trait DeployLog: Send + Sync {
    /// Transport-level detail (ssh invocations, session lifecycle)
    fn debug(&self, message: &str);

    /// Progress and command output
    fn info(&self, message: &str);

    /// Failed commands and their captured output
    fn error(&self, message: &str);
}

/// No-op log for silent operation
pub struct NoopLog;

impl DeployLog for NoopLog {
    fn debug(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
