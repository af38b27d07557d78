//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `ssh/` - OpenSSH control-master sessions
//! - `dry_run` - Sessions that issue nothing
//! - `logging` - `tracing`-backed deploy log
//! - `clock` - Local wall clock

pub mod clock;
pub mod dry_run;
pub mod logging;
pub mod ssh;

// Re-export for convenience
pub use clock::SystemClock;
pub use dry_run::DryRunConnector;
pub use logging::TracingLog;
pub use ssh::{SshConnector, SshOptions};
