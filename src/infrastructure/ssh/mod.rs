//! SSH Remote Sessions
//!
//! Implements the session ports with the system OpenSSH client.
//! One control master is started per session; every command is a separate
//! `ssh` invocation multiplexed over its socket.

mod options;
mod session;

pub use options::{SshOptions, DEFAULT_CONNECT_TIMEOUT};
pub use session::{SshConnector, SshSession};
