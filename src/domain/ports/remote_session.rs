//! Remote Session Port
//!
//! Abstracts the connection commands are executed over. The deploy use case
//! only ever sees these traits; the ssh client lives in infrastructure.

use std::sync::Arc;

use super::DeployLog;
use crate::error::{CommandError, SessionError};

/// Captured result of one remote invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Set when the command did not succeed
    pub error: Option<CommandError>,
}

impl CommandOutput {
    /// Output of a command that exited with status 0
    pub fn success(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            error: None,
        }
    }

    pub fn failure(
        stdout: impl Into<String>,
        stderr: impl Into<String>,
        error: CommandError,
    ) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// A live connection to one host
///
/// Owned by exactly one deploy. `close` must be safe to call more than once.
pub trait RemoteSession {
    /// Host this session is connected to
    fn host(&self) -> &str;

    /// Run `command` verbatim as a single remote shell invocation.
    ///
    /// `Err` means nothing could be captured at all; a command that ran and
    /// failed comes back as `Ok` with `error` set.
    fn execute(&mut self, command: &str) -> Result<CommandOutput, CommandError>;

    /// Release the connection
    fn close(&mut self);
}

/// Opens remote sessions
pub trait SessionConnector {
    /// Connect to `host` authenticating as `user`.
    ///
    /// An empty `user` leaves the choice to the transport's defaults.
    fn connect(
        &self,
        host: &str,
        user: &str,
        log: Arc<dyn DeployLog>,
    ) -> Result<Box<dyn RemoteSession>, SessionError>;
}
