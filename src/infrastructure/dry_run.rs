//! Dry-run sessions
//!
//! Stand in for a real connection when `--dry-run` is given. Nothing is
//! sent anywhere; every command is logged and reported as successful, so the
//! deploy report lists exactly what a real run would issue.

use std::sync::Arc;

use crate::domain::ports::{CommandOutput, DeployLog, RemoteSession, SessionConnector};
use crate::error::{CommandError, SessionError};
use crate::infrastructure::ssh::SshOptions;

pub struct DryRunConnector;

impl SessionConnector for DryRunConnector {
    fn connect(
        &self,
        host: &str,
        user: &str,
        log: Arc<dyn DeployLog>,
    ) -> Result<Box<dyn RemoteSession>, SessionError> {
        log.debug(&format!(
            "dry run: no connection made to {}",
            SshOptions::destination(host, user)
        ));
        Ok(Box::new(DryRunSession {
            host: host.to_string(),
            log,
        }))
    }
}

pub struct DryRunSession {
    host: String,
    log: Arc<dyn DeployLog>,
}

impl RemoteSession for DryRunSession {
    fn host(&self) -> &str {
        &self.host
    }

    fn execute(&mut self, command: &str) -> Result<CommandOutput, CommandError> {
        self.log.debug(&format!("dry run: skipped `{}`", command));
        Ok(CommandOutput::success("", ""))
    }

    fn close(&mut self) {}
}
