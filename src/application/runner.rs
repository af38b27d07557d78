//! Remote Command Runner
//!
//! Runs one command on an open session and logs the outcome. Failures are
//! logged and returned, never raised: the caller keeps going.

use std::sync::Arc;

use crate::domain::entities::CommandResult;
use crate::domain::ports::{CommandOutput, DeployLog, RemoteSession};
use crate::domain::value_objects::Phase;

pub struct CommandRunner {
    log: Arc<dyn DeployLog>,
}

impl CommandRunner {
    pub fn new(log: Arc<dyn DeployLog>) -> Self {
        Self { log }
    }

    /// Run `command` verbatim and log what came back.
    pub fn run(&self, session: &mut dyn RemoteSession, phase: Phase, command: &str) -> CommandResult {
        self.log.info(&format!("Running {}", command));

        let output = session
            .execute(command)
            .unwrap_or_else(|error| CommandOutput::failure("", "", error));
        let result = CommandResult::from_output(phase, command, output);

        match &result.error {
            None => {
                let output = result.combined_output();
                if !output.is_empty() {
                    self.log.info(&output);
                }
            }
            Some(error) => {
                self.log.error(&error.to_string());
                self.log.error(&format!("STDOUT: {}", result.stdout.trim_end()));
                self.log.error(&format!("STDERR: {}", result.stderr.trim_end()));
            }
        }

        result
    }

    /// Run each command in order, continuing past failures
    pub fn run_all(
        &self,
        session: &mut dyn RemoteSession,
        phase: Phase,
        commands: &[String],
    ) -> Vec<CommandResult> {
        commands
            .iter()
            .map(|command| self.run(session, phase, command))
            .collect()
    }
}
