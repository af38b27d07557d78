//! Command result entity

use serde::{Serialize, Serializer};

use crate::domain::ports::CommandOutput;
use crate::domain::value_objects::Phase;
use crate::error::CommandError;

/// Outcome of one remote command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub phase: Phase,
    pub command: String,
    pub stdout: String,
    pub stderr: String,
    #[serde(serialize_with = "error_message", skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResult {
    pub fn from_output(phase: Phase, command: &str, output: CommandOutput) -> Self {
        Self {
            phase,
            command: command.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
            error: output.error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Stdout and stderr joined for display, trailing whitespace removed
    pub fn combined_output(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, true) => String::new(),
            (false, true) => stdout.to_string(),
            (true, false) => stderr.to_string(),
            (false, false) => format!("{}\n{}", stdout, stderr),
        }
    }
}

fn error_message<S: Serializer>(error: &Option<CommandError>, s: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => s.serialize_str(&e.to_string()),
        None => s.serialize_none(),
    }
}
