//! Interactive prompts
//!
//! Asks for whatever the command line left out, in a fixed order:
//! application, server(s), then branch/tag/revision.

use anyhow::Result;
use dialoguer::Input;

/// Deploy inputs as typed or passed on the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeployInputs {
    pub app: Option<String>,
    /// Comma-separated server list
    pub hosts: Option<String>,
    pub branch: Option<String>,
}

/// Deploy inputs with every value present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteInputs {
    pub app: String,
    pub hosts: String,
    pub branch: String,
}

const APP_PROMPT: &str = "Enter the application to deploy";
const HOSTS_PROMPT: &str =
    "Enter the server(s) (multiple servers must be comma-separated) to deploy to";
const BRANCH_PROMPT: &str = "Enter the branch/tag/version number to deploy";

impl DeployInputs {
    /// Flags for values that are still missing or blank
    pub fn missing_flags(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.app) {
            missing.push("--app");
        }
        if is_blank(&self.hosts) {
            missing.push("--host");
        }
        if is_blank(&self.branch) {
            missing.push("--branch");
        }
        missing
    }

    /// Fill in missing values by prompting, or fail when prompting is not possible
    pub fn complete(self, interactive: bool) -> Result<CompleteInputs> {
        let missing = self.missing_flags();
        if !missing.is_empty() && !interactive {
            anyhow::bail!(
                "missing {} (stdin is not a terminal, so they cannot be prompted for)",
                missing.join(", ")
            );
        }

        Ok(CompleteInputs {
            app: present_or_ask(self.app, APP_PROMPT)?,
            hosts: present_or_ask(self.hosts, HOSTS_PROMPT)?,
            branch: present_or_ask(self.branch, BRANCH_PROMPT)?,
        })
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

fn present_or_ask(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => {
            let answer: String = Input::new().with_prompt(prompt).interact_text()?;
            Ok(answer.trim().to_string())
        }
    }
}
