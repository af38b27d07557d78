//! Deploy report entity

use serde::Serialize;

use super::CommandResult;
use crate::domain::value_objects::{Phase, ReleaseLabel};

/// Results of one phase in the order the commands were issued
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseReport {
    pub phase: Phase,
    pub results: Vec<CommandResult>,
}

impl PhaseReport {
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }
}

/// Summary of a deploy to one host
///
/// A deploy does not stop on a failed command, so the report is the only
/// place the overall outcome is decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployReport {
    pub host: String,
    pub app: String,
    pub branch: String,
    /// Set once promotion has started
    pub release: Option<ReleaseLabel>,
    pub phases: Vec<PhaseReport>,
}

impl DeployReport {
    pub fn new(host: &str, app: &str, branch: &str) -> Self {
        Self {
            host: host.to_string(),
            app: app.to_string(),
            branch: branch.to_string(),
            release: None,
            phases: Vec::new(),
        }
    }

    /// Append a result to its phase, opening the phase if needed
    pub fn record(&mut self, result: CommandResult) {
        match self.phases.last_mut() {
            Some(last) if last.phase == result.phase => last.results.push(result),
            _ => self.phases.push(PhaseReport {
                phase: result.phase,
                results: vec![result],
            }),
        }
    }

    /// Every result in issue order
    pub fn results(&self) -> impl Iterator<Item = &CommandResult> {
        self.phases.iter().flat_map(|p| p.results.iter())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CommandResult> {
        self.results().filter(|r| !r.is_success())
    }

    pub fn command_count(&self) -> usize {
        self.results().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }

    pub fn phase(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }
}
