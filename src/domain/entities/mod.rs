//! Domain Entities
//!
//! Outcomes a deploy produces.
//! - `CommandResult` - One remote command and how it went
//! - `PhaseReport` - The results of one phase, in issue order
//! - `DeployReport` - Everything that happened on one host

mod command_result;
mod deploy_report;

pub use command_result::CommandResult;
pub use deploy_report::{DeployReport, PhaseReport};
