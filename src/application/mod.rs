//! Application Layer
//!
//! Use cases that orchestrate the deploy flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT build command strings (that is `ReleasePlan`)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Opens a session and runs setup, checkout, command chain, promote
//! - `CommandRunner` - Runs and logs one remote command without ever aborting

pub mod deploy;
pub mod runner;

pub use deploy::{DeployRequest, DeployUseCase};
pub use runner::CommandRunner;
