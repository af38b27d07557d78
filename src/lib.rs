//! skiff - release-directory deploys over SSH
//!
//! Connects to a host, lays out `releases/` and `shared/` under the deploy
//! directory, clones the repository at a revision, runs the configured
//! commands and points `current` at the new timestamped release.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CommandRunner, DeployRequest, DeployUseCase};
pub use config::DeployConfig;
pub use domain::entities::{CommandResult, DeployReport};
pub use error::{CommandError, ConfigError, DeployError, SessionError};
