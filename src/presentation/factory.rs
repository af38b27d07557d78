//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::DeployUseCase;
use crate::infrastructure::{DryRunConnector, SshConnector, SshOptions, SystemClock};

/// Type alias for the deploy use case that talks to real hosts
pub type ConcreteDeployUseCase = DeployUseCase<SshConnector, SystemClock>;

/// Type alias for the deploy use case that issues nothing
pub type DryRunDeployUseCase = DeployUseCase<DryRunConnector, SystemClock>;

/// Create a deploy use case over the system ssh client
pub fn create_deploy_use_case(options: SshOptions) -> ConcreteDeployUseCase {
    DeployUseCase::new(SshConnector::new(options), SystemClock)
}

/// Create a deploy use case for `--dry-run`
pub fn create_dry_run_use_case() -> DryRunDeployUseCase {
    DeployUseCase::new(DryRunConnector, SystemClock)
}
