//! Deploy Use Case
//!
//! Orchestrates one deploy:
//! 1. Load `<app>.json`
//! 2. Open a session to the host as the configured user
//! 3. Setup, checkout, command chain, promote
//! 4. Close the session
//!
//! A failed command never stops the sequence. There is no retry and no
//! rollback, so a deploy can end half applied; the returned report says how
//! far it got and what failed.

use std::path::Path;
use std::sync::Arc;

use crate::application::runner::CommandRunner;
use crate::config::{self, DeployConfig};
use crate::domain::entities::DeployReport;
use crate::domain::ports::{Clock, DeployLog, RemoteSession, SessionConnector};
use crate::domain::services::ReleasePlan;
use crate::domain::value_objects::{Phase, ReleaseLabel};
use crate::error::{DeployError, SessionError};

use super::options::DeployRequest;

/// Deploy use case - parameterized by its ports for testing
pub struct DeployUseCase<C, K>
where
    C: SessionConnector,
    K: Clock,
{
    connector: C,
    clock: K,
}

impl<C, K> DeployUseCase<C, K>
where
    C: SessionConnector,
    K: Clock,
{
    pub fn new(connector: C, clock: K) -> Self {
        Self { connector, clock }
    }

    /// Load the config for `request.app` from `config_dir`, then deploy.
    ///
    /// Nothing remote happens if the config cannot be loaded.
    pub fn perform_deploy(
        &self,
        config_dir: &Path,
        request: &DeployRequest,
        log: Arc<dyn DeployLog>,
    ) -> Result<DeployReport, DeployError> {
        let config = config::load(config_dir, &request.app)?;
        Ok(self.execute(request, &config, log)?)
    }

    /// Deploy with an already loaded config.
    ///
    /// Fails only if the session cannot be opened, in which case no command
    /// has been issued. The session is closed on every path out.
    pub fn execute(
        &self,
        request: &DeployRequest,
        config: &DeployConfig,
        log: Arc<dyn DeployLog>,
    ) -> Result<DeployReport, SessionError> {
        log.info(&format!(
            "Deploying {} of {} to {}",
            request.branch, request.app, request.host
        ));

        let session = self
            .connector
            .connect(&request.host, &config.user, log.clone())?;
        let mut session = SessionGuard(session);

        let plan = ReleasePlan::new(config);
        let runner = CommandRunner::new(log.clone());
        let report = self.run_phases(session.as_mut(), &plan, &runner, request);

        log.info(&format!(
            "Finished {} on {}: {} commands, {} failed",
            request.app,
            request.host,
            report.command_count(),
            report.failure_count()
        ));

        Ok(report)
    }

    fn run_phases(
        &self,
        session: &mut dyn RemoteSession,
        plan: &ReleasePlan,
        runner: &CommandRunner,
        request: &DeployRequest,
    ) -> DeployReport {
        let mut report = DeployReport::new(&request.host, &request.app, &request.branch);

        for result in runner.run_all(session, Phase::Setup, &plan.setup()) {
            report.record(result);
        }
        for result in runner.run_all(session, Phase::Checkout, &plan.checkout(&request.branch)) {
            report.record(result);
        }
        for result in runner.run_all(session, Phase::CommandChain, &plan.command_chain()) {
            report.record(result);
        }

        // Labelled at the moment of promotion, not when the deploy started.
        let label = ReleaseLabel::from_datetime(self.clock.now());
        for result in runner.run_all(session, Phase::Promote, &plan.promote(&label)) {
            report.record(result);
        }
        report.release = Some(label);

        report
    }
}

/// Closes the session when dropped, including during unwinding
struct SessionGuard(Box<dyn RemoteSession>);

impl SessionGuard {
    fn as_mut(&mut self) -> &mut dyn RemoteSession {
        self.0.as_mut()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.0.close();
    }
}
