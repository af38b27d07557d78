//! Release plan - the exact command strings each deploy phase issues
//!
//! Commands are composed with plain string formatting and passed to the
//! remote shell verbatim. Nothing here quotes or escapes values taken from
//! the config or the CLI.

use crate::config::DeployConfig;
use crate::domain::value_objects::{ReleaseLabel, ReleaseLayout};

/// Command builder for one application's deploys
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    layout: ReleaseLayout,
    repo: String,
    commands: Vec<String>,
}

impl ReleasePlan {
    pub fn new(config: &DeployConfig) -> Self {
        Self {
            layout: config.layout(),
            repo: config.repo.clone(),
            commands: config.commands.clone(),
        }
    }

    pub fn layout(&self) -> &ReleaseLayout {
        &self.layout
    }

    /// Four `mkdir` calls without `-p`: root, releases, shared, build.
    ///
    /// Each fails on its own if the directory already exists.
    pub fn setup(&self) -> Vec<String> {
        vec![
            format!("mkdir {}", self.layout.root()),
            format!("mkdir {}", self.layout.releases()),
            format!("mkdir {}", self.layout.shared()),
            format!("mkdir {}", self.layout.build()),
        ]
    }

    /// Clone into the build directory, then check out `branch` there
    pub fn checkout(&self, branch: &str) -> Vec<String> {
        let build = self.layout.build();
        vec![
            format!("git clone {} {}", self.repo, build),
            format!("cd {} && git checkout {}", build, branch),
        ]
    }

    /// Configured commands, unchanged and in order
    pub fn command_chain(&self) -> Vec<String> {
        self.commands.clone()
    }

    /// Move the build directory to `releases/<label>` and repoint `current`
    pub fn promote(&self, label: &ReleaseLabel) -> Vec<String> {
        let release = self.layout.release(label);
        vec![
            format!("mv {} {}", self.layout.build(), release),
            format!("ln -sf {} {}", release, self.layout.current()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DeployConfig {
        DeployConfig {
            user: "deploy".to_string(),
            deploy_directory: "/srv/app".to_string(),
            repo: "git@x:y.git".to_string(),
            commands: vec!["./build.sh".to_string(), "./migrate.sh".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn setup_creates_four_directories_in_order() {
        let plan = ReleasePlan::new(&config());
        assert_eq!(
            plan.setup(),
            vec![
                "mkdir /srv/app",
                "mkdir /srv/app/releases",
                "mkdir /srv/app/shared",
                "mkdir /srv/app/releases/build",
            ]
        );
    }

    #[test]
    fn checkout_clones_then_checks_out() {
        let plan = ReleasePlan::new(&config());
        assert_eq!(
            plan.checkout("v1.2.3"),
            vec![
                "git clone git@x:y.git /srv/app/releases/build",
                "cd /srv/app/releases/build && git checkout v1.2.3",
            ]
        );
    }

    #[test]
    fn command_chain_preserves_order() {
        let plan = ReleasePlan::new(&config());
        assert_eq!(plan.command_chain(), vec!["./build.sh", "./migrate.sh"]);
    }

    #[test]
    fn promote_moves_build_and_links_current() {
        let plan = ReleasePlan::new(&config());
        let label = ReleaseLabel::parse("20240501083000").unwrap();
        assert_eq!(
            plan.promote(&label),
            vec![
                "mv /srv/app/releases/build /srv/app/releases/20240501083000",
                "ln -sf /srv/app/releases/20240501083000 /srv/app/current",
            ]
        );
    }

    #[test]
    fn branch_is_passed_through_verbatim() {
        let plan = ReleasePlan::new(&config());
        let checkout = plan.checkout("feature/x; echo hi");
        assert_eq!(
            checkout[1],
            "cd /srv/app/releases/build && git checkout feature/x; echo hi"
        );
    }
}
