//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ReleaseLayout;

/// Per-application deploy settings, read from `<app>.json`.
///
/// Keys use the PascalCase spelling of the original file format. The
/// lowercase, camelCase and snake_case spellings are accepted as aliases.
/// Missing keys fall back to empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Present in the file format but unused; the host comes from the CLI.
    #[serde(rename = "Host", alias = "host")]
    pub host: String,

    #[serde(rename = "User", alias = "user")]
    pub user: String,

    #[serde(
        rename = "DeployDirectory",
        alias = "deployDirectory",
        alias = "deploydirectory",
        alias = "deploy_directory"
    )]
    pub deploy_directory: String,

    #[serde(rename = "App", alias = "app")]
    pub app: String,

    #[serde(rename = "Repo", alias = "repo")]
    pub repo: String,

    /// Shell commands run after checkout, in order.
    #[serde(rename = "Commands", alias = "commands")]
    pub commands: Vec<String>,
}

impl DeployConfig {
    /// File name holding the config for `app`.
    pub fn file_name(app: &str) -> String {
        format!("{}.json", app)
    }

    /// Remote directory layout under `DeployDirectory`.
    pub fn layout(&self) -> ReleaseLayout {
        ReleaseLayout::new(&self.deploy_directory)
    }

    /// Check the fields every generated command depends on.
    ///
    /// Returns a message describing the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.deploy_directory.trim().is_empty() {
            return Err("DeployDirectory must not be empty".to_string());
        }
        if self.repo.trim().is_empty() {
            return Err("Repo must not be empty".to_string());
        }
        Ok(())
    }
}
