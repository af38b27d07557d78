//! Release layout value object - remote paths derived from the deploy directory

use super::ReleaseLabel;

/// Remote directory layout of one application.
///
/// ```text
/// <root>/
///   current -> releases/<label>
///   releases/
///     build/
///     <label>/
///   shared/
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLayout {
    root: String,
}

impl ReleaseLayout {
    /// Layout rooted at `deploy_directory`. A trailing slash is ignored.
    pub fn new(deploy_directory: &str) -> Self {
        let trimmed = deploy_directory.trim_end_matches('/');
        let root = if trimmed.is_empty() {
            deploy_directory
        } else {
            trimmed
        };
        Self {
            root: root.to_string(),
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn releases(&self) -> String {
        format!("{}/releases", self.root)
    }

    pub fn shared(&self) -> String {
        format!("{}/shared", self.root)
    }

    /// Staging directory a fresh checkout is built in
    pub fn build(&self) -> String {
        format!("{}/releases/build", self.root)
    }

    pub fn release(&self, label: &ReleaseLabel) -> String {
        format!("{}/releases/{}", self.root, label)
    }

    /// Symlink pointing at the live release
    pub fn current(&self) -> String {
        format!("{}/current", self.root)
    }
}
