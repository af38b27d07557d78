//! Deploy Options
//!
//! Input types for deploy operations.

/// What to deploy, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Single target host
    pub host: String,
    /// Application identifier; selects `<app>.json`
    pub app: String,
    /// Branch, tag or revision to check out
    pub branch: String,
}

impl DeployRequest {
    pub fn new(host: impl Into<String>, app: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            app: app.into(),
            branch: branch.into(),
        }
    }
}

/// Split a comma-separated server list.
///
/// Whitespace around entries is trimmed and empty entries are dropped.
/// Order is kept and duplicates are not removed.
pub fn parse_hosts(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .map(str::to_string)
        .collect()
}
