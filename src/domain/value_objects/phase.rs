//! Phase value object - the four ordered steps of a deploy

use serde::{Deserialize, Serialize};

/// One step of a deploy, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Create the deploy, releases, shared and build directories
    Setup,
    /// Clone the repository into the build directory and check out the revision
    Checkout,
    /// Run the configured commands
    CommandChain,
    /// Rename the build directory and repoint `current`
    Promote,
}

impl Phase {
    /// All phases in the order a deploy runs them
    pub const ALL: [Phase; 4] = [
        Phase::Setup,
        Phase::Checkout,
        Phase::CommandChain,
        Phase::Promote,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Checkout => "checkout",
            Phase::CommandChain => "command-chain",
            Phase::Promote => "promote",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
