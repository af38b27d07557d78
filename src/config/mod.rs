//! Configuration module for skiff
//!
//! Resolution order:
//! 1. Environment variables (SKIFF_*)
//! 2. `<app>.json` in the config directory (the working directory by default)
//! 3. Empty defaults for keys the file leaves out

mod loader;
mod types;

pub use loader::{load, load_with_warnings, with_env_overrides, ConfigWarning};
pub use types::DeployConfig;
