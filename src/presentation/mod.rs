//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Interactive prompts for missing CLI input
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Deploy summary rendering
//! - `prompt` - Sequential questions for app, servers and revision
//!
//! ## Usage
//!
//! ```ignore
//! use skiff::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(SshOptions::default());
//! let report = use_case.execute(&request, &config, log)?;
//! ```

pub mod factory;
pub mod output;
pub mod prompt;

pub use factory::{create_deploy_use_case, create_dry_run_use_case};
