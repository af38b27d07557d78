//! Deploy Module
//!
//! Orchestrates one deploy to one host.
//!
//! ## Structure
//!
//! - `options` - Request types (`DeployRequest`)
//! - `use_case` - Session lifecycle and phase sequencing (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use skiff::application::deploy::{DeployRequest, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(SshConnector::new(options), SystemClock);
//! let report = use_case.perform_deploy(Path::new("."), &DeployRequest::new("web1", "shop", "v1.2.3"), log)?;
//! ```

mod options;
mod use_case;

pub use options::{parse_hosts, DeployRequest};
pub use use_case::DeployUseCase;
