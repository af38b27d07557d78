//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod deploy_log;
pub mod remote_session;

pub use clock::Clock;
pub use deploy_log::{DeployLog, NoopLog};
pub use remote_session::{CommandOutput, RemoteSession, SessionConnector};
