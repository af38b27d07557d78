//! Logging
//!
//! `TracingLog` is the production `DeployLog`: each line becomes a `tracing`
//! event carrying the host it belongs to. `init` installs the stderr
//! subscriber and is only called from the binary.

use tracing_subscriber::EnvFilter;

use crate::domain::ports::DeployLog;

/// Deploy log for one host, forwarded to `tracing`
pub struct TracingLog {
    host: String,
}

impl TracingLog {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl DeployLog for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!(host = %self.host, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(host = %self.host, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(host = %self.host, "{}", message);
    }
}

/// Default filter directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "skiff=info",
        1 => "skiff=debug",
        _ => "debug",
    }
}

/// Install the stderr subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: u8, color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(color)
        .with_writer(std::io::stderr)
        .try_init();
}
