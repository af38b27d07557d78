//! SSH client options

use std::path::PathBuf;

/// Default `ConnectTimeout` in seconds
pub const DEFAULT_CONNECT_TIMEOUT: u64 = 10;

/// How to invoke the ssh client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshOptions {
    /// ssh executable (`SKIFF_SSH` overrides)
    pub program: PathBuf,
    pub port: Option<u16>,
    /// Private key passed with `-i`
    pub identity: Option<PathBuf>,
    /// Seconds; the only timeout a deploy has
    pub connect_timeout: u64,
}

impl Default for SshOptions {
    fn default() -> Self {
        Self {
            program: PathBuf::from("ssh"),
            port: None,
            identity: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl SshOptions {
    /// Apply environment variable overrides (SKIFF_SSH)
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(program) = std::env::var_os("SKIFF_SSH").filter(|v| !v.is_empty()) {
            self.program = PathBuf::from(program);
        }
        self
    }

    /// `user@host`, or the host alone when no user is configured or the
    /// host already names one
    pub fn destination(host: &str, user: &str) -> String {
        if user.is_empty() || host.contains('@') {
            host.to_string()
        } else {
            format!("{}@{}", user, host)
        }
    }

    /// Flags shared by every invocation. Prompts are disabled so a missing
    /// key fails the connection instead of blocking on a terminal.
    pub fn common_args(&self) -> Vec<String> {
        let mut args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            format!("ConnectTimeout={}", self.connect_timeout),
        ];
        if let Some(port) = self.port {
            args.push("-p".to_string());
            args.push(port.to_string());
        }
        if let Some(identity) = &self.identity {
            args.push("-i".to_string());
            args.push(identity.to_string_lossy().to_string());
        }
        args
    }
}
