//! Error types for skiff
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//! Only `ConfigError` and `SessionError` stop a deploy. `CommandError`
//! is recorded in the deploy report and the chain moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// The per-application config file is missing or unusable
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be opened or read
    #[error("config file not found: {path} ({source})")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not a usable deploy config
    #[error("invalid config in {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// A remote session could not be established
#[derive(Error, Debug)]
pub enum SessionError {
    /// The ssh client itself could not be started
    #[error("failed to start ssh client for {host}: {source}")]
    Spawn {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// The client ran but the connection was refused or authentication failed
    #[error("could not connect to {host}: {message}")]
    Connect { host: String, message: String },
}

/// A single remote command did not succeed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command never reached the remote shell, or the connection dropped
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote process exited with a non-zero status
    #[error("remote command exited with status {code}")]
    ExitStatus { code: i32 },

    /// The local client was killed by a signal before reporting a status
    #[error("remote command terminated without an exit status")]
    Terminated,
}

/// Fatal errors for a whole deploy
#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),
}
