//! OpenSSH control-master session
//!
//! `connect` starts `ssh -M -N -f` with a control socket in a private temp
//! directory and returns once authentication has finished. Commands reuse the
//! socket, so the deploy authenticates exactly once. `close` sends
//! `-O exit` to stop the master.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::Arc;

use tempfile::TempDir;

use super::options::SshOptions;
use crate::domain::ports::{CommandOutput, DeployLog, RemoteSession, SessionConnector};
use crate::error::{CommandError, SessionError};

/// Exit status ssh reserves for its own errors
const SSH_ERROR_STATUS: i32 = 255;

/// Opens control-master sessions with the system ssh client
pub struct SshConnector {
    options: SshOptions,
}

impl SshConnector {
    pub fn new(options: SshOptions) -> Self {
        Self { options }
    }
}

impl SessionConnector for SshConnector {
    fn connect(
        &self,
        host: &str,
        user: &str,
        log: Arc<dyn DeployLog>,
    ) -> Result<Box<dyn RemoteSession>, SessionError> {
        let session = SshSession::open(self.options.clone(), host, user, log)?;
        Ok(Box::new(session))
    }
}

/// A live control master for one host
pub struct SshSession {
    options: SshOptions,
    host: String,
    destination: String,
    socket: PathBuf,
    log: Arc<dyn DeployLog>,
    closed: bool,
    // Holds the socket; removed once the session is dropped.
    _dir: TempDir,
}

impl SshSession {
    /// Start the control master and wait for authentication to finish
    pub fn open(
        options: SshOptions,
        host: &str,
        user: &str,
        log: Arc<dyn DeployLog>,
    ) -> Result<Self, SessionError> {
        let spawn_error = |source| SessionError::Spawn {
            host: host.to_string(),
            source,
        };

        let dir = tempfile::Builder::new()
            .prefix("skiff-")
            .tempdir()
            .map_err(spawn_error)?;
        let socket = dir.path().join("ctl");
        let destination = SshOptions::destination(host, user);

        // A backgrounded master keeps its stderr open, so it goes to a file
        // rather than a pipe that would never reach EOF.
        let stderr_path = dir.path().join("master.err");
        let stderr = File::create(&stderr_path).map_err(spawn_error)?;

        let mut args = options.common_args();
        args.extend(["-M", "-N", "-f", "-S"].map(String::from));
        args.push(socket.to_string_lossy().to_string());
        args.push(destination.clone());

        log.debug(&format!("{} {}", options.program.display(), args.join(" ")));

        let status = Command::new(&options.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::from(stderr))
            .status()
            .map_err(spawn_error)?;

        if !status.success() {
            let message = read_trimmed(&stderr_path);
            let message = if message.is_empty() {
                format!("ssh exited with {}", status)
            } else {
                message
            };
            return Err(SessionError::Connect {
                host: host.to_string(),
                message,
            });
        }

        log.debug(&format!("session to {} established", destination));

        Ok(Self {
            options,
            host: host.to_string(),
            destination,
            socket,
            log,
            closed: false,
            _dir: dir,
        })
    }

    fn control_args(&self) -> Vec<String> {
        let mut args = vec!["-S".to_string(), self.socket.to_string_lossy().to_string()];
        args.extend(self.options.common_args());
        args
    }
}

impl RemoteSession for SshSession {
    fn host(&self) -> &str {
        &self.host
    }

    fn execute(&mut self, command: &str) -> Result<CommandOutput, CommandError> {
        let mut args = self.control_args();
        args.push(self.destination.clone());
        args.push(command.to_string());

        self.log
            .debug(&format!("{} {}", self.options.program.display(), args.join(" ")));

        let output = Command::new(&self.options.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| CommandError::Transport(e.to_string()))?;

        Ok(classify(output))
    }

    fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;

        let mut args = self.control_args();
        args.extend(["-O".to_string(), "exit".to_string()]);
        args.push(self.destination.clone());

        self.log
            .debug(&format!("{} {}", self.options.program.display(), args.join(" ")));

        let result = Command::new(&self.options.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) if status.success() => {
                self.log
                    .debug(&format!("session to {} closed", self.destination));
            }
            Ok(status) => self.log.debug(&format!(
                "control master for {} did not acknowledge exit ({})",
                self.destination, status
            )),
            Err(e) => self.log.debug(&format!(
                "failed to stop control master for {}: {}",
                self.destination, e
            )),
        }
    }
}

impl Drop for SshSession {
    fn drop(&mut self) {
        self.close();
    }
}

/// Map a finished ssh invocation to a command outcome.
///
/// Status 255 is ssh's own failure (connection lost, socket gone) and
/// counts as a transport error; any other non-zero status came from the
/// remote command.
fn classify(output: Output) -> CommandOutput {
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let error = match output.status.code() {
        Some(0) => None,
        Some(SSH_ERROR_STATUS) => {
            let message = stderr.trim();
            Some(CommandError::Transport(if message.is_empty() {
                format!("ssh exited with status {}", SSH_ERROR_STATUS)
            } else {
                message.to_string()
            }))
        }
        Some(code) => Some(CommandError::ExitStatus { code }),
        None => Some(CommandError::Terminated),
    };

    CommandOutput {
        stdout,
        stderr,
        error,
    }
}

fn read_trimmed(path: &Path) -> String {
    fs::read_to_string(path)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
