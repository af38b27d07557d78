//! Test environment for running the skiff binary in isolation.
//!
//! `TestEnv` owns a temp directory with app configs and a shell script that
//! stands in for ssh. The script appends its last argument to a call log,
//! which is the destination for control-master calls and the command string
//! for everything else.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running the skiff CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

const FAKE_SSH: &str = r#"#!/bin/sh
for last; do :; done
master=0
for arg; do
    if [ "$arg" = "-M" ]; then master=1; fi
done
echo "$last" >> "$FAKE_SSH_LOG"
if [ "$master" = 1 ] && [ -n "$FAKE_SSH_REFUSE" ]; then
    echo "ssh: connect to host $last port 22: Connection refused" >&2
    exit 255
fi
if [ -n "$FAKE_SSH_FAIL" ] && [ "$last" = "$FAKE_SSH_FAIL" ]; then
    echo "fatal: simulated failure" >&2
    exit 1
fi
if [ "$master" = 0 ]; then
    echo "ran: $last"
fi
exit 0
"#;

/// Isolated directory with configs and a stand-in ssh client
pub struct TestEnv {
    pub root: TempDir,
    ssh: PathBuf,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let ssh = root.path().join("fake-ssh");
        std::fs::write(&ssh, FAKE_SSH).expect("Failed to write fake ssh");
        make_executable(&ssh);

        Self {
            root,
            ssh,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_skiff")),
        }
    }

    /// Create an environment with one app config already written
    pub fn with_config(app: &str, json: &str) -> Self {
        let env = Self::new();
        env.write_config(app, json);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write_config(&self, app: &str, json: &str) {
        std::fs::write(self.path(&format!("{}.json", app)), json).expect("Failed to write config");
    }

    /// Run skiff from the environment root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run skiff with extra environment variables for the binary and fake ssh
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("SKIFF_SSH", &self.ssh)
            .env("FAKE_SSH_LOG", self.path("ssh.log"))
            .env_remove("SKIFF_USER")
            .env_remove("SKIFF_DEPLOY_DIRECTORY")
            .env_remove("FAKE_SSH_FAIL")
            .env_remove("FAKE_SSH_REFUSE")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute skiff");
        to_result(output)
    }

    /// Every ssh invocation's last argument, in order
    pub fn ssh_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path("ssh.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to mark fake ssh executable");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
