//! Process execution for the external tools (`gh`, `git`).
//!
//! Every call is described by a [`CommandSpec`] and answered with a [`ProcessOutput`].
//! The [`ProcessRunner`] trait is the seam between the workflows and the operating
//! system: [`SystemRunner`] spawns real processes with `tokio::process`, tests swap in
//! a recording fake.

use crate::error::{AppError, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// A single external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits the process's own directory.
    pub cwd: Option<PathBuf>,
    /// Network-bound calls (pushes, repository creation) run until they finish.
    pub untimed: bool,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            untimed: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.untimed = true;
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// Builds a successful output with the given stdout.
    #[cfg(test)]
    pub fn stdout(text: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: text.into(),
            stderr: String::new(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Stdout followed by stderr.
    ///
    /// `gh` writes most of its human-readable messages to stderr, so the text
    /// predicates always look at both streams.
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text
    }
}

/// A step whose success is inferred from its output, kept together with that output
/// so a failure can be shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub succeeded: bool,
    pub output: ProcessOutput,
}

/// Executes external programs.
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Runs a program with captured stdout/stderr and waits for it to finish.
    async fn run(&self, spec: &CommandSpec) -> Result<ProcessOutput>;

    /// Runs a program attached to the user's terminal (for interactive flows such
    /// as a browser login). Only the exit code is reported.
    async fn run_attached(&self, spec: &CommandSpec) -> Result<ProcessOutput>;
}

/// Spawns real processes on the tokio runtime.
pub struct SystemRunner {
    timeout: Duration,
}

impl SystemRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn command(spec: &CommandSpec) -> Command {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }
        // Dropping the child (timeout, early return) must not leave the process behind.
        cmd.kill_on_drop(true);
        cmd
    }

    fn spawn_error(spec: &CommandSpec, err: std::io::Error) -> AppError {
        AppError::Spawn {
            command: spec.to_string(),
            source: err.into(),
        }
    }
}

impl ProcessRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<ProcessOutput> {
        let mut cmd = Self::command(spec);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(command = %spec, cwd = ?spec.cwd, "spawning");
        let child = cmd.spawn().map_err(|e| Self::spawn_error(spec, e))?;

        let output = if spec.untimed {
            child.wait_with_output().await?
        } else {
            match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
                Ok(output) => output?,
                Err(_) => {
                    warn!(command = %spec, "timed out, process killed");
                    return Err(AppError::Timeout {
                        command: spec.to_string(),
                        timeout: self.timeout,
                    });
                },
            }
        };

        let output = ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(command = %spec, code = ?output.code, "finished");
        Ok(output)
    }

    async fn run_attached(&self, spec: &CommandSpec) -> Result<ProcessOutput> {
        let mut cmd = Self::command(spec);
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        debug!(command = %spec, "spawning attached to terminal");
        let status = cmd
            .status()
            .await
            .map_err(|e| Self::spawn_error(spec, e))?;

        Ok(ProcessOutput {
            code: status.code(),
            ..ProcessOutput::default()
        })
    }
}
