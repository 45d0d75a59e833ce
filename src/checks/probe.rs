//! Version command invocation.
//!
//! Probing shells out to the tool being checked (`node --version`,
//! `go version`) and captures stdout. Subprocess execution sits behind the
//! [`ToolRunner`] trait so the check flow can be driven deterministically in
//! tests; [`SystemRunner`] is the real implementation and
//! [`ScriptedRunner`] replays canned responses while recording invocation
//! order.
//!
//! Probes run the binary directly rather than through a shell: the version
//! subcommand is a single fixed argument, and shell interpretation would
//! only add ways for the invocation to fail.

use crate::checks::registry::ToolCheck;
use crate::error::{EnvcheckError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::process::{Command, Stdio};

/// Capability for running a tool's version command.
pub trait ToolRunner {
    /// Run `binary arg` and capture stdout as text.
    ///
    /// Errors on spawn failure (binary missing) and on non-zero exit.
    fn version_output(&self, binary: &str, arg: &str) -> io::Result<String>;
}

/// Runner that spawns real subprocesses.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn version_output(&self, binary: &str, arg: &str) -> io::Result<String> {
        let output = Command::new(binary)
            .arg(arg)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            let detail = match output.status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "terminated by signal".to_string(),
            };
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            return Err(io::Error::other(if stderr.is_empty() {
                detail
            } else {
                format!("{}: {}", detail, stderr)
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Canned response for one binary in a [`ScriptedRunner`].
#[derive(Debug, Clone)]
enum ScriptedResponse {
    Output(String),
    Failure(String),
}

/// Runner test double: replays canned outputs and records invocations.
///
/// Lookup is by binary name. Binaries without a scripted response behave as
/// if missing from PATH.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, ScriptedResponse>,
    invoked: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create a runner with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script `binary` to succeed with `output` on stdout.
    pub fn with_output(mut self, binary: &str, output: &str) -> Self {
        self.responses
            .insert(binary.to_string(), ScriptedResponse::Output(output.to_string()));
        self
    }

    /// Script `binary` to fail with `cause`.
    pub fn with_failure(mut self, binary: &str, cause: &str) -> Self {
        self.responses
            .insert(binary.to_string(), ScriptedResponse::Failure(cause.to_string()));
        self
    }

    /// Version commands invoked so far, in order (e.g. `"node --version"`).
    pub fn invocations(&self) -> Vec<String> {
        self.invoked.borrow().clone()
    }
}

impl ToolRunner for ScriptedRunner {
    fn version_output(&self, binary: &str, arg: &str) -> io::Result<String> {
        self.invoked.borrow_mut().push(format!("{} {}", binary, arg));

        match self.responses.get(binary) {
            Some(ScriptedResponse::Output(output)) => Ok(output.clone()),
            Some(ScriptedResponse::Failure(cause)) => Err(io::Error::other(cause.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{}: command not found", binary),
            )),
        }
    }
}

/// Probe a tool's version, raising a usage error when invocation fails.
///
/// On success returns the raw stdout text for the validator to pick apart.
/// On failure (binary missing, non-zero exit, spawn error) the error names
/// the command context, the version command, and the underlying cause.
pub fn probe_tool(command: &str, check: &ToolCheck, runner: &dyn ToolRunner) -> Result<String> {
    tracing::debug!(binary = check.binary, "probing tool version");

    runner
        .version_output(check.binary, check.version_arg)
        .map_err(|e| {
            EnvcheckError::usage(
                command,
                format!(
                    "Unable to run `{}`, please check that {} is installed: {}",
                    check.version_command(),
                    check.binary,
                    e
                ),
            )
        })
}
