//! Environment check entry point.
//!
//! Ties the pieces together: load `cdktf.json`, resolve the toolchain
//! checks for the declared language, then probe and validate each tool in
//! order. Checks run sequentially so diagnostic output is deterministic
//! (language-specific tools first, then the universal Node.js check).
//!
//! Failure handling is deliberately asymmetric:
//!
//! - a missing/malformed config file or a failing probe invocation is
//!   **raised** as a usage error and halts the check
//! - an old or unparseable tool version is **reported** to the sink and the
//!   check keeps going; `run` still resolves `Ok`
//!
//! Probes have no timeout; a version command that hangs will hang the check.

use crate::checks::probe::{probe_tool, SystemRunner, ToolRunner};
use crate::checks::registry::CheckRegistry;
use crate::checks::validator::validate_version;
use crate::config;
use crate::diagnostics::{ConsoleSink, DiagnosticSink};
use crate::error::{EnvcheckError, Result};
use std::path::Path;

/// Runs the toolchain checks for a project.
pub struct EnvironmentCheck<'a> {
    registry: CheckRegistry,
    runner: &'a dyn ToolRunner,
}

impl<'a> EnvironmentCheck<'a> {
    /// Create a check with the built-in registry.
    pub fn new(runner: &'a dyn ToolRunner) -> Self {
        Self::with_registry(CheckRegistry::new(), runner)
    }

    /// Create a check over a custom registry.
    pub fn with_registry(registry: CheckRegistry, runner: &'a dyn ToolRunner) -> Self {
        Self { registry, runner }
    }

    /// The registry this check dispatches on.
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Run the environment check for the project at `project_path`.
    ///
    /// `command` is the name of the CLI command on whose behalf the check
    /// runs; it is carried into every raised error and reported diagnostic.
    ///
    /// # Errors
    ///
    /// Raises a usage error when `cdktf.json` is missing or malformed
    /// (naming the resolved path, before any probing), or when a probe
    /// invocation fails (aborting the remaining checks). Version findings
    /// are reported to `sink` instead and do not fail the call.
    pub fn run(
        &self,
        command: &str,
        project_path: &Path,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        let config = config::load_project_config(project_path).map_err(|e| match e {
            EnvcheckError::ConfigNotFound { path } => EnvcheckError::usage(
                command,
                format!(
                    "Could not find {} in \"{}\"",
                    config::CONFIG_FILE_NAME,
                    path.display()
                ),
            ),
            EnvcheckError::ConfigParseError { path, message } => EnvcheckError::usage(
                command,
                format!("Could not read \"{}\": {}", path.display(), message),
            ),
            other => other,
        })?;

        tracing::debug!(language = %config.language, "loaded project configuration");

        for check in self.registry.checks_for(&config.language) {
            let raw_output = probe_tool(command, check, self.runner)?;
            validate_version(command, check, &raw_output, sink);
        }

        Ok(())
    }
}

/// Run the environment check with the real runner and a console sink.
///
/// `project_path` defaults to the current working directory when `None`.
/// Returns the number of diagnostics reported.
pub fn check_environment(command: &str, project_path: Option<&Path>) -> Result<usize> {
    let cwd;
    let project_path = match project_path {
        Some(path) => path,
        None => {
            cwd = std::env::current_dir()?;
            &cwd
        }
    };

    let runner = SystemRunner;
    let mut sink = ConsoleSink::new();
    EnvironmentCheck::new(&runner).run(command, project_path, &mut sink)?;
    Ok(sink.reported_count())
}
