//! Command implementations and dispatching.

use crate::checks::{CheckRegistry, EnvironmentCheck, SystemRunner};
use crate::cli::args::{CheckArgs, Cli, Commands, ToolsArgs};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use console::style;
use std::path::{Path, PathBuf};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The `check` command: run the environment check for a project.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    quiet: bool,
}

impl CheckCommand {
    /// Create a check command for the given project root.
    pub fn new(project_root: &Path, args: CheckArgs, quiet: bool) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            quiet,
        }
    }

    /// Execute the command.
    ///
    /// Version findings land in `sink`; by default they are advisory and
    /// the command still exits 0. With `--strict`, any reported finding
    /// turns into exit code 1.
    pub fn execute(&self, sink: &mut dyn DiagnosticSink) -> Result<CommandResult> {
        let runner = SystemRunner;
        EnvironmentCheck::new(&runner).run("check", &self.project_root, sink)?;

        let reported = sink.reported_count();
        if reported == 0 {
            if !self.quiet {
                println!("{} Toolchain looks good", style("✓").green());
            }
            return Ok(CommandResult::success());
        }

        if self.args.strict {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

/// The `tools` command: list the registered toolchain checks.
pub struct ToolsCommand {
    args: ToolsArgs,
}

impl ToolsCommand {
    /// Create a tools command.
    pub fn new(args: ToolsArgs) -> Self {
        Self { args }
    }

    /// Execute the command.
    pub fn execute(&self) -> Result<CommandResult> {
        let registry = CheckRegistry::new();

        if self.args.json {
            let mut entries = Vec::new();
            for language in registry.known_languages() {
                for check in registry.for_language(language).unwrap_or_default() {
                    entries.push(tool_entry(Some(language), check));
                }
            }
            for check in registry.universal() {
                entries.push(tool_entry(None, check));
            }
            let rendered = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            println!("{}", rendered);
            return Ok(CommandResult::success());
        }

        for language in registry.known_languages() {
            println!("{}", style(language).bold());
            for check in registry.for_language(language).unwrap_or_default() {
                println!(
                    "  {} — `{}`, minimum {}",
                    check.display_name,
                    check.version_command(),
                    check.minimum
                );
            }
        }
        println!("{}", style("all languages").bold());
        for check in registry.universal() {
            println!(
                "  {} — `{}`, minimum {}",
                check.display_name,
                check.version_command(),
                check.minimum
            );
        }

        Ok(CommandResult::success())
    }
}

fn tool_entry(language: Option<&str>, check: &crate::checks::ToolCheck) -> serde_json::Value {
    serde_json::json!({
        "language": language,
        "tool": check.display_name,
        "versionCommand": check.version_command(),
        "minimumVersion": check.minimum.to_string(),
    })
}

/// Dispatch and execute the parsed CLI command.
pub fn dispatch(cli: &Cli, project_root: &Path, sink: &mut dyn DiagnosticSink) -> Result<CommandResult> {
    match &cli.command {
        Some(Commands::Check(args)) => {
            CheckCommand::new(project_root, args.clone(), cli.quiet).execute(sink)
        }
        Some(Commands::Tools(args)) => ToolsCommand::new(args.clone()).execute(),
        None => {
            // Default to the check command with default args
            CheckCommand::new(project_root, CheckArgs::default(), cli.quiet).execute(sink)
        }
    }
}
