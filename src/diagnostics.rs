//! Diagnostic reporting for advisory findings.
//!
//! Version checks are advisory: a too-old or unparseable tool version is
//! *reported*, not raised, and the check keeps going. Reporting goes through
//! the [`DiagnosticSink`] trait so callers control where findings land —
//! the CLI wires a [`ConsoleSink`] that writes styled lines to stderr, and
//! tests wire a [`MemorySink`] that captures them for assertions.

use console::style;
use std::fmt;

/// How a reported finding is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User-correctable condition (e.g. tool version below minimum).
    Usage,
    /// Unexpected tool output shape, not attributable to user action.
    Internal,
}

/// A single advisory finding, attributed to the invoking command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Name of the CLI command on whose behalf the check ran.
    pub command: String,
    pub message: String,
}

impl Diagnostic {
    /// Create a usage diagnostic.
    pub fn usage(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Usage,
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create an internal diagnostic.
    pub fn internal(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Internal,
            command: command.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.severity {
            Severity::Usage => "Usage error",
            Severity::Internal => "Internal error",
        };
        write!(f, "{} [{}]: {}", kind, self.command, self.message)
    }
}

/// Destination for reported diagnostics.
pub trait DiagnosticSink {
    /// Report a finding.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Number of findings reported so far.
    fn reported_count(&self) -> usize;
}

/// Sink that writes styled diagnostics to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    count: usize,
}

impl ConsoleSink {
    /// Create a new console sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for ConsoleSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.count += 1;
        let label = match diagnostic.severity {
            Severity::Usage => style("warning").yellow().bold(),
            Severity::Internal => style("error").red().bold(),
        };
        eprintln!("{}: {}", label, diagnostic);
    }

    fn reported_count(&self) -> usize {
        self.count
    }
}

/// Sink that captures diagnostics in memory, for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    /// Diagnostics in report order.
    pub reported: Vec<Diagnostic>,
}

impl MemorySink {
    /// Create an empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of reported diagnostics with the given severity.
    pub fn count_of(&self, severity: Severity) -> usize {
        self.reported
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported.push(diagnostic);
    }

    fn reported_count(&self) -> usize {
        self.reported.len()
    }
}
