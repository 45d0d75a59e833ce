//! Minimum-version validation of probed output.

use crate::checks::registry::ToolCheck;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::version;

/// Validate a tool's raw version output against its minimum.
///
/// Reports at most one diagnostic:
///
/// - output that no version can be coerced from → one internal diagnostic
///   (the tool printed something unexpected; not the user's fault), and no
///   comparison happens
/// - coerced version strictly below the minimum → one usage diagnostic
///   telling the user to upgrade
/// - version at or above the minimum → silence
///
/// Findings are reported, never raised: an old toolchain warns, it does not
/// stop the caller.
pub fn validate_version(
    command: &str,
    check: &ToolCheck,
    raw_output: &str,
    sink: &mut dyn DiagnosticSink,
) {
    let Some(detected) = version::coerce(raw_output) else {
        sink.report(Diagnostic::internal(
            command,
            format!(
                "Unable to parse {} version from {:?}",
                check.display_name,
                raw_output.trim()
            ),
        ));
        return;
    };

    tracing::debug!(tool = check.display_name, %detected, "detected tool version");

    if detected < check.minimum {
        sink.report(Diagnostic::usage(
            command,
            format!(
                "{} version \"{}\" is not supported. Please upgrade to at least {}",
                check.display_name, detected, check.minimum
            ),
        ));
    }
}
