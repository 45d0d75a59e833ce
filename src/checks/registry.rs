//! Toolchain check registry.
//!
//! Defines which tools must be present, how to ask them for their version,
//! and the minimum version each must satisfy. Checks come in two flavors:
//! per-language checks keyed on the `language` field of `cdktf.json`, and
//! universal checks that apply to every project. Dispatch is a lookup, not
//! a branch, so adding a language means adding registry entries.

use semver::Version;
use std::collections::HashMap;

/// A single toolchain requirement: which binary to probe and the minimum
/// version its output must satisfy.
#[derive(Debug, Clone)]
pub struct ToolCheck {
    /// Binary name resolved on PATH (e.g. "node").
    pub binary: &'static str,
    /// Argument that makes the binary print its version (e.g. "--version").
    pub version_arg: &'static str,
    /// Human-readable tool name used in diagnostics (e.g. "Node.js").
    pub display_name: &'static str,
    /// Minimum supported version.
    pub minimum: Version,
}

impl ToolCheck {
    /// The full version command, for display.
    pub fn version_command(&self) -> String {
        format!("{} {}", self.binary, self.version_arg)
    }
}

/// Registry of toolchain checks.
pub struct CheckRegistry {
    language_checks: HashMap<&'static str, Vec<ToolCheck>>,
    universal_checks: Vec<ToolCheck>,
}

impl CheckRegistry {
    /// Create a registry with the built-in checks.
    pub fn new() -> Self {
        let mut language_checks = HashMap::new();

        // Generated Go bindings require a module-aware toolchain.
        language_checks.insert(
            "go",
            vec![ToolCheck {
                binary: "go",
                version_arg: "version",
                display_name: "Go",
                minimum: Version::new(1, 16, 0),
            }],
        );

        // The synthesis pipeline itself runs on Node.js, whatever the
        // target language is.
        let universal_checks = vec![ToolCheck {
            binary: "node",
            version_arg: "--version",
            display_name: "Node.js",
            minimum: Version::new(12, 16, 0),
        }];

        Self {
            language_checks,
            universal_checks,
        }
    }

    /// Ordered checks for a declared language: language-specific checks
    /// first, then the universal ones. Languages without specific checks
    /// (and unrecognized language strings) get only the universal checks.
    pub fn checks_for(&self, language: &str) -> Vec<&ToolCheck> {
        let mut checks: Vec<&ToolCheck> = self
            .language_checks
            .get(language)
            .map(|c| c.iter().collect())
            .unwrap_or_default();
        checks.extend(self.universal_checks.iter());
        checks
    }

    /// Checks that run for every project.
    pub fn universal(&self) -> &[ToolCheck] {
        &self.universal_checks
    }

    /// Languages with specific checks, sorted for stable output.
    pub fn known_languages(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.language_checks.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Language-specific checks, if any, for `language`.
    pub fn for_language(&self, language: &str) -> Option<&[ToolCheck]> {
        self.language_checks.get(language).map(Vec::as_slice)
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
