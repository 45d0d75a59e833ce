//! Tolerant semantic-version extraction.
//!
//! Version commands rarely print a bare semantic version. `go version`
//! prints `go version go1.18.1 darwin/amd64`, `node --version` prints
//! `v12.16.0`, and some tools print only a major number. [`coerce`] pulls
//! the first `major[.minor[.patch]]` numeric pattern out of free-form text
//! and pads missing components with zero, so all of the above produce a
//! comparable [`semver::Version`].

use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

/// First major[.minor[.patch]] numeric run in a string.
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?").unwrap());

/// Extract a semantic version from free-form version-command output.
///
/// Scans for the first substring matching `major[.minor[.patch]]`, padding
/// missing minor/patch components with zero. Pre-release and build suffixes
/// after the numeric core are ignored, so `1.2.3-beta.1` coerces to `1.2.3`.
///
/// Returns `None` when the text contains no numeric version at all, or when
/// a component overflows `u64`.
pub fn coerce(text: &str) -> Option<Version> {
    let caps = VERSION_PATTERN.captures(text)?;

    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let patch = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    Some(Version::new(major, minor, patch))
}
