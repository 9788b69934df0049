//! Regex extraction from `ldconfig -p` output and library paths.

use crate::{Version, SONAME};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Matches the soname target in an `ldconfig -p` cache listing, e.g.
/// `libstdc++.so.6 (libc6,x86-64) => /usr/lib/x86_64-linux-gnu/libstdc++.so.6`.
static LDCONFIG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?m)=> (/.*/{})$", regex::escape(SONAME)))
        .expect("LDCONFIG_REGEX must compile")
});

/// Matches the numeric suffix of a resolved library filename.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^libstdc\+\+\.so\.(\d+(?:\.\d+)*)$").expect("VERSION_REGEX must compile")
});

/// Extract the library path from `ldconfig -p` output.
///
/// Returns the path from the first line of the form
/// `<name> ... => /<dir>/libstdc++.so.6`, or `None` if no line matches.
pub(crate) fn parse_ldconfig_output(output: &str) -> Option<PathBuf> {
    LDCONFIG_REGEX
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| PathBuf::from(m.as_str()))
}

/// Extract the version from a resolved library path.
///
/// `/usr/lib/x86_64-linux-gnu/libstdc++.so.6.0.30` yields `6.0.30`.
/// Paths that do not end in `libstdc++.so.<digits>(.<digits>)*` yield `None`.
/// Only the filename is matched, so non-UTF-8 parent directories are fine.
pub(crate) fn version_from_path(path: &Path) -> Option<Version> {
    if !path.has_root() {
        return None;
    }
    let name = path.file_name()?.to_string_lossy();
    let caps = VERSION_REGEX.captures(&name)?;
    caps.get(1)?.as_str().parse().ok()
}
