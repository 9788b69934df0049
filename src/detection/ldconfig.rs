//! Dynamic-linker cache lookup.

use super::is_usable_library;
use super::parser::parse_ldconfig_output;
use crate::Host;
use std::path::PathBuf;
use tracing::debug;

/// Find the soname through `ldconfig -p`.
///
/// Only the first cache entry for the soname is considered. If it does not
/// point at a shared library the strategy gives up rather than trying
/// later entries.
pub(crate) fn probe_ldconfig<H: Host + ?Sized>(host: &H) -> Option<PathBuf> {
    let Some(ldconfig) = host.which("ldconfig") else {
        debug!("ldconfig not found on PATH");
        return None;
    };

    let output = host.popen_read(&ldconfig, &["-p"]);
    let Some(path) = parse_ldconfig_output(&output) else {
        debug!(ldconfig = %ldconfig.display(), "no libstdc++ entry in linker cache");
        return None;
    };

    is_usable_library(host, &path).then_some(path)
}
