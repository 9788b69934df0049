//! Discovery strategy implementations.
//!
//! Each strategy is a function from a [`Host`](crate::Host) to an optional,
//! already validated library path. They never fail loudly: a missing
//! tool, empty output or unreadable directory just means "not found here".
//!
//! - `probe_ldconfig`: dynamic-linker cache lookup via `ldconfig -p`
//! - `probe_compiler`: `gcc --print-file-name=libstdc++.so.6`
//! - `probe_filesystem`: recursive scan of the system library directories

mod compiler;
pub(crate) mod elf;
mod ldconfig;
mod parser;
mod scan;

pub(crate) use compiler::probe_compiler;
pub(crate) use ldconfig::probe_ldconfig;
pub(crate) use parser::version_from_path;
pub(crate) use scan::probe_filesystem;

use crate::Host;
use std::path::Path;
use tracing::debug;

/// Whether `path` names an existing regular file in shared-object format.
fn is_usable_library<H: Host + ?Sized>(host: &H, path: &Path) -> bool {
    if path.as_os_str().is_empty() {
        return false;
    }
    if !host.is_file(path) {
        debug!(path = %path.display(), "candidate is not a regular file");
        return false;
    }
    if !host.is_dylib(path) {
        debug!(path = %path.display(), "candidate is not a shared library");
        return false;
    }
    true
}
