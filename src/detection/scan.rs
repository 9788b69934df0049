//! Recursive scan of the system library directories.

use crate::{Host, SONAME};
use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::debug;

/// Walk `library_dirs` for the first native shared library named exactly
/// `libstdc++.so.6`.
///
/// Directories are canonicalized and deduplicated first, so on merged-usr
/// systems `/lib64` and `/usr/lib64` are only walked once.
pub(crate) fn probe_filesystem<H: Host + ?Sized>(host: &H, library_dirs: &[PathBuf]) -> Option<PathBuf> {
    let Some(arch) = host.cpu_arch() else {
        debug!("unknown host architecture, skipping filesystem scan");
        return None;
    };

    let roots = library_roots(host, library_dirs);
    debug!(?roots, %arch, "scanning library directories");

    // bound so the boxed walk is dropped before `roots`
    let found = host.walk(&roots).find(|path| {
        path.file_name() == Some(OsStr::new(SONAME))
            && host.is_file(path)
            && host.is_dylib(path)
            && host.is_arch_compatible(path, arch)
    });
    found
}

/// Existing directories from `dirs`, resolved and deduplicated in order.
fn library_roots<H: Host + ?Sized>(host: &H, dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::with_capacity(dirs.len());
    for real in dirs
        .iter()
        .filter(|dir| host.is_dir(dir))
        .filter_map(|dir| host.realpath(dir))
    {
        if !roots.contains(&real) {
            roots.push(real);
        }
    }
    roots
}
