//! Compiler search-path lookup.

use super::is_usable_library;
use crate::{Host, SONAME};
use std::path::PathBuf;
use tracing::debug;

/// Ask the host C compiler where it would find the soname.
///
/// gcc prints the bare name back when it cannot find the file, so only
/// absolute answers are accepted.
pub(crate) fn probe_compiler<H: Host + ?Sized>(host: &H) -> Option<PathBuf> {
    let gcc = host.host_gcc_path();
    if !host.is_executable(&gcc) {
        debug!(gcc = %gcc.display(), "host compiler not executable");
        return None;
    }

    let flag = format!("--print-file-name={SONAME}");
    let output = host.popen_read(&gcc, &[&flag]);
    let answer = output.trim();
    if !answer.starts_with('/') {
        debug!(gcc = %gcc.display(), answer, "compiler did not resolve libstdc++");
        return None;
    }

    let path = PathBuf::from(answer);
    is_usable_library(host, &path).then_some(path)
}
