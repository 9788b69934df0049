//! Host capabilities the locator queries.
//!
//! The [`Host`] trait is the seam between discovery logic and the real
//! system. [`SystemHost`] talks to the actual filesystem and processes;
//! tests substitute their own implementation to simulate a machine.

use crate::detection::elf::ElfHeader;
use crate::Arch;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::Duration;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Default location of the host C compiler.
pub const DEFAULT_GCC_PATH: &str = "/usr/bin/gcc";

/// Operations the locator needs from the machine it runs on.
///
/// Every method is infallible from the caller's point of view: failures
/// are reported as `None`, `false` or an empty string, because discovery
/// treats all of them as "this strategy found nothing".
pub trait Host {
    /// Find an executable on `PATH`.
    fn which(&self, program: &str) -> Option<PathBuf>;

    /// Run a program and return its standard output, or `""` if it could
    /// not be run.
    fn popen_read(&self, program: &Path, args: &[&str]) -> String;

    /// Canonicalize a path, resolving every symlink.
    fn realpath(&self, path: &Path) -> Option<PathBuf>;

    /// Whether `path` exists and is a regular file (symlinks followed).
    fn is_file(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory (symlinks followed).
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether `path` is an executable file.
    fn is_executable(&self, path: &Path) -> bool;

    /// Whether `path` is an ELF shared object.
    fn is_dylib(&self, path: &Path) -> bool;

    /// Whether `path` was built for `arch`.
    fn is_arch_compatible(&self, path: &Path, arch: Arch) -> bool;

    /// Path of the host C compiler. It may not exist.
    fn host_gcc_path(&self) -> PathBuf;

    /// The host CPU architecture, if known.
    fn cpu_arch(&self) -> Option<Arch>;

    /// Every file and directory under `roots`, roots included.
    fn walk<'a>(&'a self, roots: &'a [PathBuf]) -> Box<dyn Iterator<Item = PathBuf> + 'a>;
}

/// [`Host`] backed by the real system.
///
/// # Example
///
/// ```rust
/// use libstdcxx_locator::{Host, SystemHost};
/// use std::path::Path;
///
/// let host = SystemHost::new();
/// assert!(host.is_dir(Path::new("/")));
/// ```
#[derive(Debug, Clone)]
pub struct SystemHost {
    gcc_path: PathBuf,
}

impl SystemHost {
    /// A host using [`DEFAULT_GCC_PATH`] as its C compiler.
    pub fn new() -> Self {
        Self {
            gcc_path: PathBuf::from(DEFAULT_GCC_PATH),
        }
    }

    /// Use a different C compiler for the compiler strategy.
    pub fn with_gcc_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.gcc_path = path.into();
        self
    }
}

impl Default for SystemHost {
    fn default() -> Self {
        Self::new()
    }
}

/// `ETXTBSY` on Linux.
const EXECUTABLE_FILE_BUSY: i32 = 26;

/// Spawn attempts while the executable is still open for writing elsewhere.
const SPAWN_ATTEMPTS: u32 = 5;
const SPAWN_RETRY_DELAY: Duration = Duration::from_millis(25);

/// Run `program` with stdout captured, retrying briefly on `ETXTBSY`.
///
/// A freshly written executable can be briefly unexecutable while a forked
/// child of another thread still holds an inherited write descriptor.
fn run_capturing_stdout(program: &Path, args: &[&str]) -> std::io::Result<Output> {
    let mut attempt = 1;
    loop {
        let result = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output();
        match result {
            Err(e) if e.raw_os_error() == Some(EXECUTABLE_FILE_BUSY) && attempt < SPAWN_ATTEMPTS => {
                trace!(program = %program.display(), attempt, "executable busy, retrying");
                std::thread::sleep(SPAWN_RETRY_DELAY * attempt);
                attempt += 1;
            }
            other => return other,
        }
    }
}

impl Host for SystemHost {
    fn which(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn popen_read(&self, program: &Path, args: &[&str]) -> String {
        let output = match run_capturing_stdout(program, args) {
            Ok(output) => output,
            Err(e) => {
                debug!(program = %program.display(), error = %e, "failed to run command");
                return String::new();
            }
        };

        if !output.status.success() {
            debug!(program = %program.display(), status = %output.status, "command exited unsuccessfully");
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn realpath(&self, path: &Path) -> Option<PathBuf> {
        std::fs::canonicalize(path)
            .map_err(|e| trace!(path = %path.display(), error = %e, "realpath failed"))
            .ok()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_executable(&self, path: &Path) -> bool {
        // which accepts absolute paths and checks the execute bit
        path.is_file() && which::which(path).is_ok()
    }

    fn is_dylib(&self, path: &Path) -> bool {
        match ElfHeader::read(path) {
            Ok(header) => header.is_dylib(),
            Err(e) => {
                trace!(path = %path.display(), error = %e, "not an ELF file");
                false
            }
        }
    }

    fn is_arch_compatible(&self, path: &Path, arch: Arch) -> bool {
        match ElfHeader::read(path) {
            Ok(header) => header.matches_arch(arch),
            Err(e) => {
                trace!(path = %path.display(), error = %e, "not an ELF file");
                false
            }
        }
    }

    fn host_gcc_path(&self) -> PathBuf {
        self.gcc_path.clone()
    }

    fn cpu_arch(&self) -> Option<Arch> {
        Arch::current()
    }

    fn walk<'a>(&'a self, roots: &'a [PathBuf]) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        Box::new(roots.iter().flat_map(|root| {
            WalkDir::new(root)
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry.into_path()),
                    Err(e) => {
                        trace!(error = %e, "skipping unreadable entry");
                        None
                    }
                })
        }))
    }
}
