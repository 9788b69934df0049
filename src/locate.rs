//! The libstdc++ locator and its process-wide convenience functions.

use crate::detection::version_from_path;
use crate::{Host, LocatorOptions, SystemHost, Version};
use std::path::PathBuf;
use std::sync::{LazyLock, OnceLock};
use tracing::debug;

/// Locates the system libstdc++ and remembers its version.
///
/// The version is computed on the first call to
/// [`system_version`](Locator::system_version) and never recomputed, even
/// if the filesystem changes afterwards. Construct a new `Locator` to look
/// again.
///
/// # Detection Process
///
/// 1. Run each configured [`Strategy`](crate::Strategy) in order until one
///    yields a validated library path
/// 2. Resolve that path's symlinks
/// 3. Take the version from the resolved `libstdc++.so.<version>` name
/// 4. Fall back to [`Version::NULL`] if any step comes up empty
///
/// # Example
///
/// ```rust,no_run
/// use libstdcxx_locator::{Locator, SystemHost};
///
/// let locator = Locator::new(SystemHost::new());
/// println!("libstdc++ {}", locator.system_version());
/// if locator.below_ci_version() {
///     println!("older than {}", locator.options().ci_version);
/// }
/// ```
#[derive(Debug)]
pub struct Locator<H = SystemHost> {
    host: H,
    options: LocatorOptions,
    version: OnceLock<Version>,
}

impl<H: Host> Locator<H> {
    /// A locator with default options.
    pub fn new(host: H) -> Self {
        Self::with_options(host, LocatorOptions::default())
    }

    /// A locator with custom options.
    pub fn with_options(host: H, options: LocatorOptions) -> Self {
        Self {
            host,
            options,
            version: OnceLock::new(),
        }
    }

    /// The options this locator was built with.
    pub fn options(&self) -> &LocatorOptions {
        &self.options
    }

    /// The host this locator queries.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The system libstdc++ version, or [`Version::NULL`] if it could not
    /// be determined.
    pub fn system_version(&self) -> &Version {
        self.version.get_or_init(|| {
            let version = self.detect_version();
            debug!(%version, "libstdc++ version");
            version
        })
    }

    /// Whether the system libstdc++ is older than the CI minimum.
    ///
    /// An undetected library counts as older.
    pub fn below_ci_version(&self) -> bool {
        *self.system_version() < self.options.ci_version
    }

    fn detect_version(&self) -> Version {
        let Some(path) = self.system_path() else {
            return Version::NULL;
        };
        let Some(real) = self.host.realpath(&path) else {
            debug!(path = %path.display(), "could not resolve library path");
            return Version::NULL;
        };
        version_from_path(&real).unwrap_or_else(|| {
            debug!(path = %real.display(), "no version in library filename");
            Version::NULL
        })
    }

    pub(crate) fn system_path(&self) -> Option<PathBuf> {
        self.options.strategies.iter().find_map(|strategy| {
            debug!(%strategy, "trying strategy");
            let path = strategy.probe(&self.host, &self.options)?;
            debug!(%strategy, path = %path.display(), "found libstdc++");
            Some(path)
        })
    }
}

static SYSTEM_LOCATOR: LazyLock<Locator<SystemHost>> =
    LazyLock::new(|| Locator::new(SystemHost::new()));

/// The system libstdc++ version, computed once per process.
///
/// Returns [`Version::NULL`] when no libstdc++ could be found.
///
/// # Example
///
/// ```rust
/// use libstdcxx_locator::system_version;
///
/// let version = system_version();
/// if version.is_null() {
///     println!("libstdc++ not found");
/// } else {
///     println!("libstdc++ {}", version);
/// }
/// ```
pub fn system_version() -> Version {
    SYSTEM_LOCATOR.system_version().clone()
}

/// Whether the system libstdc++ is older than the default CI minimum
/// ([`DEFAULT_CI_VERSION`](crate::DEFAULT_CI_VERSION)).
pub fn below_ci_version() -> bool {
    SYSTEM_LOCATOR.below_ci_version()
}
