//! Locator configuration.
//!
//! This module provides the [`LocatorOptions`] struct for configuring
//! where the locator looks and which version CI policy requires.

use crate::{Strategy, Version};
use std::path::PathBuf;

/// Minimum libstdc++ version required by CI policy.
///
/// This is the libstdc++ shipped with the oldest distribution CI builds
/// bottles on; anything older cannot load those bottles.
pub const DEFAULT_CI_VERSION: [u64; 3] = [6, 0, 30];

/// Conventional system library directories, in scan order.
pub const DEFAULT_LIBRARY_DIRS: &[&str] = &["/lib64", "/lib", "/usr/lib64", "/usr/lib"];

/// Configuration options for a [`Locator`](crate::Locator).
///
/// # Default Behavior
///
/// All three strategies run in discovery order, the filesystem scan walks
/// [`DEFAULT_LIBRARY_DIRS`], and the CI minimum is
/// [`DEFAULT_CI_VERSION`].
///
/// # Example
///
/// ```rust
/// use libstdcxx_locator::{LocatorOptions, Strategy, Version};
///
/// // Use default options
/// let opts = LocatorOptions::default();
///
/// // Require a newer runtime
/// let opts = LocatorOptions {
///     ci_version: "6.0.33".parse().unwrap(),
///     ..Default::default()
/// };
///
/// // Only trust the dynamic-linker cache
/// let opts = LocatorOptions {
///     strategies: vec![Strategy::DynamicLinkerCache],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct LocatorOptions {
    /// Minimum version CI policy requires.
    ///
    /// Default: `6.0.30`
    pub ci_version: Version,

    /// Root directories for the filesystem scan, in order.
    ///
    /// Default: `/lib64`, `/lib`, `/usr/lib64`, `/usr/lib`
    pub library_dirs: Vec<PathBuf>,

    /// Strategies to try, in order. The first one that finds a usable
    /// library wins.
    ///
    /// Default: every [`Strategy`] in discovery order
    pub strategies: Vec<Strategy>,
}

impl Default for LocatorOptions {
    fn default() -> Self {
        Self {
            ci_version: Version::from_components(DEFAULT_CI_VERSION),
            library_dirs: DEFAULT_LIBRARY_DIRS.iter().map(PathBuf::from).collect(),
            strategies: Strategy::all().collect(),
        }
    }
}
