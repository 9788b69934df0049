//! The ordered discovery strategies.

use crate::detection::{probe_compiler, probe_filesystem, probe_ldconfig};
use crate::{Host, LocatorOptions};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::IntoEnumIterator;

/// A way of finding the system libstdc++.
///
/// Variants are declared in the order the locator tries them by default:
/// the dynamic-linker cache is authoritative for what programs actually
/// load, the compiler knows what it would link against, and the
/// filesystem scan is a last resort.
///
/// # Example
///
/// ```rust
/// use libstdcxx_locator::Strategy;
///
/// let order: Vec<_> = Strategy::all().collect();
/// assert_eq!(order[0], Strategy::DynamicLinkerCache);
/// assert_eq!(order[2], Strategy::FilesystemScan);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum Strategy {
    /// Ask `ldconfig -p` where the soname resolves.
    DynamicLinkerCache,
    /// Ask `gcc --print-file-name` where it would find the soname.
    Compiler,
    /// Walk the conventional system library directories.
    FilesystemScan,
}

impl Strategy {
    /// Iterator over all strategies in discovery order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Run this strategy, returning a validated library path.
    pub(crate) fn probe<H: Host + ?Sized>(&self, host: &H, options: &LocatorOptions) -> Option<PathBuf> {
        match self {
            Self::DynamicLinkerCache => probe_ldconfig(host),
            Self::Compiler => probe_compiler(host),
            Self::FilesystemScan => probe_filesystem(host, &options.library_dirs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_discovery_order() {
        let all: Vec<_> = Strategy::all().collect();
        assert_eq!(
            all,
            vec![
                Strategy::DynamicLinkerCache,
                Strategy::Compiler,
                Strategy::FilesystemScan
            ]
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Strategy::DynamicLinkerCache.to_string(), "dynamic_linker_cache");
        assert_eq!(Strategy::Compiler.to_string(), "compiler");
        assert_eq!(Strategy::FilesystemScan.to_string(), "filesystem_scan");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Strategy::FilesystemScan).unwrap();
        assert_eq!(json, "\"filesystem_scan\"");
        let strategy: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(strategy, Strategy::FilesystemScan);
    }
}
