//! # libstdcxx-locator
//!
//! Locate the system libstdc++ on Linux and compare its version against the
//! minimum CI policy requires.
//!
//! Discovery tries, in order, the dynamic-linker cache (`ldconfig -p`), the
//! host C compiler (`gcc --print-file-name`), and a recursive scan of the
//! conventional system library directories. The first validated
//! `libstdc++.so.6` wins, and its version comes from the filename its
//! symlinks resolve to (`libstdc++.so.6.0.30` gives `6.0.30`).
//!
//! ## Features
//!
//! - `Version` dotted numeric version with a `NULL` ("unknown") sentinel
//! - `Locator` context object that memoizes the discovered version
//! - `Host` trait for swapping in a simulated machine
//! - `system_version()` / `below_ci_version()` process-wide shortcuts
//!
//! ## Example
//!
//! ```rust,no_run
//! use libstdcxx_locator::{below_ci_version, system_version};
//!
//! let version = system_version();
//! if version.is_null() {
//!     println!("libstdc++ not found");
//! } else if below_ci_version() {
//!     println!("libstdc++ {} is older than CI requires", version);
//! }
//! ```

mod arch;
mod detection;
mod error;
mod host;
mod locate;
mod options;
mod strategy;
mod version;

pub use arch::Arch;
pub use error::ParseVersionError;
pub(crate) use error::ProbeError;
pub use host::{Host, SystemHost, DEFAULT_GCC_PATH};
pub use locate::{below_ci_version, system_version, Locator};
pub use options::{LocatorOptions, DEFAULT_CI_VERSION, DEFAULT_LIBRARY_DIRS};
pub use strategy::Strategy;
pub use version::Version;

/// The soname of the GNU C++ runtime.
pub const SONAME: &str = "libstdc++.so.6";
