//! Error types for version parsing and ELF inspection.
//!
//! None of these escape [`system_version`](crate::system_version): discovery
//! collapses every failure to "no result". They exist so the pieces can be
//! tested and logged precisely.

use thiserror::Error;

/// Errors produced when parsing a [`Version`](crate::Version) from text.
///
/// # Example
///
/// ```rust
/// use libstdcxx_locator::{ParseVersionError, Version};
///
/// let err = "6..30".parse::<Version>().unwrap_err();
/// assert_eq!(err, ParseVersionError::EmptyComponent);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseVersionError {
    /// The input was empty.
    #[error("version string is empty")]
    Empty,

    /// Two dots with nothing between them, or a leading/trailing dot.
    #[error("version has an empty component")]
    EmptyComponent,

    /// A component contained something other than ASCII digits.
    #[error("invalid version component: {0:?}")]
    InvalidComponent(String),

    /// A component does not fit in a `u64`.
    #[error("version component out of range: {0}")]
    Overflow(String),
}

/// Errors produced while reading an ELF identification header.
///
/// These stay inside the crate: the [`Host`](crate::Host) checks that read
/// ELF headers answer with `bool`.
#[derive(Debug, Error)]
pub(crate) enum ProbeError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is shorter than an ELF identification header.
    #[error("file too short for an ELF header")]
    Truncated,

    /// The file does not start with the ELF magic.
    #[error("not an ELF file")]
    NotElf,

    /// `EI_CLASS` is neither 32-bit nor 64-bit.
    #[error("unknown ELF class {0}")]
    UnknownClass(u8),

    /// `EI_DATA` is neither little nor big endian.
    #[error("unknown ELF data encoding {0}")]
    UnknownEncoding(u8),
}
