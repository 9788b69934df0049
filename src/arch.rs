//! CPU architectures the locator can match ELF files against.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A host CPU architecture.
///
/// Each variant knows the ELF `e_machine` number and word size a native
/// shared library for it carries, which is what the filesystem scan uses
/// to skip libraries built for another architecture (for example an
/// `i386` libstdc++ sitting under `/usr/lib` on an `x86_64` host).
///
/// # Example
///
/// ```rust
/// use libstdcxx_locator::Arch;
///
/// for arch in Arch::all() {
///     println!("{}: e_machine={}", arch, arch.elf_machine());
/// }
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
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[non_exhaustive]
pub enum Arch {
    /// 64-bit x86.
    X86_64,
    /// 32-bit x86.
    I386,
    /// 64-bit ARM.
    Aarch64,
    /// 32-bit ARM.
    Arm,
    /// 64-bit POWER, either endianness.
    Powerpc64,
    /// 64-bit RISC-V.
    Riscv64,
    /// IBM Z.
    S390x,
}

const EM_386: u16 = 3;
const EM_S390: u16 = 22;
const EM_PPC64: u16 = 21;
const EM_ARM: u16 = 40;
const EM_X86_64: u16 = 62;
const EM_AARCH64: u16 = 183;
const EM_RISCV: u16 = 243;

impl Arch {
    /// The architecture this crate was compiled for, if supported.
    ///
    /// # Example
    ///
    /// ```rust
    /// use libstdcxx_locator::Arch;
    ///
    /// if cfg!(target_arch = "x86_64") {
    ///     assert_eq!(Arch::current(), Some(Arch::X86_64));
    /// }
    /// ```
    pub fn current() -> Option<Self> {
        Self::from_target_arch(std::env::consts::ARCH)
    }

    /// Map a Rust `target_arch` name to an [`Arch`].
    pub fn from_target_arch(name: &str) -> Option<Self> {
        match name {
            "x86_64" => Some(Self::X86_64),
            "x86" => Some(Self::I386),
            "aarch64" => Some(Self::Aarch64),
            "arm" => Some(Self::Arm),
            "powerpc64" => Some(Self::Powerpc64),
            "riscv64" => Some(Self::Riscv64),
            "s390x" => Some(Self::S390x),
            _ => None,
        }
    }

    /// ELF `e_machine` value for native binaries.
    pub fn elf_machine(&self) -> u16 {
        match self {
            Self::X86_64 => EM_X86_64,
            Self::I386 => EM_386,
            Self::Aarch64 => EM_AARCH64,
            Self::Arm => EM_ARM,
            Self::Powerpc64 => EM_PPC64,
            Self::Riscv64 => EM_RISCV,
            Self::S390x => EM_S390,
        }
    }

    /// Whether native binaries use the 64-bit ELF class.
    pub fn is_64_bit(&self) -> bool {
        !matches!(self, Self::I386 | Self::Arm)
    }

    /// Iterator over all supported architectures.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
