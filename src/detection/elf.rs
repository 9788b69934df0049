//! Minimal ELF identification-header reader.
//!
//! Only the first 20 bytes are read: enough for the magic, class, data
//! encoding, `e_type` and `e_machine`.

use crate::{Arch, ProbeError};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];
const HEADER_LEN: usize = 20;

const ELFCLASS32: u8 = 1;
const ELFCLASS64: u8 = 2;
const ELFDATA2LSB: u8 = 1;
const ELFDATA2MSB: u8 = 2;

const ET_DYN: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ElfHeader {
    pub(crate) is_64_bit: bool,
    pub(crate) e_type: u16,
    pub(crate) e_machine: u16,
}

impl ElfHeader {
    pub(crate) fn parse(bytes: &[u8]) -> Result<Self, ProbeError> {
        if bytes.len() < HEADER_LEN {
            return Err(ProbeError::Truncated);
        }
        if bytes[..4] != ELF_MAGIC {
            return Err(ProbeError::NotElf);
        }

        let is_64_bit = match bytes[4] {
            ELFCLASS32 => false,
            ELFCLASS64 => true,
            other => return Err(ProbeError::UnknownClass(other)),
        };

        let read_u16: fn([u8; 2]) -> u16 = match bytes[5] {
            ELFDATA2LSB => u16::from_le_bytes,
            ELFDATA2MSB => u16::from_be_bytes,
            other => return Err(ProbeError::UnknownEncoding(other)),
        };

        Ok(Self {
            is_64_bit,
            e_type: read_u16([bytes[16], bytes[17]]),
            e_machine: read_u16([bytes[18], bytes[19]]),
        })
    }

    pub(crate) fn read(path: &Path) -> Result<Self, ProbeError> {
        let mut buf = [0u8; HEADER_LEN];
        let mut file = File::open(path)?;
        file.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                ProbeError::Truncated
            } else {
                ProbeError::Io(e)
            }
        })?;
        Self::parse(&buf)
    }

    pub(crate) fn is_dylib(&self) -> bool {
        self.e_type == ET_DYN
    }

    pub(crate) fn matches_arch(&self, arch: Arch) -> bool {
        self.e_machine == arch.elf_machine() && self.is_64_bit == arch.is_64_bit()
    }
}

/// Build a header with the given fields, as found at the start of a file.
#[cfg(test)]
pub(crate) fn header_bytes(is_64_bit: bool, big_endian: bool, e_type: u16, e_machine: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; 64];
    bytes[..4].copy_from_slice(&ELF_MAGIC);
    bytes[4] = if is_64_bit { ELFCLASS64 } else { ELFCLASS32 };
    bytes[5] = if big_endian { ELFDATA2MSB } else { ELFDATA2LSB };
    bytes[6] = 1;
    let (t, m) = if big_endian {
        (e_type.to_be_bytes(), e_machine.to_be_bytes())
    } else {
        (e_type.to_le_bytes(), e_machine.to_le_bytes())
    };
    bytes[16..18].copy_from_slice(&t);
    bytes[18..20].copy_from_slice(&m);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_x86_64_shared_object() {
        let header = ElfHeader::parse(&header_bytes(true, false, ET_DYN, 62)).unwrap();
        assert!(header.is_64_bit);
        assert!(header.is_dylib());
        assert!(header.matches_arch(Arch::X86_64));
        assert!(!header.matches_arch(Arch::Aarch64));
    }

    #[test]
    fn test_parse_big_endian() {
        let header = ElfHeader::parse(&header_bytes(true, true, ET_DYN, 22)).unwrap();
        assert_eq!(header.e_machine, 22);
        assert!(header.matches_arch(Arch::S390x));
    }

    #[test]
    fn test_executable_is_not_dylib() {
        let header = ElfHeader::parse(&header_bytes(true, false, 2, 62)).unwrap();
        assert!(!header.is_dylib());
    }

    #[test]
    fn test_class_must_match_arch() {
        // i386 and x86_64 differ in machine number; a 32-bit header claiming
        // EM_X86_64 is an x32 object and is not a native x86_64 library.
        let header = ElfHeader::parse(&header_bytes(false, false, ET_DYN, 62)).unwrap();
        assert!(!header.matches_arch(Arch::X86_64));

        let header = ElfHeader::parse(&header_bytes(false, false, ET_DYN, 3)).unwrap();
        assert!(header.matches_arch(Arch::I386));
        assert!(!header.matches_arch(Arch::X86_64));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(ElfHeader::parse(b"\x7fELF"), Err(ProbeError::Truncated)));
        assert!(matches!(
            ElfHeader::parse(b"INPUT(libstdc++.so.6)\n"),
            Err(ProbeError::NotElf)
        ));

        let mut bytes = header_bytes(true, false, ET_DYN, 62);
        bytes[4] = 7;
        assert!(matches!(ElfHeader::parse(&bytes), Err(ProbeError::UnknownClass(7))));

        let mut bytes = header_bytes(true, false, ET_DYN, 62);
        bytes[5] = 0;
        assert!(matches!(
            ElfHeader::parse(&bytes),
            Err(ProbeError::UnknownEncoding(0))
        ));
    }

    #[test]
    fn test_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();

        let lib = dir.path().join("libstdc++.so.6.0.30");
        std::fs::write(&lib, header_bytes(true, false, ET_DYN, 183)).unwrap();
        let header = ElfHeader::read(&lib).unwrap();
        assert!(header.is_dylib());
        assert!(header.matches_arch(Arch::Aarch64));

        let short = dir.path().join("short");
        std::fs::write(&short, b"\x7fELF\x02").unwrap();
        assert!(matches!(ElfHeader::read(&short), Err(ProbeError::Truncated)));

        let missing = dir.path().join("missing");
        assert!(matches!(ElfHeader::read(&missing), Err(ProbeError::Io(_))));
    }
}
