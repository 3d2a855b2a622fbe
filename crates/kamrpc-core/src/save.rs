//! Save-file field decoding.
//!
//! The crystal counter lives at a fixed byte range inside the game's save
//! file. The file may be missing, truncated, or locked mid-write by the
//! game; all of those read as "no value", never as an error.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use serde::Deserialize;
use strum::Display;

/// Byte order of the stored counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    #[strum(serialize = "little")]
    Little,
    #[strum(serialize = "big")]
    Big,
}

/// Where and how to decode one unsigned field inside the save file.
///
/// `length` is capped at 8 bytes by config validation so the decoded value
/// always fits a `u64`. `divisor` is nonzero, also enforced at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub offset: u64,
    pub length: usize,
    pub endian: Endianness,
    pub divisor: u64,
}

/// Read and decode the configured field from `path`.
///
/// Returns `None` when the file cannot be opened or holds fewer than
/// `length` bytes past the offset. The handle is scoped to this call.
pub fn read_field(path: &Path, spec: &FieldSpec) -> Option<u64> {
    let mut file = File::open(path).ok()?;
    file.seek(SeekFrom::Start(spec.offset)).ok()?;

    let mut raw = vec![0u8; spec.length];
    file.read_exact(&mut raw).ok()?;

    Some(decode_unsigned(&raw, spec.endian) / spec.divisor)
}

/// Decode a byte window as an unsigned integer of the given byte order.
pub fn decode_unsigned(bytes: &[u8], endian: Endianness) -> u64 {
    let fold = |acc: u64, b: &u8| (acc << 8) | u64::from(*b);
    match endian {
        Endianness::Little => bytes.iter().rev().fold(0, fold),
        Endianness::Big => bytes.iter().fold(0, fold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn spec(offset: u64, length: usize, endian: Endianness, divisor: u64) -> FieldSpec {
        FieldSpec {
            offset,
            length,
            endian,
            divisor,
        }
    }

    fn save_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn decodes_little_endian() {
        assert_eq!(decode_unsigned(&[0x34, 0x12], Endianness::Little), 0x1234);
        assert_eq!(
            decode_unsigned(&[0x78, 0x56, 0x34, 0x12], Endianness::Little),
            0x12345678
        );
    }

    #[test]
    fn decodes_big_endian() {
        assert_eq!(decode_unsigned(&[0x12, 0x34], Endianness::Big), 0x1234);
        assert_eq!(
            decode_unsigned(&[0x12, 0x34, 0x56, 0x78], Endianness::Big),
            0x12345678
        );
    }

    #[test]
    fn decodes_single_byte_same_either_way() {
        assert_eq!(decode_unsigned(&[0xAB], Endianness::Little), 0xAB);
        assert_eq!(decode_unsigned(&[0xAB], Endianness::Big), 0xAB);
    }

    #[test]
    fn decodes_full_width() {
        let bytes = [0xFF; 8];
        assert_eq!(decode_unsigned(&bytes, Endianness::Little), u64::MAX);
        assert_eq!(decode_unsigned(&bytes, Endianness::Big), u64::MAX);
    }

    #[test]
    fn decode_is_idempotent() {
        let bytes = [0x01, 0x02, 0x03];
        let first = decode_unsigned(&bytes, Endianness::Big);
        assert_eq!(decode_unsigned(&bytes, Endianness::Big), first);
    }

    #[test]
    fn reads_field_at_offset() {
        let file = save_file(&[0x00, 0x00, 0x2A, 0x01, 0xFF]);
        let value = read_field(file.path(), &spec(2, 2, Endianness::Little, 1));
        assert_eq!(value, Some(0x012A));
    }

    #[test]
    fn applies_divisor() {
        let file = save_file(&[100, 0, 0, 0]);
        let value = read_field(file.path(), &spec(0, 4, Endianness::Little, 10));
        assert_eq!(value, Some(10));

        // Truncating division.
        let value = read_field(file.path(), &spec(0, 4, Endianness::Little, 3));
        assert_eq!(value, Some(33));
    }

    #[test]
    fn short_file_reads_as_none() {
        let file = save_file(&[0x01, 0x02]);
        assert_eq!(read_field(file.path(), &spec(0, 4, Endianness::Little, 1)), None);
        assert_eq!(read_field(file.path(), &spec(1, 2, Endianness::Little, 1)), None);
    }

    #[test]
    fn offset_past_end_reads_as_none() {
        let file = save_file(&[0x01, 0x02]);
        assert_eq!(read_field(file.path(), &spec(100, 1, Endianness::Big, 1)), None);
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-save.sav");
        assert_eq!(read_field(&path, &spec(0, 4, Endianness::Little, 1)), None);
    }
}
