//! Reading UTF-16LE files into a code-unit buffer.

use crate::core::CodeUnit;
use crate::error::LoadError;
use std::fs::{self, File};
use std::io::Read;
use std::mem::size_of;
use std::path::Path;

const UNIT_BYTES: usize = size_of::<CodeUnit>();

/// Size of the file at `path` in bytes, or 0 if it cannot be inspected.
pub fn byte_length(path: impl AsRef<Path>) -> u64 {
    fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

/// Number of whole code units in the file at `path`. A trailing odd byte is not counted.
pub fn unit_length(path: impl AsRef<Path>) -> usize {
    usize::try_from(byte_length(path)).unwrap_or(usize::MAX) / UNIT_BYTES
}

/// Reads exactly `capacity` code units from the file at `path`.
///
/// Fails with [`LoadError::Unreadable`] if the file cannot be opened or read, and
/// with [`LoadError::ShortRead`] if it holds fewer than `capacity` units.
pub fn read_exact(path: impl AsRef<Path>, capacity: usize) -> Result<Vec<CodeUnit>, LoadError> {
    let path = path.as_ref();
    let unreadable = |source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    let wanted = capacity.saturating_mul(UNIT_BYTES);
    // Grown by the read itself: `capacity` is caller input and may exceed the file.
    let mut bytes = Vec::new();
    file.take(wanted as u64)
        .read_to_end(&mut bytes)
        .map_err(unreadable)?;

    let units = decode_units(&bytes);
    if units.len() < capacity {
        return Err(LoadError::ShortRead {
            path: path.to_path_buf(),
            expected: capacity,
            actual: units.len(),
        });
    }
    Ok(units)
}

/// Decodes little-endian bytes into native code units. A trailing odd byte is dropped.
pub fn decode_units(bytes: &[u8]) -> Vec<CodeUnit> {
    bytes
        .chunks_exact(UNIT_BYTES)
        .map(|pair| CodeUnit::from_le_bytes([pair[0], pair[1]]))
        .collect()
}

/// Encodes native code units as little-endian bytes, appending to `out`.
pub fn encode_units(units: &[CodeUnit], out: &mut Vec<u8>) {
    out.reserve(units.len() * UNIT_BYTES);
    for unit in units {
        out.extend_from_slice(&unit.to_le_bytes());
    }
}
