//! Binary snapshot backend
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │ Header (18 bytes)                                                │
//! │   Magic: "MVRS" (4) | Version: u16 (2) | Count: u64 (8)          │
//! │   PayloadLen: u32 (4)                                            │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes)                                       │
//! │   bincode-encoded Vec<Character>                                 │
//! ├──────────────────────────────────────────────────────────────────┤
//! │ Footer (4 bytes)                                                 │
//! │   PayloadCRC: u32                                                │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//! All integers are little-endian.

use std::fs;
use std::path::{Path, PathBuf};

use crate::character::Character;
use crate::error::{MultiverseError, Result};

use super::{write_atomic, Storage};

/// Magic bytes identifying a Multiverse snapshot file
pub(crate) const MAGIC: &[u8; 4] = b"MVRS";

/// Current snapshot format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Count (8) + PayloadLen (4)
pub(crate) const HEADER_SIZE: usize = 18;

/// Footer size: PayloadCRC (4)
pub(crate) const FOOTER_SIZE: usize = 4;

/// Stores the collection as a checksummed binary snapshot
#[derive(Debug, Clone)]
pub struct SnapshotStorage {
    path: PathBuf,
}

impl SnapshotStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encode a collection into snapshot bytes
    pub fn encode(characters: &[Character]) -> Result<Vec<u8>> {
        let payload = bincode::serialize(characters)?;
        let payload_len = u32::try_from(payload.len()).map_err(|_| {
            MultiverseError::Storage(format!("Snapshot payload too large: {} bytes", payload.len()))
        })?;

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&payload);
        let crc = hasher.finalize();

        let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len() + FOOTER_SIZE);
        bytes.extend_from_slice(MAGIC);
        bytes.extend_from_slice(&VERSION.to_le_bytes());
        bytes.extend_from_slice(&(characters.len() as u64).to_le_bytes());
        bytes.extend_from_slice(&payload_len.to_le_bytes());
        bytes.extend_from_slice(&payload);
        bytes.extend_from_slice(&crc.to_le_bytes());

        Ok(bytes)
    }

    /// Decode and verify snapshot bytes
    pub fn decode(bytes: &[u8]) -> Result<Vec<Character>> {
        if bytes.len() < HEADER_SIZE + FOOTER_SIZE {
            return Err(MultiverseError::SnapshotCorruption(format!(
                "File too short: {} bytes",
                bytes.len()
            )));
        }

        if &bytes[0..4] != MAGIC {
            return Err(MultiverseError::SnapshotCorruption(format!(
                "Invalid magic: expected MVRS, got {:?}",
                &bytes[0..4]
            )));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(MultiverseError::SnapshotCorruption(format!(
                "Unsupported snapshot version: {}",
                version
            )));
        }

        let count = u64::from_le_bytes(le_array(&bytes[6..14]));
        let payload_len = u32::from_le_bytes(le_array(&bytes[14..18])) as usize;

        let expected_len = HEADER_SIZE + payload_len + FOOTER_SIZE;
        if bytes.len() != expected_len {
            return Err(MultiverseError::SnapshotCorruption(format!(
                "Length mismatch: header says {} bytes, file has {}",
                expected_len,
                bytes.len()
            )));
        }

        let payload = &bytes[HEADER_SIZE..HEADER_SIZE + payload_len];
        let stored_crc = u32::from_le_bytes(le_array(&bytes[HEADER_SIZE + payload_len..]));

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(payload);
        let actual_crc = hasher.finalize();

        if stored_crc != actual_crc {
            return Err(MultiverseError::SnapshotCorruption(format!(
                "CRC mismatch: stored {:#010x}, computed {:#010x}",
                stored_crc, actual_crc
            )));
        }

        let characters: Vec<Character> = bincode::deserialize(payload)?;
        if characters.len() as u64 != count {
            return Err(MultiverseError::SnapshotCorruption(format!(
                "Record count mismatch: header says {}, payload has {}",
                count,
                characters.len()
            )));
        }

        Ok(characters)
    }
}

impl Storage for SnapshotStorage {
    fn load(&self) -> Result<Vec<Character>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No snapshot file, starting empty");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path)?;
        Self::decode(&bytes)
    }

    fn save(&self, characters: &[Character]) -> Result<()> {
        let bytes = Self::encode(characters)?;
        write_atomic(&self.path, &bytes)
    }

    fn describe(&self) -> String {
        format!("snapshot:{}", self.path.display())
    }
}

/// Copy a little-endian field out of a length-checked slice
fn le_array<const N: usize>(slice: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    buf.copy_from_slice(&slice[..N]);
    buf
}
