//! Storage Module
//!
//! Durable home of the character collection.
//!
//! ## Responsibilities
//! - Load the whole collection once at startup
//! - Replace the whole collection after every mutation
//! - Never leave a half-written file behind (write temp file, then rename)
//!
//! The store only sees the [`Storage`] trait, so the whole-collection
//! rewrite can be swapped for another strategy without touching it.
//!
//! ## Backends
//! - [`JsonFileStorage`]: pretty JSON document, `{"characters": [...]}`
//! - [`SnapshotStorage`]: binary snapshot with CRC32 footer
//! - [`MemoryStorage`]: in-process, for tests and benchmarks

mod json;
mod memory;
mod snapshot;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::character::Character;
use crate::config::{Config, StorageFormat};
use crate::error::Result;

pub use json::JsonFileStorage;
pub use memory::MemoryStorage;
pub use snapshot::SnapshotStorage;

/// Whole-collection persistence port
pub trait Storage: Send + Sync {
    /// Read the full collection. A missing data file is an empty collection.
    fn load(&self) -> Result<Vec<Character>>;

    /// Replace the persisted collection with `characters`
    fn save(&self, characters: &[Character]) -> Result<()>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Open the backend selected by the config
pub fn open_storage(config: &Config) -> Result<Box<dyn Storage>> {
    fs::create_dir_all(&config.data_dir)?;
    let path = config.data_file();

    let storage: Box<dyn Storage> = match config.storage_format {
        StorageFormat::Json => Box::new(JsonFileStorage::new(path)),
        StorageFormat::Snapshot => Box::new(SnapshotStorage::new(path)),
    };

    Ok(storage)
}

/// Write `bytes` to `path` through a synced temporary sibling and a rename
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path);
    {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// "db.json" → "db.json.tmp"
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
