//! Configuration for Multiverse
//!
//! Centralized configuration with sensible defaults.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::MultiverseError;

/// Main configuration for a Multiverse instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory for the data file
    /// Internal structure:
    ///   {data_dir}/
    ///     ├── db.json           (StorageFormat::Json)
    ///     └── characters.snap   (StorageFormat::Snapshot)
    pub data_dir: PathBuf,

    /// On-disk format of the character collection
    pub storage_format: StorageFormat,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Allowed CORS origins. `None` allows any origin.
    pub cors_allowed_origins: Option<Vec<String>>,

    // -------------------------------------------------------------------------
    // Randomness
    // -------------------------------------------------------------------------
    /// Seed for dice and generated records. `None` uses the thread RNG.
    pub random_seed: Option<u64>,
}

/// How the collection is written to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    /// Pretty-printed JSON document (readable, hand-editable)
    Json,

    /// Binary snapshot with header and CRC32 footer
    Snapshot,
}

impl StorageFormat {
    /// File name of the data file inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            StorageFormat::Json => "db.json",
            StorageFormat::Snapshot => "characters.snap",
        }
    }
}

impl FromStr for StorageFormat {
    type Err = MultiverseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(StorageFormat::Json),
            "snapshot" | "snap" | "binary" => Ok(StorageFormat::Snapshot),
            other => Err(MultiverseError::Config(format!(
                "Unknown storage format '{}' (expected json or snapshot)",
                other
            ))),
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageFormat::Json => write!(f, "json"),
            StorageFormat::Snapshot => write!(f, "snapshot"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./multiverse_data"),
            storage_format: StorageFormat::Json,
            listen_addr: "127.0.0.1:3001".to_string(),
            cors_allowed_origins: None,
            random_seed: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the data file
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(self.storage_format.file_name())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the on-disk storage format
    pub fn storage_format(mut self, format: StorageFormat) -> Self {
        self.config.storage_format = format;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Restrict CORS to a comma-separated origin list ("*" or empty allows any)
    pub fn cors_allowed_origins(mut self, origins: &str) -> Self {
        let origins: Vec<String> = origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        self.config.cors_allowed_origins = if origins.is_empty() || origins.iter().any(|o| o == "*")
        {
            None
        } else {
            Some(origins)
        };
        self
    }

    /// Seed the random source for reproducible runs
    pub fn random_seed(mut self, seed: Option<u64>) -> Self {
        self.config.random_seed = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
