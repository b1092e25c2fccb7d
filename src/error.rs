//! Error types for Multiverse
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MultiverseError
pub type Result<T> = std::result::Result<T, MultiverseError>;

/// Unified error type for Multiverse operations
#[derive(Debug, Error)]
pub enum MultiverseError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Character not found: {0}")]
    CharacterNotFound(String),

    #[error("No characters available")]
    EmptyCollection,

    #[error("No characters to analyze")]
    NoData,

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Snapshot corruption detected: {0}")]
    SnapshotCorruption(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MultiverseError {
    /// True for lookups that found nothing (a missing id or an empty collection)
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MultiverseError::CharacterNotFound(_) | MultiverseError::EmptyCollection
        )
    }
}

impl From<serde_json::Error> for MultiverseError {
    fn from(e: serde_json::Error) -> Self {
        MultiverseError::Serialization(e.to_string())
    }
}

impl From<bincode::Error> for MultiverseError {
    fn from(e: bincode::Error) -> Self {
        MultiverseError::Serialization(e.to_string())
    }
}
