//! JSON file backend
//!
//! Document layout:
//! ```text
//! {
//!   "characters": [ { "id": "...", "name": "...", ... }, ... ]
//! }
//! ```
//! Files written by the older service (`{"personajes": [...]}` with Spanish
//! field names) load unchanged; the next save rewrites them in this layout.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::Result;

use super::{write_atomic, Storage};

#[derive(Serialize)]
struct DatasetRef<'a> {
    characters: &'a [Character],
}

#[derive(Deserialize)]
struct Dataset {
    #[serde(default, alias = "personajes")]
    characters: Vec<Character>,
}

/// Stores the collection as a pretty-printed JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Character>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No data file, starting empty");
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let dataset: Dataset = serde_json::from_str(&text)?;
        Ok(dataset.characters)
    }

    fn save(&self, characters: &[Character]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&DatasetRef { characters })?;
        write_atomic(&self.path, &bytes)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}
