//! In-memory backend
//!
//! Clones share state, so a test can keep a handle after giving one to the
//! store and inspect what was saved.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::character::Character;
use crate::error::{MultiverseError, Result};

use super::Storage;

#[derive(Default)]
struct Inner {
    characters: Mutex<Vec<Character>>,
    saves: AtomicUsize,
    fail_writes: AtomicBool,
}

/// Keeps the "persisted" collection in process memory
#[derive(Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-populated collection
    pub fn with_characters(characters: Vec<Character>) -> Self {
        let storage = Self::default();
        *storage.inner.characters.lock() = characters;
        storage
    }

    /// Collection as of the last successful save
    pub fn saved(&self) -> Vec<Character> {
        self.inner.characters.lock().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail (simulates a full disk)
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Vec<Character>> {
        Ok(self.saved())
    }

    fn save(&self, characters: &[Character]) -> Result<()> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(MultiverseError::Storage(
                "Simulated write failure".to_string(),
            ));
        }

        *self.inner.characters.lock() = characters.to_vec();
        self.inner.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
