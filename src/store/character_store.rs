//! Character Store
//!
//! Owns the ordered character collection.

use std::sync::Arc;

use crate::character::{Character, CharacterPatch};
use crate::error::{MultiverseError, Result};
use crate::generator::{FakeData, RecordGenerator};
use crate::random::RandomSource;
use crate::storage::Storage;

use super::CharacterQuery;

/// The ordered collection plus its durable copy
///
/// ## Semantics
/// - Insertion order is listing order
/// - Ids are not checked for uniqueness; lookups, updates and deletes act
///   on the first match
/// - Every mutation rewrites the full collection through [`Storage`] before
///   returning. If that write fails the in-memory change is undone, so
///   memory never runs ahead of disk.
pub struct CharacterStore {
    /// The collection, in insertion order
    characters: Vec<Character>,

    /// Durable copy (replaced wholesale on every mutation)
    storage: Box<dyn Storage>,

    /// Used for random picks
    random: Arc<dyn RandomSource>,

    /// Builds records for `create_generated`
    generator: RecordGenerator,
}

impl CharacterStore {
    /// Open a store, loading the collection from `storage`
    pub fn open(
        storage: Box<dyn Storage>,
        random: Arc<dyn RandomSource>,
        fake: Arc<dyn FakeData>,
    ) -> Result<Self> {
        let characters = storage.load()?;

        tracing::info!(
            storage = %storage.describe(),
            count = characters.len(),
            "Loaded character collection"
        );

        let generator = RecordGenerator::new(Arc::clone(&random), fake);

        Ok(Self {
            characters,
            storage,
            random,
            generator,
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The full collection in insertion order
    pub fn list_all(&self) -> Vec<Character> {
        self.characters.clone()
    }

    /// Borrow the collection without copying
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// A uniformly random element (not removed)
    pub fn get_random(&self) -> Result<Character> {
        if self.characters.is_empty() {
            return Err(MultiverseError::EmptyCollection);
        }

        let idx = self.random.index(self.characters.len());
        Ok(self.characters[idx].clone())
    }

    /// The first character whose id equals `id`
    pub fn get_by_id(&self, id: &str) -> Result<Character> {
        self.find(id)
            .cloned()
            .ok_or_else(|| MultiverseError::CharacterNotFound(id.to_string()))
    }

    /// Borrowing lookup; `None` when no id matches
    pub fn find(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Every character matching all filters of `query`, in insertion order
    pub fn query(&self, query: &CharacterQuery) -> Vec<Character> {
        self.characters
            .iter()
            .filter(|c| query.matches(c))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append `character` verbatim and persist
    pub fn create(&mut self, character: Character) -> Result<Character> {
        self.characters.push(character);

        if let Err(e) = self.persist() {
            self.characters.pop();
            return Err(e);
        }

        let created = self.characters[self.characters.len() - 1].clone();
        tracing::debug!(id = %created.id, name = %created.name, "Created character");
        Ok(created)
    }

    /// Generate a random character, append it and persist
    pub fn create_generated(&mut self) -> Result<Character> {
        let character = self.generator.generate();
        self.create(character)
    }

    /// Shallow-merge `patch` into the first character matching `id`
    pub fn update(&mut self, id: &str, patch: CharacterPatch) -> Result<Character> {
        let idx = self
            .position(id)
            .ok_or_else(|| MultiverseError::CharacterNotFound(id.to_string()))?;

        let previous = self.characters[idx].clone();
        self.characters[idx].apply(patch);

        if let Err(e) = self.persist() {
            self.characters[idx] = previous;
            return Err(e);
        }

        tracing::debug!(id = %id, new_id = %self.characters[idx].id, "Updated character");
        Ok(self.characters[idx].clone())
    }

    /// Remove the first character matching `id`
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.characters.len();
        let removed = self.position(id).map(|idx| (idx, self.characters.remove(idx)));

        if self.characters.len() == before {
            return Err(MultiverseError::CharacterNotFound(id.to_string()));
        }

        if let Err(e) = self.persist() {
            if let Some((idx, character)) = removed {
                self.characters.insert(idx, character);
            }
            return Err(e);
        }

        tracing::debug!(id = %id, "Deleted character");
        Ok(())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn position(&self, id: &str) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    fn persist(&self) -> Result<()> {
        self.storage.save(&self.characters).map_err(|e| {
            tracing::warn!(
                storage = %self.storage.describe(),
                error = %e,
                "Failed to persist collection, rolling back"
            );
            e
        })
    }
}
