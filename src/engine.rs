//! Engine Module
//!
//! The coordinator every transport talks to.
//!
//! ## Responsibilities
//! - Open storage and load the collection on startup
//! - Route commands to the store, statistics and battle components
//! - Serialize mutations against each other

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::battle::{BattleResolver, BattleResult};
use crate::character::{Character, CharacterPatch};
use crate::config::Config;
use crate::error::Result;
use crate::generator::{FakeData, NameBank};
use crate::protocol::{Command, Reply};
use crate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::stats::{compute_statistics, Stats};
use crate::storage::{open_storage, Storage};
use crate::store::{CharacterQuery, CharacterStore};

/// The service engine
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Mutations** (create/generate/update/delete): take the write lock
///   and hold it across the durable flush, so each mutation is applied and
///   persisted before the next one starts
/// - **Reads** (list/get/query/stats/battle): share the read lock
pub struct Engine {
    /// Engine configuration
    config: Config,

    /// The character collection
    store: RwLock<CharacterStore>,

    /// Dice and battle rules
    battle: BattleResolver,
}

impl Engine {
    /// Open or create an engine with the given config
    ///
    /// On startup:
    /// 1. Create the data directory
    /// 2. Open the configured storage backend
    /// 3. Load the collection
    pub fn open(config: Config) -> Result<Self> {
        let storage = open_storage(&config)?;

        let random: Arc<dyn RandomSource> = match config.random_seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        };

        Self::with_components(config, storage, random, Arc::new(NameBank))
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_dir(path).build();
        Self::open(config)
    }

    /// Build an engine from explicit parts
    pub fn with_components(
        config: Config,
        storage: Box<dyn Storage>,
        random: Arc<dyn RandomSource>,
        fake: Arc<dyn FakeData>,
    ) -> Result<Self> {
        let store = CharacterStore::open(storage, Arc::clone(&random), fake)?;
        let battle = BattleResolver::new(random);

        Ok(Self {
            config,
            store: RwLock::new(store),
            battle,
        })
    }

    /// Execute a command
    ///
    /// Routes commands to appropriate handlers
    pub fn execute(&self, command: Command) -> Result<Reply> {
        let kind = command.command_type();
        tracing::trace!(command = kind.name(), "Executing command");

        let reply = match command {
            Command::List => Reply::Characters(self.list()),
            Command::Random => Reply::Character(self.random()?),
            Command::Query { query } => Reply::Characters(self.query(&query)),
            Command::Get { id } => Reply::Character(self.get(&id)?),
            Command::Create { character } => Reply::Created(self.create(character)?),
            Command::Generate => Reply::Created(self.generate()?),
            Command::Update { id, patch } => Reply::Character(self.update(&id, patch)?),
            Command::Delete { id } => {
                self.delete(&id)?;
                Reply::deleted()
            }
            Command::Stats => Reply::Stats(self.statistics()?),
            Command::Battle { id1, id2 } => Reply::Battle(self.battle(&id1, &id2)?),
        };

        Ok(reply)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Every character in insertion order
    pub fn list(&self) -> Vec<Character> {
        self.store.read().list_all()
    }

    /// A random existing character
    pub fn random(&self) -> Result<Character> {
        self.store.read().get_random()
    }

    /// Characters matching `query`
    pub fn query(&self, query: &CharacterQuery) -> Vec<Character> {
        self.store.read().query(query)
    }

    /// First character with `id`
    pub fn get(&self, id: &str) -> Result<Character> {
        self.store.read().get_by_id(id)
    }

    /// Aggregate statistics over the collection
    pub fn statistics(&self) -> Result<Stats> {
        compute_statistics(self.store.read().characters())
    }

    /// Fight the characters `id1` and `id2`
    pub fn battle(&self, id1: &str, id2: &str) -> Result<BattleResult> {
        let store = self.store.read();
        self.battle.resolve(&store, id1, id2)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a client-supplied character
    pub fn create(&self, character: Character) -> Result<Character> {
        self.store.write().create(character)
    }

    /// Append a generated character
    pub fn generate(&self) -> Result<Character> {
        self.store.write().create_generated()
    }

    /// Shallow-merge `patch` into the character `id`
    pub fn update(&self, id: &str, patch: CharacterPatch) -> Result<Character> {
        self.store.write().update(id, patch)
    }

    /// Remove the character `id`
    pub fn delete(&self, id: &str) -> Result<()> {
        self.store.write().delete(id)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of stored characters
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    /// True when the collection is empty
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
