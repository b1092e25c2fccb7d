//! Record generator
//!
//! Builds a complete, randomized [`Character`] from the category tables.

use std::sync::Arc;

use crate::character::catalog::{
    ABILITIES, ABILITY_COUNT_RANGE, EPIC_PHRASES, ID_RANGE, PLANETS, POWER_LEVEL_RANGE, SPECIES,
    UNIVERSES,
};
use crate::character::Character;
use crate::random::RandomSource;

use super::FakeData;

/// Generates random characters
///
/// Generated ids are not checked against any collection; duplicates are
/// possible and tolerated by the store.
#[derive(Clone)]
pub struct RecordGenerator {
    random: Arc<dyn RandomSource>,
    fake: Arc<dyn FakeData>,
}

impl RecordGenerator {
    pub fn new(random: Arc<dyn RandomSource>, fake: Arc<dyn FakeData>) -> Self {
        Self { random, fake }
    }

    /// Produce a new character. Never fails.
    pub fn generate(&self) -> Character {
        let rng = self.random.as_ref();

        Character {
            id: rng.range(ID_RANGE.0, ID_RANGE.1).to_string(),
            name: self.fake.first_name(rng),
            universe: pick(rng, UNIVERSES),
            species: pick(rng, SPECIES),
            origin_planet: pick(rng, PLANETS),
            power_level: rng.range(POWER_LEVEL_RANGE.0, POWER_LEVEL_RANGE.1),
            abilities: self.abilities(),
            allies: vec![self.fake.first_name(rng), self.fake.first_name(rng)],
            enemies: vec![self.fake.last_name(rng)],
            epic_phrase: pick(rng, EPIC_PHRASES),
            avatar_url: self.fake.avatar_url(rng),
        }
    }

    /// 2..=6 distinct abilities, drawn without replacement
    fn abilities(&self) -> Vec<String> {
        let rng = self.random.as_ref();
        let count = rng.range(ABILITY_COUNT_RANGE.0 as i64, ABILITY_COUNT_RANGE.1 as i64) as usize;

        // Partial Fisher-Yates: the first `count` slots end up a uniform sample
        let mut pool: Vec<&str> = ABILITIES.to_vec();
        for i in 0..count {
            let j = rng.range(i as i64, (pool.len() - 1) as i64) as usize;
            pool.swap(i, j);
        }

        pool.into_iter().take(count).map(str::to_string).collect()
    }
}

fn pick(rng: &dyn RandomSource, table: &[&str]) -> String {
    table[rng.index(table.len())].to_string()
}
