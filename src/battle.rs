//! Battle Resolver
//!
//! Pairwise combat between two stored characters.
//!
//! ## Rules
//! 1. Each side rolls a d21 (0..=20)
//! 2. Equal power levels always draw
//! 3. Otherwise the stronger side wins, unless the weaker side rolled a
//!    critical (19 or 20). The stronger side's roll is never checked for a
//!    critical.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{MultiverseError, Result};
use crate::random::RandomSource;
use crate::store::CharacterStore;

/// Lowest die face
pub const DIE_MIN: i64 = 0;

/// Highest die face
pub const DIE_MAX: i64 = 20;

/// Rolls at or above this are critical hits
pub const CRITICAL_THRESHOLD: i64 = 19;

const DRAW_NARRATIVE: &str = "A perfect draw! Both fought with equal strength.";

/// One side of a battle as reported back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub name: String,
    pub power_level: i64,
    pub roll: i64,
}

/// How the battle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    /// The stronger side won
    Victory,

    /// The weaker side won on a critical roll
    CriticalHit,

    /// Equal power levels
    Draw,
}

/// Result of a resolved battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleResult {
    pub character1: Combatant,
    pub character2: Combatant,

    /// Winner's name, `None` on a draw
    pub winner: Option<String>,

    pub outcome: Outcome,

    /// "<name> is the winner" or "Draw"
    pub result: String,

    pub narrative: String,
}

/// Resolves battles using an injected random source for the dice
#[derive(Clone)]
pub struct BattleResolver {
    random: Arc<dyn RandomSource>,
}

impl BattleResolver {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Look up both fighters in `store` and fight
    ///
    /// Fails with `CharacterNotFound` if either id is missing (the first
    /// missing id is reported).
    pub fn resolve(&self, store: &CharacterStore, id1: &str, id2: &str) -> Result<BattleResult> {
        let p1 = store
            .find(id1)
            .ok_or_else(|| MultiverseError::CharacterNotFound(id1.to_string()))?;
        let p2 = store
            .find(id2)
            .ok_or_else(|| MultiverseError::CharacterNotFound(id2.to_string()))?;

        let roll1 = self.roll();
        let roll2 = self.roll();

        let result = judge(p1, roll1, p2, roll2);

        tracing::debug!(
            fighter1 = %p1.name,
            roll1,
            fighter2 = %p2.name,
            roll2,
            outcome = ?result.outcome,
            "Battle resolved"
        );

        Ok(result)
    }

    fn roll(&self) -> i64 {
        self.random.range(DIE_MIN, DIE_MAX)
    }
}

/// Decide a battle from fixed rolls
pub fn judge(p1: &Character, roll1: i64, p2: &Character, roll2: i64) -> BattleResult {
    let character1 = Combatant {
        name: p1.name.clone(),
        power_level: p1.power_level,
        roll: roll1,
    };
    let character2 = Combatant {
        name: p2.name.clone(),
        power_level: p2.power_level,
        roll: roll2,
    };

    if p1.power_level == p2.power_level {
        return BattleResult {
            character1,
            character2,
            winner: None,
            outcome: Outcome::Draw,
            result: "Draw".to_string(),
            narrative: DRAW_NARRATIVE.to_string(),
        };
    }

    let (stronger, weaker, weaker_roll) = if p1.power_level > p2.power_level {
        (p1, p2, roll2)
    } else {
        (p2, p1, roll1)
    };

    let (winner, outcome, narrative) = if weaker_roll >= CRITICAL_THRESHOLD {
        (
            weaker,
            Outcome::CriticalHit,
            format!(
                "{} landed a CRITICAL HIT with a {} and won against all odds.",
                weaker.name, weaker_roll
            ),
        )
    } else {
        (
            stronger,
            Outcome::Victory,
            format!("{} dominated the fight with sheer power.", stronger.name),
        )
    };

    BattleResult {
        character1,
        character2,
        winner: Some(winner.name.clone()),
        outcome,
        result: format!("{} is the winner", winner.name),
        narrative,
    }
}
