//! Reply definitions
//!
//! What a successfully executed command returns. Serializes to the bare
//! payload (no envelope).

use serde::Serialize;

use crate::battle::BattleResult;
use crate::character::Character;
use crate::stats::Stats;

/// Confirmation text returned by a successful delete
pub const DELETED_MESSAGE: &str = "Character deleted successfully";

/// Successful command result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// A list of characters (list, query)
    Characters(Vec<Character>),

    /// A single existing character (random, get, update)
    Character(Character),

    /// A newly stored character (create, generate)
    Created(Character),

    /// Delete confirmation
    Deleted { message: String },

    /// Statistics
    Stats(Stats),

    /// Battle outcome
    Battle(BattleResult),
}

impl Reply {
    /// Delete confirmation with the standard message
    pub fn deleted() -> Self {
        Reply::Deleted {
            message: DELETED_MESSAGE.to_string(),
        }
    }

    /// True when the reply reports a newly created record
    pub fn is_created(&self) -> bool {
        matches!(self, Reply::Created(_))
    }
}
