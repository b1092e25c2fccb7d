//! Command definitions
//!
//! Represents the logical operations a transport can request.

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterPatch};
use crate::store::CharacterQuery;

/// Command types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    List,
    Random,
    Query,
    Get,
    Create,
    Generate,
    Update,
    Delete,
    Stats,
    Battle,
}

impl CommandType {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            CommandType::List => "list",
            CommandType::Random => "random",
            CommandType::Query => "query",
            CommandType::Get => "get",
            CommandType::Create => "create",
            CommandType::Generate => "generate",
            CommandType::Update => "update",
            CommandType::Delete => "delete",
            CommandType::Stats => "stats",
            CommandType::Battle => "battle",
        }
    }
}

/// A decoded command
#[derive(Debug, Clone)]
pub enum Command {
    /// Every character, in insertion order
    List,

    /// One random character
    Random,

    /// Characters matching a filter
    Query { query: CharacterQuery },

    /// First character with this id
    Get { id: String },

    /// Append a client-supplied character
    Create { character: Character },

    /// Append a generated character
    Generate,

    /// Shallow-merge a patch into a character
    Update { id: String, patch: CharacterPatch },

    /// Remove a character
    Delete { id: String },

    /// Aggregate statistics
    Stats,

    /// Fight two characters
    Battle { id1: String, id2: String },
}

impl Command {
    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::List => CommandType::List,
            Command::Random => CommandType::Random,
            Command::Query { .. } => CommandType::Query,
            Command::Get { .. } => CommandType::Get,
            Command::Create { .. } => CommandType::Create,
            Command::Generate => CommandType::Generate,
            Command::Update { .. } => CommandType::Update,
            Command::Delete { .. } => CommandType::Delete,
            Command::Stats => CommandType::Stats,
            Command::Battle { .. } => CommandType::Battle,
        }
    }
}

/// Body of a battle request
///
/// A missing id reads as empty and fails the lookup like any unknown id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleRequest {
    pub id1: String,
    pub id2: String,
}

impl From<BattleRequest> for Command {
    fn from(req: BattleRequest) -> Self {
        Command::Battle {
            id1: req.id1,
            id2: req.id2,
        }
    }
}
