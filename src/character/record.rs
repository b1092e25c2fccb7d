//! Character record and partial update payload

use serde::{Deserialize, Serialize};

/// A character record
///
/// Field names serialize in camelCase. The Spanish names used by older data
/// files are accepted as aliases when reading; a document carrying both a
/// name and its alias is rejected as a duplicate field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    /// Identifier, unique by convention only
    pub id: String,

    #[serde(alias = "nombre")]
    pub name: String,

    #[serde(alias = "universo")]
    pub universe: String,

    #[serde(alias = "especie")]
    pub species: String,

    #[serde(alias = "planetaOrigen")]
    pub origin_planet: String,

    #[serde(alias = "nivelPoder")]
    pub power_level: i64,

    #[serde(alias = "habilidades")]
    pub abilities: Vec<String>,

    #[serde(alias = "aliados")]
    pub allies: Vec<String>,

    #[serde(alias = "enemigos")]
    pub enemies: Vec<String>,

    #[serde(alias = "fraseEpica")]
    pub epic_phrase: String,

    #[serde(alias = "imagen")]
    pub avatar_url: String,
}

/// Partial character used by updates
///
/// Every field present overwrites the stored value; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterPatch {
    pub id: Option<String>,

    #[serde(alias = "nombre")]
    pub name: Option<String>,

    #[serde(alias = "universo")]
    pub universe: Option<String>,

    #[serde(alias = "especie")]
    pub species: Option<String>,

    #[serde(alias = "planetaOrigen")]
    pub origin_planet: Option<String>,

    #[serde(alias = "nivelPoder")]
    pub power_level: Option<i64>,

    #[serde(alias = "habilidades")]
    pub abilities: Option<Vec<String>>,

    #[serde(alias = "aliados")]
    pub allies: Option<Vec<String>>,

    #[serde(alias = "enemigos")]
    pub enemies: Option<Vec<String>>,

    #[serde(alias = "fraseEpica")]
    pub epic_phrase: Option<String>,

    #[serde(alias = "imagen")]
    pub avatar_url: Option<String>,
}

impl Character {
    /// Shallow merge: overwrite each field the patch carries
    pub fn apply(&mut self, patch: CharacterPatch) {
        let CharacterPatch {
            id,
            name,
            universe,
            species,
            origin_planet,
            power_level,
            abilities,
            allies,
            enemies,
            epic_phrase,
            avatar_url,
        } = patch;

        if let Some(v) = id {
            self.id = v;
        }
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = universe {
            self.universe = v;
        }
        if let Some(v) = species {
            self.species = v;
        }
        if let Some(v) = origin_planet {
            self.origin_planet = v;
        }
        if let Some(v) = power_level {
            self.power_level = v;
        }
        if let Some(v) = abilities {
            self.abilities = v;
        }
        if let Some(v) = allies {
            self.allies = v;
        }
        if let Some(v) = enemies {
            self.enemies = v;
        }
        if let Some(v) = epic_phrase {
            self.epic_phrase = v;
        }
        if let Some(v) = avatar_url {
            self.avatar_url = v;
        }
    }
}

impl CharacterPatch {
    /// True when the patch would change nothing
    pub fn is_empty(&self) -> bool {
        *self == CharacterPatch::default()
    }
}
