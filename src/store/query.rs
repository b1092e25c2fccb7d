//! Query filters
//!
//! [`QueryParams`] is the raw, text-valued form a transport receives;
//! [`CharacterQuery`] is the validated filter the store applies.

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{MultiverseError, Result};

/// Raw search parameters as received from a client
///
/// Empty strings count as absent. The Spanish parameter names of the older
/// API are accepted as aliases. A name and its alias in the same request
/// (`originPlanet` and `planeta`) is a duplicate field and fails to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    #[serde(alias = "universo")]
    pub universe: Option<String>,

    #[serde(alias = "especie")]
    pub species: Option<String>,

    #[serde(alias = "planet", alias = "planeta", alias = "planetaOrigen")]
    pub origin_planet: Option<String>,

    #[serde(alias = "nivelPoderMin")]
    pub power_level_min: Option<String>,

    #[serde(alias = "nivelPoderMax")]
    pub power_level_max: Option<String>,
}

/// Validated conjunctive filter over the collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterQuery {
    pub universe: Option<String>,
    pub species: Option<String>,
    pub origin_planet: Option<String>,
    pub power_level_min: Option<i64>,
    pub power_level_max: Option<i64>,
}

impl CharacterQuery {
    /// A query that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn universe(mut self, universe: impl Into<String>) -> Self {
        self.universe = Some(universe.into());
        self
    }

    pub fn species(mut self, species: impl Into<String>) -> Self {
        self.species = Some(species.into());
        self
    }

    pub fn origin_planet(mut self, planet: impl Into<String>) -> Self {
        self.origin_planet = Some(planet.into());
        self
    }

    pub fn power_level_min(mut self, min: i64) -> Self {
        self.power_level_min = Some(min);
        self
    }

    pub fn power_level_max(mut self, max: i64) -> Self {
        self.power_level_max = Some(max);
        self
    }

    /// Validate raw parameters
    ///
    /// Power-level bounds must parse as integers; anything else is rejected
    /// with `InvalidFilter` rather than silently ignored.
    pub fn from_params(params: &QueryParams) -> Result<Self> {
        Ok(Self {
            universe: non_empty(&params.universe),
            species: non_empty(&params.species),
            origin_planet: non_empty(&params.origin_planet),
            power_level_min: parse_bound("powerLevelMin", &params.power_level_min)?,
            power_level_max: parse_bound("powerLevelMax", &params.power_level_max)?,
        })
    }

    /// Apply each present filter in turn: universe, species, origin planet,
    /// lower bound, upper bound
    pub fn matches(&self, character: &Character) -> bool {
        self.universe
            .as_deref()
            .map_or(true, |u| character.universe == u)
            && self
                .species
                .as_deref()
                .map_or(true, |s| character.species == s)
            && self
                .origin_planet
                .as_deref()
                .map_or(true, |p| character.origin_planet == p)
            && self
                .power_level_min
                .map_or(true, |min| character.power_level >= min)
            && self
                .power_level_max
                .map_or(true, |max| character.power_level <= max)
    }

    /// True when no filter is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl TryFrom<&QueryParams> for CharacterQuery {
    type Error = MultiverseError;

    fn try_from(params: &QueryParams) -> Result<Self> {
        Self::from_params(params)
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn parse_bound(name: &str, raw: &Option<String>) -> Result<Option<i64>> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse::<i64>().map(Some).map_err(|_| {
            MultiverseError::InvalidFilter(format!("{} must be an integer, got '{}'", name, text))
        }),
    }
}
