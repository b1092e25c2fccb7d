//! Statistics Engine
//!
//! Aggregate metrics over the character collection.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::error::{MultiverseError, Result};

/// Aggregate metrics over a non-empty collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of characters
    pub total: usize,

    /// Mean power level, rounded half-up
    pub average_power_level: i64,

    /// Most frequent universe (ties: first seen in insertion order)
    pub most_common_universe: String,

    /// Most frequent species (ties: first seen in insertion order)
    pub most_common_species: String,

    /// Number of distinct origin planets
    pub distinct_planet_count: usize,
}

/// Compute [`Stats`] over `characters`
///
/// Fails with `NoData` when the collection is empty.
pub fn compute_statistics(characters: &[Character]) -> Result<Stats> {
    if characters.is_empty() {
        return Err(MultiverseError::NoData);
    }

    let total = characters.len();
    let sum: i128 = characters.iter().map(|c| c.power_level as i128).sum();

    let most_common_universe =
        most_common(characters.iter().map(|c| c.universe.as_str())).unwrap_or_default();
    let most_common_species =
        most_common(characters.iter().map(|c| c.species.as_str())).unwrap_or_default();

    let distinct_planet_count = characters
        .iter()
        .map(|c| c.origin_planet.as_str())
        .collect::<HashSet<_>>()
        .len();

    Ok(Stats {
        total,
        average_power_level: round_half_up(sum, total as i128),
        most_common_universe,
        most_common_species,
        distinct_planet_count,
    })
}

/// `sum / n` rounded half toward +∞, in exact integer arithmetic
fn round_half_up(sum: i128, n: i128) -> i64 {
    (2 * sum + n).div_euclid(2 * n) as i64
}

/// Mode of `values`; among equal counts the value seen first wins
fn most_common<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    // (value, count) in first-seen order
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for value in values {
        match slots.get(value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value, count));
        }
    }

    best.map(|(value, _)| value.to_string())
}
