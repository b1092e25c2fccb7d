//! Random Source
//!
//! Every random draw in the crate (dice, generated records, random picks)
//! goes through [`RandomSource`], so tests can inject fixed sequences.
//!
//! ## Implementations
//! - [`ThreadRandom`]: production, `rand::thread_rng()`
//! - [`SeededRandom`]: reproducible runs (benchmarks, `--seed` on the CLI)
//! - [`FixedRandom`]: replays a fixed sequence, for tests

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers
pub trait RandomSource: Send + Sync {
    /// Random integer in `[min, max]`, inclusive on both ends
    fn range(&self, min: i64, max: i64) -> i64;

    /// Random index into a collection of `len` elements
    ///
    /// `len` must be non-zero.
    fn index(&self, len: usize) -> usize {
        debug_assert!(len > 0, "index() on an empty collection");
        self.range(0, len as i64 - 1) as usize
    }
}

/// Production random source backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn range(&self, min: i64, max: i64) -> i64 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Deterministic random source seeded once
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn range(&self, min: i64, max: i64) -> i64 {
        self.rng.lock().gen_range(min..=max)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted
///
/// Each value is clamped into the requested range.
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<i64>,
    cursor: AtomicUsize,
}

impl FixedRandom {
    /// Create a source that yields `values` in order
    pub fn new(values: Vec<i64>) -> Self {
        assert!(!values.is_empty(), "FixedRandom needs at least one value");
        Self {
            values,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Create a source that always yields the same value
    pub fn constant(value: i64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws made so far
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RandomSource for FixedRandom {
    fn range(&self, min: i64, max: i64) -> i64 {
        let idx = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.values[idx % self.values.len()].clamp(min, max)
    }
}
