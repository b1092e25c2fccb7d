//! # Multiverse
//!
//! An in-memory character store served over HTTP, with:
//! - Ordered CRUD with first-match id semantics
//! - Randomized character generation
//! - Conjunctive filtered search
//! - Aggregate statistics
//! - Dice-driven battles with critical-hit upsets
//! - Whole-collection persistence after every mutation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              HTTP Server (axum)  /  Operator CLI             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ Command
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                         Engine                               │
//! │            (Single Writer / Multi Reader)                    │
//! └──────┬──────────────────────┬─────────────────────┬─────────┘
//!        │                      │                     │
//!        ▼                      ▼                     ▼
//!  ┌───────────┐        ┌──────────────┐      ┌──────────────┐
//!  │  Battle   │        │CharacterStore│      │  Statistics  │
//!  │ Resolver  │───────▶│  (ordered)   │◀─────│    Engine    │
//!  └───────────┘        └──────┬───────┘      └──────────────┘
//!                              │ full rewrite per mutation
//!                              ▼
//!                       ┌─────────────┐
//!                       │   Storage   │
//!                       │ (JSON/snap) │
//!                       └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod random;
pub mod character;
pub mod generator;
pub mod storage;
pub mod store;
pub mod stats;
pub mod battle;
pub mod protocol;
pub mod engine;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MultiverseError, Result};
pub use config::{Config, StorageFormat};
pub use character::{Character, CharacterPatch};
pub use engine::Engine;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Multiverse
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
