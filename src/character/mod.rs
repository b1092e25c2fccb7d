//! Character Module
//!
//! The record type served by the store and the category tables the
//! generator draws from.

pub mod catalog;
mod record;

pub use record::{Character, CharacterPatch};
