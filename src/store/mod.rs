//! Store Module
//!
//! In-memory character collection with query support.
//!
//! ## Responsibilities
//! - Keep characters in insertion order
//! - Create / read / update / delete by id (first match wins)
//! - Conjunctive filtering by category and power-level bounds
//! - Flush the whole collection to [`Storage`](crate::storage::Storage)
//!   after every mutation

mod character_store;
mod query;

pub use character_store::CharacterStore;
pub use query::{CharacterQuery, QueryParams};
