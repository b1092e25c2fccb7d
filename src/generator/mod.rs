//! Generator Module
//!
//! Produces synthetic characters.
//!
//! ## Responsibilities
//! - Pick categorical fields uniformly from the fixed tables
//! - Draw 2–6 distinct abilities without replacement
//! - Delegate names and avatars to a [`FakeData`] provider

mod fake;
mod record;

pub use fake::{FakeData, NameBank};
pub use record::RecordGenerator;
