//! Network Module
//!
//! HTTP transport over the engine.
//!
//! ## Architecture
//! - axum router, one handler per command
//! - Engine calls run on tokio's blocking pool
//! - Errors render as `{"error": "..."}` with a matching status code

mod error;
mod routes;
mod server;

pub use error::ApiError;
pub use routes::{routes, BANNER};
pub use server::Server;
