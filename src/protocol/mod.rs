//! Protocol Module
//!
//! The transport-independent request/response vocabulary.
//!
//! ## Commands
//! | Command    | Input              | Reply                 |
//! |------------|--------------------|-----------------------|
//! | `List`     | -                  | `Characters`          |
//! | `Random`   | -                  | `Character`           |
//! | `Query`    | filters            | `Characters`          |
//! | `Get`      | id                 | `Character`           |
//! | `Create`   | character          | `Created`             |
//! | `Generate` | -                  | `Created`             |
//! | `Update`   | id, patch          | `Character`           |
//! | `Delete`   | id                 | `Deleted`             |
//! | `Stats`    | -                  | `Stats`               |
//! | `Battle`   | id1, id2           | `Battle`              |
//!
//! Failures are [`MultiverseError`](crate::MultiverseError)s; the HTTP
//! layer maps them to status codes.

mod command;
mod reply;

pub use command::{BattleRequest, Command, CommandType};
pub use reply::{Reply, DELETED_MESSAGE};
