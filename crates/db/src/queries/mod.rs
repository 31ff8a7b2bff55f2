// crates/db/src/queries/mod.rs
// Per-user CRUD operations for the FOKUS SQLite database.

pub(crate) mod row_types;
mod experiments;
mod profiles;
mod sessions;
mod types;

pub use types::*;
