//! Database module: record kinds, schema and the SQLite-backed storage.
//!
//! Layout:
//! - `record.rs`: the `Record` trait every stored kind implements
//! - `models.rs`: Employee, Order and Person rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: generic CRUD over any `Record`

pub mod models;
pub mod record;
pub mod schema;
pub mod sqlite;

pub use models::{Employee, Order, Person, Status};
pub use record::Record;
pub use sqlite::{SqlitePool, SqliteStorage};
