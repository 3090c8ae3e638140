//! Database module: models, schema and connection helpers.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and conversions
//! - `schema.rs`: SQL DDL for the `Department` / `Employee` tables
//! - `sqlite.rs`: pool construction and SQL script execution

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Department, Employee};
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, connect, execute_script, init_schema};
