//! SQLite persistence layer for the player roster.
//!
//! Provides schema creation, single-statement operations and queries
//! backed by SQLite (via rusqlite with bundled feature), and a bounded
//! async connection pool that runs them off the async executor.

pub mod operations;
pub mod pool;
pub mod queries;
pub mod schema;

pub use operations::{OperationError, delete_player, insert_player, update_player};
pub use pool::{ConnectionPool, PoolConfig, PoolError};
pub use queries::{count_players, find_player, list_players, ping};
pub use schema::{SchemaError, open_database, open_memory};
