//! Write operations for player records.
//!
//! Each function executes exactly one parameterized statement. Field
//! validation is the caller's job; the table's CHECK constraint is only a
//! backstop.

use player_stats_catalog::PlayerFields;
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Insert a new player. Returns the store-assigned id.
pub fn insert_player(conn: &Connection, fields: &PlayerFields) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO players (name, position, rating, club, nation)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            fields.name,
            fields.position,
            fields.rating,
            fields.club,
            fields.nation,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Replace all five fields of a player. Returns the number of rows changed
/// (0 if no player has that id).
pub fn update_player(
    conn: &Connection,
    id: i64,
    fields: &PlayerFields,
) -> Result<usize, OperationError> {
    let changed = conn.execute(
        "UPDATE players
         SET name = ?2, position = ?3, rating = ?4, club = ?5, nation = ?6
         WHERE id = ?1",
        params![
            id,
            fields.name,
            fields.position,
            fields.rating,
            fields.club,
            fields.nation,
        ],
    )?;
    Ok(changed)
}

/// Delete a player. Returns the number of rows removed (0 or 1).
pub fn delete_player(conn: &Connection, id: i64) -> Result<usize, OperationError> {
    let changed = conn.execute("DELETE FROM players WHERE id = ?1", params![id])?;
    Ok(changed)
}
