//! Read queries for the roster database.

use player_stats_catalog::Player;
use rusqlite::{Connection, Row, params};

use crate::operations::OperationError;

/// List every player, highest rating first. Ties are ordered by id.
pub fn list_players(conn: &Connection) -> Result<Vec<Player>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, position, rating, club, nation
         FROM players ORDER BY rating DESC, id ASC",
    )?;
    let rows = stmt.query_map([], row_to_player)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a player by id.
pub fn find_player(conn: &Connection, id: i64) -> Result<Option<Player>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, position, rating, club, nation
         FROM players WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id], row_to_player);
    match result {
        Ok(player) => Ok(Some(player)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Number of stored players.
pub fn count_players(conn: &Connection) -> Result<usize, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Round-trip a trivial statement to prove the connection is usable.
pub fn ping(conn: &Connection) -> Result<(), OperationError> {
    conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
    Ok(())
}

fn row_to_player(row: &Row<'_>) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        position: row.get(2)?,
        rating: row.get(3)?,
        club: row.get(4)?,
        nation: row.get(5)?,
    })
}
