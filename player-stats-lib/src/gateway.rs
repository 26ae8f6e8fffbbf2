//! SQLite-backed [`PlayerGateway`].

use std::sync::Arc;

use player_stats_catalog::{Player, PlayerFields};
use player_stats_db::{
    ConnectionPool, PoolError, delete_player, find_player, insert_player, list_players,
    update_player,
};

use crate::service::PlayerGateway;

/// Runs each gateway primitive as a single statement on the shared pool.
#[derive(Clone)]
pub struct SqliteGateway {
    pool: Arc<ConnectionPool>,
}

impl SqliteGateway {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Arc<ConnectionPool> {
        &self.pool
    }
}

impl PlayerGateway for SqliteGateway {
    async fn list_all(&self) -> Result<Vec<Player>, PoolError> {
        self.pool.run(list_players).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Player>, PoolError> {
        self.pool.run(move |conn| find_player(conn, id)).await
    }

    async fn insert(&self, fields: PlayerFields) -> Result<i64, PoolError> {
        self.pool.run(move |conn| insert_player(conn, &fields)).await
    }

    async fn update(&self, id: i64, fields: PlayerFields) -> Result<usize, PoolError> {
        self.pool
            .run(move |conn| update_player(conn, id, &fields))
            .await
    }

    async fn delete_by_id(&self, id: i64) -> Result<usize, PoolError> {
        self.pool.run(move |conn| delete_player(conn, id)).await
    }
}
