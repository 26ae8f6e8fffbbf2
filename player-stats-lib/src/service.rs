//! Player service and the persistence seam it depends on.

use std::future::Future;

use player_stats_catalog::{MAX_RATING, MIN_RATING, Player, PlayerFields, PlayerInput};
use player_stats_db::PoolError;
use thiserror::Error;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All fields are required";
pub const RATING_RANGE_MESSAGE: &str = "Rating must be between 1 and 99";

/// Outcome of a failed service operation.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submitted fields violate a presence or range rule. The message is
    /// safe to show to the caller.
    #[error("{0}")]
    Validation(String),

    /// No player has the requested id.
    #[error("Player not found")]
    NotFound,

    /// The store failed or could not be reached.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PoolError),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Primitive store operations, one statement each.
///
/// Implementations report failures as opaque [`PoolError`]s and never retry.
pub trait PlayerGateway: Send + Sync {
    /// Every player, highest rating first.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Player>, PoolError>> + Send;

    fn get_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Player>, PoolError>> + Send;

    /// Store a new player and return its assigned id.
    fn insert(&self, fields: PlayerFields) -> impl Future<Output = Result<i64, PoolError>> + Send;

    /// Replace a player's fields; resolves to the number of rows changed.
    fn update(
        &self,
        id: i64,
        fields: PlayerFields,
    ) -> impl Future<Output = Result<usize, PoolError>> + Send;

    /// Remove a player; resolves to the number of rows removed.
    fn delete_by_id(&self, id: i64) -> impl Future<Output = Result<usize, PoolError>> + Send;
}

/// Check a submitted field set and convert it to stored fields.
///
/// All five fields must be present and the text fields must contain
/// something other than whitespace. Values are stored exactly as submitted.
pub fn validate(input: &PlayerInput) -> Result<PlayerFields, ServiceError> {
    let (Some(name), Some(position), Some(rating), Some(club), Some(nation)) = (
        present(&input.name),
        present(&input.position),
        input.rating,
        present(&input.club),
        present(&input.nation),
    ) else {
        return Err(ServiceError::validation(REQUIRED_FIELDS_MESSAGE));
    };

    let rating = u8::try_from(rating)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| ServiceError::validation(RATING_RANGE_MESSAGE))?;

    Ok(PlayerFields {
        name: name.to_string(),
        position: position.to_string(),
        rating,
        club: club.to_string(),
        nation: nation.to_string(),
    })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Validates requests and translates store outcomes for the router.
pub struct PlayerService<G> {
    gateway: G,
}

impl<G: PlayerGateway> PlayerService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// The full roster, unfiltered, highest rating first.
    pub async fn list(&self) -> Result<Vec<Player>, ServiceError> {
        Ok(self.gateway.list_all().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Player, ServiceError> {
        self.gateway
            .get_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Validate and store a new player. Nothing is written if validation fails.
    pub async fn create(&self, input: &PlayerInput) -> Result<Player, ServiceError> {
        let fields = validate(input)?;
        let id = self.gateway.insert(fields.clone()).await?;
        log::debug!("Created player {id} ({})", fields.name);
        Ok(Player::from_fields(id, fields))
    }

    /// Validate and replace all fields of an existing player.
    pub async fn update(&self, id: i64, input: &PlayerInput) -> Result<Player, ServiceError> {
        let fields = validate(input)?;
        let changed = self.gateway.update(id, fields.clone()).await?;
        if changed == 0 {
            return Err(ServiceError::NotFound);
        }
        log::debug!("Updated player {id}");
        Ok(Player::from_fields(id, fields))
    }

    pub async fn remove(&self, id: i64) -> Result<(), ServiceError> {
        let removed = self.gateway.delete_by_id(id).await?;
        if removed == 0 {
            return Err(ServiceError::NotFound);
        }
        log::debug!("Deleted player {id}");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
