//! Data model types for the player roster.
//!
//! A [`Player`] is a stored record with a system-assigned id. [`PlayerFields`]
//! is the validated, id-less field set that create and update operations
//! write; [`PlayerInput`] is the raw, possibly incomplete shape a client
//! submits before validation.

use serde::{Deserialize, Serialize};

/// Lowest accepted overall rating.
pub const MIN_RATING: u8 = 1;

/// Highest accepted overall rating.
pub const MAX_RATING: u8 = 99;

/// Role codes offered by the editing front ends, goalkeeper through forwards.
///
/// Informational only: the service accepts any non-empty position.
pub const KNOWN_POSITIONS: [&str; 13] = [
    "GK", "CB", "LB", "RB", "CDM", "CM", "CAM", "LM", "RM", "LW", "RW", "ST", "CF",
];

/// Returns true if `position` is one of [`KNOWN_POSITIONS`].
pub fn is_known_position(position: &str) -> bool {
    KNOWN_POSITIONS.contains(&position)
}

// ── Player ──────────────────────────────────────────────────────────────────

/// A single athlete's stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: String,
    pub rating: u8,
    pub club: String,
    pub nation: String,
}

impl Player {
    /// Attach a store-assigned id to a validated field set.
    pub fn from_fields(id: i64, fields: PlayerFields) -> Self {
        Self {
            id,
            name: fields.name,
            position: fields.position,
            rating: fields.rating,
            club: fields.club,
            nation: fields.nation,
        }
    }

    /// The record's fields without its id.
    pub fn fields(&self) -> PlayerFields {
        PlayerFields {
            name: self.name.clone(),
            position: self.position.clone(),
            rating: self.rating,
            club: self.club.clone(),
            nation: self.nation.clone(),
        }
    }
}

/// The five writable fields of a player, already validated.
///
/// Updates always replace all five fields; there is no partial patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerFields {
    pub name: String,
    pub position: String,
    pub rating: u8,
    pub club: String,
    pub nation: String,
}

// ── Input ───────────────────────────────────────────────────────────────────

/// A client-submitted field set, before validation.
///
/// Every field is optional so that a missing field is reported as a
/// validation failure rather than a decode failure. `rating` is wide enough
/// to carry out-of-range values through to the range check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
}

impl PlayerInput {
    /// Build a complete input from plain values.
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        rating: i64,
        club: impl Into<String>,
        nation: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            position: Some(position.into()),
            rating: Some(rating),
            club: Some(club.into()),
            nation: Some(nation.into()),
        }
    }
}

impl From<PlayerFields> for PlayerInput {
    fn from(fields: PlayerFields) -> Self {
        Self {
            name: Some(fields.name),
            position: Some(fields.position),
            rating: Some(i64::from(fields.rating)),
            club: Some(fields.club),
            nation: Some(fields.nation),
        }
    }
}
