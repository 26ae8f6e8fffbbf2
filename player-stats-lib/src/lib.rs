//! Player service: validation, persistence outcomes and server settings.
//!
//! [`PlayerService`] enforces the roster invariants before anything reaches
//! the store and maps store outcomes into [`ServiceError`]. The store is
//! injected through the [`PlayerGateway`] trait; [`SqliteGateway`] is the
//! production implementation over a [`player_stats_db::ConnectionPool`].

pub mod gateway;
pub mod service;
pub mod settings;

pub use gateway::SqliteGateway;
pub use service::{
    PlayerGateway, PlayerService, RATING_RANGE_MESSAGE, REQUIRED_FIELDS_MESSAGE, ServiceError,
    validate,
};
pub use settings::{ServerSettings, SettingsError, settings_path};

pub use player_stats_catalog as catalog;
pub use player_stats_db as db;
