//! HTTP surface for the player roster.
//!
//! [`build_router`] wires the `/api/players` resource, the health and index
//! endpoints, the JSON fallback and the request logging layer around a shared
//! [`AppState`]. The binary in `main.rs` owns the listener and shutdown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::Router;
use axum::middleware;
use axum::routing::get;
use player_stats_lib::{PlayerService, SqliteGateway};

mod error;
mod middleware_layers;
mod routes;

pub use error::{ApiError, ServerError};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    service: Arc<PlayerService<SqliteGateway>>,
    accepting: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(service: PlayerService<SqliteGateway>) -> Self {
        Self {
            service: Arc::new(service),
            accepting: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn service(&self) -> &PlayerService<SqliteGateway> {
        &self.service
    }

    /// Whether new requests are still admitted.
    pub fn is_accepting(&self) -> bool {
        self.accepting.load(Ordering::Relaxed)
    }

    /// Refuse new requests with 503 while in-flight ones finish.
    pub fn stop_accepting(&self) {
        self.accepting.store(false, Ordering::Relaxed);
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index).fallback(routes::route_not_found))
        .route(
            "/api/health",
            get(routes::health).fallback(routes::route_not_found),
        )
        .route(
            "/api/ready",
            get(routes::ready).fallback(routes::route_not_found),
        )
        .route(
            "/api/players",
            get(routes::list_players)
                .post(routes::create_player)
                .fallback(routes::route_not_found),
        )
        .route(
            "/api/players/:id",
            get(routes::get_player)
                .put(routes::update_player)
                .delete(routes::delete_player)
                .fallback(routes::route_not_found),
        )
        .fallback(routes::route_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            middleware_layers::admission,
        ))
        .layer(middleware::from_fn(middleware_layers::catch_panics))
        .layer(middleware::from_fn(middleware_layers::log_requests))
        .with_state(state)
}
