//! Handlers for the player resource and the informational endpoints.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{SecondsFormat, Utc};
use player_stats_catalog::{Player, PlayerInput};
use serde::Serialize;
use serde_json::{Value, json};

use crate::AppState;
use crate::error::ApiError;

const FETCH_ALL_FAILED: &str = "Failed to fetch players";
const FETCH_ONE_FAILED: &str = "Failed to fetch player";
const CREATE_FAILED: &str = "Failed to create player";
const UPDATE_FAILED: &str = "Failed to update player";
const DELETE_FAILED: &str = "Failed to delete player";

const INVALID_BODY: &str = "Invalid request body";
const PLAYER_NOT_FOUND: &str = "Player not found";

/// A stored player echoed back together with a confirmation message.
#[derive(Debug, Serialize)]
pub(crate) struct PlayerWithMessage {
    #[serde(flatten)]
    player: Player,
    message: &'static str,
}

pub(crate) async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Player Stats API",
        "endpoints": {
            "health": "/api/health",
            "players": "/api/players",
        },
    }))
}

pub(crate) async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Player Stats API is running",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Readiness: the store must answer before traffic is worth sending.
pub(crate) async fn ready(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let pool = state.service().gateway().pool();
    pool.health_check().await.map_err(|e| {
        log::warn!("Readiness check failed: {e}");
        ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    })?;
    Ok(Json(json!({ "status": "ready" })))
}

pub(crate) async fn route_not_found() -> ApiError {
    ApiError::not_found("Route not found")
}

pub(crate) async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = state
        .service()
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, FETCH_ALL_FAILED))?;
    Ok(Json(players))
}

pub(crate) async fn get_player(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(id)?;
    let player = state
        .service()
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, FETCH_ONE_FAILED))?;
    Ok(Json(player))
}

pub(crate) async fn create_player(
    State(state): State<AppState>,
    body: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<(StatusCode, Json<PlayerWithMessage>), ApiError> {
    let Json(input) = decode_body(body)?;
    let player = state
        .service()
        .create(&input)
        .await
        .map_err(|e| ApiError::from_service(e, CREATE_FAILED))?;
    Ok((
        StatusCode::CREATED,
        Json(PlayerWithMessage {
            player,
            message: "Player created successfully",
        }),
    ))
}

pub(crate) async fn update_player(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<Json<PlayerWithMessage>, ApiError> {
    let id = parse_id(id)?;
    let Json(input) = decode_body(body)?;
    let player = state
        .service()
        .update(id, &input)
        .await
        .map_err(|e| ApiError::from_service(e, UPDATE_FAILED))?;
    Ok(Json(PlayerWithMessage {
        player,
        message: "Player updated successfully",
    }))
}

pub(crate) async fn delete_player(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id(id)?;
    state
        .service()
        .remove(id)
        .await
        .map_err(|e| ApiError::from_service(e, DELETE_FAILED))?;
    Ok(Json(json!({ "message": "Player deleted successfully" })))
}

/// Ids that are not integers, or not even valid path text, can never name a
/// stored player.
fn parse_id(id: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = id.map_err(|rejection| {
        log::debug!("Rejected player id: {rejection}");
        ApiError::not_found(PLAYER_NOT_FOUND)
    })?;
    raw.parse()
        .map_err(|_| ApiError::not_found(PLAYER_NOT_FOUND))
}

fn decode_body(
    body: Result<Json<PlayerInput>, JsonRejection>,
) -> Result<Json<PlayerInput>, ApiError> {
    body.map_err(|rejection| {
        log::debug!("Rejected request body: {rejection}");
        ApiError::bad_request(INVALID_BODY)
    })
}
