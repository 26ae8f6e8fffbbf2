//! Blocking HTTP client for the Player Stats API.

use std::time::Duration;

use player_stats_catalog::{Player, PlayerInput};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::CliError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Body of a create or update response: the stored player plus a message.
#[derive(Debug, Deserialize)]
pub(crate) struct PlayerWithMessage {
    #[serde(flatten)]
    pub player: Player,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MessageBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HealthStatus {
    pub status: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

pub(crate) struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    /// `base` is the API root, e.g. `http://localhost:3000/api`.
    pub(crate) fn new(base: &str) -> Result<Self, CliError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub(crate) fn list_players(&self) -> Result<Vec<Player>, CliError> {
        send(self.http.get(self.url("/players")))
    }

    pub(crate) fn get_player(&self, id: i64) -> Result<Player, CliError> {
        send(self.http.get(self.url(&format!("/players/{id}"))))
    }

    pub(crate) fn create_player(&self, input: &PlayerInput) -> Result<PlayerWithMessage, CliError> {
        send(self.http.post(self.url("/players")).json(input))
    }

    pub(crate) fn update_player(
        &self,
        id: i64,
        input: &PlayerInput,
    ) -> Result<PlayerWithMessage, CliError> {
        send(self.http.put(self.url(&format!("/players/{id}"))).json(input))
    }

    pub(crate) fn delete_player(&self, id: i64) -> Result<MessageBody, CliError> {
        send(self.http.delete(self.url(&format!("/players/{id}"))))
    }

    pub(crate) fn health(&self) -> Result<HealthStatus, CliError> {
        send(self.http.get(self.url("/health")))
    }
}

fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, CliError> {
    let resp = request.send()?;
    decode(resp)
}

/// Decode a success body, or turn an error response into [`CliError::Api`]
/// carrying the server's `error` text.
fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CliError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json()?);
    }

    let text = resp.text()?;
    log::debug!("API returned {status}: {text}");
    Err(CliError::api(status.as_u16(), error_message(status.as_u16(), &text)))
}

fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => format!("HTTP {status}"),
        Err(_) => {
            let excerpt: String = body.chars().take(200).collect();
            format!("HTTP {status}: {excerpt}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(400, r#"{"error":"Rating must be between 1 and 99"}"#),
            "Rating must be between 1 and 99"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(502, ""), "HTTP 502");
        assert_eq!(error_message(502, "Bad Gateway"), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn player_with_message_reads_flat_body() {
        let body = r#"{"id":3,"name":"A. Silva","position":"ST","rating":88,"club":"X","nation":"Brazil","message":"Player created successfully"}"#;
        let parsed: PlayerWithMessage = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.player.id, 3);
        assert_eq!(parsed.player.rating, 88);
        assert_eq!(parsed.message, "Player created successfully");
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let client = ApiClient::new("http://localhost:3000/api/").unwrap();
        assert_eq!(client.base(), "http://localhost:3000/api");
        assert_eq!(client.url("/players"), "http://localhost:3000/api/players");
    }
}
