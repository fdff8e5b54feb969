use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, COOKIE};
use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::ApiError;
use super::types::{
    Game, GameId, LineupEntry, LineupPayload, LineupPlayer, NewShot, NewStat, NewSubstitution,
    PlayerId, RosterEntry, RosterId, RosterPayload, RosterPlayer, StatEvent, Substitution,
};
use crate::config::Config;

/// HTTP client for the game API
///
/// Every route is relative to `base_url`. Responses may wrap their payload in a
/// `{ "data": ... }` envelope, which is unwrapped transparently.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl Client {
    /// Create a client for `base_url`, forwarding `token` as the session cookie
    pub fn new(base_url: impl Into<String>, token: Option<&str>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            let cookie = HeaderValue::from_str(&format!("token={}", token))
                .map_err(|e| ApiError::Config(format!("invalid session token: {}", e)))?;
            headers.insert(COOKIE, cookie);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from the resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.api_url.clone(), config.session_token.as_deref())
    }

    fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route)
    }

    async fn request<B, T>(&self, method: Method, route: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("API: {} {}", method, route);
        let mut request = self.http.request(method, self.url(route));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        trace!("API: {} returned {} bytes", status, bytes.len());

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message);
            return Err(ApiError::status(status.as_u16(), message));
        }

        unwrap_envelope(&bytes)
    }

    async fn get<T: DeserializeOwned>(&self, route: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::GET, route, None).await
    }

    /// Send a mutation whose response body is not used
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        route: &str,
        body: Option<&B>,
    ) -> Result<(), ApiError> {
        self.request::<B, IgnoredAny>(method, route, body).await?;
        Ok(())
    }

    pub async fn game(&self, game_id: GameId) -> Result<Game, ApiError> {
        self.get(&format!("games/{}", game_id)).await
    }

    pub async fn roster(&self, game_id: GameId) -> Result<Vec<RosterPlayer>, ApiError> {
        self.get(&format!("games/{}/roster", game_id)).await
    }

    pub async fn add_to_roster(&self, game_id: GameId, entry: RosterEntry) -> Result<(), ApiError> {
        let payload = RosterPayload { roster: vec![entry] };
        self.send(Method::POST, &format!("games/{}/roster", game_id), Some(&payload))
            .await
    }

    pub async fn remove_from_roster(&self, game_id: GameId, roster_id: RosterId) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, &format!("games/{}/roster/{}", game_id, roster_id), None)
            .await
    }

    pub async fn stats(&self, game_id: GameId) -> Result<Vec<StatEvent>, ApiError> {
        self.get(&format!("games/{}/stats", game_id)).await
    }

    pub async fn create_stat(&self, game_id: GameId, stat: &NewStat) -> Result<(), ApiError> {
        self.send(Method::POST, &format!("games/{}/stats", game_id), Some(stat))
            .await
    }

    pub async fn create_shot(&self, game_id: GameId, shot: &NewShot) -> Result<(), ApiError> {
        self.send(Method::POST, &format!("games/{}/stats", game_id), Some(shot))
            .await
    }

    pub async fn update_stat(&self, game_id: GameId, stat_id: i64, stat: &NewStat) -> Result<(), ApiError> {
        self.send(Method::PUT, &format!("games/{}/stats/{}", game_id, stat_id), Some(stat))
            .await
    }

    pub async fn delete_stat(&self, game_id: GameId, stat_id: i64) -> Result<(), ApiError> {
        self.send::<()>(Method::DELETE, &format!("games/{}/stats/{}", game_id, stat_id), None)
            .await
    }

    pub async fn substitutions(&self, game_id: GameId) -> Result<Vec<Substitution>, ApiError> {
        self.get(&format!("games/{}/substitutions", game_id)).await
    }

    pub async fn create_substitution(&self, game_id: GameId, sub: &NewSubstitution) -> Result<(), ApiError> {
        self.send(Method::POST, &format!("games/{}/substitutions", game_id), Some(sub))
            .await
    }

    pub async fn starting_lineup(&self, game_id: GameId, period: u8) -> Result<Vec<LineupPlayer>, ApiError> {
        self.get(&format!("games/{}/starting-lineup/{}", game_id, period))
            .await
    }

    pub async fn save_starting_lineup(
        &self,
        game_id: GameId,
        period: u8,
        player_ids: &[PlayerId],
    ) -> Result<(), ApiError> {
        let payload = LineupPayload {
            period,
            lineup: player_ids
                .iter()
                .map(|&player_id| LineupEntry { player_id })
                .collect(),
        };
        self.send(Method::POST, &format!("games/{}/starting-lineup", game_id), Some(&payload))
            .await
    }
}

/// Decode a success body, unwrapping a non-null `data` field when present
///
/// An empty body decodes as JSON `null`, so unit-like targets accept it.
pub fn unwrap_envelope<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let value: serde_json::Value = if bytes.iter().all(|b| b.is_ascii_whitespace()) {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(bytes)?
    };

    let payload = match value {
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data) if !data.is_null() => data,
            Some(_) | None => serde_json::Value::Object(map),
        },
        other => other,
    };

    Ok(serde_json::from_value(payload)?)
}
