use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::VaultError;
use crate::types::{CollectionStatistics, SavedGame};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// Backend responses wrap their payloads in small envelopes.
#[derive(Deserialize)]
struct GamesEnvelope {
    #[serde(default)]
    games: Vec<SavedGame>,
}

#[derive(Deserialize)]
struct GameEnvelope {
    game: SavedGame,
}

#[derive(Deserialize)]
struct CheckEnvelope {
    #[serde(default, rename = "isSaved")]
    is_saved: bool,
}

#[derive(Deserialize)]
struct StatsEnvelope {
    #[serde(default)]
    statistics: CollectionStatistics,
}

#[derive(Serialize)]
struct NoteBody<'a> {
    note: &'a str,
}

#[derive(Serialize)]
struct RatingBody {
    #[serde(rename = "personalRating")]
    personal_rating: u8,
}

/// HTTP client for the saved-games persistence API.
pub struct VaultClient {
    http: reqwest::Client,
    base_url: String,
}

impl VaultClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, VaultError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the full saved-games collection.
    pub async fn saved_games(&self) -> Result<Vec<SavedGame>, VaultError> {
        let resp = self.http.get(self.url("/saved-games")).send().await?;
        let envelope: GamesEnvelope = decode(resp).await?;
        Ok(envelope.games)
    }

    /// Fetch a single saved game, or `None` if the backend has no record
    /// for this id.
    pub async fn get(&self, id: u64) -> Result<Option<SavedGame>, VaultError> {
        let resp = self
            .http
            .get(self.url(&format!("/saved-games/{id}")))
            .send()
            .await?;

        match decode::<GameEnvelope>(resp).await {
            Ok(envelope) => Ok(Some(envelope.game)),
            Err(VaultError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Ask the backend whether a game is saved.
    pub async fn is_saved(&self, id: u64) -> Result<bool, VaultError> {
        let resp = self
            .http
            .get(self.url(&format!("/saved-games/check/{id}")))
            .send()
            .await?;
        let envelope: CheckEnvelope = decode(resp).await?;
        Ok(envelope.is_saved)
    }

    /// Persist a game. Fails with [`VaultError::Conflict`] when the id is
    /// already saved.
    pub async fn save(&self, game: &SavedGame) -> Result<(), VaultError> {
        let resp = self
            .http
            .post(self.url("/saved-games"))
            .json(game)
            .send()
            .await?;
        expect_ok(resp).await
    }

    /// Delete a saved game. Fails with [`VaultError::NotFound`] when the
    /// id is not saved.
    pub async fn remove(&self, id: u64) -> Result<(), VaultError> {
        let resp = self
            .http
            .delete(self.url(&format!("/saved-games/{id}")))
            .send()
            .await?;
        expect_ok(resp).await
    }

    /// Delete the entire collection.
    pub async fn clear(&self) -> Result<(), VaultError> {
        let resp = self.http.delete(self.url("/saved-games")).send().await?;
        expect_ok(resp).await
    }

    /// Fetch the backend-computed aggregate statistics.
    pub async fn statistics(&self) -> Result<CollectionStatistics, VaultError> {
        let resp = self
            .http
            .get(self.url("/saved-games/statistics"))
            .send()
            .await?;
        let envelope: StatsEnvelope = decode(resp).await?;
        Ok(envelope.statistics)
    }

    /// Search saved games by name or genre.
    pub async fn search(&self, query: &str) -> Result<Vec<SavedGame>, VaultError> {
        let resp = self
            .http
            .get(self.url("/saved-games/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        let envelope: GamesEnvelope = decode(resp).await?;
        Ok(envelope.games)
    }

    /// Attach a personal note to a saved game.
    pub async fn set_note(&self, id: u64, note: &str) -> Result<(), VaultError> {
        let resp = self
            .http
            .post(self.url(&format!("/saved-games/{id}/note")))
            .json(&NoteBody { note })
            .send()
            .await?;
        expect_ok(resp).await
    }

    /// Attach a personal 1-5 rating to a saved game.
    pub async fn set_rating(&self, id: u64, rating: u8) -> Result<(), VaultError> {
        let resp = self
            .http
            .post(self.url(&format!("/saved-games/{id}/rating")))
            .json(&RatingBody {
                personal_rating: rating,
            })
            .send()
            .await?;
        expect_ok(resp).await
    }

    /// Download the whole collection as a JSON export.
    pub async fn export(&self) -> Result<serde_json::Value, VaultError> {
        let resp = self.http.get(self.url("/saved-games/export")).send().await?;
        decode(resp).await
    }

    /// Upload a previously exported collection.
    pub async fn import(&self, data: &serde_json::Value) -> Result<(), VaultError> {
        let resp = self
            .http
            .post(self.url("/saved-games/import"))
            .json(data)
            .send()
            .await?;
        expect_ok(resp).await
    }
}

/// Map status codes to typed errors, then parse the body.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, VaultError> {
    let status = check_status(&resp)?;
    let text = resp.text().await?;
    if !status.is_success() {
        return Err(VaultError::ServerError {
            status: status.as_u16(),
            message: excerpt(&text),
        });
    }

    serde_json::from_str(&text).map_err(|e| {
        VaultError::Api(format!(
            "Failed to parse vault response: {e}. Response: {}",
            excerpt(&text)
        ))
    })
}

/// Like [`decode`], for endpoints whose response body we discard.
async fn expect_ok(resp: reqwest::Response) -> Result<(), VaultError> {
    let status = check_status(&resp)?;
    if status.is_success() {
        return Ok(());
    }
    let text = resp.text().await.unwrap_or_default();
    Err(VaultError::ServerError {
        status: status.as_u16(),
        message: excerpt(&text),
    })
}

fn check_status(resp: &reqwest::Response) -> Result<reqwest::StatusCode, VaultError> {
    let status = resp.status();
    match status {
        reqwest::StatusCode::CONFLICT => Err(VaultError::Conflict),
        reqwest::StatusCode::NOT_FOUND => Err(VaultError::NotFound),
        _ => Ok(status),
    }
}

/// First 200 characters of a response body, for error context.
fn excerpt(text: &str) -> String {
    text.chars().take(200).collect()
}
