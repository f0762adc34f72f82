use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::query::GameQuery;
use crate::types::{GameDetails, GamePage, NamedRef, RefPage};

const BASE_URL: &str = "https://api.rawg.io/api";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the game catalog API. The API key is sent as a query
/// parameter on every request.
pub struct CatalogClient {
    http: reqwest::Client,
    api_key: String,
}

impl CatalogClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    /// Fetch one page of games matching the query.
    pub async fn list_games(&self, query: &GameQuery) -> Result<GamePage, CatalogError> {
        let mut params = query.to_params();
        log::debug!("Listing games: {params:?}");
        params.push(("key", self.api_key.clone()));

        let resp = self
            .http
            .get(format!("{BASE_URL}/games"))
            .query(&params)
            .send()
            .await?;

        decode(resp).await
    }

    /// Fetch the full detail record for a game, including its long-form
    /// description.
    pub async fn game_details(&self, id: u64) -> Result<GameDetails, CatalogError> {
        log::debug!("Fetching details for {id}");
        let resp = self
            .http
            .get(format!("{BASE_URL}/games/{id}"))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        decode(resp).await
    }

    /// Fetch the available game genres.
    pub async fn list_genres(&self) -> Result<Vec<NamedRef>, CatalogError> {
        self.list_refs("genres").await
    }

    /// Fetch the available gaming platforms.
    pub async fn list_platforms(&self) -> Result<Vec<NamedRef>, CatalogError> {
        self.list_refs("platforms").await
    }

    async fn list_refs(&self, endpoint: &str) -> Result<Vec<NamedRef>, CatalogError> {
        let resp = self
            .http
            .get(format!("{BASE_URL}/{endpoint}"))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let page: RefPage = decode(resp).await?;
        Ok(page.results)
    }
}

/// Map status codes to typed errors, then parse the body. Decode failures
/// carry a truncated response excerpt for diagnosis.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, CatalogError> {
    let status = resp.status();
    match status {
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            return Err(CatalogError::InvalidKey);
        }
        reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(CatalogError::RateLimited),
        reqwest::StatusCode::NOT_FOUND => return Err(CatalogError::NotFound),
        _ => {}
    }

    let text = resp.text().await?;
    if !status.is_success() {
        return Err(CatalogError::ServerError {
            status: status.as_u16(),
            message: excerpt(&text),
        });
    }

    serde_json::from_str(&text).map_err(|e| {
        CatalogError::Api(format!(
            "Failed to parse catalog response: {e}. Response: {}",
            excerpt(&text)
        ))
    })
}

/// First 200 characters of a response body, for error context.
fn excerpt(text: &str) -> String {
    text.chars().take(200).collect()
}
