use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;
use crate::fallback::{NO_DESCRIPTION, fallback};

const API_URL: &str = "https://translation.googleapis.com/language/translate/v2";

/// Character limit the translation API enforces on a single payload.
const MAX_PAYLOAD_CHARS: usize = 5000;

/// Translation requests get a shorter leash than catalog requests so a
/// stalled translation cannot hold up the discovery flow.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

// Response shape: {"data": {"translations": [{"translatedText": "..."}]}}
#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    data: Option<TranslationList>,
}

#[derive(Deserialize)]
struct TranslationList {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Next step after a failed translation attempt.
#[derive(Debug, PartialEq, Eq)]
enum Retry {
    /// Try once more with the first [`MAX_PAYLOAD_CHARS`] characters.
    TruncatedPrefix,
    /// Resolve through [`fallback`].
    GiveUp,
}

/// A retry is only worth it when the payload limit was the problem and
/// truncation would actually shrink the text.
fn after_failure(err: &TranslateError, text_chars: usize) -> Retry {
    match err {
        TranslateError::PayloadTooLarge if text_chars > MAX_PAYLOAD_CHARS => {
            Retry::TruncatedPrefix
        }
        _ => Retry::GiveUp,
    }
}

/// Best-effort text translator.
///
/// `translate` never fails outward: a missing credential, any HTTP or
/// decode failure, and oversized payloads all resolve through the
/// truncation fallback.
pub struct Translator {
    http: reqwest::Client,
    api_key: Option<String>,
    source: String,
    target: String,
}

impl Translator {
    pub fn new(
        api_key: Option<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self, TranslateError> {
        Self::with_timeout(api_key, source, target, DEFAULT_TIMEOUT)
    }

    /// Create a translator with an explicit request timeout.
    pub fn with_timeout(
        api_key: Option<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key,
            source: source.into(),
            target: target.into(),
        })
    }

    /// True when a translation credential is configured. Without one,
    /// every call resolves locally through the fallback.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Translate `text`, resolving every failure through the fallback
    /// chain. Always returns non-empty text.
    pub async fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return NO_DESCRIPTION.to_string();
        }

        let Some(key) = &self.api_key else {
            log::debug!("No translation credential configured; using fallback");
            return fallback(text);
        };

        let text_chars = text.chars().count();
        match self.request(key, text).await {
            Ok(translated) => translated,
            // The truncated prefix is always within the limit, so the
            // chain is bounded at two attempts.
            Err(err) => match after_failure(&err, text_chars) {
                Retry::TruncatedPrefix => {
                    log::debug!(
                        "Translation payload too large ({text_chars} chars); retrying with a truncated prefix"
                    );
                    let prefix: String = text.chars().take(MAX_PAYLOAD_CHARS).collect();
                    match self.request(key, &prefix).await {
                        Ok(translated) => translated,
                        Err(retry_err) => {
                            log::warn!("Truncated translation retry failed: {retry_err}");
                            fallback(text)
                        }
                    }
                }
                Retry::GiveUp => {
                    log::warn!("Translation failed: {err}");
                    fallback(text)
                }
            },
        }
    }

    /// One raw translation request, with typed status mapping.
    async fn request(&self, key: &str, text: &str) -> Result<String, TranslateError> {
        let body = TranslateRequest {
            q: text,
            source: &self.source,
            target: &self.target,
            format: "text",
        };

        let resp = self
            .http
            .post(API_URL)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                return Err(TranslateError::Unauthorized);
            }
            reqwest::StatusCode::PAYLOAD_TOO_LARGE => return Err(TranslateError::PayloadTooLarge),
            reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(TranslateError::RateLimited),
            _ => {}
        }
        if !status.is_success() {
            return Err(TranslateError::Server {
                status: status.as_u16(),
            });
        }

        let parsed: TranslateResponse = resp.json().await?;
        parsed
            .data
            .and_then(|d| d.translations.into_iter().next())
            .map(|t| t.translated_text)
            .ok_or_else(|| {
                TranslateError::Malformed("no translation candidates in response".to_string())
            })
    }
}
