/// Errors from the remote translation API.
///
/// These never escape [`Translator::translate`](crate::Translator::translate);
/// they drive the fallback chain internally.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Translation credential rejected")]
    Unauthorized,

    #[error("Payload too large for the translation API")]
    PayloadTooLarge,

    #[error("Rate limited by the translation API")]
    RateLimited,

    #[error("Translation API returned HTTP {status}")]
    Server { status: u16 },

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed translation response: {0}")]
    Malformed(String),
}
