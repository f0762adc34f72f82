/// Errors that can occur talking to the game catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog API key rejected")]
    InvalidKey,

    #[error("Rate limited by the catalog API")]
    RateLimited,

    #[error("Entry not found in the catalog")]
    NotFound,

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),
}
