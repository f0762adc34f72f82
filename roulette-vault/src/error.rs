/// Errors that can occur talking to the persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend already holds a game with this id.
    #[error("Game is already saved")]
    Conflict,

    /// The backend holds no game with this id.
    #[error("Game not found in the vault")]
    NotFound,

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),
}
