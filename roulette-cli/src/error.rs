use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration missing or unwritable
    #[error("Config error: {0}")]
    Config(#[from] roulette_core::ConfigError),

    /// Catalog request failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] roulette_catalog::CatalogError),

    /// Discovery failed for a non-informational reason
    #[error("{0}")]
    Discovery(#[from] roulette_engine::DiscoveryError),

    /// Vault request failed
    #[error("Vault error: {0}")]
    Vault(#[from] roulette_vault::VaultError),

    /// Translator could not be constructed
    #[error("Translator error: {0}")]
    Translate(#[from] roulette_translate::TranslateError),

    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
