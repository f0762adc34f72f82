use std::path::PathBuf;

/// Errors from loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "Missing catalog API key. Set GAME_ROULETTE_CATALOG_KEY or add it to the config file"
    )]
    MissingCatalogKey,
    #[error("Could not determine config directory")]
    NoConfigDir,
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Default base URL for the saved-games persistence backend.
pub const DEFAULT_VAULT_URL: &str = "http://localhost:3001/api";

const DEFAULT_SOURCE_LANG: &str = "en";
const DEFAULT_TARGET_LANG: &str = "it";

/// Runtime configuration for the three remote services.
///
/// The translation key is deliberately optional: its absence selects the
/// local fallback translation path rather than failing startup. The
/// catalog key is only required once a catalog request is actually made
/// ([`AppConfig::require_catalog_key`]).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_key: Option<String>,
    pub translate_key: Option<String>,
    pub vault_url: String,
    /// Language the catalog's descriptions are written in.
    pub source_lang: String,
    /// Language descriptions are translated into.
    pub target_lang: String,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Hard-coded default value.
    Default,
    /// Not set anywhere.
    Missing,
}

impl std::fmt::Display for SettingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// Provenance of each setting.
#[derive(Debug)]
pub struct SettingSources {
    pub catalog_key: SettingSource,
    pub translate_key: SettingSource,
    pub vault_url: SettingSource,
    pub target_lang: SettingSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    catalog: Option<CatalogConfig>,
    translate: Option<TranslateConfig>,
    vault: Option<VaultConfig>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct CatalogConfig {
    api_key: Option<String>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct TranslateConfig {
    api_key: Option<String>,
    source_lang: Option<String>,
    target_lang: Option<String>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct VaultConfig {
    base_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables and the config file.
    ///
    /// Priority: env vars > config file > defaults.
    pub fn load() -> Self {
        let file = load_config_file().unwrap_or_default();

        let catalog_key = std::env::var("GAME_ROULETTE_CATALOG_KEY")
            .ok()
            .or_else(|| file.catalog.as_ref().and_then(|c| c.api_key.clone()));

        let translate_key = std::env::var("GAME_ROULETTE_TRANSLATE_KEY")
            .ok()
            .or_else(|| file.translate.as_ref().and_then(|t| t.api_key.clone()));

        let vault_url = std::env::var("GAME_ROULETTE_VAULT_URL")
            .ok()
            .or_else(|| file.vault.as_ref().and_then(|v| v.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_VAULT_URL.to_string());

        let source_lang = std::env::var("GAME_ROULETTE_SOURCE_LANG")
            .ok()
            .or_else(|| file.translate.as_ref().and_then(|t| t.source_lang.clone()))
            .unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string());

        let target_lang = std::env::var("GAME_ROULETTE_TARGET_LANG")
            .ok()
            .or_else(|| file.translate.as_ref().and_then(|t| t.target_lang.clone()))
            .unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string());

        Self {
            catalog_key,
            translate_key,
            vault_url,
            source_lang,
            target_lang,
        }
    }

    /// The catalog key, or the error telling the user how to set one.
    pub fn require_catalog_key(&self) -> Result<&str, ConfigError> {
        self.catalog_key
            .as_deref()
            .ok_or(ConfigError::MissingCatalogKey)
    }
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("game-roulette").join("config.toml"))
}

/// Save configuration to the config file, creating parent directories as
/// needed. Settings that match their defaults are omitted from the file.
/// Returns the path the file was written to.
pub fn save_to_file(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = ConfigFile {
        catalog: config.catalog_key.as_ref().map(|key| CatalogConfig {
            api_key: Some(key.clone()),
        }),
        translate: Some(TranslateConfig {
            api_key: config.translate_key.clone(),
            source_lang: if config.source_lang == DEFAULT_SOURCE_LANG {
                None
            } else {
                Some(config.source_lang.clone())
            },
            target_lang: if config.target_lang == DEFAULT_TARGET_LANG {
                None
            } else {
                Some(config.target_lang.clone())
            },
        }),
        vault: if config.vault_url == DEFAULT_VAULT_URL {
            None
        } else {
            Some(VaultConfig {
                base_url: Some(config.vault_url.clone()),
            })
        },
    };

    let toml_str = toml::to_string_pretty(&file)?;
    std::fs::write(&path, toml_str)?;
    Ok(path)
}

/// Determine where each setting is coming from.
pub fn setting_sources() -> SettingSources {
    let file = load_config_file().unwrap_or_default();

    let catalog_key = if std::env::var("GAME_ROULETTE_CATALOG_KEY").is_ok() {
        SettingSource::EnvVar("GAME_ROULETTE_CATALOG_KEY")
    } else if file.catalog.as_ref().and_then(|c| c.api_key.as_ref()).is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Missing
    };

    let translate_key = if std::env::var("GAME_ROULETTE_TRANSLATE_KEY").is_ok() {
        SettingSource::EnvVar("GAME_ROULETTE_TRANSLATE_KEY")
    } else if file
        .translate
        .as_ref()
        .and_then(|t| t.api_key.as_ref())
        .is_some()
    {
        SettingSource::ConfigFile
    } else {
        SettingSource::Missing
    };

    let vault_url = if std::env::var("GAME_ROULETTE_VAULT_URL").is_ok() {
        SettingSource::EnvVar("GAME_ROULETTE_VAULT_URL")
    } else if file.vault.as_ref().and_then(|v| v.base_url.as_ref()).is_some() {
        SettingSource::ConfigFile
    } else {
        SettingSource::Default
    };

    let target_lang = if std::env::var("GAME_ROULETTE_TARGET_LANG").is_ok() {
        SettingSource::EnvVar("GAME_ROULETTE_TARGET_LANG")
    } else if file
        .translate
        .as_ref()
        .and_then(|t| t.target_lang.as_ref())
        .is_some()
    {
        SettingSource::ConfigFile
    } else {
        SettingSource::Default
    };

    SettingSources {
        catalog_key,
        translate_key,
        vault_url,
        target_lang,
    }
}

fn load_config_file() -> Option<ConfigFile> {
    let path = config_path()?;
    let content = std::fs::read_to_string(&path).ok()?;
    toml::from_str(&content).ok()
}
