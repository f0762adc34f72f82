//! Core types shared across the game-roulette workspace: catalog entries,
//! discovery filters, the per-session exclusion history, and runtime
//! configuration for the remote services.

pub mod config;
pub mod entry;
pub mod filters;
pub mod history;

pub use config::{
    AppConfig, ConfigError, SettingSource, SettingSources, config_path, save_to_file,
    setting_sources,
};
pub use entry::{CatalogEntry, Genre, PlatformRef, PlatformSlot};
pub use filters::{FilterSpec, OrderingParseError, SortOrder};
pub use history::{HistoryEntry, SessionHistory};
