use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use roulette_core::{CatalogEntry, Genre, PlatformSlot};

/// A game persisted in the vault: the catalog fields the backend stores
/// plus the user's own annotations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedGame {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub platforms: Vec<PlatformSlot>,
    #[serde(default)]
    pub metacritic: Option<u8>,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default, rename = "personalNote")]
    pub personal_note: Option<String>,
    /// User's own 1-5 rating, distinct from the community rating.
    #[serde(default, rename = "personalRating")]
    pub personal_rating: Option<u8>,
}

impl SavedGame {
    /// Snapshot a catalog entry for persistence. Annotations start empty.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            background_image: entry.background_image.clone(),
            rating: entry.rating,
            released: entry.released.clone(),
            genres: entry.genres.clone(),
            platforms: entry.platforms.clone(),
            metacritic: entry.metacritic,
            description_raw: None,
            personal_note: None,
            personal_rating: None,
        }
    }
}

/// Aggregate statistics computed by the backend.
///
/// Always cached verbatim from the last response; never recomputed
/// locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionStatistics {
    pub total_games: u64,
    pub average_rating: f32,
    pub genre_count: HashMap<String, u64>,
    pub platform_count: HashMap<String, u64>,
}
