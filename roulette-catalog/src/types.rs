use serde::Deserialize;

use roulette_core::{CatalogEntry, Genre, PlatformSlot};

/// One page of listing results plus the total match count across all
/// pages.
#[derive(Debug, Deserialize)]
pub struct GamePage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<CatalogEntry>,
}

/// Full detail record for a single game. The listing endpoint omits the
/// long-form description; it is only present here.
#[derive(Debug, Clone, Deserialize)]
pub struct GameDetails {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub metacritic: Option<u8>,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub platforms: Vec<PlatformSlot>,
}

/// Genre or platform reference from the listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedRef {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub games_count: Option<u64>,
}

/// Page wrapper for the genre/platform reference endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct RefPage {
    #[serde(default)]
    pub results: Vec<NamedRef>,
}
