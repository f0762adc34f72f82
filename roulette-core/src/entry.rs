use serde::{Deserialize, Serialize};

/// One game record returned by the catalog API.
///
/// Fields mirror the catalog's wire names. Records are immutable once
/// fetched within a session; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub name: String,
    /// Community star rating on a 0-5 scale.
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub released: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
    /// Aggregate critic score on a 0-100 scale, when the catalog has one.
    #[serde(default)]
    pub metacritic: Option<u8>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub platforms: Vec<PlatformSlot>,
}

impl CatalogEntry {
    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms
            .iter()
            .map(|p| p.platform.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

/// The catalog nests platform references one level deep in listing
/// responses, so the wrapper is kept as-is rather than flattened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSlot {
    pub platform: PlatformRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRef {
    pub id: u32,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listing_entry_with_missing_optionals() {
        let json = r#"{
            "id": 3498,
            "name": "Grand Theft Auto V",
            "rating": 4.47,
            "released": "2013-09-17",
            "genres": [{"id": 4, "name": "Action"}],
            "platforms": [{"platform": {"id": 187, "name": "PlayStation 5"}}]
        }"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 3498);
        assert_eq!(entry.genre_names(), vec!["Action"]);
        assert_eq!(entry.platform_names(), vec!["PlayStation 5"]);
        assert!(entry.metacritic.is_none());
        assert!(entry.background_image.is_none());
    }
}
