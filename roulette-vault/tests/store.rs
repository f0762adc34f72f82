use std::collections::HashMap;
use std::sync::Mutex;

use roulette_vault::{CollectionStatistics, SavedGame, VaultBackend, VaultError, VaultStore};

/// In-memory stand-in for the persistence backend, with the same
/// conflict/not-found behavior as the remote API.
#[derive(Default)]
struct FakeBackend {
    games: Mutex<HashMap<u64, SavedGame>>,
    /// When set, returned verbatim instead of stats derived from `games`.
    canned_stats: Option<CollectionStatistics>,
}

impl FakeBackend {
    fn with_games(games: impl IntoIterator<Item = SavedGame>) -> Self {
        Self {
            games: Mutex::new(games.into_iter().map(|g| (g.id, g)).collect()),
            canned_stats: None,
        }
    }
}

impl VaultBackend for FakeBackend {
    async fn saved_games(&self) -> Result<Vec<SavedGame>, VaultError> {
        let games = self.games.lock().unwrap();
        let mut list: Vec<SavedGame> = games.values().cloned().collect();
        list.sort_by_key(|g| g.id);
        Ok(list)
    }

    async fn statistics(&self) -> Result<CollectionStatistics, VaultError> {
        if let Some(stats) = &self.canned_stats {
            return Ok(stats.clone());
        }
        let games = self.games.lock().unwrap();
        let total = games.len() as u64;
        let average = if total == 0 {
            0.0
        } else {
            games.values().map(|g| g.rating).sum::<f32>() / total as f32
        };
        Ok(CollectionStatistics {
            total_games: total,
            average_rating: average,
            ..Default::default()
        })
    }

    async fn save(&self, game: &SavedGame) -> Result<(), VaultError> {
        let mut games = self.games.lock().unwrap();
        if games.contains_key(&game.id) {
            return Err(VaultError::Conflict);
        }
        games.insert(game.id, game.clone());
        Ok(())
    }

    async fn remove(&self, id: u64) -> Result<(), VaultError> {
        match self.games.lock().unwrap().remove(&id) {
            Some(_) => Ok(()),
            None => Err(VaultError::NotFound),
        }
    }

    async fn clear(&self) -> Result<(), VaultError> {
        self.games.lock().unwrap().clear();
        Ok(())
    }

    async fn set_note(&self, id: u64, note: &str) -> Result<(), VaultError> {
        let mut games = self.games.lock().unwrap();
        let game = games.get_mut(&id).ok_or(VaultError::NotFound)?;
        game.personal_note = Some(note.to_string());
        Ok(())
    }

    async fn set_rating(&self, id: u64, rating: u8) -> Result<(), VaultError> {
        let mut games = self.games.lock().unwrap();
        let game = games.get_mut(&id).ok_or(VaultError::NotFound)?;
        game.personal_rating = Some(rating);
        Ok(())
    }
}

fn game(id: u64, name: &str, rating: f32) -> SavedGame {
    SavedGame {
        id,
        name: name.to_string(),
        background_image: None,
        rating,
        released: None,
        genres: vec![],
        platforms: vec![],
        metacritic: None,
        description_raw: None,
        personal_note: None,
        personal_rating: None,
    }
}

#[tokio::test]
async fn toggle_saves_then_removes() {
    let mut store = VaultStore::new(FakeBackend::default());
    store.load().await.unwrap();
    let entry = game(1, "Outer Wilds", 4.5);

    assert!(store.toggle(&entry).await.unwrap());
    assert!(store.is_saved(1));
    assert_eq!(store.len(), 1);
    assert_eq!(store.statistics().total_games, 1);

    assert!(!store.toggle(&entry).await.unwrap());
    assert!(!store.is_saved(1));
    assert!(store.is_empty());
    assert_eq!(store.statistics().total_games, 0);
}

#[tokio::test]
async fn duplicate_save_conflict_is_benign() {
    // Backend already holds the game but the local mirror is stale.
    let entry = game(1, "Outer Wilds", 4.5);
    let mut store = VaultStore::new(FakeBackend::with_games([entry.clone()]));

    let now_saved = store.toggle(&entry).await.unwrap();
    assert!(now_saved);
    assert!(store.is_saved(1));
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn remove_of_missing_game_is_noop() {
    let mut store = VaultStore::new(FakeBackend::default());
    store.remove(99).await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn clear_all_is_idempotent() {
    let mut store = VaultStore::new(FakeBackend::with_games([
        game(1, "Outer Wilds", 4.5),
        game(2, "Hades", 4.4),
    ]));
    store.load().await.unwrap();
    assert_eq!(store.len(), 2);

    store.clear_all().await.unwrap();
    assert!(store.is_empty());

    store.clear_all().await.unwrap();
    assert!(store.is_empty());
}

#[tokio::test]
async fn statistics_are_backend_snapshots_not_recomputed() {
    let canned = CollectionStatistics {
        total_games: 42,
        average_rating: 1.0,
        ..Default::default()
    };
    let backend = FakeBackend {
        canned_stats: Some(canned),
        ..Default::default()
    };
    let mut store = VaultStore::new(backend);

    store.toggle(&game(1, "Outer Wilds", 4.5)).await.unwrap();

    // One game in the mirror, but the snapshot is whatever the backend said.
    assert_eq!(store.len(), 1);
    assert_eq!(store.statistics().total_games, 42);
    assert_eq!(store.statistics().average_rating, 1.0);
}

#[tokio::test]
async fn statistics_refresh_after_each_mutation() {
    let mut store = VaultStore::new(FakeBackend::default());

    store.toggle(&game(1, "Outer Wilds", 5.0)).await.unwrap();
    assert_eq!(store.statistics().total_games, 1);
    assert_eq!(store.statistics().average_rating, 5.0);

    store.toggle(&game(2, "Hades", 3.0)).await.unwrap();
    assert_eq!(store.statistics().total_games, 2);
    assert_eq!(store.statistics().average_rating, 4.0);

    store.remove(1).await.unwrap();
    assert_eq!(store.statistics().total_games, 1);
    assert_eq!(store.statistics().average_rating, 3.0);
}

#[tokio::test]
async fn personal_rating_is_clamped() {
    let mut store = VaultStore::new(FakeBackend::with_games([game(1, "Outer Wilds", 4.5)]));
    store.load().await.unwrap();

    store.set_rating(1, 7).await.unwrap();
    assert_eq!(store.games()[0].personal_rating, Some(5));

    store.set_rating(1, 0).await.unwrap();
    assert_eq!(store.games()[0].personal_rating, Some(1));
}

#[tokio::test]
async fn note_survives_reload() {
    let mut store = VaultStore::new(FakeBackend::with_games([game(1, "Outer Wilds", 4.5)]));
    store.load().await.unwrap();

    store.set_note(1, "Finish the loop ending").await.unwrap();
    assert_eq!(
        store.games()[0].personal_note.as_deref(),
        Some("Finish the loop ending")
    );
}
