use crate::client::VaultClient;
use crate::error::VaultError;
use crate::types::{CollectionStatistics, SavedGame};

/// Remote operations the store needs. Implemented by [`VaultClient`];
/// tests substitute an in-memory fake.
#[allow(async_fn_in_trait)]
pub trait VaultBackend {
    async fn saved_games(&self) -> Result<Vec<SavedGame>, VaultError>;
    async fn statistics(&self) -> Result<CollectionStatistics, VaultError>;
    async fn save(&self, game: &SavedGame) -> Result<(), VaultError>;
    async fn remove(&self, id: u64) -> Result<(), VaultError>;
    async fn clear(&self) -> Result<(), VaultError>;
    async fn set_note(&self, id: u64, note: &str) -> Result<(), VaultError>;
    async fn set_rating(&self, id: u64, rating: u8) -> Result<(), VaultError>;
}

impl VaultBackend for VaultClient {
    async fn saved_games(&self) -> Result<Vec<SavedGame>, VaultError> {
        VaultClient::saved_games(self).await
    }

    async fn statistics(&self) -> Result<CollectionStatistics, VaultError> {
        VaultClient::statistics(self).await
    }

    async fn save(&self, game: &SavedGame) -> Result<(), VaultError> {
        VaultClient::save(self, game).await
    }

    async fn remove(&self, id: u64) -> Result<(), VaultError> {
        VaultClient::remove(self, id).await
    }

    async fn clear(&self) -> Result<(), VaultError> {
        VaultClient::clear(self).await
    }

    async fn set_note(&self, id: u64, note: &str) -> Result<(), VaultError> {
        VaultClient::set_note(self, id, note).await
    }

    async fn set_rating(&self, id: u64, rating: u8) -> Result<(), VaultError> {
        VaultClient::set_rating(self, id, rating).await
    }
}

/// Local mirror of the saved-games collection.
///
/// The backend is the source of truth: every mutation is followed by a
/// full reload of the collection and its statistics rather than an
/// optimistic local update. Duplicate saves and missing removes are
/// benign outcomes, not errors.
pub struct VaultStore<B> {
    backend: B,
    games: Vec<SavedGame>,
    statistics: CollectionStatistics,
}

impl<B: VaultBackend> VaultStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            games: Vec::new(),
            statistics: CollectionStatistics::default(),
        }
    }

    /// Reload the collection and statistics from the backend.
    pub async fn load(&mut self) -> Result<(), VaultError> {
        self.games = self.backend.saved_games().await?;
        self.statistics = self.backend.statistics().await?;
        Ok(())
    }

    /// Save the game if it is unsaved, remove it if it is saved, then
    /// reload. Returns the new saved state.
    pub async fn toggle(&mut self, game: &SavedGame) -> Result<bool, VaultError> {
        let was_saved = self.is_saved(game.id);

        if was_saved {
            match self.backend.remove(game.id).await {
                Ok(()) | Err(VaultError::NotFound) => {}
                Err(e) => return Err(e),
            }
        } else {
            match self.backend.save(game).await {
                Ok(()) => {}
                Err(VaultError::Conflict) => {
                    log::warn!("Game {} is already in the vault", game.id);
                }
                Err(e) => return Err(e),
            }
        }

        self.load().await?;
        Ok(!was_saved)
    }

    /// Remove a game by id. A missing id is a no-op.
    pub async fn remove(&mut self, id: u64) -> Result<(), VaultError> {
        match self.backend.remove(id).await {
            Ok(()) => {}
            Err(VaultError::NotFound) => {
                log::warn!("Game {id} was not in the vault");
            }
            Err(e) => return Err(e),
        }
        self.load().await
    }

    /// Empty the collection. Idempotent.
    pub async fn clear_all(&mut self) -> Result<(), VaultError> {
        self.backend.clear().await?;
        self.load().await
    }

    /// Attach a personal note to a saved game.
    pub async fn set_note(&mut self, id: u64, note: &str) -> Result<(), VaultError> {
        self.backend.set_note(id, note).await?;
        self.load().await
    }

    /// Attach a personal rating to a saved game, clamped to 1-5.
    pub async fn set_rating(&mut self, id: u64, rating: u8) -> Result<(), VaultError> {
        self.backend.set_rating(id, rating.clamp(1, 5)).await?;
        self.load().await
    }

    pub fn is_saved(&self, id: u64) -> bool {
        self.games.iter().any(|g| g.id == id)
    }

    pub fn games(&self) -> &[SavedGame] {
        &self.games
    }

    /// The last statistics snapshot returned by the backend.
    pub fn statistics(&self) -> &CollectionStatistics {
        &self.statistics
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
