use chrono::Datelike;
use rand::Rng;

use roulette_catalog::{CatalogClient, CatalogError, GameDetails, GamePage, GameQuery};
use roulette_core::CatalogEntry;
use roulette_translate::{NO_DESCRIPTION, Translator};

use crate::error::DiscoveryError;
use crate::session::{DiscoverySession, Selection, SessionHandle};

/// Marker returned when the detail fetch itself fails. Translation is not
/// attempted in that case.
pub const DATA_UNAVAILABLE: &str = "Entry data unavailable. Try again later.";

/// Remote catalog operations the engine depends on. Implemented by
/// [`CatalogClient`]; tests substitute a scripted fake.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn list_games(&self, query: &GameQuery) -> Result<GamePage, CatalogError>;
    async fn game_details(&self, id: u64) -> Result<GameDetails, CatalogError>;
}

impl CatalogSource for CatalogClient {
    async fn list_games(&self, query: &GameQuery) -> Result<GamePage, CatalogError> {
        CatalogClient::list_games(self, query).await
    }

    async fn game_details(&self, id: u64) -> Result<GameDetails, CatalogError> {
        CatalogClient::game_details(self, id).await
    }
}

/// Orchestrates one random-game discovery per call.
pub struct DiscoveryEngine<C> {
    catalog: C,
    translator: Translator,
}

impl<C: CatalogSource> DiscoveryEngine<C> {
    pub fn new(catalog: C, translator: Translator) -> Self {
        Self {
            catalog,
            translator,
        }
    }

    /// Pick one random, previously unseen game matching the session
    /// filters and resolve its description.
    ///
    /// On success the selection is recorded in the session history and
    /// installed as current. On any failure the history and the prior
    /// selection are left untouched.
    pub async fn generate(
        &self,
        session: &mut DiscoverySession,
    ) -> Result<Selection, DiscoveryError> {
        let current_year = chrono::Local::now().year();
        let query = GameQuery::from_filters(&session.filters, current_year);

        let page = self.catalog.list_games(&query).await?;
        if page.results.is_empty() {
            return Err(DiscoveryError::NoResults);
        }
        session.set_total_matches(page.count);

        // The critic-score bound in the query is only a server-side
        // prefilter; the star rating is enforced here.
        let min_rating = session.filters.min_rating;
        let mut candidates: Vec<CatalogEntry> = page
            .results
            .into_iter()
            .filter(|game| game.rating >= min_rating && !session.history().contains(game.id))
            .collect();
        if candidates.is_empty() {
            return Err(DiscoveryError::Exhausted);
        }

        let candidate_count = candidates.len();
        let index = rand::rng().random_range(0..candidate_count);
        let selected = candidates.swap_remove(index);
        log::info!(
            "Selected \"{}\" ({}) out of {} candidates",
            selected.name,
            selected.id,
            candidate_count
        );

        session.record_selection(selected.clone());

        let description = self.describe(selected.id).await;
        session.set_description(description.clone());

        Ok(Selection {
            entry: selected,
            description,
        })
    }

    /// [`generate`](Self::generate) behind the handle's single-flight
    /// guard: rejected with [`DiscoveryError::InFlight`] while another
    /// discovery holds the session.
    pub async fn generate_on(&self, handle: &SessionHandle) -> Result<Selection, DiscoveryError> {
        let mut session = handle.try_claim()?;
        self.generate(&mut session).await
    }

    /// Resolve the long-form description for an entry. Never fails
    /// outward: every error path lands on a fixed marker or the
    /// translation fallback.
    pub async fn describe(&self, id: u64) -> String {
        let details = match self.catalog.game_details(id).await {
            Ok(details) => details,
            Err(e) => {
                log::warn!("Detail fetch failed for {id}: {e}");
                return DATA_UNAVAILABLE.to_string();
            }
        };

        match details.description_raw {
            Some(text) if !text.trim().is_empty() => self.translator.translate(&text).await,
            _ => NO_DESCRIPTION.to_string(),
        }
    }
}
