use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use roulette_catalog::{CatalogError, GameDetails, GamePage, GameQuery};
use roulette_core::{CatalogEntry, FilterSpec};
use roulette_engine::{
    CatalogSource, DATA_UNAVAILABLE, DiscoveryEngine, DiscoveryError, DiscoverySession,
    SessionHandle,
};
use roulette_translate::{NO_DESCRIPTION, Translator, fallback};

#[derive(Clone)]
enum ListBehavior {
    Page { count: u64, results: Vec<CatalogEntry> },
    Fail,
}

#[derive(Clone)]
enum DetailBehavior {
    Description(Option<String>),
    Fail,
}

/// Scripted catalog: behaviors are shared handles so tests can swap them
/// between calls.
#[derive(Clone)]
struct FakeCatalog {
    list: Arc<Mutex<ListBehavior>>,
    details: Arc<Mutex<DetailBehavior>>,
}

impl FakeCatalog {
    fn returning(entries: Vec<CatalogEntry>) -> Self {
        let count = entries.len() as u64;
        Self {
            list: Arc::new(Mutex::new(ListBehavior::Page {
                count,
                results: entries,
            })),
            details: Arc::new(Mutex::new(DetailBehavior::Description(Some(
                "A great game.".to_string(),
            )))),
        }
    }

    fn set_list(&self, behavior: ListBehavior) {
        *self.list.lock().unwrap() = behavior;
    }

    fn set_details(&self, behavior: DetailBehavior) {
        *self.details.lock().unwrap() = behavior;
    }
}

impl CatalogSource for FakeCatalog {
    async fn list_games(&self, _query: &GameQuery) -> Result<GamePage, CatalogError> {
        match &*self.list.lock().unwrap() {
            ListBehavior::Page { count, results } => Ok(GamePage {
                count: *count,
                results: results.clone(),
            }),
            ListBehavior::Fail => Err(CatalogError::Api("scripted failure".to_string())),
        }
    }

    async fn game_details(&self, id: u64) -> Result<GameDetails, CatalogError> {
        match &*self.details.lock().unwrap() {
            DetailBehavior::Description(description) => Ok(GameDetails {
                id,
                name: format!("game-{id}"),
                rating: 0.0,
                released: None,
                background_image: None,
                metacritic: None,
                description_raw: description.clone(),
                genres: vec![],
                platforms: vec![],
            }),
            DetailBehavior::Fail => Err(CatalogError::NotFound),
        }
    }
}

fn entry(id: u64, name: &str, rating: f32) -> CatalogEntry {
    CatalogEntry {
        id,
        name: name.to_string(),
        rating,
        released: None,
        background_image: None,
        metacritic: None,
        genres: vec![],
        platforms: vec![],
    }
}

fn engine(catalog: FakeCatalog) -> DiscoveryEngine<FakeCatalog> {
    let translator = Translator::new(None, "en", "it").unwrap();
    DiscoveryEngine::new(catalog, translator)
}

#[tokio::test]
async fn empty_result_set_fails_without_touching_history() {
    let engine = engine(FakeCatalog::returning(vec![]));
    let mut session = DiscoverySession::default();

    let err = engine.generate(&mut session).await.unwrap_err();
    assert!(matches!(err, DiscoveryError::NoResults));
    assert!(session.history().is_empty());
    assert!(session.current().is_none());
}

#[tokio::test]
async fn entries_below_min_rating_exhaust_without_touching_history() {
    let engine = engine(FakeCatalog::returning(vec![
        entry(1, "Mediocre", 3.0),
        entry(2, "Worse", 2.1),
    ]));
    let mut session = DiscoverySession::new(FilterSpec {
        min_rating: 4.0,
        ..Default::default()
    });

    let err = engine.generate(&mut session).await.unwrap_err();
    assert!(matches!(err, DiscoveryError::Exhausted));
    assert!(session.history().is_empty());
}

#[tokio::test]
async fn selections_never_repeat_until_exhausted() {
    let engine = engine(FakeCatalog::returning(vec![
        entry(1, "Outer Wilds", 4.5),
        entry(2, "Hades", 4.4),
        entry(3, "Celeste", 4.3),
    ]));
    let mut session = DiscoverySession::default();

    let mut seen = HashSet::new();
    for _ in 0..3 {
        let selection = engine.generate(&mut session).await.unwrap();
        assert!(seen.insert(selection.entry.id), "id selected twice");
    }
    assert_eq!(session.history().len(), 3);

    let err = engine.generate(&mut session).await.unwrap_err();
    assert!(matches!(err, DiscoveryError::Exhausted));
    assert_eq!(session.history().len(), 3);
}

#[tokio::test]
async fn single_surviving_candidate_is_selected_deterministically() {
    let engine = engine(FakeCatalog::returning(vec![
        entry(10, "Keeper", 4.5),
        entry(11, "Filtered", 3.0),
    ]));
    let mut session = DiscoverySession::new(FilterSpec {
        min_rating: 4.0,
        start_year: Some(2015),
        end_year: Some(2020),
        ..Default::default()
    });

    let selection = engine.generate(&mut session).await.unwrap();
    assert_eq!(selection.entry.id, 10);
    assert_eq!(session.history().entries()[0].id, 10);
    assert_eq!(session.total_matches(), 2);
}

#[tokio::test]
async fn transport_failure_preserves_prior_selection() {
    let catalog = FakeCatalog::returning(vec![entry(1, "Outer Wilds", 4.5)]);
    let engine = engine(catalog.clone());
    let mut session = DiscoverySession::default();

    engine.generate(&mut session).await.unwrap();
    let prior_id = session.current().unwrap().entry.id;

    catalog.set_list(ListBehavior::Fail);
    let err = engine.generate(&mut session).await.unwrap_err();
    assert!(matches!(err, DiscoveryError::Unavailable(_)));
    assert_eq!(session.current().unwrap().entry.id, prior_id);
    assert_eq!(session.history().len(), 1);
}

#[tokio::test]
async fn description_is_attached_to_the_session() {
    let engine = engine(FakeCatalog::returning(vec![entry(1, "Outer Wilds", 4.5)]));
    let mut session = DiscoverySession::default();

    let selection = engine.generate(&mut session).await.unwrap();
    // No translation credential, so the fallback text is expected.
    assert_eq!(selection.description, fallback("A great game."));
    assert_eq!(
        session.current().unwrap().description,
        selection.description
    );
}

#[tokio::test]
async fn describe_returns_marker_when_detail_fetch_fails() {
    let catalog = FakeCatalog::returning(vec![]);
    catalog.set_details(DetailBehavior::Fail);
    let engine = engine(catalog);

    assert_eq!(engine.describe(1).await, DATA_UNAVAILABLE);
}

#[tokio::test]
async fn describe_returns_marker_for_missing_or_blank_description() {
    let catalog = FakeCatalog::returning(vec![]);
    let engine_under_test = engine(catalog.clone());

    catalog.set_details(DetailBehavior::Description(None));
    assert_eq!(engine_under_test.describe(1).await, NO_DESCRIPTION);

    catalog.set_details(DetailBehavior::Description(Some("   ".to_string())));
    assert_eq!(engine_under_test.describe(1).await, NO_DESCRIPTION);
}

#[tokio::test]
async fn busy_session_rejects_overlapping_generate() {
    let engine = engine(FakeCatalog::returning(vec![entry(1, "Outer Wilds", 4.5)]));
    let handle = SessionHandle::default();

    let guard = handle.try_claim().unwrap();
    let err = engine.generate_on(&handle).await.unwrap_err();
    assert!(matches!(err, DiscoveryError::InFlight));
    drop(guard);

    let selection = engine.generate_on(&handle).await.unwrap();
    assert_eq!(selection.entry.id, 1);
}

#[tokio::test]
async fn cleared_history_makes_entries_eligible_again() {
    let engine = engine(FakeCatalog::returning(vec![entry(1, "Outer Wilds", 4.5)]));
    let mut session = DiscoverySession::default();

    engine.generate(&mut session).await.unwrap();
    assert!(matches!(
        engine.generate(&mut session).await.unwrap_err(),
        DiscoveryError::Exhausted
    ));

    session.clear_history();
    let selection = engine.generate(&mut session).await.unwrap();
    assert_eq!(selection.entry.id, 1);
}
