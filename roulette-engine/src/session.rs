use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use roulette_core::{CatalogEntry, FilterSpec, SessionHistory};

use crate::error::DiscoveryError;

/// Marker shown while the long-form description is still being resolved.
pub const DESCRIPTION_PENDING: &str = "Retrieving description...";

/// The entry currently on display plus its description text.
#[derive(Debug, Clone)]
pub struct Selection {
    pub entry: CatalogEntry,
    pub description: String,
}

/// Mutable state for one discovery session: the active filters, the
/// exclusion history, and the current selection.
///
/// Owned state, passed by `&mut` into the engine; multiple independent
/// sessions can coexist.
#[derive(Debug, Default)]
pub struct DiscoverySession {
    pub filters: FilterSpec,
    history: SessionHistory,
    current: Option<Selection>,
    total_matches: u64,
}

impl DiscoverySession {
    pub fn new(filters: FilterSpec) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    /// Forget every shown entry, making them eligible for discovery
    /// again.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Total matches the catalog reported for the last successful query,
    /// across all pages.
    pub fn total_matches(&self) -> u64 {
        self.total_matches
    }

    pub(crate) fn set_total_matches(&mut self, count: u64) {
        self.total_matches = count;
    }

    /// Install `entry` as the current selection with a pending
    /// description, recording it in the history.
    pub(crate) fn record_selection(&mut self, entry: CatalogEntry) {
        self.history.record(entry.id, entry.name.clone());
        self.current = Some(Selection {
            entry,
            description: DESCRIPTION_PENDING.to_string(),
        });
    }

    pub(crate) fn set_description(&mut self, text: String) {
        if let Some(selection) = &mut self.current {
            selection.description = text;
        }
    }
}

/// Shared, single-flight handle to a session.
///
/// Discovery reads and writes both the history and the current-selection
/// slot, so overlapping calls would race. The handle rejects a second
/// `generate` while one is outstanding instead of interleaving them.
#[derive(Clone, Default)]
pub struct SessionHandle {
    inner: Arc<Mutex<DiscoverySession>>,
}

impl SessionHandle {
    pub fn new(session: DiscoverySession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Claim exclusive access, failing fast with
    /// [`DiscoveryError::InFlight`] if the session is busy.
    pub fn try_claim(&self) -> Result<MutexGuard<'_, DiscoverySession>, DiscoveryError> {
        self.inner.try_lock().map_err(|_| DiscoveryError::InFlight)
    }

    /// Wait for exclusive access. For callers that want to queue rather
    /// than fail fast.
    pub async fn claim(&self) -> MutexGuard<'_, DiscoverySession> {
        self.inner.lock().await
    }
}
