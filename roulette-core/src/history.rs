use std::collections::HashSet;

/// One entry shown earlier in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u64,
    pub name: String,
}

/// Append-only record of the games already shown this session, used as an
/// exclusion set for future selections.
///
/// Insertion order is preserved for replay/debugging; lookup is by id.
/// An id is never recorded twice.
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
    seen: HashSet<u64>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.seen.contains(&id)
    }

    /// Record a shown entry. Returns false and leaves the log untouched
    /// if the id was already recorded.
    pub fn record(&mut self, id: u64, name: impl Into<String>) -> bool {
        if !self.seen.insert(id) {
            return false;
        }
        self.entries.push(HistoryEntry {
            id,
            name: name.into(),
        });
        true
    }

    /// Entries in the order they were shown.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }
}
