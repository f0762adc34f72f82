//! The vault: the user's persisted collection of saved games.
//!
//! Persistence lives behind a remote CRUD API; this crate wraps it in a
//! typed client and a store that mirrors the collection locally with a
//! reload-after-write policy (no optimistic mutation, no local statistics).

pub mod client;
pub mod error;
pub mod store;
pub mod types;

pub use client::VaultClient;
pub use error::VaultError;
pub use store::{VaultBackend, VaultStore};
pub use types::{CollectionStatistics, SavedGame};
