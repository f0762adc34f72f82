//! The discovery engine: picks one random, previously unseen,
//! filter-matching game per call and resolves its description through the
//! best-effort translation chain.

pub mod engine;
pub mod error;
pub mod session;

pub use engine::{CatalogSource, DATA_UNAVAILABLE, DiscoveryEngine};
pub use error::DiscoveryError;
pub use session::{DESCRIPTION_PENDING, DiscoverySession, Selection, SessionHandle};
