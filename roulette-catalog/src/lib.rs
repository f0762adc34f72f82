//! HTTP client for the remote game catalog: filtered game listings, full
//! detail records, and the genre/platform reference lists the filter UI
//! is built from.

pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use query::{DEFAULT_PAGE_SIZE, GameQuery};
pub use types::{GameDetails, GamePage, NamedRef};
