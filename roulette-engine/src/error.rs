use roulette_catalog::CatalogError;

/// Errors surfaced by a discovery attempt.
///
/// `NoResults` and `Exhausted` are distinct because the remediation
/// differs: the first asks the user to broaden the filters, the second to
/// clear the session history.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("No games found. Adjust your filters.")]
    NoResults,

    #[error("Exhausted unique results for these filters. Clear the session history or broaden the filters.")]
    Exhausted,

    #[error("A discovery is already in flight for this session")]
    InFlight,

    #[error("Catalog unavailable: {0}")]
    Unavailable(#[from] CatalogError),
}
