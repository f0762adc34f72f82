use roulette_core::{FilterSpec, SortOrder};

/// Fixed page size for discovery listings. One page is fetched per
/// discovery; no automatic pagination.
pub const DEFAULT_PAGE_SIZE: u32 = 40;

/// Query parameters for the catalog's game listing endpoint.
#[derive(Debug, Clone)]
pub struct GameQuery {
    pub genres: Vec<u32>,
    pub platforms: Vec<u32>,
    /// Inclusive release-date range, `YYYY-MM-DD` each end.
    pub dates: (String, String),
    /// Inclusive critic-score range, when the star filter is active.
    pub critic_range: Option<(u8, u8)>,
    pub ordering: SortOrder,
    pub page_size: u32,
}

impl GameQuery {
    /// Build a listing query from user filters.
    ///
    /// The critic-score bound is derived from the star rating
    /// ([`FilterSpec::critic_floor`]) and capped at 100. Genre and
    /// platform constraints are included only when non-empty.
    pub fn from_filters(filters: &FilterSpec, current_year: i32) -> Self {
        Self {
            genres: filters.genre.into_iter().collect(),
            platforms: filters.platforms.clone(),
            dates: filters.date_range(current_year),
            critic_range: filters.critic_floor().map(|floor| (floor, 100)),
            ordering: filters.ordering,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Serialize into request query pairs. Empty constraints are omitted
    /// entirely rather than sent as empty strings.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("ordering", self.ordering.as_query_value().to_string()),
            ("page_size", self.page_size.to_string()),
            ("dates", format!("{},{}", self.dates.0, self.dates.1)),
        ];
        if let Some((lo, hi)) = self.critic_range {
            params.push(("metacritic", format!("{lo},{hi}")));
        }
        if !self.genres.is_empty() {
            params.push(("genres", join_ids(&self.genres)));
        }
        if !self.platforms.is_empty() {
            params.push(("platforms", join_ids(&self.platforms)));
        }
        params
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
