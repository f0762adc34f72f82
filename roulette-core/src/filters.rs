use std::str::FromStr;

/// Sort orders accepted by the catalog's listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Highest community rating first.
    #[default]
    RatingDesc,
    /// Most recent release first.
    ReleasedDesc,
    /// Highest critic score first.
    MetacriticDesc,
    /// Alphabetical by name.
    Name,
}

impl SortOrder {
    /// The value sent on the wire (a leading `-` means descending).
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortOrder::RatingDesc => "-rating",
            SortOrder::ReleasedDesc => "-released",
            SortOrder::MetacriticDesc => "-metacritic",
            SortOrder::Name => "name",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown sort order: {0} (expected rating, released, metacritic, or name)")]
pub struct OrderingParseError(String);

impl FromStr for SortOrder {
    type Err = OrderingParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches('-').to_ascii_lowercase().as_str() {
            "rating" => Ok(SortOrder::RatingDesc),
            "released" => Ok(SortOrder::ReleasedDesc),
            "metacritic" => Ok(SortOrder::MetacriticDesc),
            "name" => Ok(SortOrder::Name),
            _ => Err(OrderingParseError(s.to_string())),
        }
    }
}

/// Earliest release year considered when the user leaves the range open.
pub const DEFAULT_START_YEAR: i32 = 1980;

/// User-chosen discovery constraints. Mutated only by the caller; the
/// discovery engine treats them as read-only input.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Category id, when the user narrowed to one genre.
    pub genre: Option<u32>,
    /// Platform ids; order is irrelevant.
    pub platforms: Vec<u32>,
    /// Minimum community star rating (0-5). Zero means unconstrained.
    pub min_rating: f32,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
    pub ordering: SortOrder,
}

impl FilterSpec {
    /// Lower critic-score bound derived from the star rating, mapping the
    /// 0-5 star scale onto the catalog's 0-100 critic scale. `None` when
    /// the star filter is unconstrained.
    ///
    /// The derived bound is only a server-side prefilter; the star filter
    /// itself is applied client-side after the page comes back.
    pub fn critic_floor(&self) -> Option<u8> {
        if self.min_rating > 0.0 {
            Some((self.min_rating * 20.0).floor() as u8)
        } else {
            None
        }
    }

    /// Inclusive release-date range as `YYYY-MM-DD` strings. Open ends
    /// default to 1980 and the current year respectively.
    pub fn date_range(&self, current_year: i32) -> (String, String) {
        let start = self.start_year.unwrap_or(DEFAULT_START_YEAR);
        let end = self.end_year.unwrap_or(current_year);
        (format!("{start}-01-01"), format!("{end}-12-31"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critic_floor_maps_stars_to_critic_scale() {
        let mut filters = FilterSpec {
            min_rating: 4.0,
            ..Default::default()
        };
        assert_eq!(filters.critic_floor(), Some(80));

        filters.min_rating = 3.5;
        assert_eq!(filters.critic_floor(), Some(70));

        filters.min_rating = 4.3;
        assert_eq!(filters.critic_floor(), Some(86));
    }

    #[test]
    fn critic_floor_absent_when_unconstrained() {
        let filters = FilterSpec::default();
        assert_eq!(filters.critic_floor(), None);
    }

    #[test]
    fn date_range_defaults_to_open_bounds() {
        let filters = FilterSpec::default();
        let (start, end) = filters.date_range(2026);
        assert_eq!(start, "1980-01-01");
        assert_eq!(end, "2026-12-31");
    }

    #[test]
    fn date_range_uses_explicit_years() {
        let filters = FilterSpec {
            start_year: Some(2015),
            end_year: Some(2020),
            ..Default::default()
        };
        let (start, end) = filters.date_range(2026);
        assert_eq!(start, "2015-01-01");
        assert_eq!(end, "2020-12-31");
    }

    #[test]
    fn sort_order_round_trips_through_query_values() {
        for order in [
            SortOrder::RatingDesc,
            SortOrder::ReleasedDesc,
            SortOrder::MetacriticDesc,
            SortOrder::Name,
        ] {
            assert_eq!(order.as_query_value().parse::<SortOrder>().unwrap(), order);
        }
        assert!("popularity".parse::<SortOrder>().is_err());
    }
}
