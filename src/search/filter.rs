//! Filter predicate over a single artist.

use crate::models::{Artist, FilterCriteria};
use crate::search::{QueryError, QueryResult};

/// Number of trailing characters holding the year in a release label
const YEAR_DIGITS: usize = 4;

/// Year encoded in the last four characters of a release label
/// (`"14-12-1973"` -> `1973`).
pub fn extract_trailing_year(label: &str) -> QueryResult<i32> {
    let chars = label.chars().count();
    if chars < YEAR_DIGITS {
        return Err(QueryError::LabelTooShort(label.to_string()));
    }

    let tail: String = label.chars().skip(chars - YEAR_DIGITS).collect();
    if !tail.chars().all(|c| c.is_ascii_digit()) {
        return Err(QueryError::MalformedYear(label.to_string()));
    }

    tail.parse()
        .map_err(|_| QueryError::MalformedYear(label.to_string()))
}

/// Whether `artist` passes every active check of `criteria`.
///
/// Checks run in order (founding year, first album year, member count,
/// location suffix) and stop at the first failure. A release label without
/// a readable year fails the album check.
pub fn matches(artist: &Artist, locations: &[String], criteria: &FilterCriteria) -> bool {
    if let Some(range) = &criteria.creation_years {
        if !range.contains(artist.creation_date) {
            return false;
        }
    }

    if let Some(range) = &criteria.first_album_years {
        match extract_trailing_year(&artist.first_album) {
            Ok(year) if range.contains(year) => {}
            Ok(_) => return false,
            Err(e) => {
                tracing::debug!(artist_id = artist.id, error = %e, "Excluding artist with unreadable album year");
                return false;
            }
        }
    }

    if !criteria.member_counts.is_empty()
        && !criteria.member_counts.contains(&artist.member_count())
    {
        return false;
    }

    if let Some(suffix) = &criteria.location_suffix {
        if !locations.iter().any(|location| location.ends_with(suffix.as_str())) {
            return false;
        }
    }

    true
}
