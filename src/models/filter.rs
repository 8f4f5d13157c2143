use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Highest member count offered by the filter form (`num_members_1..8`)
pub const MAX_MEMBER_OPTION: usize = 8;

/// Inclusive year bounds. A missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min.map_or(true, |min| year >= min) && self.max.map_or(true, |max| year <= max)
    }

    /// Build a range from the two raw form values.
    ///
    /// Returns `None` when both inputs are empty. A non-empty input that is
    /// not an integer counts as `0`.
    fn from_form(min: Option<&str>, max: Option<&str>) -> Option<Self> {
        let min = non_empty(min).map(parse_bound);
        let max = non_empty(max).map(parse_bound);

        if min.is_none() && max.is_none() {
            None
        } else {
            Some(Self { min, max })
        }
    }
}

/// Structured filter submitted from the home page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Founding year bounds
    pub creation_years: Option<YearRange>,

    /// First release year bounds
    pub first_album_years: Option<YearRange>,

    /// Accepted member counts; empty means any
    #[serde(default)]
    pub member_counts: BTreeSet<usize>,

    /// Case-sensitive suffix one of the artist's locations must end with
    pub location_suffix: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_creation_years(mut self, min: i32, max: i32) -> Self {
        self.creation_years = Some(YearRange::new(min, max));
        self
    }

    pub fn with_first_album_years(mut self, min: i32, max: i32) -> Self {
        self.first_album_years = Some(YearRange::new(min, max));
        self
    }

    pub fn with_member_count(mut self, count: usize) -> Self {
        self.member_counts.insert(count);
        self
    }

    pub fn with_location_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.location_suffix = Some(suffix.into());
        self
    }

    /// True when no check is active
    pub fn is_empty(&self) -> bool {
        self.creation_years.is_none()
            && self.first_album_years.is_none()
            && self.member_counts.is_empty()
            && self.location_suffix.is_none()
    }

    /// Decode the url-encoded `/filter` form.
    ///
    /// Recognized fields: `creation_date_min`, `creation_date_max`,
    /// `first_album_min`, `first_album_max`, `num_members_1` ..
    /// `num_members_8` (any non-empty value selects the count) and `city`.
    pub fn from_form(fields: &HashMap<String, String>) -> Self {
        let field = |name: &str| fields.get(name).map(String::as_str);

        let creation_years =
            YearRange::from_form(field("creation_date_min"), field("creation_date_max"));
        let first_album_years =
            YearRange::from_form(field("first_album_min"), field("first_album_max"));

        let member_counts = (1..=MAX_MEMBER_OPTION)
            .filter(|count| non_empty(field(&format!("num_members_{}", count))).is_some())
            .collect();

        let location_suffix = non_empty(field("city")).map(str::to_string);

        Self {
            creation_years,
            first_album_years,
            member_counts,
            location_suffix,
        }
    }
}

/// One artist kept by the filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterMatch {
    pub image: String,
    pub id: u32,
    pub name: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_bound(raw: &str) -> i32 {
    raw.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_form_has_no_checks() {
        let criteria = FilterCriteria::from_form(&form(&[
            ("creation_date_min", ""),
            ("creation_date_max", ""),
            ("city", ""),
        ]));
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_form_ranges_and_members() {
        let criteria = FilterCriteria::from_form(&form(&[
            ("creation_date_min", "1969"),
            ("creation_date_max", "1971"),
            ("first_album_min", "abc"),
            ("num_members_2", "on"),
            ("num_members_5", "on"),
            ("num_members_9", "on"),
            ("city", "uk"),
        ]));

        assert_eq!(criteria.creation_years, Some(YearRange::new(1969, 1971)));
        assert_eq!(
            criteria.first_album_years,
            Some(YearRange {
                min: Some(0),
                max: None
            })
        );
        assert_eq!(criteria.member_counts.iter().copied().collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(criteria.location_suffix.as_deref(), Some("uk"));
    }

    #[test]
    fn test_year_range_is_inclusive() {
        let range = YearRange::new(1970, 1970);
        assert!(range.contains(1970));
        assert!(!range.contains(1969));
        assert!(!range.contains(1971));

        let open_max = YearRange {
            min: Some(1990),
            max: None,
        };
        assert!(open_max.contains(2024));
        assert!(!open_max.contains(1989));
    }
}
