//! Free-text search over a catalog snapshot.
//!
//! Matching is plain prefix/substring on lower-cased text. Results are
//! emitted in pass order:
//!
//! 1. artist names starting with the query, then member names starting
//!    with it
//! 2. artist names containing (not starting with) the query
//! 3. first album labels starting with the query
//! 4. founding years starting with the query
//! 5. member names containing (not starting with) the query
//! 6. locations containing the query
//!
//! Within a pass, snapshot order is kept. See [`CapPolicy`] for how the
//! result cap applies.

use crate::models::{Artist, Category, FilterCriteria, FilterMatch, SearchResult};
use crate::search::{filter, CapPolicy, SearchConfig};
use crate::state::Snapshot;

/// Runs searches and filters against a [`Snapshot`]
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    config: SearchConfig,
}

impl QueryEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search every attribute of every artist for `query`.
    ///
    /// The query is trimmed and lower-cased; an empty query yields no results.
    pub fn search(&self, snapshot: &Snapshot, query: &str) -> Vec<SearchResult> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let artists = snapshot.artists();
        let mut out = Collector::new(&self.config);

        prefix_pass(artists, &query, &mut out);
        name_contains_pass(artists, &query, &mut out);
        first_album_pass(artists, &query, &mut out);
        creation_date_pass(artists, &query, &mut out);
        member_contains_pass(artists, &query, &mut out);
        location_pass(snapshot, &query, &mut out);

        let results = out.finish();
        tracing::debug!(query = %query, hits = results.len(), "Search completed");
        results
    }

    /// Artists satisfying every active check of `criteria`, in snapshot order
    pub fn filter(&self, snapshot: &Snapshot, criteria: &FilterCriteria) -> Vec<FilterMatch> {
        let matches: Vec<FilterMatch> = snapshot
            .artists()
            .iter()
            .filter(|artist| filter::matches(artist, snapshot.locations_for(artist.id), criteria))
            .map(|artist| FilterMatch {
                image: artist.image.clone(),
                id: artist.id,
                name: artist.name.clone(),
            })
            .collect();

        tracing::debug!(matches = matches.len(), "Filter completed");
        matches
    }
}

/// Accumulates results and enforces the cap
struct Collector {
    results: Vec<SearchResult>,
    cap: usize,
    policy: CapPolicy,
}

impl Collector {
    fn new(config: &SearchConfig) -> Self {
        Self {
            results: Vec::with_capacity(config.result_cap + 1),
            cap: config.result_cap,
            policy: config.cap_policy,
        }
    }

    /// Whether the attribute passes (1-5) may still append
    fn is_open(&self) -> bool {
        match self.policy {
            CapPolicy::Legacy => self.results.len() <= self.cap,
            CapPolicy::Strict => self.results.len() < self.cap,
        }
    }

    /// Whether the location pass may still append
    fn has_room(&self) -> bool {
        self.results.len() < self.cap
    }

    /// Append unless the attribute passes are closed. Returns false once
    /// nothing more will be accepted.
    fn offer(&mut self, result: impl FnOnce() -> SearchResult) -> bool {
        if !self.is_open() {
            return false;
        }
        self.results.push(result());
        true
    }

    fn offer_location(&mut self, result: impl FnOnce() -> SearchResult) -> bool {
        if !self.has_room() {
            return false;
        }
        self.results.push(result());
        true
    }

    fn finish(self) -> Vec<SearchResult> {
        self.results
    }
}

fn contains_not_prefix(haystack: &str, query: &str) -> bool {
    !haystack.starts_with(query) && haystack.contains(query)
}

fn artist_hit(artist: &Artist) -> SearchResult {
    SearchResult::new(
        Category::Artist,
        artist.id,
        &artist.name,
        &artist.name,
        Some(artist.image.clone()),
    )
}

fn member_hit(artist: &Artist, member: &str) -> SearchResult {
    SearchResult::new(
        Category::Member,
        artist.id,
        member,
        &artist.name,
        Some(artist.image.clone()),
    )
}

/// Artist name prefixes across the whole catalog, then member name prefixes
fn prefix_pass(artists: &[Artist], query: &str, out: &mut Collector) {
    for artist in artists {
        if artist.name.to_lowercase().starts_with(query) && !out.offer(|| artist_hit(artist)) {
            return;
        }
    }

    for artist in artists {
        for member in &artist.members {
            if member.to_lowercase().starts_with(query) && !out.offer(|| member_hit(artist, member))
            {
                return;
            }
        }
    }
}

fn name_contains_pass(artists: &[Artist], query: &str, out: &mut Collector) {
    for artist in artists {
        if contains_not_prefix(&artist.name.to_lowercase(), query)
            && !out.offer(|| artist_hit(artist))
        {
            return;
        }
    }
}

fn first_album_pass(artists: &[Artist], query: &str, out: &mut Collector) {
    for artist in artists {
        if artist.first_album.to_lowercase().starts_with(query)
            && !out.offer(|| {
                SearchResult::new(
                    Category::FirstAlbum,
                    artist.id,
                    &artist.first_album,
                    &artist.name,
                    Some(artist.image.clone()),
                )
            })
        {
            return;
        }
    }
}

fn creation_date_pass(artists: &[Artist], query: &str, out: &mut Collector) {
    for artist in artists {
        let year = artist.creation_date.to_string();
        if year.starts_with(query)
            && !out.offer(|| {
                SearchResult::new(
                    Category::CreationDate,
                    artist.id,
                    year.as_str(),
                    &artist.name,
                    Some(artist.image.clone()),
                )
            })
        {
            return;
        }
    }
}

fn member_contains_pass(artists: &[Artist], query: &str, out: &mut Collector) {
    for artist in artists {
        for member in &artist.members {
            if contains_not_prefix(&member.to_lowercase(), query)
                && !out.offer(|| member_hit(artist, member))
            {
                return;
            }
        }
    }
}

fn location_pass(snapshot: &Snapshot, query: &str, out: &mut Collector) {
    for artist in snapshot.artists() {
        for location in snapshot.locations_for(artist.id) {
            if location.to_lowercase().contains(query)
                && !out.offer_location(|| {
                    SearchResult::new(
                        Category::Location,
                        artist.id,
                        location.as_str(),
                        &artist.name,
                        Some(artist.image.clone()),
                    )
                })
            {
                return;
            }
        }
    }
}
