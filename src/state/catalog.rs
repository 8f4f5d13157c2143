//! In-memory dataset cache.
//!
//! The cache owns one immutable [`Snapshot`] behind an `Arc`. A reload
//! fetches artists and locations, builds a complete new snapshot and swaps
//! the pointer under a short write lock, so readers always see either the
//! previous or the new dataset and never a mix of both.

use crate::error::Result;
use crate::metrics::{CATALOG_ARTISTS, CATALOG_RELOADS_TOTAL, CATALOG_RELOAD_DURATION_SECONDS};
use crate::models::{Artist, LocationSet};
use crate::upstream::RecordSource;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

/// Immutable view of the catalog at one point in time
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    artists: Vec<Artist>,
    location_sets: Vec<LocationSet>,
    by_id: HashMap<u32, usize>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// Empty snapshot used before the first successful load
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(artists: Vec<Artist>, location_sets: Vec<LocationSet>) -> Self {
        let by_id = location_sets
            .iter()
            .enumerate()
            .map(|(position, set)| (set.id, position))
            .collect();

        Self {
            artists,
            location_sets,
            by_id,
            loaded_at: Some(Utc::now()),
        }
    }

    /// Artists in upstream order
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Location sets in upstream order
    pub fn location_sets(&self) -> &[LocationSet] {
        &self.location_sets
    }

    /// Locations of the artist with `id`, empty if it has none
    pub fn locations_for(&self, id: u32) -> &[String] {
        self.by_id
            .get(&id)
            .map(|&position| self.location_sets[position].locations.as_slice())
            .unwrap_or(&[])
    }

    pub fn artist(&self, id: u32) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    /// Distinct location strings across all sets, first occurrence first.
    /// Comparison is exact and case-sensitive.
    pub fn unique_locations(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for location in self.location_sets.iter().flat_map(|set| &set.locations) {
            if seen.insert(location.as_str()) {
                unique.push(location.clone());
            }
        }

        unique
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

/// Process-wide holder of the current [`Snapshot`]
pub struct CatalogCache {
    current: RwLock<Arc<Snapshot>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::empty())),
        }
    }

    /// Current snapshot. Never blocks on a reload in progress.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().clone()
    }

    /// Replace the current snapshot in one step
    pub fn publish(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        *self.current.write() = snapshot.clone();
        snapshot
    }

    /// Fetch artists and locations and publish them as a new snapshot.
    ///
    /// Both fetches must succeed; on any failure the current snapshot is
    /// left untouched and the error is returned.
    pub async fn reload(&self, source: &dyn RecordSource) -> Result<Arc<Snapshot>> {
        let started = Instant::now();

        let fetched = tokio::try_join!(source.fetch_artists(), source.fetch_locations());
        let (artists, location_sets) = match fetched {
            Ok(records) => records,
            Err(e) => {
                CATALOG_RELOADS_TOTAL.with_label_values(&["failure"]).inc();
                tracing::warn!(error = %e, "Catalog reload failed, keeping previous snapshot");
                return Err(e);
            }
        };

        if artists.len() != location_sets.len() {
            tracing::warn!(
                artists = artists.len(),
                location_sets = location_sets.len(),
                "Artist and location counts differ"
            );
        }

        let snapshot = self.publish(Snapshot::new(artists, location_sets));

        let elapsed = started.elapsed();
        CATALOG_RELOADS_TOTAL.with_label_values(&["success"]).inc();
        CATALOG_RELOAD_DURATION_SECONDS.observe(elapsed.as_secs_f64());
        CATALOG_ARTISTS.set(snapshot.artists().len() as f64);

        tracing::info!(
            artists = snapshot.artists().len(),
            location_sets = snapshot.location_sets().len(),
            duration_ms = elapsed.as_millis() as u64,
            "Catalog reloaded"
        );

        Ok(snapshot)
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}
