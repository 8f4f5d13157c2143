//! Shared fixtures for integration tests
//!
//! Provides a small in-memory catalog and a [`RecordSource`] serving it, with
//! switches to simulate upstream failures.

#![allow(dead_code)]

use async_trait::async_trait;
use groupie_tracker::error::{AppError, Result};
use groupie_tracker::models::{Artist, ConcertDates, LocationSet, Profile, Relation};
use groupie_tracker::state::Snapshot;
use groupie_tracker::upstream::RecordSource;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

pub fn artist(id: u32, name: &str, members: &[&str], creation_date: i32, first_album: &str) -> Artist {
    Artist {
        id,
        image: format!("https://groupietrackers.herokuapp.com/api/images/{}.jpeg", id),
        name: name.to_string(),
        members: members.iter().map(|m| m.to_string()).collect(),
        creation_date,
        first_album: first_album.to_string(),
    }
}

pub fn location_set(id: u32, locations: &[&str]) -> LocationSet {
    LocationSet {
        id,
        locations: locations.iter().map(|l| l.to_string()).collect(),
    }
}

/// Four artists, Queen first
pub fn sample_artists() -> Vec<Artist> {
    vec![
        artist(1, "Queen", &["Freddie", "Brian"], 1970, "01-07-1973"),
        artist(
            2,
            "Pink Floyd",
            &["Roger Waters", "David Gilmour", "Nick Mason", "Richard Wright"],
            1965,
            "05-08-1967",
        ),
        artist(
            3,
            "The Rolling Stones",
            &["Mick Jagger", "Keith Richards", "Ron Wood", "Charlie Watts", "Bill Wyman"],
            1962,
            "16-04-1964",
        ),
        artist(4, "Eminem", &["Eminem"], 1996, "12-11-1996"),
    ]
}

pub fn sample_locations() -> Vec<LocationSet> {
    vec![
        location_set(1, &["london-uk", "osaka-japan"]),
        location_set(2, &["london-uk", "los_angeles-usa"]),
        location_set(3, &["toronto-canada", "new_york-usa"]),
        location_set(4, &["detroit-usa"]),
    ]
}

pub fn sample_snapshot() -> Snapshot {
    Snapshot::new(sample_artists(), sample_locations())
}

/// In-memory catalog with failure switches
#[derive(Default)]
pub struct StaticSource {
    pub artists: Vec<Artist>,
    pub locations: Vec<LocationSet>,
    pub fail_artists: AtomicBool,
    pub fail_locations: AtomicBool,
    pub artist_fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(artists: Vec<Artist>, locations: Vec<LocationSet>) -> Self {
        Self {
            artists,
            locations,
            ..Default::default()
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_artists(), sample_locations())
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_artists.store(failing, Ordering::SeqCst);
        self.fail_locations.store(failing, Ordering::SeqCst);
    }

    pub fn artist_fetch_count(&self) -> usize {
        self.artist_fetches.load(Ordering::SeqCst)
    }
}

fn unavailable(path: &str) -> AppError {
    AppError::upstream(format!("memory://{}", path), "source unavailable")
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch_artists(&self) -> Result<Vec<Artist>> {
        self.artist_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_artists.load(Ordering::SeqCst) {
            return Err(unavailable("/artists"));
        }
        Ok(self.artists.clone())
    }

    async fn fetch_locations(&self) -> Result<Vec<LocationSet>> {
        if self.fail_locations.load(Ordering::SeqCst) {
            return Err(unavailable("/locations"));
        }
        Ok(self.locations.clone())
    }

    async fn fetch_profile(&self, id: u32) -> Result<Profile> {
        let artist = self
            .artists
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| unavailable(&format!("/artists/{}", id)))?;
        let locations = self
            .locations
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .unwrap_or_else(|| location_set(id, &[]));

        let mut dates_locations = BTreeMap::new();
        for location in &locations.locations {
            dates_locations.insert(location.clone(), vec!["01-01-2020".to_string()]);
        }

        Ok(Profile {
            artist,
            dates: ConcertDates {
                id,
                dates: vec!["*01-01-2020".to_string()],
            },
            relation: Relation {
                id,
                dates_locations,
            },
            locations,
        })
    }
}

/// Parse Prometheus exposition text into metric name -> sample lines
pub fn parse_prometheus_output(output: &str) -> HashMap<String, Vec<String>> {
    let mut metrics: HashMap<String, Vec<String>> = HashMap::new();

    for line in output.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let name = line
            .split(|c: char| c == '{' || c == ' ')
            .next()
            .unwrap_or_default()
            .to_string();
        metrics.entry(name).or_default().push(line.to_string());
    }

    metrics
}
