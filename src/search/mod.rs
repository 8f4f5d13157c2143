//! Query engine over the cached catalog
//!
//! Two kinds of query run against a [`Snapshot`](crate::state::Snapshot):
//!
//! - **Free-text search**: prefix and substring matching across artist
//!   names, first album labels, founding years, members and locations,
//!   ordered by pass and capped (see [`CapPolicy`]).
//! - **Filter**: founding/first-album year ranges, member counts and a
//!   location suffix, all of which must hold.
//!
//! # Example
//!
//! ```no_run
//! use groupie_tracker::models::FilterCriteria;
//! use groupie_tracker::search::{QueryEngine, SearchConfig};
//! use groupie_tracker::state::Snapshot;
//!
//! let engine = QueryEngine::new(SearchConfig::default());
//! let snapshot = Snapshot::empty();
//!
//! let hits = engine.search(&snapshot, "queen");
//! let kept = engine.filter(&snapshot, &FilterCriteria::new().with_creation_years(1960, 1979));
//! println!("{} hits, {} artists kept", hits.len(), kept.len());
//! ```

mod config;
mod engine;
mod error;
pub mod filter;

pub use config::{CapPolicy, SearchConfig, SearchConfigBuilder};
pub use engine::QueryEngine;
pub use error::{QueryError, QueryResult};
pub use filter::{extract_trailing_year, matches};
