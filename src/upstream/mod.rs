//! Access to the remote catalog API.
//!
//! The rest of the crate depends only on [`RecordSource`]; the HTTP client
//! in [`client`] is one implementation, tests supply in-memory ones.

pub mod client;

pub use client::HttpRecordSource;

use crate::error::Result;
use crate::models::{Artist, LocationSet, Profile};
use async_trait::async_trait;

/// Read-only source of catalog records
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// All artists, in upstream order
    async fn fetch_artists(&self) -> Result<Vec<Artist>>;

    /// All location sets, in upstream order
    async fn fetch_locations(&self) -> Result<Vec<LocationSet>>;

    /// Artist, locations, dates and relation for one id. Fails as a whole
    /// if any of the four lookups fails.
    async fn fetch_profile(&self, id: u32) -> Result<Profile>;
}
