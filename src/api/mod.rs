pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::{config::Config, search::QueryEngine, state::CatalogCache, upstream::RecordSource};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogCache>,
    pub source: Arc<dyn RecordSource>,
    pub engine: Arc<QueryEngine>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(source: Arc<dyn RecordSource>, config: Config) -> Self {
        Self {
            catalog: Arc::new(CatalogCache::new()),
            source,
            engine: Arc::new(QueryEngine::new(config.search.clone())),
            config: Arc::new(config),
        }
    }

    /// Use an existing cache instead of a fresh one
    pub fn with_catalog(mut self, catalog: Arc<CatalogCache>) -> Self {
        self.catalog = catalog;
        self
    }
}
