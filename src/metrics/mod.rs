//! Prometheus metrics for the catalog browser.
//!
//! Covers catalog reloads, upstream API calls, and search/filter traffic.
//! Metrics are always recorded; they are only exposed on `/metrics` once
//! [`init_metrics`] registered them with [`PROMETHEUS_REGISTRY`].
//!
//! # Example
//! ```no_run
//! use groupie_tracker::metrics::SEARCH_REQUESTS_TOTAL;
//!
//! SEARCH_REQUESTS_TOTAL.with_label_values(&["json"]).inc();
//! ```

use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Gauge, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
};

const NAMESPACE: &str = "groupie_tracker";

lazy_static! {
    /// Global Prometheus registry for all metrics
    pub static ref PROMETHEUS_REGISTRY: Registry = Registry::new();

    // ============================================================================
    // Catalog Metrics
    // ============================================================================

    /// Catalog reload attempts
    ///
    /// Labels: outcome (success, failure)
    pub static ref CATALOG_RELOADS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("catalog_reloads_total", "Total number of catalog reloads")
            .namespace(NAMESPACE),
        &["outcome"]
    ).expect("Failed to create CATALOG_RELOADS_TOTAL metric");

    /// Duration of successful catalog reloads in seconds
    pub static ref CATALOG_RELOAD_DURATION_SECONDS: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            "catalog_reload_duration_seconds",
            "Catalog reload duration in seconds"
        )
        .namespace(NAMESPACE)
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0])
    ).expect("Failed to create CATALOG_RELOAD_DURATION_SECONDS metric");

    /// Number of artists in the current snapshot
    pub static ref CATALOG_ARTISTS: Gauge = Gauge::with_opts(
        Opts::new("catalog_artists", "Artists in the current catalog snapshot")
            .namespace(NAMESPACE)
    ).expect("Failed to create CATALOG_ARTISTS metric");

    // ============================================================================
    // Upstream Metrics
    // ============================================================================

    /// Requests sent to the upstream catalog API
    ///
    /// Labels: endpoint, outcome
    pub static ref UPSTREAM_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("upstream_requests_total", "Total number of upstream API requests")
            .namespace(NAMESPACE),
        &["endpoint", "outcome"]
    ).expect("Failed to create UPSTREAM_REQUESTS_TOTAL metric");

    /// Upstream request duration in seconds
    ///
    /// Labels: endpoint
    pub static ref UPSTREAM_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "upstream_request_duration_seconds",
            "Upstream API request duration in seconds"
        )
        .namespace(NAMESPACE)
        .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["endpoint"]
    ).expect("Failed to create UPSTREAM_REQUEST_DURATION_SECONDS metric");

    // ============================================================================
    // Query Metrics
    // ============================================================================

    /// Search requests
    ///
    /// Labels: adapter (json, html)
    pub static ref SEARCH_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("search_requests_total", "Total number of search requests")
            .namespace(NAMESPACE),
        &["adapter"]
    ).expect("Failed to create SEARCH_REQUESTS_TOTAL metric");

    /// Number of results returned per search
    pub static ref SEARCH_RESULTS: Histogram = Histogram::with_opts(
        HistogramOpts::new("search_results", "Results returned per search")
            .namespace(NAMESPACE)
            .buckets(vec![0.0, 1.0, 2.0, 4.0, 8.0, 12.0, 16.0, 17.0])
    ).expect("Failed to create SEARCH_RESULTS metric");

    /// Filter requests
    ///
    /// Labels: outcome (matched, empty)
    pub static ref FILTER_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new("filter_requests_total", "Total number of filter requests")
            .namespace(NAMESPACE),
        &["outcome"]
    ).expect("Failed to create FILTER_REQUESTS_TOTAL metric");
}

/// Register all metrics with the global registry.
///
/// Fails if called twice in the same process.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    // Register catalog metrics
    PROMETHEUS_REGISTRY.register(Box::new(CATALOG_RELOADS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(CATALOG_RELOAD_DURATION_SECONDS.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(CATALOG_ARTISTS.clone()))?;

    // Register upstream metrics
    PROMETHEUS_REGISTRY.register(Box::new(UPSTREAM_REQUESTS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(UPSTREAM_REQUEST_DURATION_SECONDS.clone()))?;

    // Register query metrics
    PROMETHEUS_REGISTRY.register(Box::new(SEARCH_REQUESTS_TOTAL.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(SEARCH_RESULTS.clone()))?;
    PROMETHEUS_REGISTRY.register(Box::new(FILTER_REQUESTS_TOTAL.clone()))?;

    Ok(())
}

/// Encode all registered metrics in Prometheus text format
pub fn gather_metrics() -> String {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = PROMETHEUS_REGISTRY.gather();
    let mut buffer = Vec::new();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!("Failed to encode metrics: {}", e);
        return String::from("# Error encoding metrics\n");
    }

    String::from_utf8(buffer).unwrap_or_else(|e| {
        tracing::error!("Failed to convert metrics to string: {}", e);
        String::from("# Error converting metrics\n")
    })
}
