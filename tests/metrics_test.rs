//! Prometheus exposition through the router

mod common;

use axum::{body::Body, http::Request};
use common::*;
use groupie_tracker::{
    api::{build_router, AppState},
    config::Config,
    metrics::init_metrics,
};
use std::sync::Arc;
use tower::ServiceExt;

async fn body_of(app: &axum::Router, request: Request<Body>) -> String {
    let response = app.clone().oneshot(request).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_requests_show_up_in_metrics() {
    init_metrics().unwrap();

    let state = AppState::new(Arc::new(StaticSource::sample()), Config::default());
    let app = build_router(state);

    body_of(&app, Request::builder().uri("/").body(Body::empty()).unwrap()).await;
    body_of(
        &app,
        Request::builder()
            .uri("/search-query?s=queen")
            .header("Sec-Fetch-Site", "same-origin")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    let output = body_of(&app, Request::builder().uri("/metrics").body(Body::empty()).unwrap()).await;
    let metrics = parse_prometheus_output(&output);

    let reloads = &metrics["groupie_tracker_catalog_reloads_total"];
    assert!(reloads.iter().any(|l| l.contains(r#"outcome="success""#)));

    let searches = &metrics["groupie_tracker_search_requests_total"];
    assert!(searches.iter().any(|l| l.contains(r#"adapter="json""#)));

    let artists = &metrics["groupie_tracker_catalog_artists"];
    assert_eq!(artists[0], "groupie_tracker_catalog_artists 4");

    assert!(metrics.contains_key("groupie_tracker_search_results_count"));
}
