use crate::api::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    services::ServeFile,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

/// Build the site router
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();
    let prometheus_enabled = state.config.observability.prometheus_enabled;

    let mut router = Router::new()
        // Health endpoints
        .route(
            "/health",
            get(handlers::health_check).fallback(handlers::method_not_allowed),
        )
        // Pages
        .route("/", get(handlers::home).fallback(handlers::method_not_allowed))
        .route(
            "/search",
            get(handlers::search_page).fallback(handlers::method_not_allowed),
        )
        .route(
            "/search-query",
            get(handlers::search_query).fallback(handlers::method_not_allowed),
        )
        .route(
            "/filter",
            post(handlers::filter).fallback(handlers::method_not_allowed),
        )
        .route(
            "/profil",
            get(handlers::profile).fallback(handlers::method_not_allowed),
        )
        // Static assets
        .route_service("/script.js", ServeFile::new(static_dir.join("script.js")))
        .route_service("/style.css", ServeFile::new(static_dir.join("style.css")));

    if prometheus_enabled {
        router = router.route(
            "/metrics",
            get(handlers::metrics).fallback(handlers::method_not_allowed),
        );
    }

    router
        .fallback(handlers::not_found)
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true))
                .on_response(DefaultOnResponse::new().include_headers(true)),
        )
}
