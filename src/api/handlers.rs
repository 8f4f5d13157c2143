use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::metrics::{FILTER_REQUESTS_TOTAL, SEARCH_REQUESTS_TOTAL, SEARCH_RESULTS};
use crate::models::{FilterCriteria, SearchResult};
use crate::render;
use axum::{
    extract::{Form, Query, RawQuery, State},
    http::{header, HeaderMap},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let snapshot = state.catalog.snapshot();
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        artists: snapshot.artists().len(),
        loaded_at: snapshot.loaded_at(),
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub artists: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Prometheus text exposition
pub async fn metrics() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        crate::metrics::gather_metrics(),
    )
}

/// Home page. Refreshes the catalog before rendering.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let snapshot = state.catalog.reload(state.source.as_ref()).await?;
    let page = render::home_page(&snapshot, &snapshot.unique_locations())?;
    Ok(Html(page))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub s: String,
}

/// Live suggestions for the search box
pub async fn search_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>> {
    let same_origin = headers
        .get("sec-fetch-site")
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value == "same-origin");
    if !same_origin {
        return Err(AppError::NotFound("search-query outside same origin".to_string()));
    }
    if raw.as_deref().map_or(true, str::is_empty) {
        return Err(AppError::NotFound("search-query without query string".to_string()));
    }

    let snapshot = state.catalog.snapshot();
    let results = state.engine.search(&snapshot, &params.s);

    SEARCH_REQUESTS_TOTAL.with_label_values(&["json"]).inc();
    SEARCH_RESULTS.observe(results.len() as f64);

    Ok(Json(results))
}

/// Search results page
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response> {
    let query = params.s.trim();
    if query.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let snapshot = state.catalog.snapshot();
    let results = state.engine.search(&snapshot, query);

    SEARCH_REQUESTS_TOTAL.with_label_values(&["html"]).inc();
    SEARCH_RESULTS.observe(results.len() as f64);

    let page = if results.is_empty() {
        render::not_found_page()?
    } else {
        render::search_page(query, &results)?
    };
    Ok(Html(page).into_response())
}

/// Structured filter submitted from the home page
pub async fn filter(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response> {
    let criteria = FilterCriteria::from_form(&fields);
    let snapshot = state.catalog.snapshot();
    let matches = state.engine.filter(&snapshot, &criteria);

    if matches.is_empty() {
        FILTER_REQUESTS_TOTAL.with_label_values(&["empty"]).inc();
        tracing::debug!(?criteria, "Filter matched nothing, redirecting home");
        return Ok(Redirect::to("/").into_response());
    }

    FILTER_REQUESTS_TOTAL.with_label_values(&["matched"]).inc();
    Ok(Html(render::filter_page(&matches)?).into_response())
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct ProfileParams {
    #[validate(required, length(min = 1, max = 10))]
    pub id: Option<String>,
}

impl ProfileParams {
    /// Artist id within `1..=max_id`
    pub fn artist_id(&self, max_id: u32) -> Result<u32> {
        self.validate()?;
        let raw = self.id.as_deref().unwrap_or_default();

        if raw.contains('/') {
            return Err(AppError::Validation(format!("artist id contains '/': {}", raw)));
        }

        let id: u32 = raw
            .parse()
            .map_err(|_| AppError::Validation(format!("artist id is not a number: {}", raw)))?;

        if !(1..=max_id).contains(&id) {
            return Err(AppError::Validation(format!(
                "artist id {} outside 1..={}",
                id, max_id
            )));
        }

        Ok(id)
    }
}

/// Artist detail page
pub async fn profile(
    State(state): State<AppState>,
    Query(params): Query<ProfileParams>,
) -> Result<Html<String>> {
    let id = params.artist_id(state.config.catalog.max_artist_id)?;
    let profile = state.source.fetch_profile(id).await?;
    Ok(Html(render::profile_page(&profile)?))
}

/// Fallback for unknown paths
pub async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}

/// Fallback for known paths hit with the wrong method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
