//! API Handlers
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use canary_core::{badge_status, summarize, BadgeStatus, DatasetError, CANARY_VERSION};
use canary_store::{Publisher, SiteStats};

use crate::{badges, AppState};

/// Page payload for one publisher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherPage {
    pub publisher: Publisher,
    pub errors: Vec<PageError>,
    pub broken_count: usize,
    pub validation_count: usize,
}

/// One display row: the selected error for a dataset, tagged with the
/// category label it was selected from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageError {
    pub category: String,
    pub error: DatasetError,
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": CANARY_VERSION })),
    )
}

pub async fn stats(State(state): State<AppState>) -> Json<SiteStats> {
    Json(state.store.stats())
}

pub async fn publishers(State(state): State<AppState>) -> Json<Value> {
    let results: Vec<Value> = state
        .store
        .publishers()
        .into_iter()
        .map(|p| json!({ "id": p.id, "text": p.name }))
        .collect();
    Json(json!({ "results": results }))
}

pub async fn publisher(
    State(state): State<AppState>,
    Path(publisher_id): Path<String>,
) -> Result<Json<PublisherPage>, (StatusCode, Json<Value>)> {
    let publisher = state.store.publisher(&publisher_id).ok_or((
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "publisher not found" })),
    ))?;
    let collections = state.store.errors(&publisher_id).unwrap_or_default();
    let summary = summarize(&collections);

    state.metrics.page_requests.inc();
    Ok(Json(PublisherPage {
        publisher,
        errors: summary
            .errors
            .into_iter()
            .map(|(category, error)| PageError {
                category: category.label().to_string(),
                error,
            })
            .collect(),
        broken_count: summary.broken_count,
        validation_count: summary.validation_count,
    }))
}

/// Serves `/publisher/badge/{publisher_id}.svg`. Unknown publishers get the
/// `not_found` badge rather than a 404, so embedded images never break.
/// The `.svg` suffix is required; anything else is not a badge URL.
pub async fn publisher_badge(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Response {
    let Some(publisher_id) = filename.strip_suffix(".svg") else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let status = match state.store.errors(publisher_id) {
        Some(collections) => badge_status(&collections),
        None => BadgeStatus::NotFound,
    };

    state.metrics.badge_requests.inc();
    (
        [(header::CONTENT_TYPE, "image/svg+xml")],
        badges::asset(status),
    )
        .into_response()
}

pub async fn metrics(State(state): State<AppState>) -> Result<String, StatusCode> {
    crate::metrics::encode(&state.metrics.registry)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}
