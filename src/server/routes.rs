//! HTTP route handlers for the vector store API.
//!
//! This layer owns request validation: bodies are decoded as JSON regardless
//! of `Content-Type`, empty vectors are rejected before they reach the store,
//! and a missing or non-positive `k` becomes 1. Every rejection is a 400 with
//! an `{"error": ...}` body.

use crate::error::VectorDbError;
use crate::metrics::LatencySummary;
use crate::server::AppState;
use crate::storage::SearchResult;
use crate::vector::Vector;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

// --- Request/Response types ---

#[derive(Deserialize)]
pub struct InsertRequest {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub vector: Vec<f32>,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub vector: Vec<f32>,
    pub k: Option<i64>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub count: usize,
    pub latency: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub vector_count: usize,
}

#[derive(Serialize)]
pub struct MetricsResponse {
    pub total_searches: u64,
    pub total_inserts: u64,
    pub search_latency: LatencySummary,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for VectorDbError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!("request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, VectorDbError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("rejected request body: {}", e);
        VectorDbError::from(e)
    })
}

/// Map a requested `k` onto the store's contract: absent or non-positive means 1.
pub fn normalize_k(k: Option<i64>) -> usize {
    match k {
        Some(k) if k > 0 => usize::try_from(k).unwrap_or(usize::MAX),
        _ => 1,
    }
}

// --- Router ---

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/insert", post(insert_vector))
        .route("/search", post(search_vectors))
        .route("/health", get(health))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}

// --- Handlers ---

async fn insert_vector(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<serde_json::Value>), VectorDbError> {
    let req: InsertRequest = decode(&body)?;
    let vector = Vector::non_empty(req.vector).map_err(|e| {
        warn!(id = %req.id, "rejected insert: {}", e);
        e
    })?;

    state.store.insert(req.id.clone(), vector);
    state.metrics_mut().record_insert();

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"id": req.id, "status": "inserted"})),
    ))
}

async fn search_vectors(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SearchResponse>, VectorDbError> {
    let req: SearchRequest = decode(&body)?;
    let k = normalize_k(req.k);

    let start = Instant::now();
    let results = state.store.search(&req.vector, k);
    let elapsed = start.elapsed();

    state.metrics_mut().record_search(elapsed);
    debug!(k, count = results.len(), ?elapsed, "search complete");

    Ok(Json(SearchResponse {
        count: results.len(),
        results,
        latency: format!("{:?}", elapsed),
    }))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        vector_count: state.store.len(),
    })
}

async fn get_metrics(State(state): State<Arc<AppState>>) -> Json<MetricsResponse> {
    let metrics = state.metrics();

    Json(MetricsResponse {
        total_searches: metrics.searches(),
        total_inserts: metrics.inserts(),
        search_latency: metrics.latency_summary(),
    })
}
