#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    error::GradingError,
    grade::{Grader, GradingResult},
    types::{ProjectDefinition, Submission},
};

/// Shared state of the HTTP service.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Grader used for every request.
    pub grader: Arc<Grader>,
}

impl AppState {
    /// State that grades with `grader`.
    pub fn new(grader: Grader) -> Self {
        Self {
            grader: Arc::new(grader),
        }
    }
}

/// Body of `POST /grade`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    /// Project to grade against.
    pub project:    ProjectDefinition,
    /// Files and links being graded.
    pub submission: Submission,
}

/// One scorer and the category names routed to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryListing {
    /// Scorer name.
    pub scorer:     String,
    /// Normalized category names.
    pub categories: Vec<String>,
}

/// Failure of a request, rendered as `{ "error": ... }`.
#[derive(Debug)]
pub enum ApiError {
    /// The submission was refused.
    Rejected(GradingError),
    /// Grading did not finish.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Rejected(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::Internal(err) => {
                tracing::error!("grading failed: {err:#}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Grading failed".to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Grades the posted submission.
pub async fn grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<GradingResult>, ApiError> {
    tracing::info!(
        project = request.project.id.as_deref().unwrap_or("-"),
        files = request.submission.len(),
        "grade request"
    );

    let grader = Arc::clone(&state.grader);
    let GradeRequest {
        project,
        submission,
    } = request;
    let outcome = tokio::task::spawn_blocking(move || grader.grade(&project, &submission))
        .await
        .context("Grading task did not complete")
        .map_err(ApiError::Internal)?;

    outcome.map(Json).map_err(|err| {
        tracing::info!(%err, "submission rejected");
        ApiError::Rejected(err)
    })
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Lists the category names known to the grader.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<CategoryListing>> {
    let listing = state
        .grader
        .registry()
        .names_by_kind()
        .into_iter()
        .map(|(kind, categories)| CategoryListing {
            scorer: kind.to_string(),
            categories,
        })
        .collect();
    Json(listing)
}

/// Routes of the grading service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/grade", post(grade))
        .route("/health", get(health))
        .route("/categories", get(categories))
        .with_state(state)
}

/// Serves the grading API on `addr` until the process is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    tracing::info!(%addr, "grading service listening");
    axum::serve(listener, router(state))
        .await
        .context("Grading service stopped unexpectedly")
}
