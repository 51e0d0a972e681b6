use crate::db::{self, PipelineLog};
use crate::error::ApiError;
use crate::pipeline::{self, BuildRequest, BuildStatusResponse, InfoResponse};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::debug;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/pipeline/info", get(info))
        .route("/api/pipeline/build-status", post(build_status))
        .route("/api/pipeline/logs", get(list_logs))
}

/// Service identity and liveness metadata.
#[utoipa::path(
    get,
    path = "/api/pipeline/info",
    tag = "pipeline",
    responses(
        (status = 200, description = "Service identity with a fresh UTC timestamp", body = InfoResponse)
    )
)]
pub(crate) async fn info() -> Json<InfoResponse> {
    Json(pipeline::info())
}

/// Canned pipeline report for the named project.
#[utoipa::path(
    post,
    path = "/api/pipeline/build-status",
    tag = "pipeline",
    request_body = BuildRequest,
    responses(
        (status = 200, description = "Pipeline report echoing the project name", body = BuildStatusResponse),
        (status = 400, description = "ProjectName is required", body = String)
    )
)]
pub(crate) async fn build_status(
    Json(request): Json<BuildRequest>,
) -> Result<Json<BuildStatusResponse>, ApiError> {
    debug!(project = ?request.project_name, "build status requested");
    let response = pipeline::build_status(request)?;
    Ok(Json(response))
}

/// Rows persisted in the pipeline log table.
#[utoipa::path(
    get,
    path = "/api/pipeline/logs",
    tag = "pipeline",
    responses(
        (status = 200, description = "Persisted pipeline log rows", body = [PipelineLog]),
        (status = 503, description = "No database configured")
    )
)]
pub(crate) async fn list_logs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PipelineLog>>, ApiError> {
    let pool = state.db().ok_or(ApiError::DatabaseNotConfigured)?;
    let logs = db::list_logs(pool).await?;
    Ok(Json(logs))
}
