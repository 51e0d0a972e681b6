//! Deploy-verification scaffolding endpoints.

use crate::db;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

/// Outcome of the database connectivity probe. Reports configuration and
/// reachability only; connection details never leave the process.
#[derive(Debug, Serialize, ToSchema)]
pub struct DbCheckResponse {
    configured: bool,
    reachable: bool,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/test-deploy", get(test_deploy))
        .route("/db-check", get(db_check))
}

/// Plain-text probe for verifying a fresh deployment end to end.
#[utoipa::path(
    get,
    path = "/test-deploy",
    tag = "ops",
    responses(
        (status = 200, description = "Deployment marker text", body = String)
    )
)]
pub(crate) async fn test_deploy() -> &'static str {
    "CI/CD Pipeline is working! Hello from GitHub!"
}

/// Database connectivity report.
#[utoipa::path(
    get,
    path = "/db-check",
    tag = "ops",
    responses(
        (status = 200, description = "Whether a database is configured and reachable", body = DbCheckResponse)
    )
)]
pub(crate) async fn db_check(State(state): State<Arc<AppState>>) -> Json<DbCheckResponse> {
    let (configured, reachable) = match state.db() {
        Some(pool) => {
            let reachable = db::ping(pool).await.is_ok();
            if !reachable {
                warn!("database configured but unreachable");
            }
            (true, reachable)
        }
        None => (false, false),
    };

    Json(DbCheckResponse {
        configured,
        reachable,
    })
}
