pub mod ops;
pub mod pipeline;

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config().static_dir.clone();
    Router::new()
        .merge(pipeline::routes())
        .merge(ops::routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}
