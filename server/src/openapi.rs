use crate::db::PipelineLog;
use crate::pipeline::{BuildRequest, BuildStatusResponse, InfoResponse};
use crate::routes::ops::{DbCheckResponse, __path_db_check, __path_test_deploy};
use crate::routes::pipeline::{__path_build_status, __path_info, __path_list_logs};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(info, build_status, list_logs, test_deploy, db_check),
    components(schemas(
        InfoResponse,
        BuildRequest,
        BuildStatusResponse,
        PipelineLog,
        DbCheckResponse
    ))
)]
pub struct ApiDoc;
