//! Core request/response contract of the CI pipeline demo API.
//!
//! The two operations are plain functions so they can be exercised without an
//! HTTP server; the modules under [`crate::routes`] adapt them to axum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display name the service reports about itself.
pub const APPLICATION: &str = "DevOpsStack CI/CD Demo";

/// Contract version reported by the info operation. Pinned by the API
/// contract, independent of the crate version.
pub const VERSION: &str = "1.0.0";

/// Operational status reported by the info operation.
pub const STATUS_RUNNING: &str = "Running";

/// Hosting runtime identifier reported by the info operation.
pub const FRAMEWORK: &str = "Axum 0.7";

/// Stage label attached to every successful build-status report.
pub const STAGE_COMPLETE: &str = "CI Pipeline Complete";

/// The canned pipeline steps, reported in exactly this order for every
/// successful build-status call.
pub const PIPELINE_STEPS: [&str; 4] = ["Restore", "Build", "Test", "Ready for Deployment"];

/// Service identity metadata returned by the info operation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InfoResponse {
    pub application: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub framework: &'static str,
    /// Taken fresh from the wall clock on every call.
    pub timestamp: DateTime<Utc>,
}

/// Incoming build-status request body.
///
/// The field is optional so that an absent `projectName` and an explicit
/// `null` both deserialize; validation then treats them the same as blank.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub project_name: Option<String>,
}

/// Canned pipeline report returned for a valid build-status request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BuildStatusResponse {
    pub success: bool,
    pub project: String,
    pub stage: &'static str,
    pub steps: Vec<&'static str>,
}

/// The single error kind in the contract: the build-status request carried no
/// usable project name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("ProjectName is required")]
    MissingProjectName,
}

/// Builds the static service identity payload. Always succeeds.
pub fn info() -> InfoResponse {
    InfoResponse {
        application: APPLICATION,
        version: VERSION,
        status: STATUS_RUNNING,
        framework: FRAMEWORK,
        timestamp: Utc::now(),
    }
}

/// Validates the request and produces the canned pipeline report.
///
/// The project name is echoed back exactly as received; whitespace is only
/// inspected for validation, never trimmed from the echo.
pub fn build_status(request: BuildRequest) -> Result<BuildStatusResponse, ValidationError> {
    let project = match request.project_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => return Err(ValidationError::MissingProjectName),
    };

    Ok(BuildStatusResponse {
        success: true,
        project,
        stage: STAGE_COMPLETE,
        steps: PIPELINE_STEPS.to_vec(),
    })
}
