use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::library::scanner::ScanError;

/// Failures surfaced to an addon request. Only building the index can fail;
/// lookups against a built index never do.
#[derive(Debug, thiserror::Error)]
pub enum AddonError {
    #[error("library scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("library scan task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for AddonError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
