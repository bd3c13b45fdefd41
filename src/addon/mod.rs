pub mod catalog;
pub mod error;
pub mod id;
pub mod manifest;
pub mod state;
pub mod stream;

use axum::{extract::State, http::Method, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::addon::manifest::Manifest;
use crate::addon::state::AppState;

/// Content types the addon declares in its manifest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Movie,
    Series,
}

impl ContentType {
    /// Parse the `{type}` path segment. Anything else is not served.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "movie" => Some(ContentType::Movie),
            "series" => Some(ContentType::Series),
            _ => None,
        }
    }
}

/// Resource ids arrive as `<id>.json`; the suffix is optional.
pub(crate) fn strip_json_suffix(segment: &str) -> &str {
    segment.strip_suffix(".json").unwrap_or(segment)
}

async fn serve_manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(Manifest::clone(&state.manifest))
}

pub fn build_router(state: AppState) -> Router {
    // The client may run as a web app on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/manifest.json", get(serve_manifest))
        .route("/catalog/{type}/{id}", get(catalog::serve_catalog))
        .route("/stream/{type}/{id}", get(stream::serve_stream))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
