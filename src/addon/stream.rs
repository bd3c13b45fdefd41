use std::path::Path as FsPath;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::addon::error::AddonError;
use crate::addon::id::{parse_id, MOVIE_PREFIX, SERIES_PREFIX};
use crate::addon::state::AppState;
use crate::addon::strip_json_suffix;
use crate::library::index::LibraryIndex;

/// Title of the single stream offered for a movie.
pub const MOVIE_STREAM_TITLE: &str = "Local file";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    pub title: String,
    /// `file://` URL, only playable by a client on the same filesystem.
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl StreamEntry {
    fn file(title: &str, path: &FsPath) -> Self {
        StreamEntry {
            title: title.to_owned(),
            url: file_url(path),
            kind: "file".to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StreamResponse {
    pub streams: Vec<StreamEntry>,
}

/// The path is not percent-encoded; clients open it as-is.
pub fn file_url(path: &FsPath) -> String {
    format!("file://{}", path.display())
}

/// Resolve a stream id to playable entries.
///
/// The requested type is not consulted: the id prefix alone decides the
/// lookup. Unknown prefixes, malformed ids and unmatched payloads all yield
/// an empty list.
pub fn streams(index: &LibraryIndex, stream_id: &str) -> StreamResponse {
    let Some((prefix, payload)) = parse_id(stream_id) else {
        return StreamResponse::default();
    };

    let streams = match prefix {
        MOVIE_PREFIX => index
            .find_movie(&payload)
            .map(|movie| vec![StreamEntry::file(MOVIE_STREAM_TITLE, &movie.path)])
            .unwrap_or_default(),
        SERIES_PREFIX => index
            .find_series(&payload)
            .map(|series| {
                series
                    .episodes
                    .iter()
                    .map(|ep| StreamEntry::file(&ep.name, &ep.path))
                    .collect()
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    };
    StreamResponse { streams }
}

/// GET /stream/{type}/{id}.json
pub async fn serve_stream(
    State(state): State<AppState>,
    Path((content_type, stream_id)): Path<(String, String)>,
) -> Result<Json<StreamResponse>, AddonError> {
    let index = state.library.ensure().await?;
    let stream_id = strip_json_suffix(&stream_id);
    tracing::debug!("stream request type={} id={}", content_type, stream_id);
    Ok(Json(streams(index, stream_id)))
}
