use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::addon::error::AddonError;
use crate::addon::id::{format_id, MOVIE_PREFIX, SERIES_PREFIX};
use crate::addon::state::AppState;
use crate::addon::{strip_json_suffix, ContentType};
use crate::library::index::LibraryIndex;

pub const MOVIE_CATALOG: &str = "local-movies";
pub const SERIES_CATALOG: &str = "local-series";

/// One catalog row: enough for the client to list the item and ask for streams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

/// List a catalog. Unknown type/catalog combinations yield an empty list.
pub fn catalog(index: &LibraryIndex, content_type: &str, catalog_id: &str) -> CatalogResponse {
    let metas = match (ContentType::parse(content_type), catalog_id) {
        (Some(ContentType::Movie), MOVIE_CATALOG) => index
            .movies
            .iter()
            .map(|movie| MetaPreview {
                id: format_id(MOVIE_PREFIX, &movie.path.to_string_lossy()),
                content_type: ContentType::Movie,
                name: movie.name.clone(),
            })
            .collect(),
        (Some(ContentType::Series), SERIES_CATALOG) => index
            .series()
            .iter()
            .map(|series| MetaPreview {
                id: format_id(SERIES_PREFIX, &series.name),
                content_type: ContentType::Series,
                name: series.name.clone(),
            })
            .collect(),
        _ => Vec::new(),
    };
    CatalogResponse { metas }
}

/// GET /catalog/{type}/{id}.json
pub async fn serve_catalog(
    State(state): State<AppState>,
    Path((content_type, catalog_id)): Path<(String, String)>,
) -> Result<Json<CatalogResponse>, AddonError> {
    let index = state.library.ensure().await?;
    let catalog_id = strip_json_suffix(&catalog_id);
    tracing::debug!("catalog request type={} id={}", content_type, catalog_id);
    Ok(Json(catalog(index, &content_type, catalog_id)))
}
