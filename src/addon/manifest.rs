use serde::Serialize;

use crate::addon::catalog::{MOVIE_CATALOG, SERIES_CATALOG};
use crate::addon::id::{MOVIE_PREFIX, SERIES_PREFIX};
use crate::addon::ContentType;

pub const ADDON_ID: &str = "community.localfiles.catalog";
pub const DEFAULT_ADDON_NAME: &str = "Local Files With Catalog Support";
const DESCRIPTION: &str = "Browse and play movies and series from a local folder";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: String,
    pub description: &'static str,
    pub types: Vec<ContentType>,
    pub catalogs: Vec<CatalogDecl>,
    pub resources: Vec<&'static str>,
    pub id_prefixes: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogDecl {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub id: &'static str,
    pub name: String,
}

impl Manifest {
    /// The manifest served at `/manifest.json`, titled `name`.
    pub fn new(name: &str) -> Self {
        Manifest {
            id: ADDON_ID,
            version: env!("CARGO_PKG_VERSION"),
            name: name.to_owned(),
            description: DESCRIPTION,
            types: vec![ContentType::Movie, ContentType::Series],
            catalogs: vec![
                CatalogDecl {
                    content_type: ContentType::Movie,
                    id: MOVIE_CATALOG,
                    name: format!("{name} - Movies"),
                },
                CatalogDecl {
                    content_type: ContentType::Series,
                    id: SERIES_CATALOG,
                    name: format!("{name} - Series"),
                },
            ],
            resources: vec!["catalog", "stream"],
            id_prefixes: vec![MOVIE_PREFIX, SERIES_PREFIX],
        }
    }
}
