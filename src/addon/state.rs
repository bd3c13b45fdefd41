use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::addon::error::AddonError;
use crate::addon::manifest::Manifest;
use crate::library::index::LibraryIndex;
use crate::library::scanner;

/// Shared application state injected into all route handlers via axum::extract::State.
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<LibraryCache>,
    pub manifest: Arc<Manifest>,
}

impl AppState {
    pub fn new(root: PathBuf, addon_name: &str) -> Self {
        AppState {
            library: Arc::new(LibraryCache::new(root)),
            manifest: Arc::new(Manifest::new(addon_name)),
        }
    }
}

/// Lazily built library index for one root directory.
///
/// The first request scans the root; concurrent first requests wait on the
/// same scan. A failed scan stores nothing, so the next request scans again.
#[derive(Debug)]
pub struct LibraryCache {
    root: PathBuf,
    index: OnceCell<LibraryIndex>,
}

impl LibraryCache {
    pub fn new(root: PathBuf) -> Self {
        LibraryCache {
            root,
            index: OnceCell::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_indexed(&self) -> bool {
        self.index.initialized()
    }

    /// Return the index, scanning the root first if it has not been built yet.
    pub async fn ensure(&self) -> Result<&LibraryIndex, AddonError> {
        self.index
            .get_or_try_init(|| async {
                tracing::info!("Scanning local files under {}", self.root.display());
                let root = self.root.clone();
                // Directory listing is blocking I/O
                let index = tokio::task::spawn_blocking(move || scanner::scan(&root)).await??;
                Ok::<_, AddonError>(index)
            })
            .await
    }
}
