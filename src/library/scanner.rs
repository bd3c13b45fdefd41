use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

use crate::library::index::{Episode, LibraryIndex, Movie};
use crate::library::video::{display_name, is_video_file};

/// Subdirectory of the library root holding movie files.
pub const MOVIES_DIR: &str = "Movies";
/// Subdirectory of the library root holding `<series>/<season>/<episode>` trees.
pub const SERIES_DIR: &str = "Series";

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot list directory {}: {}", .path.display(), .source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Scan `root/Movies` and `root/Series` and build a fresh index.
///
/// Every directory is listed one level deep. Any directory that cannot be
/// listed fails the whole scan; no partial index is ever returned.
pub fn scan(root: &Path) -> Result<LibraryIndex, ScanError> {
    let start = Instant::now();
    let mut index = LibraryIndex::new();

    if root.to_str().is_none() {
        tracing::warn!(
            "Library root {} is not valid UTF-8; no file below it can be listed",
            root.display()
        );
    }

    scan_movies(&root.join(MOVIES_DIR), &mut index)?;
    scan_series(&root.join(SERIES_DIR), &mut index)?;

    tracing::info!(
        "Scanned {} movies and {} series ({} episodes) in {:.1}s",
        index.movies.len(),
        index.series().len(),
        index.episode_count(),
        start.elapsed().as_secs_f64()
    );

    Ok(index)
}

fn scan_movies(dir: &Path, index: &mut LibraryIndex) -> Result<(), ScanError> {
    for entry in list_dir(dir)? {
        if !entry.file_type().is_file() || !is_video_file(entry.path()) {
            continue;
        }
        let Some(name) = utf8_display_name(&entry) else {
            continue;
        };
        tracing::debug!("movie {:?} -> {}", name, entry.path().display());
        index.movies.push(Movie {
            name,
            path: entry.into_path(),
        });
    }
    Ok(())
}

fn scan_series(dir: &Path, index: &mut LibraryIndex) -> Result<(), ScanError> {
    for series_entry in list_dir(dir)? {
        if !series_entry.file_type().is_dir() {
            continue;
        }
        let Some(series_name) = series_entry.file_name().to_str() else {
            tracing::warn!(
                "Skipping non UTF-8 series directory: {}",
                series_entry.path().display()
            );
            continue;
        };
        // Listed even if no episodes turn up below.
        let series = index.series_entry(series_name);

        for season_entry in list_dir(series_entry.path())? {
            if !season_entry.file_type().is_dir() {
                continue;
            }
            for episode_entry in list_dir(season_entry.path())? {
                if !episode_entry.file_type().is_file() || !is_video_file(episode_entry.path()) {
                    continue;
                }
                let Some(name) = utf8_display_name(&episode_entry) else {
                    continue;
                };
                tracing::debug!("episode {:?} of {:?}", name, series.name);
                series.episodes.push(Episode {
                    name,
                    path: episode_entry.into_path(),
                });
            }
        }
    }
    Ok(())
}

/// Display name of a video entry whose full path is valid UTF-8.
///
/// Ids and `file://` URLs are built from the whole path, so a non UTF-8 byte
/// anywhere in it (root, season directory or file name) makes the entry
/// unaddressable. Such entries are skipped with a warning.
fn utf8_display_name(entry: &DirEntry) -> Option<String> {
    let name = entry
        .path()
        .to_str()
        .and_then(|_| display_name(entry.path()));
    if name.is_none() {
        tracing::warn!("Skipping non UTF-8 path: {}", entry.path().display());
    }
    name
}

/// List the direct children of `dir` in enumeration order.
///
/// Symlinks are not followed below `dir`, so a linked file or directory is
/// neither a regular file nor a directory here.
fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, ScanError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| ScanError::ReadDir {
            path: dir.to_owned(),
            source: e.into(),
        })?;
        if entry.depth() == 0 {
            // walkdir yields a non-directory root as a plain entry, not an error
            if !entry.path().is_dir() {
                return Err(ScanError::NotADirectory(dir.to_owned()));
            }
            continue;
        }
        entries.push(entry);
    }
    Ok(entries)
}
