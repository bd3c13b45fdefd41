use std::collections::HashMap;
use std::path::PathBuf;

/// A video file found directly under `Movies/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    /// File name without extension, shown as the catalog title.
    pub name: String,
    /// Absolute path of the file. Identity of the movie within the index.
    pub path: PathBuf,
}

/// A video file found under `Series/<series>/<season>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub name: String,
    pub path: PathBuf,
}

/// A directory under `Series/` and every episode found in its season folders.
/// Episodes keep filesystem enumeration order; nothing is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub name: String,
    pub episodes: Vec<Episode>,
}

/// In-memory index built by one full scan of the library root.
///
/// Built once, then read-only. Series are kept in scan order so the series
/// catalog is reproducible; `series_by_name` maps a name to its position.
#[derive(Debug, Default)]
pub struct LibraryIndex {
    pub movies: Vec<Movie>,
    series: Vec<Series>,
    series_by_name: HashMap<String, usize>,
}

impl LibraryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Series in insertion (scan) order.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn find_series(&self, name: &str) -> Option<&Series> {
        self.series_by_name.get(name).map(|&i| &self.series[i])
    }

    /// First movie whose path equals `path`, compared as a string.
    pub fn find_movie(&self, path: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.path.as_os_str() == path)
    }

    /// Insert an empty series, or return the existing one with that name.
    pub fn series_entry(&mut self, name: &str) -> &mut Series {
        let idx = match self.series_by_name.get(name) {
            Some(&idx) => idx,
            None => {
                self.series.push(Series {
                    name: name.to_owned(),
                    episodes: Vec::new(),
                });
                let idx = self.series.len() - 1;
                self.series_by_name.insert(name.to_owned(), idx);
                idx
            }
        };
        &mut self.series[idx]
    }

    pub fn episode_count(&self) -> usize {
        self.series.iter().map(|s| s.episodes.len()).sum()
    }
}
