use std::path::Path;

/// File extensions (lowercase, without the dot) recognized as playable video.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv"];

/// Returns true when `path` carries a recognized video extension.
///
/// Extensions are matched case-insensitively. Files without an extension, or
/// whose extension is not valid UTF-8, are never video.
pub fn is_video_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    VIDEO_EXTENSIONS.contains(&ext.as_str())
}

/// Display name for a video file: the file name with its final extension removed.
///
/// `Show.S01E01.mkv` becomes `Show.S01E01`. Returns None for non-UTF-8 names.
pub fn display_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_owned)
}
