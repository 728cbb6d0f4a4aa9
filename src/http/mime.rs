/// Fallback for unknown or missing extensions.
pub const DEFAULT_MIME: &str = "text/plain";

/// Maps a path to a content type by the extension of its final component.
///
/// Matching is case-sensitive, so `INDEX.HTML` is served as `text/plain`.
pub fn resolve(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or(path);

    match file_name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        _ => DEFAULT_MIME,
    }
}
