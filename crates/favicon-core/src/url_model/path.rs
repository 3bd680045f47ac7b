//! File extension extraction from a URI path.

use url::Url;

/// Extension (with the leading dot) of the last path segment of `uri`, or an
/// empty string when there is none or `uri` does not parse. Query and fragment
/// are ignored, and a segment made only of leading dots (`.hidden`) has no
/// extension.
pub fn extension_from_uri_path(uri: &str) -> String {
    let Ok(parsed) = Url::parse(uri) else {
        return String::new();
    };
    let segment = parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    let stem_start = segment.len() - segment.trim_start_matches('.').len();
    match segment[stem_start..].rfind('.') {
        Some(i) => segment[stem_start + i..].to_string(),
        None => String::new(),
    }
}
