//! URI modeling and filename derivation.
//!
//! Parsing and joining go through [`url::Url`]. Only the page host used for
//! output filenames is read by [`split_uri`] straight from the input, since
//! `Url` lowercases it and `My-Site.com` must become `My_Site_com`.

mod href;
mod path;
mod sanitize;

pub use href::resolve_href;
pub use path::extension_from_uri_path;
pub use sanitize::sanitize_host_for_filename;

use url::Url;

use crate::error::{FaviconError, Result};

/// Filename stem used when the page URI has no host.
const DEFAULT_STEM: &str = "favicon";

/// The three URI components the resolver works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParts<'a> {
    pub scheme: &'a str,
    /// `host[:port]`, without userinfo.
    pub netloc: &'a str,
    /// Path without query or fragment; may be empty.
    pub path: &'a str,
}

/// Splits `scheme://netloc/path?query#fragment`. Returns `None` when the URI
/// has no `scheme://` prefix.
pub fn split_uri(uri: &str) -> Option<UriParts<'_>> {
    let (scheme, rest) = uri.split_once("://")?;
    if !is_scheme(scheme) {
        return None;
    }
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let netloc = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    let tail = &rest[authority_end..];
    let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
    Some(UriParts {
        scheme,
        netloc,
        path: &tail[..path_end],
    })
}

/// True for RFC 3986 scheme names: a letter followed by letters, digits, `+`, `-` or `.`.
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Normalizes a user-supplied page URI: trims it and prefixes `http://` when it
/// has no `scheme://` prefix. The result must parse as a URL with a host.
pub fn normalize_page_uri(uri: &str) -> Result<String> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(FaviconError::invalid_uri(uri, "empty URI"));
    }
    let normalized = if split_uri(uri).is_some() {
        uri.to_string()
    } else {
        format!("http://{}", uri)
    };

    parse_with_host(&normalized)?;
    Ok(normalized)
}

/// Parses `uri`, requiring a non-empty host.
pub(crate) fn parse_with_host(uri: &str) -> Result<Url> {
    let parsed = Url::parse(uri).map_err(|e| FaviconError::invalid_uri(uri, e))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FaviconError::invalid_uri(uri, "missing host"));
    }
    Ok(parsed)
}

/// `host[:port]` of a parsed URL; the port only appears when it is not the
/// scheme's default.
pub fn netloc(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// `{scheme}://{netloc}/`, the root of the site `uri` points into.
pub fn site_root(uri: &str) -> Result<String> {
    let parsed = parse_with_host(uri)?;
    Ok(format!("{}://{}/", parsed.scheme(), netloc(&parsed)))
}

/// Well-known fallback location `{scheme}://{netloc}/favicon.ico`.
pub fn well_known_favicon_uri(uri: &str) -> Result<String> {
    Ok(format!("{}favicon.ico", site_root(uri)?))
}

/// Derives the output filename for a favicon: the page host with every
/// non-word character replaced by `_`, plus `.png` when converting, otherwise
/// the extension of the favicon URI path.
///
/// # Examples
///
/// - `derive_filename("http://My-Site.com/", "http://My-Site.com/favicon.ico", false)` → `"My_Site_com.ico"`
/// - `derive_filename("http://x.com:8080/", "http://x.com/i.gif", true)` → `"x_com_8080.png"`
pub fn derive_filename(page_uri: &str, favicon_uri: &str, png: bool) -> String {
    let ext = if png {
        ".png".to_string()
    } else {
        extension_from_uri_path(favicon_uri)
    };

    let host = split_uri(page_uri).map(|p| p.netloc).unwrap_or_default();
    let stem = if host.is_empty() {
        DEFAULT_STEM.to_string()
    } else {
        sanitize_host_for_filename(host)
    };
    format!("{}{}", stem, ext)
}
