//! Favicon URI resolution.
//!
//! Looks for a `<link rel="icon">` in the page first and falls back to probing
//! the well-known `/favicon.ico` location with HEAD.

mod link;

pub use link::find_icon_href;

use crate::error::Result;
use crate::http::{self, HttpClient};
use crate::url_model::{netloc, resolve_href, well_known_favicon_uri};

/// Resolves the absolute favicon URI for `page_uri`, or `None` if the site
/// declares no icon and has no `/favicon.ico`.
///
/// A failed page request (transport error or non-2xx status) is not fatal: the
/// `/favicon.ico` probe still runs. Transport errors of that probe are returned.
pub fn resolve_favicon_uri(client: &HttpClient, page_uri: &str) -> Result<Option<String>> {
    match client.get(page_uri) {
        Ok(resp) if resp.is_success() => {
            if let Some(uri) = favicon_uri_from_page(&resp.body, &resp.effective_url) {
                tracing::debug!("found <link rel=\"icon\"> in '{}': {}", resp.effective_url, uri);
                return Ok(Some(uri));
            }
            tracing::debug!("no <link rel=\"icon\"> in '{}'", resp.effective_url);
        }
        Ok(resp) => tracing::debug!("page '{}' returned HTTP {}", page_uri, resp.code),
        Err(e) => tracing::debug!("page request failed: {}", e),
    }

    let fallback = well_known_favicon_uri(page_uri)?;
    let code = client.head(&fallback)?;
    if http::is_success(code) {
        Ok(Some(fallback))
    } else {
        tracing::debug!("'{}' returned HTTP {}", fallback, code);
        Ok(None)
    }
}

/// Extracts the icon link from an HTML body and makes it absolute relative to
/// `page_url`, which must be the final URL the body was served from.
pub fn favicon_uri_from_page(body: &[u8], page_url: &str) -> Option<String> {
    let html = String::from_utf8_lossy(body);
    let href = find_icon_href(&html)?;
    let base = url::Url::parse(page_url).ok()?;
    match resolve_href(base.scheme(), &netloc(&base), base.path(), &href) {
        Ok(uri) => Some(uri),
        Err(e) => {
            tracing::debug!("ignoring icon link: {}", e);
            None
        }
    }
}
