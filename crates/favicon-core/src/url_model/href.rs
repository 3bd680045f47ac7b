//! Resolution of `<link href>` values against the page they were found on.

use url::Url;

use crate::error::{FaviconError, Result};

/// Resolves `href` to an absolute URI given the base page's scheme, netloc and path.
///
/// - `//host/i.png` (protocol-relative) → `{scheme}://host/i.png`
/// - `/i.png` (absolute path) → `{scheme}://{netloc}/i.png`
/// - `https://...` or any other `scheme:` value → unchanged
/// - `i.png`, `../i.png` (relative path) → joined against the directory of
///   `base_path`, with `.` and `..` segments collapsed
///
/// The result is serialized by [`Url`], so characters such as spaces come back
/// percent-encoded and the host is lowercased.
pub fn resolve_href(
    base_scheme: &str,
    base_netloc: &str,
    base_path: &str,
    href: &str,
) -> Result<String> {
    let base_uri = format!("{}://{}{}", base_scheme, base_netloc, base_path);
    let base = Url::parse(&base_uri).map_err(|e| FaviconError::invalid_uri(&base_uri, e))?;
    let href = href.trim();
    let joined = base.join(href).map_err(|e| FaviconError::invalid_uri(href, e))?;
    Ok(joined.to_string())
}
