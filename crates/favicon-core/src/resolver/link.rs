//! `<link rel="icon">` extraction from an HTML document.

use scraper::{Html, Selector};

/// True if a `rel` attribute value lists the `icon` token (`icon`, `shortcut icon`, ...).
fn rel_has_icon(rel: &str) -> bool {
    rel.split_ascii_whitespace()
        .any(|token| token.eq_ignore_ascii_case("icon"))
}

/// Returns the `href` of the first `<link>` whose `rel` contains `icon`.
///
/// Only the first such element is considered: if it has no (or an empty)
/// `href`, the document yields nothing.
pub fn find_icon_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("link[rel]").ok()?;

    let link = document
        .select(&selector)
        .find(|el| el.value().attr("rel").is_some_and(rel_has_icon))?;

    link.value()
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
}
