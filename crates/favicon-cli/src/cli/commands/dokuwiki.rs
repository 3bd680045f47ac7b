//! `favicon --dokuwiki <path>` – fetch interwiki icons for a DokuWiki installation.

use anyhow::{Context, Result};
use favicon_core::dokuwiki;
use favicon_core::http::HttpClient;
use std::path::Path;

pub fn run_dokuwiki(client: &HttpClient, root: &Path, force: bool) -> Result<()> {
    let summary = dokuwiki::fetch_interwiki_icons(client, root, force)
        .with_context(|| format!("DokuWiki at '{}'", root.display()))?;
    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} interwiki icons could not be fetched",
            summary.failed,
            summary.total()
        );
    }
    Ok(())
}
