//! `favicon <uri>...` – resolve, then print or save one site's favicon.

use anyhow::{Context, Result};
use favicon_core::http::HttpClient;
use favicon_core::icon::fetch_favicon;
use favicon_core::resolver::resolve_favicon_uri;
use favicon_core::url_model::{derive_filename, normalize_page_uri};
use favicon_core::FaviconError;
use std::fs;
use std::path::PathBuf;

/// Per-URI settings taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub print: bool,
    pub dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub resize: u32,
    pub png: bool,
}

/// Where the favicon of `page_uri` is written: `--filename`, or a name derived
/// from the page host, inside `--dir` when given.
pub fn output_path(opts: &FetchOptions, page_uri: &str, favicon_uri: &str) -> PathBuf {
    let name = opts
        .filename
        .clone()
        .unwrap_or_else(|| derive_filename(page_uri, favicon_uri, opts.png));
    match &opts.dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

/// Runs [`run_fetch`] for every URI in order. A failing URI is logged and
/// does not stop the rest; returns how many failed.
pub fn run_fetch_all(client: &HttpClient, uris: &[String], opts: &FetchOptions) -> usize {
    let mut failed = 0;
    for uri in uris {
        if let Err(err) = run_fetch(client, uri, opts) {
            tracing::error!("{:#}", err);
            failed += 1;
        }
    }
    failed
}

pub fn run_fetch(client: &HttpClient, uri: &str, opts: &FetchOptions) -> Result<()> {
    let page_uri = normalize_page_uri(uri)?;
    let favicon_uri = resolve_favicon_uri(client, &page_uri)?
        .ok_or_else(|| FaviconError::NotFound { uri: page_uri.clone() })?;

    if opts.print {
        println!("{}", favicon_uri);
        return Ok(());
    }

    if let Some(dir) = &opts.dir {
        fs::create_dir_all(dir).with_context(|| format!("create directory {}", dir.display()))?;
    }
    let output = output_path(opts, &page_uri, &favicon_uri);
    let saved = fetch_favicon(client, &favicon_uri, &output, opts.resize)?;
    tracing::info!(
        "{}: favicon saved to '{}' ({}×{})",
        page_uri,
        saved.path.display(),
        saved.width,
        saved.height
    );
    Ok(())
}
