//! CLI for the favicon fetcher.

mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use favicon_core::config::{self, FaviconConfig};
use favicon_core::http::HttpClient;
use std::path::PathBuf;

use commands::{run_dokuwiki, run_fetch_all, FetchOptions};

/// Get favicon for a URI.
#[derive(Debug, Parser)]
#[command(name = "favicon")]
#[command(about = "Get favicon for a URI", long_about = None)]
pub struct Cli {
    /// URI(s) to get favicon for; `http://` is assumed when no scheme is given.
    #[arg(value_name = "URI")]
    pub uris: Vec<String>,

    /// Show info messages.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show favicon URI and exit.
    #[arg(short = 'P', long)]
    pub print: bool,

    /// Save favicon in directory DIR.
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Save favicon as NAME (single URI only).
    #[arg(short, long, value_name = "NAME")]
    pub filename: Option<String>,

    /// Resize favicon to SIZE×SIZE.
    #[arg(short, long, value_name = "SIZE", default_value_t = 0)]
    pub resize: u32,

    /// Convert favicon to PNG format.
    #[arg(short, long)]
    pub png: bool,

    /// Get favicons for DokuWiki interwiki links of the wiki at PATH.
    #[arg(short = 'D', long, value_name = "PATH")]
    pub dokuwiki: Option<PathBuf>,

    /// Force DokuWiki interwiki icons update.
    #[arg(short = 'F', long)]
    pub force: bool,
}

impl Cli {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            print: self.print,
            dir: self.dir.clone(),
            filename: self.filename.clone().filter(|f| !f.is_empty()),
            resize: self.resize,
            png: self.png,
        }
    }

    fn validate_uris(&self) -> Result<()> {
        if self.uris.iter().all(|u| u.trim().is_empty()) {
            bail!("empty URI");
        }
        if self.filename.is_some() && self.uris.len() > 1 {
            bail!("--filename can only be used with a single URI");
        }
        Ok(())
    }

    pub fn run(self) -> Result<()> {
        if self.dokuwiki.is_none() {
            self.validate_uris()?;
        }

        let cfg = config::load_or_init().unwrap_or_else(|e| {
            tracing::warn!("using default config: {:#}", e);
            FaviconConfig::default()
        });
        tracing::debug!("loaded config: {:?}", cfg);
        let client = HttpClient::new(&cfg);

        if let Some(root) = &self.dokuwiki {
            return run_dokuwiki(&client, root, self.force);
        }

        let failed = run_fetch_all(&client, &self.uris, &self.fetch_options());
        if failed > 0 {
            tracing::debug!("{} of {} URIs failed", failed, self.uris.len());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
