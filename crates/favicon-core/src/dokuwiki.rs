//! DokuWiki interwiki icons.
//!
//! Reads `conf/interwiki.local.conf` under a wiki root and saves a 16×16 PNG
//! favicon for every shortcut to `lib/images/interwiki/{name}.png`. Entries
//! are processed one at a time; a failing entry is logged and the batch
//! continues.

use crate::error::{FaviconError, Result};
use crate::http::HttpClient;
use crate::icon::fetch_favicon;
use crate::resolver::resolve_favicon_uri;
use crate::url_model::site_root;
use std::fs;
use std::path::{Path, PathBuf};

/// Edge length of DokuWiki interwiki icons.
pub const ICON_SIZE: u32 = 16;

/// One `name  URI` line of the interwiki config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterwikiEntry {
    pub name: String,
    pub uri: String,
}

/// Outcome counts of one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub saved: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.saved + self.skipped + self.failed
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '_')
}

/// Parses one config line. Comments, blank lines and anything not shaped like
/// `name<whitespace>uri` (name made of `[-0-9.a-z_]`) yield `None`.
pub fn parse_interwiki_line(line: &str) -> Option<InterwikiEntry> {
    let line = line.trim();
    let split = line.find(char::is_whitespace)?;
    let (name, rest) = line.split_at(split);
    if name.is_empty() || !name.chars().all(is_name_char) {
        return None;
    }
    let uri = rest.trim_start();
    if uri.is_empty() {
        return None;
    }
    Some(InterwikiEntry {
        name: name.to_string(),
        uri: uri.to_string(),
    })
}

/// All well-formed entries of an interwiki config, in file order.
pub fn parse_interwiki_conf(text: &str) -> Vec<InterwikiEntry> {
    text.lines().filter_map(parse_interwiki_line).collect()
}

/// Paths of a DokuWiki installation.
#[derive(Debug, Clone)]
pub struct DokuWiki {
    root: PathBuf,
}

impl DokuWiki {
    /// `root` is made absolute against the current directory.
    pub fn new(root: &Path) -> Result<Self> {
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            let cwd = std::env::current_dir().map_err(|source| FaviconError::Io {
                path: root.to_path_buf(),
                source,
            })?;
            cwd.join(root)
        };
        Ok(Self { root })
    }

    pub fn conf_path(&self) -> PathBuf {
        self.root.join("conf").join("interwiki.local.conf")
    }

    pub fn icons_dir(&self) -> PathBuf {
        self.root.join("lib").join("images").join("interwiki")
    }

    pub fn icon_path(&self, name: &str) -> PathBuf {
        self.icons_dir().join(format!("{}.png", name))
    }

    pub fn read_entries(&self) -> Result<Vec<InterwikiEntry>> {
        let path = self.conf_path();
        let text = fs::read_to_string(&path).map_err(|source| FaviconError::Io { path, source })?;
        Ok(parse_interwiki_conf(&text))
    }

    /// Creates the interwiki icon directory (mode `0770` on Unix).
    pub fn ensure_icons_dir(&self) -> Result<PathBuf> {
        let dir = self.icons_dir();
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o770);
        }
        builder.create(&dir).map_err(|source| FaviconError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }
}

/// Fetches icons for every interwiki entry of the wiki at `root`.
///
/// Existing icons are kept unless `force` is set. Only a missing/unreadable
/// config or an uncreatable icon directory aborts the run.
pub fn fetch_interwiki_icons(
    client: &HttpClient,
    root: &Path,
    force: bool,
) -> Result<BatchSummary> {
    let wiki = DokuWiki::new(root)?;
    let entries = wiki.read_entries()?;
    wiki.ensure_icons_dir()?;
    tracing::debug!(
        "{} interwiki entries in '{}'",
        entries.len(),
        wiki.conf_path().display()
    );

    let mut summary = BatchSummary::default();
    for entry in &entries {
        let path = wiki.icon_path(&entry.name);
        if path.is_file() && !force {
            tracing::info!("{}: icon exists already - skip", entry.name);
            summary.skipped += 1;
            continue;
        }

        match fetch_entry(client, entry, &path) {
            Ok(()) => {
                tracing::info!("{}: icon saved to '{}'", entry.name, path.display());
                summary.saved += 1;
            }
            Err(e) => {
                tracing::error!("{}: {}", entry.name, e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        "interwiki icons: {} saved, {} skipped, {} failed",
        summary.saved,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

fn fetch_entry(client: &HttpClient, entry: &InterwikiEntry, path: &Path) -> Result<()> {
    let uri = site_root(&entry.uri)?;
    let favicon_uri =
        resolve_favicon_uri(client, &uri)?.ok_or(FaviconError::NotFound { uri })?;
    fetch_favicon(client, &favicon_uri, path, ICON_SIZE)?;
    Ok(())
}
