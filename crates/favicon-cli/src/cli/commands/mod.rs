//! CLI command handlers: single-site fetch and the DokuWiki batch.

mod dokuwiki;
mod fetch;

pub use dokuwiki::run_dokuwiki;
pub use fetch::{output_path, run_fetch, run_fetch_all, FetchOptions};
