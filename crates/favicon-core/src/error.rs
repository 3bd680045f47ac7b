//! Error taxonomy for resolving and fetching favicons.

use std::path::PathBuf;

/// Failure while resolving, downloading or saving a favicon.
///
/// "No `<link rel="icon">` in the page" is not an error; the resolver
/// returns `Ok(None)` and callers turn that into [`FaviconError::NotFound`]
/// when they need to report it.
#[derive(Debug, thiserror::Error)]
pub enum FaviconError {
    /// Curl reported an error (connection refused, DNS, timeout, ...).
    #[error("cannot connect to '{url}': {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },

    /// HTTP response had a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    HttpStatus { url: String, code: u32 },

    /// Neither a `<link rel="icon">` nor `/favicon.ico` was found.
    #[error("cannot find favicon for URI '{uri}'")]
    NotFound { uri: String },

    /// The body could not be decoded as an image.
    #[error("cannot decode image from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    /// Encoding or writing the output image failed.
    #[error("cannot save favicon to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// URI could not be parsed or lacks a host.
    #[error("invalid URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// Filesystem access (config file, interwiki directory) failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FaviconError {
    pub(crate) fn network(url: &str, source: curl::Error) -> Self {
        FaviconError::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn invalid_uri(uri: &str, reason: impl ToString) -> Self {
        FaviconError::InvalidUri {
            uri: uri.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status carried by the error, if it is an HTTP status error.
    pub fn http_status(&self) -> Option<u32> {
        match self {
            FaviconError::HttpStatus { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FaviconError>;
