//! Blocking HTTP GET / HEAD.
//!
//! Uses the curl crate (libcurl). Every request carries the configured
//! browser-like User-Agent and follows redirects; the final (post-redirect)
//! URL is reported so relative links can be resolved against it.

use crate::config::FaviconConfig;
use crate::error::{FaviconError, Result};
use std::time::Duration;

/// Response of a GET: status, final URL after redirects, and body.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub code: u32,
    /// URL of the last request in the redirect chain.
    pub effective_url: String,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        is_success(self.code)
    }

    /// Converts a non-2xx response into [`FaviconError::HttpStatus`].
    pub fn error_for_status(self, url: &str) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FaviconError::HttpStatus {
                url: url.to_string(),
                code: self.code,
            })
        }
    }
}

pub fn is_success(code: u32) -> bool {
    (200..300).contains(&code)
}

/// Request settings shared by every GET and HEAD of one run.
#[derive(Debug, Clone)]
pub struct HttpClient {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
    max_redirections: u32,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(&FaviconConfig::default())
    }
}

impl HttpClient {
    pub fn new(cfg: &FaviconConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirections: cfg.max_redirections,
        }
    }

    fn easy(&self, url: &str) -> std::result::Result<curl::easy::Easy, curl::Error> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirections)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        // Empty string: accept every encoding libcurl can decode.
        easy.accept_encoding("")?;
        Ok(easy)
    }

    /// Performs a GET and returns the response whatever its status.
    /// Only transport failures are errors.
    pub fn get(&self, url: &str) -> Result<HttpResponse> {
        self.get_inner(url).map_err(|e| FaviconError::network(url, e))
    }

    fn get_inner(&self, url: &str) -> std::result::Result<HttpResponse, curl::Error> {
        let mut body = Vec::new();
        let mut easy = self.easy(url)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        let effective_url = easy
            .effective_url()?
            .map(str::to_string)
            .unwrap_or_else(|| url.to_string());
        tracing::debug!("GET {} -> HTTP {} ({} bytes) at {}", url, code, body.len(), effective_url);

        Ok(HttpResponse {
            code,
            effective_url,
            body,
        })
    }

    /// Performs a HEAD request and returns the final status code.
    pub fn head(&self, url: &str) -> Result<u32> {
        self.head_inner(url).map_err(|e| FaviconError::network(url, e))
    }

    fn head_inner(&self, url: &str) -> std::result::Result<u32, curl::Error> {
        let mut easy = self.easy(url)?;
        easy.nobody(true)?; // HEAD request
        easy.perform()?;
        let code = easy.response_code()?;
        tracing::debug!("HEAD {} -> HTTP {}", url, code);
        Ok(code)
    }
}
