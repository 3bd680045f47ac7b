pub mod config;
pub mod error;
pub mod logging;

pub mod dokuwiki;
pub mod http;
pub mod icon;
pub mod resolver;
pub mod url_model;

pub use error::{FaviconError, Result};
