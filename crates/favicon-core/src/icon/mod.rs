//! Favicon download, decode, resize and save.

mod ico_dir;

pub use ico_dir::{IcoDirectory, IcoEntry};

use crate::error::{FaviconError, Result};
use crate::http::HttpClient;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::{Path, PathBuf};

/// A decoded favicon together with the bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct Favicon {
    image: DynamicImage,
    format: ImageFormat,
    raw: Vec<u8>,
}

/// What [`fetch_favicon`] wrote to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFavicon {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
}

impl Favicon {
    /// Decodes an image body; the format is guessed from its content.
    pub fn decode(raw: Vec<u8>, url: &str) -> Result<Self> {
        let decode_err = |source| FaviconError::Decode {
            url: url.to_string(),
            source,
        };
        let format = image::guess_format(&raw).map_err(decode_err)?;
        let image = image::load_from_memory_with_format(&raw, format).map_err(decode_err)?;
        Ok(Self { image, format, raw })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Directory of the source container, for ICO favicons.
    pub fn ico_directory(&self) -> Option<IcoDirectory> {
        if self.format == ImageFormat::Ico {
            IcoDirectory::parse(&self.raw)
        } else {
            None
        }
    }

    /// Scales to `size × size`. An ICO that already embeds that exact size
    /// yields the embedded image; anything else is resampled bicubically.
    pub fn resize(self, size: u32) -> Self {
        if let Some(embedded) = self.embedded_variant(size) {
            tracing::debug!("using embedded {}×{} ICO image", size, size);
            return Self {
                image: embedded,
                ..self
            };
        }
        let image = self.image.resize_exact(size, size, FilterType::CatmullRom);
        Self { image, ..self }
    }

    fn embedded_variant(&self, size: u32) -> Option<DynamicImage> {
        let dir = self.ico_directory()?;
        let entry = dir.find(size, size)?;
        match entry.decode(&self.raw) {
            Ok(img) if img.dimensions() == (size, size) => Some(img),
            Ok(img) => {
                tracing::debug!(
                    "embedded ICO image is {}×{}, not {}×{}; resampling",
                    img.width(),
                    img.height(),
                    size,
                    size
                );
                None
            }
            Err(e) => {
                tracing::warn!("cannot decode embedded {}×{} ICO image: {}", size, size, e);
                None
            }
        }
    }

    /// Output format for `path`: taken from the extension, or the source
    /// format when the extension is missing or unknown.
    pub fn output_format(&self, path: &Path) -> ImageFormat {
        ImageFormat::from_path(path).unwrap_or(self.format)
    }

    /// Encodes and writes the image to `path`.
    pub fn save(&self, path: &Path) -> Result<ImageFormat> {
        let format = self.output_format(path);
        let write_err = |source| FaviconError::Write {
            path: path.to_path_buf(),
            source,
        };
        match format {
            // JPEG has no alpha channel.
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(self.image.to_rgb8())
                .save_with_format(path, format)
                .map_err(write_err)?,
            _ => self
                .image
                .save_with_format(path, format)
                .map_err(write_err)?,
        }
        Ok(format)
    }
}

/// Downloads the favicon at `favicon_uri`, resizes it to `resize × resize`
/// when `resize > 0`, and writes it to `output`.
pub fn fetch_favicon(
    client: &HttpClient,
    favicon_uri: &str,
    output: &Path,
    resize: u32,
) -> Result<SavedFavicon> {
    tracing::debug!("trying to get favicon from '{}'…", favicon_uri);
    let resp = client.get(favicon_uri)?.error_for_status(favicon_uri)?;
    let effective_url = resp.effective_url;

    let mut favicon = Favicon::decode(resp.body, favicon_uri)?;
    tracing::debug!(
        "{:?} {}×{} at '{}'",
        favicon.format(),
        favicon.width(),
        favicon.height(),
        effective_url
    );

    if resize > 0 {
        favicon = favicon.resize(resize);
        tracing::debug!("resized to {}×{}", favicon.width(), favicon.height());
    }

    let format = favicon.save(output)?;
    tracing::debug!("saved to '{}'", output.display());

    Ok(SavedFavicon {
        path: output.to_path_buf(),
        width: favicon.width(),
        height: favicon.height(),
        format,
    })
}
