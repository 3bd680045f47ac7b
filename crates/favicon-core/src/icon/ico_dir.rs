//! ICO container directory.
//!
//! `image` decodes only the largest image of an ICO file. To pick an exact
//! embedded size instead of resampling, the directory is read here and the
//! chosen entry is decoded on its own: PNG entries directly, BMP (DIB)
//! entries by re-wrapping them in a single-entry ICO container.

use image::{DynamicImage, ImageFormat, ImageResult};

const HEADER_LEN: usize = 6;
const ENTRY_LEN: usize = 16;
const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// One image of an ICO file, as described by its directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcoEntry {
    /// Width in pixels (a stored `0` means 256).
    pub width: u32,
    /// Height in pixels (a stored `0` means 256).
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Byte length of the image data.
    pub size: u32,
    /// Byte offset of the image data from the start of the file.
    pub offset: u32,
    raw: [u8; ENTRY_LEN],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcoDirectory {
    pub entries: Vec<IcoEntry>,
}

fn u16_le(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn u32_le(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

fn dimension(byte: u8) -> u32 {
    if byte == 0 {
        256
    } else {
        u32::from(byte)
    }
}

impl IcoDirectory {
    /// Reads the directory of an ICO (or CUR) file. Returns `None` if `data` is not
    /// an icon container or the directory is truncated.
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < HEADER_LEN || u16_le(data, 0) != 0 {
            return None;
        }
        let kind = u16_le(data, 2);
        if kind != 1 && kind != 2 {
            return None;
        }
        let count = usize::from(u16_le(data, 4));
        if data.len() < HEADER_LEN + count * ENTRY_LEN {
            return None;
        }

        let entries = (0..count)
            .map(|i| {
                let at = HEADER_LEN + i * ENTRY_LEN;
                let mut raw = [0u8; ENTRY_LEN];
                raw.copy_from_slice(&data[at..at + ENTRY_LEN]);
                IcoEntry {
                    width: dimension(raw[0]),
                    height: dimension(raw[1]),
                    bits_per_pixel: u16_le(&raw, 6),
                    size: u32_le(&raw, 8),
                    offset: u32_le(&raw, 12),
                    raw,
                }
            })
            .collect();
        Some(IcoDirectory { entries })
    }

    /// Distinct `(width, height)` pairs present in the container.
    #[cfg(test)]
    pub(crate) fn sizes(&self) -> Vec<(u32, u32)> {
        let mut sizes: Vec<(u32, u32)> = self.entries.iter().map(|e| (e.width, e.height)).collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// The entry of exactly `width × height` with the most bits per pixel.
    pub fn find(&self, width: u32, height: u32) -> Option<&IcoEntry> {
        self.entries
            .iter()
            .filter(|e| e.width == width && e.height == height)
            .max_by_key(|e| e.bits_per_pixel)
    }
}

impl IcoEntry {
    /// The entry's image data within the whole file, if it lies inside `data`.
    pub fn data<'a>(&self, data: &'a [u8]) -> Option<&'a [u8]> {
        let start = usize::try_from(self.offset).ok()?;
        let end = start.checked_add(usize::try_from(self.size).ok()?)?;
        data.get(start..end)
    }

    #[cfg(test)]
    fn is_png(&self, data: &[u8]) -> bool {
        self.data(data).is_some_and(|d| d.starts_with(PNG_SIGNATURE))
    }

    /// Decodes this entry alone from the complete ICO file `data`.
    pub fn decode(&self, data: &[u8]) -> ImageResult<DynamicImage> {
        let payload = self.data(data).ok_or_else(|| {
            image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "ICO entry points outside the file",
            ))
        })?;

        if payload.starts_with(PNG_SIGNATURE) {
            return image::load_from_memory_with_format(payload, ImageFormat::Png);
        }

        // Header: reserved 0, type 1 (icon), one image; entry data right after the directory.
        let mut single = Vec::with_capacity(HEADER_LEN + ENTRY_LEN + payload.len());
        single.extend_from_slice(&[0, 0, 1, 0, 1, 0]);
        single.extend_from_slice(&self.raw[..12]);
        single.extend_from_slice(&((HEADER_LEN + ENTRY_LEN) as u32).to_le_bytes());
        single.extend_from_slice(payload);
        image::load_from_memory_with_format(&single, ImageFormat::Ico)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use image::GenericImageView;

    #[test]
    fn parse_lists_sizes() {
        let ico = multi_size_ico(&[(16, [255, 0, 0, 255]), (32, [0, 0, 255, 255])]);
        let dir = IcoDirectory::parse(&ico).unwrap();
        assert_eq!(dir.entries.len(), 2);
        assert_eq!(dir.sizes(), vec![(16, 16), (32, 32)]);
        assert!(dir.find(16, 16).is_some());
        assert!(dir.find(24, 24).is_none());
    }

    #[test]
    fn zero_byte_dimension_means_256() {
        let ico = ico_from_payloads(&[(256, 256, 32, vec![0u8; 4])]);
        let dir = IcoDirectory::parse(&ico).unwrap();
        assert_eq!(dir.sizes(), vec![(256, 256)]);
    }

    #[test]
    fn parse_rejects_other_formats() {
        assert!(IcoDirectory::parse(b"\x89PNG\r\n\x1a\n0000000000").is_none());
        assert!(IcoDirectory::parse(&[0, 0, 1, 0]).is_none());
        // Claims three entries but has none.
        assert!(IcoDirectory::parse(&[0, 0, 1, 0, 3, 0]).is_none());
    }

    #[test]
    fn find_prefers_highest_bit_depth() {
        let ico = ico_from_payloads(&[
            (16, 16, 8, vec![1u8; 4]),
            (16, 16, 32, vec![2u8; 4]),
            (16, 16, 4, vec![3u8; 4]),
        ]);
        let dir = IcoDirectory::parse(&ico).unwrap();
        assert_eq!(dir.find(16, 16).unwrap().bits_per_pixel, 32);
    }

    #[test]
    fn decode_png_entry() {
        let ico = multi_size_ico(&[(16, [255, 0, 0, 255]), (32, [0, 0, 255, 255])]);
        let dir = IcoDirectory::parse(&ico).unwrap();
        let entry = dir.find(16, 16).unwrap();
        assert!(entry.is_png(&ico));
        let img = entry.decode(&ico).unwrap();
        assert_eq!(img.dimensions(), (16, 16));
        assert_eq!(img.get_pixel(8, 8).0, [255, 0, 0, 255]);
    }

    #[test]
    fn decode_bmp_entry() {
        let ico = ico_from_payloads(&[(2, 2, 32, dib(2, 2, [0, 0, 255, 255]))]);
        let dir = IcoDirectory::parse(&ico).unwrap();
        let entry = dir.find(2, 2).unwrap();
        assert!(!entry.is_png(&ico));
        let img = entry.decode(&ico).unwrap();
        assert_eq!(img.dimensions(), (2, 2));
        let px = img.to_rgba8().get_pixel(1, 1).0;
        assert_eq!(&px[..3], &[255, 0, 0]);
    }

    #[test]
    fn decode_entry_outside_file_is_error() {
        let mut ico = ico_from_payloads(&[(16, 16, 32, vec![0u8; 4])]);
        ico.truncate(ico.len() - 2);
        let dir = IcoDirectory::parse(&ico).unwrap();
        assert!(dir.find(16, 16).unwrap().decode(&ico).is_err());
    }
}
