#![allow(dead_code)]

pub mod site_server;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{DynamicImage, ExtendedColorType, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// ICO container with one solid square PNG frame per `(size, color)`.
pub fn multi_size_ico(frames: &[(u32, [u8; 4])]) -> Vec<u8> {
    let frames: Vec<IcoFrame<'static>> = frames
        .iter()
        .map(|(s, c)| {
            let img = RgbaImage::from_pixel(*s, *s, Rgba(*c));
            IcoFrame::as_png(img.as_raw(), *s, *s, ExtendedColorType::Rgba8).unwrap()
        })
        .collect();
    let mut out = Vec::new();
    IcoEncoder::new(&mut out).encode_images(&frames).unwrap();
    out
}

pub fn png(w: u32, h: u32, color: [u8; 4]) -> Vec<u8> {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(w, h, Rgba(color)));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png).unwrap();
    out
}
