use std::borrow::Cow;

use bevy::image::Image;
use bevy::log::debug;
use bevy::render::render_resource::TextureFormat;
use image::{DynamicImage, ImageBuffer, RgbaImage};

use crate::engine::error::DecodeError;

#[cfg(test)]
#[path = "pixel_source_test.rs"]
mod pixel_source_test;

/// Anything the sampler can read 8-bit RGBA pixels from.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// RGBA of the pixel at column `x`, row `y`. Callers stay in bounds.
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        self.get_pixel(x, y).0
    }
}

/// Tightly packed RGBA8 rows, borrowed when the source is already RGBA8.
#[derive(Debug, Clone)]
pub struct RgbaPixels<'a> {
    width: u32,
    height: u32,
    data: Cow<'a, [u8]>,
}

impl<'a> RgbaPixels<'a> {
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, DecodeError> {
        Self::from_cow(width, height, Cow::Borrowed(data))
    }

    fn from_cow(width: u32, height: u32, data: Cow<'a, [u8]>) -> Result<Self, DecodeError> {
        let expected = width as usize * height as usize * 4;
        if data.len() < expected {
            return Err(DecodeError::TruncatedPixels {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// View a Bevy image loaded by the asset server.
    ///
    /// 8-bit RGBA is read in place. The 16-bit and float layouts Bevy's PNG
    /// loader produces, and anything else Bevy can turn back into a
    /// `DynamicImage`, are converted to RGBA8 first.
    pub fn from_bevy_image(image: &'a Image) -> Result<Self, DecodeError> {
        let format = image.texture_descriptor.format;
        let data = image.data.as_deref().ok_or(DecodeError::MissingPixels)?;
        let (width, height) = (image.width(), image.height());

        if matches!(
            format,
            TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb
        ) {
            return Self::new(width, height, data);
        }

        let dynamic = match wide_to_dynamic(format, width, height, data) {
            Some(dynamic) => dynamic,
            None => image
                .clone()
                .try_into_dynamic()
                .map_err(|err| DecodeError::UnsupportedFormat(format!("{format:?}: {err}")))?,
        };
        debug!("Converting {format:?} map image to RGBA8");
        Self::from_cow(width, height, Cow::Owned(dynamic.to_rgba8().into_raw()))
    }
}

/// Rebuild a `DynamicImage` from the 16-bit and float layouts that
/// `Image::from_dynamic` writes. Samples are in native byte order.
fn wide_to_dynamic(
    format: TextureFormat,
    width: u32,
    height: u32,
    data: &[u8],
) -> Option<DynamicImage> {
    match format {
        TextureFormat::R16Uint | TextureFormat::R16Unorm => {
            ImageBuffer::from_raw(width, height, u16_samples(data)).map(DynamicImage::ImageLuma16)
        }
        TextureFormat::Rg16Uint | TextureFormat::Rg16Unorm => {
            ImageBuffer::from_raw(width, height, u16_samples(data)).map(DynamicImage::ImageLumaA16)
        }
        TextureFormat::Rgba16Uint | TextureFormat::Rgba16Unorm => {
            ImageBuffer::from_raw(width, height, u16_samples(data)).map(DynamicImage::ImageRgba16)
        }
        TextureFormat::Rgba32Float => ImageBuffer::from_raw(width, height, f32_samples(data))
            .map(DynamicImage::ImageRgba32F),
        _ => None,
    }
}

fn u16_samples(data: &[u8]) -> Vec<u16> {
    data.chunks_exact(2)
        .map(|bytes| u16::from_ne_bytes([bytes[0], bytes[1]]))
        .collect()
}

fn f32_samples(data: &[u8]) -> Vec<f32> {
    data.chunks_exact(4)
        .map(|bytes| f32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect()
}

impl PixelSource for RgbaPixels<'_> {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }
}

/// Decode encoded image bytes (PNG) into an RGBA buffer.
pub fn decode_image(bytes: &[u8]) -> Result<RgbaImage, DecodeError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}
