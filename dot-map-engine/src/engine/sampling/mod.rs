//! Raster image → normalized point set.
//!
//! The sampler walks the image on a fixed pixel stride and keeps the
//! "ink" pixels (opaque and not near-white) as dots, placing each one on
//! the ground plane of a map whose width is fixed in world units.

/// Stride sampling, keep predicate and UV/world placement.
pub mod image_sampler;

/// Read-only RGBA pixel access over `image` buffers and Bevy images.
pub mod pixel_source;

pub use image_sampler::{SampledMap, SampledPoint, keeps_pixel, sample_image};
pub use pixel_source::{PixelSource, RgbaPixels, decode_image};
