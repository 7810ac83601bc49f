use thiserror::Error;

/// Failure to turn the map image into pixel data.
///
/// Fatal to initialization: the host logs it and never enters the
/// interactive state.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("image could not be decoded: {0}")]
    Image(#[from] image::ImageError),
    #[error("unsupported pixel format {0}, expected 8-bit RGBA")]
    UnsupportedFormat(String),
    #[error("image has no pixel data")]
    MissingPixels,
    #[error("image has zero width or height")]
    EmptyImage,
    #[error("pixel buffer holds {actual} bytes but {width}x{height} RGBA needs {expected}")]
    TruncatedPixels {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("sample step must be at least 1 pixel")]
    InvalidSampleStep,
}

#[derive(Debug, Error)]
pub enum DotMapError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("invalid map config: {0}")]
    InvalidConfig(String),
}
