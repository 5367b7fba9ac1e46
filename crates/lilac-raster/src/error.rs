//! Data-driven failures for vertex conversion, interpolation and
//! rasterization.
//!
//! Only conditions that originate from user-supplied data (CLI dimension
//! arguments, a mask PNG's own size) are represented here. Conditions that
//! indicate a broken invariant inside a mesh already validated by
//! `lilac-core` — non-finite intermediate values, interpolation parameters
//! outside `[0, 1]`, coordinates outside an edge's own span — are faults
//! and `panic!`/`assert!` instead, matching `lilac-core`'s split between
//! `MeshError` and internal invariant violations.

use thiserror::Error;

/// The largest image width or height this crate will allocate a buffer
/// for, matching `MAX_IMAGE_DIM` in `lilacme2png.c`.
pub const MAX_IMAGE_DIM: u32 = 16384;

/// The largest total pixel count (`width * height`) this crate will
/// allocate a buffer for, matching `MAX_IMAGE_PIXELS`.
pub const MAX_IMAGE_PIXELS: u64 = 16_777_216;

/// Failures raised while building or writing an output raster buffer.
#[derive(Debug, Error)]
pub enum RasterError {
    /// A requested width or height was zero.
    #[error("image dimensions must be at least 1x1, got {width}x{height}")]
    ZeroDimension {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },
    /// A requested or decoded dimension exceeded [`MAX_IMAGE_DIM`].
    #[error("image dimension {0} exceeds the maximum of {MAX_IMAGE_DIM}")]
    DimensionTooLarge(u32),
    /// The requested or decoded pixel count exceeded [`MAX_IMAGE_PIXELS`].
    #[error("image pixel count {0} exceeds the maximum of {MAX_IMAGE_PIXELS}")]
    PixelCountTooLarge(u64),
    /// The mask image was not 8-bit grayscale or RGB/RGBA.
    #[error("mask image must be grayscale, RGB, or RGBA")]
    UnsupportedMaskFormat,
    /// Failed to decode the mask PNG.
    #[error("failed to decode mask image: {0}")]
    Decode(#[from] png::DecodingError),
    /// Failed to encode the output PNG.
    #[error("failed to encode output image: {0}")]
    Encode(#[from] png::EncodingError),
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension_message_includes_both_values() {
        let err = RasterError::ZeroDimension { width: 0, height: 5 };
        assert_eq!(
            err.to_string(),
            "image dimensions must be at least 1x1, got 0x5"
        );
    }
}
