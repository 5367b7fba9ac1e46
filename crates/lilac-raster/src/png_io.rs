//! PNG read/write wrappers, grounded on `speccade-backend-texture::png`'s
//! direct use of the `png` crate (no `image` crate indirection): fixed
//! compression/filter settings for deterministic output, `Encoder`/
//! `Decoder` used directly.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Compression, FilterType};

use crate::error::RasterError;

/// Encode/decode tuning, mirroring `PngConfig` in the teacher's texture
/// backend: fixed rather than per-call so repeated renders of the same
/// mesh produce byte-identical files (R2).
#[derive(Debug, Clone, Copy)]
pub struct PngConfig {
    compression: Compression,
    filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        PngConfig {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

/// Write an RGBA8 buffer to `path`.
pub fn write_rgba(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<(), RasterError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    write_rgba_to_writer(writer, width, height, rgba, PngConfig::default())
}

/// Write an RGBA8 buffer to an arbitrary writer, using the given
/// [`PngConfig`].
pub fn write_rgba_to_writer<W: std::io::Write>(
    writer: W,
    width: u32,
    height: u32,
    rgba: &[u8],
    config: PngConfig,
) -> Result<(), RasterError> {
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}

/// Write an 8-bit grayscale buffer to `path`, the down-converted output
/// for scalar-channel renders (spec.md §6.3's `down_conversion = GRAY`).
pub fn write_gray(path: &Path, width: u32, height: u32, gray: &[u8]) -> Result<(), RasterError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    write_gray_to_writer(writer, width, height, gray, PngConfig::default())
}

/// Write an 8-bit grayscale buffer to an arbitrary writer, using the given
/// [`PngConfig`].
pub fn write_gray_to_writer<W: std::io::Write>(
    writer: W,
    width: u32,
    height: u32,
    gray: &[u8],
    config: PngConfig,
) -> Result<(), RasterError> {
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(gray)?;
    Ok(())
}

/// A decoded mask image: its dimensions and one grayscale luminance byte
/// per pixel (`0..=255`).
pub struct DecodedMask {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// Per-pixel luminance, row-major.
    pub luma: Vec<u8>,
}

/// Decode a mask PNG to grayscale luminance, converting RGB/RGBA source
/// images via the standard Rec. 601 luma weights if needed.
pub fn read_mask(path: &Path) -> Result<DecodedMask, RasterError> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let width = info.width;
    let height = info.height;

    let luma = match info.color_type {
        ColorType::Grayscale => buf[..info.buffer_size()].to_vec(),
        ColorType::GrayscaleAlpha => buf[..info.buffer_size()]
            .chunks_exact(2)
            .map(|px| px[0])
            .collect(),
        ColorType::Rgb => buf[..info.buffer_size()]
            .chunks_exact(3)
            .map(|px| luma_of(px[0], px[1], px[2]))
            .collect(),
        ColorType::Rgba => buf[..info.buffer_size()]
            .chunks_exact(4)
            .map(|px| luma_of(px[0], px[1], px[2]))
            .collect(),
        ColorType::Indexed => return Err(RasterError::UnsupportedMaskFormat),
    };

    Ok(DecodedMask {
        width,
        height,
        luma,
    })
}

fn luma_of(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}
