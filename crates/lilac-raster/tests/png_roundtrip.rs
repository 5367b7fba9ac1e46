//! End-to-end PNG I/O checks: writing a rendered buffer, and building a
//! buffer from a mask image, both through the real `png` crate rather
//! than canned bytes.

use lilac_raster::buffer::{Buffer, MASK_SENTINEL};
use lilac_raster::png_io;

#[test]
fn writes_a_readable_rgba_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let mut buffer = Buffer::with_dimensions(4, 4).unwrap();
    buffer.put_unless_masked(1, 1, 0xFF10_2030);
    png_io::write_rgba(&path, 4, 4, &buffer.to_rgba8()).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().unwrap();
    let mut out = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut out).unwrap();
    assert_eq!(info.width, 4);
    assert_eq!(info.height, 4);

    let pixel_1_1 = &out[(1 * 4 + 1) * 4..(1 * 4 + 1) * 4 + 4];
    assert_eq!(pixel_1_1, &[0x10, 0x20, 0x30, 0xFF]);
}

#[test]
fn writes_a_readable_grayscale_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out_gray.png");

    let mut buffer = Buffer::with_dimensions(2, 1).unwrap();
    buffer.put_unless_masked(1, 0, 0xFF42_4242);
    png_io::write_gray(&path, 2, 1, &buffer.to_gray8()).unwrap();

    let file = std::fs::File::open(&path).unwrap();
    let decoder = png::Decoder::new(file);
    let mut reader = decoder.read_info().unwrap();
    assert_eq!(reader.info().color_type, png::ColorType::Grayscale);
    let mut out = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut out).unwrap();
    assert_eq!(info.width, 2);
    assert_eq!(info.height, 1);
    assert_eq!(out[0], 0);
    assert_eq!(out[1], 0x42);
}

#[test]
fn mask_png_produces_sentinel_for_black_and_zero_for_white() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mask.png");

    // A 2x1 grayscale mask: black then white.
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = png::Encoder::new(file, 2, 1);
    encoder.set_color(png::ColorType::Grayscale);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(&[0u8, 255u8]).unwrap();
    drop(writer);

    let buffer = Buffer::from_mask_png(&path).unwrap();
    assert_eq!(buffer.width(), 2);
    assert_eq!(buffer.height(), 1);
    assert_eq!(buffer.get(0, 0), MASK_SENTINEL);
    assert_eq!(buffer.get(1, 0), 0);
}

#[test]
fn rendering_the_same_mesh_twice_is_byte_identical() {
    use lilac_core::{load_mesh, TextTokenizer};
    use lilac_raster::{convert_mesh, render_mesh, InterpolationKind, VertexMode};

    let src = "%lilac-mesh;\n%dim 3 1;\n\
               0 0 1 1 p 0 0 18 1 p 0 0 9 18 p 0 1 2 t";

    let render_once = || {
        let mut tok = TextTokenizer::new(src);
        let mesh = load_mesh(&mut tok).unwrap();
        let vertices = convert_mesh(&mesh, 20, 20, VertexMode::ThreeD);
        let mut buffer = Buffer::with_dimensions(20, 20).unwrap();
        render_mesh(&mesh, &vertices, InterpolationKind::Vector, &mut buffer);
        buffer.to_rgba8()
    };

    assert_eq!(render_once(), render_once());
}
