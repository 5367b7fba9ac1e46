//! Vertex conversion, edge interpolation, and scanline rasterization for
//! validated Lilac meshes.
//!
//! A [`lilac_core::Mesh`] is purely topological and numeric; this crate
//! turns one into pixels. [`convert`] decodes each point into a render
//! [`convert::Vertex`], [`interp`] interpolates two such vertices across
//! an edge (linearly, or via spherical interpolation for unit normals),
//! and [`raster`] walks triangles scanline-by-scanline into a
//! [`buffer::Buffer`], which [`png_io`] reads (as a mask) and writes (as
//! the final image).

pub mod buffer;
pub mod convert;
pub mod error;
pub mod interp;
pub mod png_io;
pub mod raster;

pub use buffer::Buffer;
pub use convert::{convert_vertex, InterpolationKind, Vertex, VertexMode};
pub use error::RasterError;
pub use interp::Interpolator;
pub use raster::{render_tri, vertex_color};

use lilac_core::Mesh;

/// Decode every point of `mesh` into a render [`Vertex`] positioned
/// within a `width x height` buffer.
pub fn convert_mesh(mesh: &Mesh, width: u32, height: u32, mode: VertexMode) -> Vec<Vertex> {
    mesh.points()
        .iter()
        .map(|p| convert_vertex(p, width, height, mode))
        .collect()
}

/// Rasterize every triangle of `mesh` into `buffer`, given its points
/// already converted by [`convert_mesh`].
///
/// # Panics
///
/// Panics (via [`lilac_core::Mesh`]'s own guarantee) never occurs from an
/// out-of-range triangle index here: `mesh` is already validated, so every
/// triangle's indices are in bounds by construction.
pub fn render_mesh(mesh: &Mesh, vertices: &[Vertex], kind: InterpolationKind, buffer: &mut Buffer) {
    for tri in mesh.tris() {
        let v1 = vertices[tri[0] as usize];
        let v2 = vertices[tri[1] as usize];
        let v3 = vertices[tri[2] as usize];
        render_tri(v1, v2, v3, kind, buffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lilac_core::{load_mesh, TextTokenizer};

    #[test]
    fn converts_and_renders_a_minimal_quad() {
        let src = "%lilac-mesh;\n%dim 4 2;\n\
                   0 0 0 0 p 0 0 10 0 p 0 0 10 10 p 0 0 0 10 p \
                   0 1 2 t 0 2 3 t";
        let mut tok = TextTokenizer::new(src);
        let mesh = load_mesh(&mut tok).unwrap();

        let vertices = convert_mesh(&mesh, 20, 20, VertexMode::ThreeD);
        assert_eq!(vertices.len(), 4);

        let mut buffer = Buffer::with_dimensions(20, 20).unwrap();
        render_mesh(&mesh, &vertices, InterpolationKind::Vector, &mut buffer);

        let mut any_written = false;
        for y in 0..20 {
            for x in 0..20 {
                if buffer.get(x, y) != 0 {
                    any_written = true;
                }
            }
        }
        assert!(any_written);
    }
}
