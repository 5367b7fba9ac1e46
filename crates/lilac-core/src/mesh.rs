//! The validated, immutable mesh model (spec.md §3, §4.3).
//!
//! A [`Mesh`] is only ever produced by [`crate::loader::load_mesh`] — by the
//! time one exists, every invariant in spec.md §3 has already been checked,
//! so this module exposes no mutation API at all, only read access.

/// A single mesh vertex: 2D position plus a polar-encoded unit surface
/// normal.
///
/// All four fields are raw encoded values in `[0, C_MAX)` (`C_MAX =
/// 16384`), exactly as they appear in the source file; decoding `normd`/
/// `norma` into a 3D unit vector and `x`/`y` into pixel space is the
/// rasterizer's job ([`crate::mesh`] itself never decodes them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshPoint {
    /// Encoded polar normal distance (colatitude-like magnitude).
    pub normd: u16,
    /// Encoded polar normal angle.
    pub norma: u16,
    /// Encoded horizontal position.
    pub x: u16,
    /// Encoded vertical position.
    pub y: u16,
}

/// A validated Lilac mesh: a point list and a counter-clockwise-wound,
/// lexicographically-sorted triangle list, both fully used (no orphan
/// points, no unreferenced or duplicated directed edges).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    points: Vec<MeshPoint>,
    tris: Vec<[u16; 3]>,
}

impl Mesh {
    /// Construct a mesh directly from already-validated parts.
    ///
    /// Only [`crate::loader::load_mesh`] should call this; it performs no
    /// validation itself, by design — the loader is the sole place the
    /// invariants in spec.md §3 are enforced.
    pub(crate) fn from_validated_parts(points: Vec<MeshPoint>, tris: Vec<[u16; 3]>) -> Self {
        Mesh { points, tris }
    }

    /// The mesh's points, in declaration order (point index `i` is
    /// `points()[i]`).
    pub fn points(&self) -> &[MeshPoint] {
        &self.points
    }

    /// The mesh's triangles, each a triple of 0-based point indices in
    /// counter-clockwise winding order, sorted ascending by `(v1, v2)`.
    pub fn tris(&self) -> &[[u16; 3]] {
        &self.tris
    }

    /// Number of points in the mesh.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of triangles in the mesh.
    pub fn tri_count(&self) -> usize {
        self.tris.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_reflect_constructed_parts() {
        let points = vec![
            MeshPoint { normd: 0, norma: 0, x: 10, y: 20 },
            MeshPoint { normd: 5, norma: 5, x: 30, y: 40 },
        ];
        let tris = vec![[0, 1, 0]];
        let mesh = Mesh::from_validated_parts(points.clone(), tris.clone());
        assert_eq!(mesh.point_count(), 2);
        assert_eq!(mesh.tri_count(), 1);
        assert_eq!(mesh.points(), points.as_slice());
        assert_eq!(mesh.tris(), tris.as_slice());
    }
}
