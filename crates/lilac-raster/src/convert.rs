//! Conversion from encoded [`lilac_core::MeshPoint`]s to floating-point
//! render vertices (spec.md §4.4).
//!
//! Every encoded field (`x`, `y`, `normd`, `norma`) is a `u16` in
//! `[0, C_MAX)`. This module decodes position into target-buffer pixel
//! space and the polar normal encoding into a unit vector (or one of its
//! components, depending on [`VertexMode`]).

use lilac_core::{MeshPoint, C_MAX};
use std::f64::consts::PI;

/// Which component(s) of the decoded unit normal a scalar or vector
/// render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexMode {
    /// Scalar render driven by the normal's X component.
    X,
    /// Scalar render driven by the normal's Y component.
    Y,
    /// Full 3D unit normal, Z reconstructed from X and Y.
    ThreeD,
}

/// Whether a render interpolates a single scalar channel or the full
/// vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationKind {
    /// Interpolate `vertex.v` only.
    Scalar,
    /// Interpolate `vertex.vx/vy/vz` as a unit vector.
    Vector,
}

/// A converted render vertex: pixel-space position plus decoded normal
/// components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Horizontal pixel-space position (continuous, not yet floored).
    pub x: f64,
    /// Vertical pixel-space position (continuous, not yet floored).
    pub y: f64,
    /// Scalar channel value, valid when [`VertexMode::X`] or
    /// [`VertexMode::Y`] produced this vertex.
    pub v: f32,
    /// Normal X component.
    pub vx: f32,
    /// Normal Y component.
    pub vy: f32,
    /// Normal Z component, valid when [`VertexMode::ThreeD`] produced
    /// this vertex.
    pub vz: f32,
}

/// Decode one mesh point into a [`Vertex`] positioned within a
/// `width x height` target buffer.
///
/// # Panics
///
/// Panics if any decoded component is non-finite — a condition that
/// cannot arise from a validated [`MeshPoint`] (whose fields are all
/// bounded integers) and would indicate a bug in this function itself.
pub fn convert_vertex(point: &MeshPoint, width: u32, height: u32, mode: VertexMode) -> Vertex {
    let c_max = C_MAX as f64;
    let x_norm = point.x as f64 / c_max;
    let y_norm = point.y as f64 / c_max;
    let x = x_norm * (width as f64 - 1.0);
    let y = (1.0 - y_norm) * (height as f64 - 1.0);
    // Snap to pixel centers, matching the original's convertVertex().
    let x = x.floor() + 0.5;
    let y = y.floor() + 0.5;

    let ad = point.normd as f64 / c_max;
    let aa = (point.norma as f64 / c_max) * 2.0 * PI;
    let vx = (ad * aa.cos()) as f32;
    let vy = (ad * aa.sin()) as f32;

    let (v, vz) = match mode {
        VertexMode::X => (vx, 0.0),
        VertexMode::Y => (vy, 0.0),
        VertexMode::ThreeD => {
            let vx64 = vx as f64;
            let vy64 = vy as f64;
            let vz = (1.0 - vx64 * vx64 - vy64 * vy64).max(0.0).sqrt() as f32;
            (0.0, vz)
        }
    };

    let vertex = Vertex { x, y, v, vx, vy, vz };
    check_vertex(&vertex, mode);
    vertex
}

fn check_vertex(v: &Vertex, mode: VertexMode) {
    assert!(v.x.is_finite() && v.y.is_finite(), "vertex position must be finite");
    match mode {
        VertexMode::X | VertexMode::Y => {
            assert!(v.v.is_finite(), "scalar vertex value must be finite")
        }
        VertexMode::ThreeD => assert!(
            v.vx.is_finite() && v.vy.is_finite() && v.vz.is_finite(),
            "vector vertex value must be finite"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(normd: u16, norma: u16, x: u16, y: u16) -> MeshPoint {
        MeshPoint { normd, norma, x, y }
    }

    #[test]
    fn origin_point_maps_to_top_left_pixel_center() {
        let p = point(0, 0, 0, 0);
        let v = convert_vertex(&p, 100, 50, VertexMode::ThreeD);
        assert_eq!(v.x, 0.5);
        assert_eq!(v.y, 49.5);
    }

    #[test]
    fn max_xy_maps_to_bottom_right_pixel_center() {
        let p = point(0, 0, C_MAX as u16 - 1, C_MAX as u16 - 1);
        let v = convert_vertex(&p, 100, 50, VertexMode::ThreeD);
        assert!(v.x > 97.5 && v.x < 99.5);
        assert!(v.y > -0.5 && v.y < 1.5);
    }

    #[test]
    fn zero_normd_gives_zero_vector_and_full_z() {
        let p = point(0, 0, 0, 0);
        let v = convert_vertex(&p, 10, 10, VertexMode::ThreeD);
        assert_eq!(v.vx, 0.0);
        assert_eq!(v.vy, 0.0);
        assert!((v.vz - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scalar_x_mode_only_sets_v() {
        let p = point(5000, 0, 0, 0);
        let v = convert_vertex(&p, 10, 10, VertexMode::X);
        assert_eq!(v.vz, 0.0);
        assert!((v.v - v.vx).abs() < 1e-6);
    }
}
