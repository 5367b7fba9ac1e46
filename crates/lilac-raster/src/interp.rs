//! Edge interpolation (spec.md §4.5): linear position interpolation
//! always, plus mode-dependent normal interpolation — linear for a
//! scalar channel, spherical (slerp) for a unit vector, falling back to
//! plain linear or a double-slerp-through-a-pole near the degenerate
//! 0-degree and 180-degree cases.

use crate::convert::{InterpolationKind, Vertex};
use std::f64::consts::PI;

/// Below this angle between two normals, slerp's `1/sin(angle)` term is
/// numerically unstable; fall back to linear interpolation of the vector
/// components instead.
pub const MIN_SLERP_ANGLE: f64 = PI / 1024.0;

/// Above this angle, the two normals are within `PI/1024` of being
/// exact opposites; slerp is replaced with two back-to-back slerps
/// through the pole vector `(0, 0, 1)`.
pub const MAX_SLERP_ANGLE: f64 = PI - PI / 1024.0;

/// Below this separation on the interpolation axis, `at_x`/`at_y` treat
/// the edge as vertical/horizontal and skip the division that would
/// otherwise blow up.
pub const IVEC_THETA: f64 = 0.00001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Scalar,
    VLinear,
    Slerp,
    Double,
}

/// An interpolator bound to one mesh edge's two endpoint vertices.
#[derive(Debug, Clone, Copy)]
pub struct Interpolator {
    v1: Vertex,
    v2: Vertex,
    mode: Mode,
    angle: f64,
    denom: f64,
}

impl Interpolator {
    /// Build an interpolator for the edge `v1 -> v2`.
    ///
    /// # Panics
    ///
    /// Panics if an intermediate dot-product or angle computation in the
    /// vector case is non-finite — a fault, since both vertices already
    /// passed [`crate::convert::convert_vertex`]'s finiteness check.
    pub fn new(v1: Vertex, v2: Vertex, kind: InterpolationKind) -> Self {
        match kind {
            InterpolationKind::Scalar => Interpolator {
                v1,
                v2,
                mode: Mode::Scalar,
                angle: 0.0,
                denom: 0.0,
            },
            InterpolationKind::Vector => {
                let dot = (v1.vx as f64) * (v2.vx as f64)
                    + (v1.vy as f64) * (v2.vy as f64)
                    + (v1.vz as f64) * (v2.vz as f64);
                assert!(dot.is_finite(), "normal dot product must be finite");
                let clamped = dot.clamp(-1.0, 1.0);
                let angle = clamped.acos();
                assert!(angle.is_finite(), "angle between normals must be finite");

                if angle < MIN_SLERP_ANGLE {
                    Interpolator {
                        v1,
                        v2,
                        mode: Mode::VLinear,
                        angle,
                        denom: 0.0,
                    }
                } else if angle > MAX_SLERP_ANGLE {
                    Interpolator {
                        v1,
                        v2,
                        mode: Mode::Double,
                        angle,
                        denom: 0.0,
                    }
                } else {
                    let denom = angle.sin();
                    Interpolator {
                        v1,
                        v2,
                        mode: Mode::Slerp,
                        angle,
                        denom,
                    }
                }
            }
        }
    }

    /// Interpolate position and normal/scalar channel at parameter `t`,
    /// clamped to `[0, 1]`.
    pub fn compute(&self, t: f64) -> Vertex {
        let t = t.clamp(0.0, 1.0);
        let x = lerp(self.v1.x, self.v2.x, t);
        let y = lerp(self.v1.y, self.v2.y, t);
        assert!(x.is_finite() && y.is_finite(), "interpolated position must be finite");

        match self.mode {
            Mode::Scalar => {
                let v = lerp_f32(self.v1.v, self.v2.v, t).clamp(-1.0, 1.0);
                Vertex { x, y, v, vx: 0.0, vy: 0.0, vz: 0.0 }
            }
            Mode::VLinear => {
                let vx = lerp_f32(self.v1.vx, self.v2.vx, t);
                let vy = lerp_f32(self.v1.vy, self.v2.vy, t);
                let vz = lerp_f32(self.v1.vz, self.v2.vz, t);
                Vertex { x, y, v: 0.0, vx, vy, vz }
            }
            Mode::Slerp => {
                let a = ((1.0 - t) * self.angle).sin();
                let b = (t * self.angle).sin();
                let vx = slerp_component(a, b, self.v1.vx, self.v2.vx, self.denom);
                let vy = slerp_component(a, b, self.v1.vy, self.v2.vy, self.denom);
                let vz = slerp_component(a, b, self.v1.vz, self.v2.vz, self.denom);
                Vertex { x, y, v: 0.0, vx, vy, vz }
            }
            Mode::Double => {
                // Two quarter-turn slerps through the pole (0, 0, 1),
                // each with angle = PI/2 and denom = 1.
                let (vx, vy, vz) = if t < 0.5 {
                    let tp = 2.0 * t;
                    let a = ((1.0 - tp) * (PI / 2.0)).sin();
                    let b = (tp * (PI / 2.0)).sin();
                    (
                        (a * self.v1.vx as f64) as f32,
                        (a * self.v1.vy as f64) as f32,
                        (a * self.v1.vz as f64 + b) as f32,
                    )
                } else {
                    let tp = 2.0 * (t - 0.5);
                    let a = ((1.0 - tp) * (PI / 2.0)).sin();
                    let b = (tp * (PI / 2.0)).sin();
                    (
                        (b * self.v2.vx as f64) as f32,
                        (b * self.v2.vy as f64) as f32,
                        (a + b * self.v2.vz as f64) as f32,
                    )
                };
                Vertex { x, y, v: 0.0, vx, vy, vz }
            }
        }
    }

    /// Interpolate at the point on this edge where `x` takes the given
    /// value, then force `x` to that exact value.
    ///
    /// # Panics
    ///
    /// Panics if `x` lies outside the edge's `[min(x1, x2), max(x1, x2)]`
    /// span — the caller is responsible for clamping its scan range to
    /// the edge before calling this.
    pub fn at_x(&self, x: f64) -> Vertex {
        let (min_x, max_x, reverse) = if self.v1.x <= self.v2.x {
            (self.v1.x, self.v2.x, false)
        } else {
            (self.v2.x, self.v1.x, true)
        };
        assert!(
            x >= min_x - 1e-6 && x <= max_x + 1e-6,
            "x out of range for edge interpolation"
        );
        let span = max_x - min_x;
        let mut t = if span >= IVEC_THETA { (x - min_x) / span } else { 0.0 };
        if reverse {
            t = 1.0 - t;
        }
        let mut result = self.compute(t);
        result.x = x;
        result
    }

    /// Symmetric counterpart to [`Interpolator::at_x`] on the Y axis.
    pub fn at_y(&self, y: f64) -> Vertex {
        let (min_y, max_y, reverse) = if self.v1.y <= self.v2.y {
            (self.v1.y, self.v2.y, false)
        } else {
            (self.v2.y, self.v1.y, true)
        };
        assert!(
            y >= min_y - 1e-6 && y <= max_y + 1e-6,
            "y out of range for edge interpolation"
        );
        let span = max_y - min_y;
        let mut t = if span >= IVEC_THETA { (y - min_y) / span } else { 0.0 };
        if reverse {
            t = 1.0 - t;
        }
        let mut result = self.compute(t);
        result.y = y;
        result
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_f32(a: f32, b: f32, t: f64) -> f32 {
    (a as f64 + (b as f64 - a as f64) * t) as f32
}

fn slerp_component(a: f64, b: f64, c1: f32, c2: f32, denom: f64) -> f32 {
    ((a * c1 as f64 + b * c2 as f64) / denom) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f64, y: f64, vx: f32, vy: f32, vz: f32) -> Vertex {
        Vertex { x, y, v: 0.0, vx, vy, vz }
    }

    #[test]
    fn scalar_midpoint_is_average() {
        let v1 = Vertex { x: 0.0, y: 0.0, v: -1.0, vx: 0.0, vy: 0.0, vz: 0.0 };
        let v2 = Vertex { x: 10.0, y: 0.0, v: 1.0, vx: 0.0, vy: 0.0, vz: 0.0 };
        let interp = Interpolator::new(v1, v2, InterpolationKind::Scalar);
        let mid = interp.compute(0.5);
        assert!((mid.v - 0.0).abs() < 1e-6);
        assert!((mid.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn near_parallel_normals_fall_back_to_vlinear() {
        let v1 = vertex(0.0, 0.0, 0.0, 0.0, 1.0);
        let v2 = vertex(10.0, 0.0, 0.000001, 0.0, 1.0);
        let interp = Interpolator::new(v1, v2, InterpolationKind::Vector);
        assert_eq!(interp.mode, Mode::VLinear);
    }

    #[test]
    fn near_opposite_normals_use_double_slerp() {
        let v1 = vertex(0.0, 0.0, 0.0, 0.0, 1.0);
        let v2 = vertex(10.0, 0.0, 0.0, 0.0, -1.0);
        let interp = Interpolator::new(v1, v2, InterpolationKind::Vector);
        assert_eq!(interp.mode, Mode::Double);
        let mid = interp.compute(0.5);
        // Midpoint of a double-slerp through (0,0,1) lands exactly on
        // the pole.
        assert!((mid.vz - 1.0).abs() < 1e-6);
        assert!(mid.vx.abs() < 1e-6 && mid.vy.abs() < 1e-6);
    }

    #[test]
    fn orthogonal_normals_slerp_preserves_unit_length() {
        let v1 = vertex(0.0, 0.0, 1.0, 0.0, 0.0);
        let v2 = vertex(10.0, 0.0, 0.0, 1.0, 0.0);
        let interp = Interpolator::new(v1, v2, InterpolationKind::Vector);
        assert_eq!(interp.mode, Mode::Slerp);
        let mid = interp.compute(0.5);
        let len = ((mid.vx * mid.vx + mid.vy * mid.vy + mid.vz * mid.vz) as f64).sqrt();
        assert!((len - 1.0).abs() < 1e-5);
    }

    #[test]
    fn at_x_forces_exact_x_and_interpolates_consistently() {
        let v1 = vertex(0.0, 0.0, 1.0, 0.0, 0.0);
        let v2 = vertex(10.0, 20.0, 0.0, 1.0, 0.0);
        let interp = Interpolator::new(v1, v2, InterpolationKind::Vector);
        let at = interp.at_x(5.0);
        assert_eq!(at.x, 5.0);
        assert!((at.y - 10.0).abs() < 1e-6);
    }

    #[test]
    fn at_x_on_vertical_edge_does_not_divide_by_zero() {
        let v1 = vertex(3.0, 0.0, 1.0, 0.0, 0.0);
        let v2 = vertex(3.0, 20.0, 0.0, 1.0, 0.0);
        let interp = Interpolator::new(v1, v2, InterpolationKind::Vector);
        let at = interp.at_x(3.0);
        assert_eq!(at.x, 3.0);
    }
}
