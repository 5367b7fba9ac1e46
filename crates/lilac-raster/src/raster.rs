//! Scanline triangle rasterization with a top-left fill rule (spec.md
//! §4.6): each triangle is split into two "pairs" sharing its longest
//! edge, each pair is walked scanline-by-scanline, and each scanline is
//! filled left-to-right, skipping pixels the mask has sealed off.

use crate::buffer::Buffer;
use crate::convert::{InterpolationKind, Vertex};
use crate::interp::Interpolator;

fn ifloor(x: f64) -> i64 {
    assert!(x.is_finite(), "coordinate must be finite");
    x.floor() as i64
}

/// Pack an interpolated vertex into an `0xAARRGGBB` pixel, clamping every
/// channel to `[1, 255]` so no rendered color ever collides with
/// [`crate::buffer::MASK_SENTINEL`] (`0xFF000000`).
pub fn vertex_color(v: &Vertex, kind: InterpolationKind) -> u32 {
    match kind {
        InterpolationKind::Scalar => {
            let g = channel_byte(v.v);
            0xFF00_0000 | (g << 16) | (g << 8) | g
        }
        InterpolationKind::Vector => {
            let r = channel_byte(v.vx);
            let g = channel_byte(v.vy);
            let b = channel_byte(v.vz);
            0xFF00_0000 | (r << 16) | (g << 8) | b
        }
    }
}

fn channel_byte(c: f32) -> u32 {
    assert!(c.is_finite(), "color channel must be finite");
    let gf = (((c as f64 + 1.0) / 2.0) * 254.0).floor() + 1.0;
    let gf = gf.clamp(1.0, 255.0);
    (gf as i64).clamp(1, 255) as u32
}

/// Fill one horizontal scanline between two vertices that share a Y
/// coordinate, interpolating across X with the top-left fill rule.
fn render_span(v1: Vertex, v2: Vertex, kind: InterpolationKind, buffer: &mut Buffer) {
    assert!((v1.y - v2.y).abs() < 1e-6, "render_span requires equal-y endpoints");
    let (left, right) = if v1.x <= v2.x { (v1, v2) } else { (v2, v1) };

    let y = ifloor(left.y);
    if y < 0 || y >= buffer.height() as i64 {
        return;
    }

    let x_min_floor = ifloor(left.x);
    let x_max_floor = ifloor(right.x);
    let mut x_min = x_min_floor;
    if left.x - x_min_floor as f64 > 0.5 {
        x_min += 1;
    }
    let mut x_max = x_max_floor;
    if right.x - x_max_floor as f64 <= 0.5 {
        x_max -= 1;
    }
    if x_max < x_min || x_max < 0 || x_min >= buffer.width() as i64 {
        return;
    }
    x_min = x_min.max(0);
    x_max = x_max.min(buffer.width() as i64 - 1);

    let interp = Interpolator::new(left, right, kind);
    let y = y as u32;
    for x in x_min..=x_max {
        let x = x as u32;
        if buffer.get(x, y) == crate::buffer::MASK_SENTINEL {
            continue;
        }
        let at = interp.at_x(x as f64 + 0.5);
        buffer.put_unless_masked(x, y, vertex_color(&at, kind));
    }
}

/// Fill the Y-overlap of two edges, one scanline at a time, by
/// delegating each row to [`render_span`].
fn render_pair(
    (a1, a2): (Vertex, Vertex),
    (b1, b2): (Vertex, Vertex),
    kind: InterpolationKind,
    buffer: &mut Buffer,
) {
    let (a1, a2) = if a1.y <= a2.y { (a1, a2) } else { (a2, a1) };
    let (b1, b2) = if b1.y <= b2.y { (b1, b2) } else { (b2, b1) };

    let min_y = a1.y.max(b1.y);
    let max_y = a2.y.min(b2.y);
    if min_y > max_y {
        return;
    }

    let start_floor = ifloor(min_y);
    let finish_floor = ifloor(max_y);
    let mut start_y = start_floor;
    if min_y - start_floor as f64 > 0.5 {
        start_y += 1;
    }
    let mut finish_y = finish_floor;
    if max_y - finish_floor as f64 <= 0.5 {
        finish_y -= 1;
    }
    if finish_y < start_y || finish_y < 0 || start_y >= buffer.height() as i64 {
        return;
    }
    start_y = start_y.max(0);
    finish_y = finish_y.min(buffer.height() as i64 - 1);

    let interp_a = Interpolator::new(a1, a2, kind);
    let interp_b = Interpolator::new(b1, b2, kind);

    for y in start_y..=finish_y {
        let ys = y as f64 + 0.5;
        let va = interp_a.at_y(ys);
        let vb = interp_b.at_y(ys);
        render_span(va, vb, kind, buffer);
    }
}

/// Rasterize one counter-clockwise-wound triangle into `buffer`.
///
/// Splits the triangle along its longest edge (by `|dy|`, ties won by the
/// first edge found in `v1->v2, v2->v3, v3->v1` order) and fills the two
/// resulting edge pairs independently, exactly as `renderTri` does in the
/// original implementation.
pub fn render_tri(v1: Vertex, v2: Vertex, v3: Vertex, kind: InterpolationKind, buffer: &mut Buffer) {
    let edges = [(v1, v2), (v2, v3), (v3, v1)];
    let mut long_edge = 0usize;
    let mut long_dy = (edges[0].1.y - edges[0].0.y).abs();
    for (i, &(ea, eb)) in edges.iter().enumerate().skip(1) {
        let dy = (eb.y - ea.y).abs();
        if dy > long_dy {
            long_dy = dy;
            long_edge = i;
        }
    }

    let other = [0, 1, 2].into_iter().filter(|&i| i != long_edge);
    let long = edges[long_edge];
    for i in other {
        render_pair(long, edges[i], kind, buffer);
    }
}
