//! The stack interpreter that turns a token stream into a validated
//! [`Mesh`] (spec.md §4.2).
//!
//! Structure mirrors `lilac_mesh_new()` in the original C: a strict header
//! protocol ([`read_header`]), then a body protocol that runs a tiny
//! stack machine over `NUMERIC` entities and the `p`/`t` operators
//! ([`load_mesh`]), then a handful of whole-mesh checks once the token
//! stream is exhausted.

use crate::error::{ErrorCode, MeshError};
use crate::mesh::{Mesh, MeshPoint};
use crate::token::{Entity, MeshTokenizer};
use crate::usage_map::UsageMap;
use crate::{C_MAX, P_MAX, STACK_MAX, T_MAX};

struct Header {
    point_count: u32,
    tri_count: u32,
}

/// Read and validate the two-metacommand header: `%lilac-mesh;` followed
/// by `%dim <points> <tris>;` (spec.md §4.2.1, exact check order).
fn read_header<T: MeshTokenizer>(tok: &mut T) -> Result<Header, MeshError> {
    match tok.next_entity()? {
        Entity::BeginMeta => {}
        _ => return Err(MeshError::mesh(ErrorCode::Nosig, 0)),
    }
    match tok.next_meta_entity()? {
        Entity::MetaToken(word) if word == "lilac-mesh" => {}
        _ => return Err(MeshError::mesh(ErrorCode::Nosig, 0)),
    }
    match tok.next_meta_entity()? {
        Entity::EndMeta => {}
        _ => return Err(MeshError::mesh(ErrorCode::Sigver, tok.line())),
    }

    match tok.next_entity()? {
        Entity::BeginMeta => {}
        _ => return Err(MeshError::mesh(ErrorCode::Nodim, 0)),
    }
    match tok.next_meta_entity()? {
        Entity::MetaToken(word) if word == "dim" => {}
        _ => return Err(MeshError::mesh(ErrorCode::Nodim, 0)),
    }
    let point_count = match tok.next_meta_entity()? {
        Entity::MetaToken(word) => {
            parse_number(&word).ok_or_else(|| MeshError::mesh(ErrorCode::Dimval, tok.line()))?
        }
        _ => return Err(MeshError::mesh(ErrorCode::Baddim, tok.line())),
    };
    let tri_count = match tok.next_meta_entity()? {
        Entity::MetaToken(word) => {
            parse_number(&word).ok_or_else(|| MeshError::mesh(ErrorCode::Dimval, tok.line()))?
        }
        _ => return Err(MeshError::mesh(ErrorCode::Baddim, tok.line())),
    };
    match tok.next_meta_entity()? {
        Entity::EndMeta => {}
        _ => return Err(MeshError::mesh(ErrorCode::Baddim, tok.line())),
    }

    if point_count > P_MAX {
        return Err(MeshError::mesh(ErrorCode::Pcount, 0));
    }
    if tri_count > T_MAX {
        return Err(MeshError::mesh(ErrorCode::Tcount, 0));
    }

    Ok(Header {
        point_count,
        tri_count,
    })
}

/// Strict decimal parse matching `parseNumber()` in the original: empty,
/// non-digit, or a running value exceeding `C_MAX` all fail.
fn parse_number(word: &str) -> Option<u32> {
    if word.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for c in word.chars() {
        let digit = c.to_digit(10)?;
        value = value.checked_mul(10)?.checked_add(digit)?;
        if value > C_MAX {
            return None;
        }
    }
    Some(value)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum StackValue {
    Raw(u32),
}

/// Load and fully validate a mesh from a token stream.
pub fn load_mesh<T: MeshTokenizer>(tok: &mut T) -> Result<Mesh, MeshError> {
    let header = read_header(tok)?;
    let point_count = header.point_count as usize;
    let tri_count = header.tri_count as usize;

    let mut usage = UsageMap::new(point_count);
    let mut points: Vec<MeshPoint> = Vec::with_capacity(point_count);
    let mut tris: Vec<[u16; 3]> = Vec::with_capacity(tri_count);
    let mut stack: Vec<StackValue> = Vec::with_capacity(STACK_MAX);

    loop {
        let line = tok.line();
        match tok.next_entity()? {
            Entity::Eof => break,
            Entity::Numeric(word) => {
                let value = parse_number(&word).ok_or_else(|| MeshError::mesh(ErrorCode::Number, line))?;
                if stack.len() >= STACK_MAX {
                    return Err(MeshError::mesh(ErrorCode::Overfl, line));
                }
                stack.push(StackValue::Raw(value));
            }
            Entity::Operation(word) => match word.as_str() {
                "p" => {
                    if stack.len() < 4 {
                        return Err(MeshError::mesh(ErrorCode::Underf, line));
                    }
                    let y = pop_raw(&mut stack);
                    let x = pop_raw(&mut stack);
                    let norma = pop_raw(&mut stack);
                    let normd = pop_raw(&mut stack);
                    op_point(&mut points, point_count, normd, norma, x, y, line)?;
                }
                "t" => {
                    if stack.len() < 3 {
                        return Err(MeshError::mesh(ErrorCode::Underf, line));
                    }
                    let v3 = pop_raw(&mut stack);
                    let v2 = pop_raw(&mut stack);
                    let v1 = pop_raw(&mut stack);
                    op_tri(&mut tris, &points, &mut usage, tri_count, v1, v2, v3, line)?;
                }
                _ => return Err(MeshError::mesh(ErrorCode::Badop, line)),
            },
            Entity::BeginMeta | Entity::EndMeta | Entity::MetaToken(_) => {
                return Err(MeshError::mesh(ErrorCode::Etype, line))
            }
        }
    }

    if !stack.is_empty() {
        return Err(MeshError::mesh(ErrorCode::Rem, 0));
    }
    if points.len() != point_count {
        return Err(MeshError::mesh(ErrorCode::Pundef, 0));
    }
    if tris.len() != tri_count {
        return Err(MeshError::mesh(ErrorCode::Tundef, 0));
    }
    if usage.has_orphan() {
        return Err(MeshError::mesh(ErrorCode::Orphan, 0));
    }

    Ok(Mesh::from_validated_parts(points, tris))
}

fn pop_raw(stack: &mut Vec<StackValue>) -> u32 {
    match stack.pop().expect("caller already checked stack depth") {
        StackValue::Raw(v) => v,
    }
}

/// Append a new point, checking `NORMDA`, `NORM2P`, and `PTOVER` in that
/// order (spec.md §4.2.3).
#[allow(clippy::too_many_arguments)]
fn op_point(
    points: &mut Vec<MeshPoint>,
    point_count: usize,
    normd: u32,
    norma: u32,
    x: u32,
    y: u32,
    line: u32,
) -> Result<(), MeshError> {
    if normd == 0 && norma != 0 {
        return Err(MeshError::mesh(ErrorCode::Normda, line));
    }
    if norma >= C_MAX {
        return Err(MeshError::mesh(ErrorCode::Norm2p, line));
    }
    if points.len() >= point_count {
        return Err(MeshError::mesh(ErrorCode::Ptover, line));
    }
    points.push(MeshPoint {
        normd: normd as u16,
        norma: norma as u16,
        x: x as u16,
        y: y as u16,
    });
    Ok(())
}

/// Append a new triangle, checking `PTREF`, `VXDUP`, `VXORD`, `ORIENT`,
/// `TRSORT`, `TROVER`, and `DUPEDG` in that exact order (spec.md §4.2.4).
fn op_tri(
    tris: &mut Vec<[u16; 3]>,
    points: &[MeshPoint],
    usage: &mut UsageMap,
    tri_count: usize,
    v1: u32,
    v2: u32,
    v3: u32,
    line: u32,
) -> Result<(), MeshError> {
    let point_len = points.len() as u32;
    if v1 >= point_len || v2 >= point_len || v3 >= point_len {
        return Err(MeshError::mesh(ErrorCode::Ptref, line));
    }
    if v1 == v2 || v2 == v3 || v1 == v3 {
        return Err(MeshError::mesh(ErrorCode::Vxdup, line));
    }
    if !(v1 < v2 && v1 < v3) {
        return Err(MeshError::mesh(ErrorCode::Vxord, line));
    }

    let p1 = &points[v1 as usize];
    let p2 = &points[v2 as usize];
    let p3 = &points[v3 as usize];
    let k = signed_area2(p1, p2, p3);
    if !(k > 0.0) {
        return Err(MeshError::mesh(ErrorCode::Orient, line));
    }

    if let Some(&[pv1, pv2, _]) = tris.last() {
        if (v1, v2) < (pv1 as u32, pv2 as u32) {
            return Err(MeshError::mesh(ErrorCode::Trsort, line));
        }
    }

    if tris.len() >= tri_count {
        return Err(MeshError::mesh(ErrorCode::Trover, line));
    }

    if !usage.consume_edge(v1 as usize, v2 as usize)
        || !usage.consume_edge(v2 as usize, v3 as usize)
        || !usage.consume_edge(v3 as usize, v1 as usize)
    {
        return Err(MeshError::mesh(ErrorCode::Dupedg, line));
    }

    usage.mark_point(v1 as usize);
    usage.mark_point(v2 as usize);
    usage.mark_point(v3 as usize);

    tris.push([v1 as u16, v2 as u16, v3 as u16]);
    Ok(())
}

/// Twice the signed area of the `(p1, p2, p3)` triangle; positive for
/// counter-clockwise winding in the format's Y-up coordinate system.
fn signed_area2(p1: &MeshPoint, p2: &MeshPoint, p3: &MeshPoint) -> f64 {
    let (x1, y1) = (p1.x as f64, p1.y as f64);
    let (x2, y2) = (p2.x as f64, p2.y as f64);
    let (x3, y3) = (p3.x as f64, p3.y as f64);
    (x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1)
}
