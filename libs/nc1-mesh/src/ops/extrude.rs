//! # Linear Extrusion
//!
//! Sweeps a 2D outline (or a ring between two outlines) along the Z axis
//! between two heights.

use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
use glam::{DVec2, DVec3};

use super::triangulate::{signed_area2, triangulate};
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Extrudes a simple outline from `z0` to `z1`.
///
/// Any winding is accepted; the result is wound outward.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use nc1_mesh::ops::extrude::extrude;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// let mesh = extrude(&square, 0.0, 2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn extrude(outline: &[DVec2], z0: f64, z1: f64) -> Result<Mesh, MeshError> {
    check_span(z0, z1)?;
    let outline = normalize(outline)?;
    let n = outline.len();
    let caps = triangulate(&outline)?;

    let mut mesh = Mesh::with_capacity(2 * n, 2 * caps.len() + 2 * n);
    let bottom: Vec<u32> = outline
        .iter()
        .map(|p| mesh.add_vertex(DVec3::new(p.x, p.y, z0)))
        .collect();
    let top: Vec<u32> = outline
        .iter()
        .map(|p| mesh.add_vertex(DVec3::new(p.x, p.y, z1)))
        .collect();

    for [a, b, c] in &caps {
        mesh.add_triangle(top[*a], top[*b], top[*c]);
        mesh.add_triangle(bottom[*a], bottom[*c], bottom[*b]);
    }
    add_walls(&mut mesh, &bottom, &top, false);

    Ok(mesh)
}

/// Extrudes the region between `outer` and `inner` from `z0` to `z1`.
///
/// Both loops need the same vertex count with matching corners so every cap
/// quad `(outer[i], outer[i+1], inner[i+1], inner[i])` is convex.
pub fn extrude_ring(
    outer: &[DVec2],
    inner: &[DVec2],
    z0: f64,
    z1: f64,
) -> Result<Mesh, MeshError> {
    check_span(z0, z1)?;
    if outer.len() != inner.len() {
        return Err(MeshError::invalid_topology(format!(
            "ring loops differ in size: {} vs {}",
            outer.len(),
            inner.len()
        )));
    }
    let outer = counter_clockwise(outer)?;
    let inner = counter_clockwise(inner)?;
    let n = outer.len();

    let mut mesh = Mesh::with_capacity(4 * n, 8 * n);
    let mut ring = |points: &[DVec2], z: f64| -> Vec<u32> {
        points
            .iter()
            .map(|p| mesh.add_vertex(DVec3::new(p.x, p.y, z)))
            .collect()
    };
    let outer_bottom = ring(&outer, z0);
    let outer_top = ring(&outer, z1);
    let inner_bottom = ring(&inner, z0);
    let inner_top = ring(&inner, z1);

    add_walls(&mut mesh, &outer_bottom, &outer_top, false);
    add_walls(&mut mesh, &inner_bottom, &inner_top, true);

    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_polygon(&[outer_top[i], outer_top[j], inner_top[j], inner_top[i]]);
        mesh.add_polygon(&[outer_bottom[i], inner_bottom[i], inner_bottom[j], outer_bottom[j]]);
    }

    Ok(mesh)
}

fn check_span(z0: f64, z1: f64) -> Result<(), MeshError> {
    if !(z0.is_finite() && z1.is_finite()) || z1 - z0 <= EPSILON {
        return Err(MeshError::degenerate(format!(
            "extrusion span must be positive: {z0}..{z1}"
        )));
    }
    Ok(())
}

/// Side quads between two matching loops; `inward` flips them for holes.
fn add_walls(mesh: &mut Mesh, bottom: &[u32], top: &[u32], inward: bool) {
    let n = bottom.len();
    for i in 0..n {
        let j = (i + 1) % n;
        if inward {
            mesh.add_polygon(&[bottom[i], top[i], top[j], bottom[j]]);
        } else {
            mesh.add_polygon(&[bottom[i], bottom[j], top[j], top[i]]);
        }
    }
}

/// Drops repeated points (including a closing duplicate) and orients the
/// outline counter-clockwise.
fn normalize(outline: &[DVec2]) -> Result<Vec<DVec2>, MeshError> {
    let mut points: Vec<DVec2> = Vec::with_capacity(outline.len());
    for p in outline {
        if !p.is_finite() {
            return Err(MeshError::degenerate("outline has a non-finite vertex"));
        }
        if points
            .last()
            .map_or(true, |last| last.distance(*p) > VERTEX_MERGE_EPSILON)
        {
            points.push(*p);
        }
    }
    while points.len() > 1
        && points[0].distance(points[points.len() - 1]) <= VERTEX_MERGE_EPSILON
    {
        points.pop();
    }
    counter_clockwise(&points)
}

fn counter_clockwise(points: &[DVec2]) -> Result<Vec<DVec2>, MeshError> {
    let area2 = signed_area2(points);
    if points.len() < 3 || area2.abs() <= EPSILON {
        return Err(MeshError::degenerate("outline encloses no area"));
    }
    let mut points = points.to_vec();
    if area2 < 0.0 {
        points.reverse();
    }
    Ok(points)
}
