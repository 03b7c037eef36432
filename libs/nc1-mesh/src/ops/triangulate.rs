//! # Ear Clipping
//!
//! Triangulates simple 2D polygons for extrusion caps. Orientation tests use
//! `robust::orient2d` so nearly-collinear corners are classified exactly.

use glam::DVec2;
use robust::{orient2d, Coord};

use crate::error::MeshError;

/// Twice the signed area; positive when counter-clockwise.
pub fn signed_area2(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum()
}

/// Triangulates a simple polygon.
///
/// Returns index triples into `points`, always counter-clockwise whatever the
/// input winding.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use nc1_mesh::ops::triangulate::triangulate;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(triangulate(&square).unwrap().len(), 2);
/// ```
pub fn triangulate(points: &[DVec2]) -> Result<Vec<[usize; 3]>, MeshError> {
    if points.len() < 3 {
        return Err(MeshError::degenerate(format!(
            "polygon needs at least 3 vertices, got {}",
            points.len()
        )));
    }

    let mut remaining: Vec<usize> = (0..points.len()).collect();
    if signed_area2(points) < 0.0 {
        remaining.reverse();
    }

    let mut triangles = Vec::with_capacity(points.len() - 2);
    let mut cursor = 0;
    let mut misses = 0;

    while remaining.len() > 3 {
        let m = remaining.len();
        let i = cursor % m;
        let prev = remaining[(i + m - 1) % m];
        let cur = remaining[i];
        let next = remaining[(i + 1) % m];

        if is_ear(points, &remaining, prev, cur, next) {
            triangles.push([prev, cur, next]);
            remaining.remove(i);
            misses = 0;
            cursor = i;
            continue;
        }

        cursor = i + 1;
        misses += 1;
        if misses > m {
            // Only collinear corners are left to block progress.
            let flat = (0..m).find(|&k| {
                orientation(
                    points[remaining[(k + m - 1) % m]],
                    points[remaining[k]],
                    points[remaining[(k + 1) % m]],
                ) == 0.0
            });
            match flat {
                Some(k) => {
                    remaining.remove(k);
                    misses = 0;
                }
                None => {
                    return Err(MeshError::degenerate(
                        "polygon is not simple and cannot be triangulated",
                    ))
                }
            }
        }
    }

    if orientation(
        points[remaining[0]],
        points[remaining[1]],
        points[remaining[2]],
    ) > 0.0
    {
        triangles.push([remaining[0], remaining[1], remaining[2]]);
    }

    if triangles.is_empty() {
        return Err(MeshError::degenerate("polygon has zero area"));
    }
    Ok(triangles)
}

fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

fn is_ear(points: &[DVec2], remaining: &[usize], prev: usize, cur: usize, next: usize) -> bool {
    let (a, b, c) = (points[prev], points[cur], points[next]);
    if orientation(a, b, c) <= 0.0 {
        return false;
    }
    remaining
        .iter()
        .filter(|&&k| k != prev && k != cur && k != next)
        .map(|&k| points[k])
        .filter(|p| *p != a && *p != b && *p != c)
        .all(|p| {
            let inside = orientation(a, b, p) >= 0.0
                && orientation(b, c, p) >= 0.0
                && orientation(c, a, p) >= 0.0;
            !inside
        })
}
