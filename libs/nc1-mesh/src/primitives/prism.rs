//! # Prism Primitives
//!
//! Slot capsules, rectangular holes and contour polygons extruded along Z.

use glam::DVec2;

use super::outline;
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;

/// Slot cutter centred on the origin, its long axis rotated `angle` degrees
/// counter-clockwise from local X.
///
/// # Example
///
/// ```rust
/// use nc1_mesh::primitives::capsule;
///
/// let slot = capsule(20.0, 40.0, 0.0, 0.0, 10.0, 20).unwrap();
/// let (min, max) = slot.bounding_box();
/// assert!((max.x - min.x - 60.0).abs() < 1e-9);
/// ```
pub fn capsule(
    diameter: f64,
    elongation: f64,
    angle: f64,
    z0: f64,
    z1: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !diameter.is_finite() || diameter <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "slot diameter must be positive: {diameter}"
        )));
    }
    if !elongation.is_finite() || elongation < 0.0 {
        return Err(MeshError::degenerate(format!(
            "slot elongation must not be negative: {elongation}"
        )));
    }
    let mut points = outline::capsule(diameter, elongation, segments);
    outline::rotate(&mut points, angle);
    extrude(&points, z0, z1)
}

/// Rectangular cutter centred on the origin.
pub fn rectangular(width: f64, height: f64, z0: f64, z1: f64) -> Result<Mesh, MeshError> {
    if !(width > 0.0 && height > 0.0) || !(width.is_finite() && height.is_finite()) {
        return Err(MeshError::degenerate(format!(
            "rectangle size must be positive: {width} x {height}"
        )));
    }
    extrude(&outline::rectangle(width, height), z0, z1)
}

/// Arbitrary simple polygon extruded from `z0` to `z1`.
pub fn polygon_prism(points: &[DVec2], z0: f64, z1: f64) -> Result<Mesh, MeshError> {
    extrude(points, z0, z1)
}
