//! # Cylinder Primitive
//!
//! Round hole cutter along the local Z axis.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;

use super::outline::circle;

/// Creates a cylinder of `radius` from `z0` to `z1`.
///
/// # Arguments
///
/// * `radius` - Circumscribed radius of the polygonal section
/// * `z0`, `z1` - Extent along Z
/// * `segments` - Number of segments around circumference
///
/// # Example
///
/// ```rust
/// use nc1_mesh::primitives::cylinder;
///
/// let mesh = cylinder(11.0, -1.5, 16.5, 22).unwrap();
/// assert_eq!(mesh.vertex_count(), 44);
/// ```
pub fn cylinder(radius: f64, z0: f64, z1: f64, segments: u32) -> Result<Mesh, MeshError> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {radius}"
        )));
    }
    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {segments}"
        )));
    }
    extrude(&circle(radius, segments), z0, z1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn test_cylinder_volume_is_polygon_area_times_height() {
        let segments = 16;
        let mesh = cylinder(5.0, 0.0, 10.0, segments).unwrap();
        let n = segments as f64;
        let area = 0.5 * n * 25.0 * (TAU / n).sin();
        assert!((mesh.signed_volume() - area * 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_cylinder_rejects_bad_input() {
        assert!(cylinder(0.0, 0.0, 1.0, 16).is_err());
        assert!(cylinder(-5.0, 0.0, 1.0, 16).is_err());
        assert!(cylinder(5.0, 0.0, 1.0, 2).is_err());
    }
}
