//! # Cuboid Primitive
//!
//! Axis-aligned box between two corners.

use glam::{DVec2, DVec3};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::extrude;

/// Creates an axis-aligned box spanning `min..max`.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use nc1_mesh::primitives::cuboid;
/// use glam::DVec3;
///
/// let mesh = cuboid(DVec3::ZERO, DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn cuboid(min: DVec3, max: DVec3) -> Result<Mesh, MeshError> {
    let size = max - min;
    if !size.is_finite() || size.min_element() <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "box size must be positive: {size:?}"
        )));
    }

    let footprint = [
        DVec2::new(min.x, min.y),
        DVec2::new(max.x, min.y),
        DVec2::new(max.x, max.y),
        DVec2::new(min.x, max.y),
    ];
    extrude(&footprint, min.z, max.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_bounds() {
        let mesh = cuboid(DVec3::new(-1.0, 0.0, 2.0), DVec3::new(1.0, 5.0, 3.0)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, 0.0, 2.0));
        assert_eq!(max, DVec3::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn test_cuboid_rejects_inverted_corners() {
        let err = cuboid(DVec3::ONE, DVec3::ZERO).unwrap_err();
        assert!(err.is_degenerate());
    }
}
