//! # Plane for BSP Operations
//!
//! Oriented plane with point classification.

use config::constants::{EPSILON, PLANE_EPSILON};
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Within [`PLANE_EPSILON`] of the plane.
    Coplanar,
    /// Positive side.
    Front,
    /// Negative side.
    Back,
    /// Vertices on both sides (polygons only).
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane `normal · p = w`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Plane through three points, oriented by their counter-clockwise order.
    ///
    /// Returns `None` for collinear points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let cross = (b - a).cross(c - a);
        let length = cross.length();
        if !length.is_finite() || length < EPSILON {
            return None;
        }
        let normal = cross / length;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    /// Reverses the orientation in place.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Positive = front, negative = back.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            Classification::Front
        } else if dist < -PLANE_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_eq!(plane.normal(), DVec3::Z);
        assert_eq!(plane.w(), 0.0);
    }

    #[test]
    fn test_plane_from_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::new(DVec3::Z, 0.0);
        assert_eq!(plane.classify_point(DVec3::Z), Classification::Front);
        assert_eq!(plane.classify_point(-DVec3::Z), Classification::Back);
        assert_eq!(
            plane.classify_point(DVec3::new(1.0, 1.0, PLANE_EPSILON * 0.5)),
            Classification::Coplanar
        );
    }

    #[test]
    fn test_plane_flip() {
        let mut plane = Plane::new(DVec3::Z, 5.0);
        plane.flip();
        assert_eq!(plane.normal(), -DVec3::Z);
        assert_eq!(plane.w(), -5.0);
    }
}
