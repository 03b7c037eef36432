//! Member envelope: `X ∈ [0, L]`, `Y ∈ [-h/2, h/2]`, `Z ∈ [-w/2, w/2]`.

use glam::DVec3;
use nc1_model::ProfileDescriptor;

use crate::error::{Axis, TransformError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min: DVec3,
    pub max: DVec3,
}

impl Envelope {
    /// Envelope of an unmodified member. Plates use the thickness as width
    /// and round tubes the diameter for both, so one rule covers all
    /// families.
    pub fn of(profile: &ProfileDescriptor) -> Self {
        let h = profile.height * 0.5;
        let w = profile.width * 0.5;
        Self {
            min: DVec3::new(0.0, -h, -w),
            max: DVec3::new(profile.length, h, w),
        }
    }

    /// Rejects points farther than `margin` outside the envelope, naming the
    /// first offending axis.
    pub fn check(&self, point: DVec3, margin: f64) -> Result<(), TransformError> {
        for (axis, value, min, max) in [
            (Axis::X, point.x, self.min.x, self.max.x),
            (Axis::Y, point.y, self.min.y, self.max.y),
            (Axis::Z, point.z, self.min.z, self.max.z),
        ] {
            let inside = value >= min - margin && value <= max + margin;
            if !inside {
                return Err(TransformError::OutOfBounds {
                    axis,
                    value,
                    min,
                    max,
                    margin,
                });
            }
        }
        Ok(())
    }
}
