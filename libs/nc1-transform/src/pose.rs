//! Resolved feature pose.

use glam::{DAffine3, DQuat, DVec3};
use nc1_model::FaceCode;
use serde::{Deserialize, Serialize};

/// World placement of a face-local feature.
///
/// The local frame has its origin at [`Pose::entry`], X along the member,
/// Y along the face y axis and Z pointing into the material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub face: FaceCode,
    /// Anchor point of the face at `(x, y)`; on the web mid-plane for I/H
    /// webs, on the surface otherwise.
    pub position: DVec3,
    /// Surface point the tool enters through.
    pub entry: DVec3,
    pub rotation: DQuat,
    /// Material thickness traversed by a through feature.
    pub depth: f64,
}

impl Pose {
    /// Drilling direction.
    pub fn normal(&self) -> DVec3 {
        self.rotation * DVec3::Z
    }

    pub fn y_axis(&self) -> DVec3 {
        self.rotation * DVec3::Y
    }

    /// Local-to-world transform anchored at the entry point.
    pub fn to_world(&self) -> DAffine3 {
        DAffine3::from_rotation_translation(self.rotation, self.entry)
    }
}
