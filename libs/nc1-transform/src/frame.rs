//! # Face Frames
//!
//! Explicit per-family face tables. Every face has an origin on the member
//! start, a y axis spanning the face and an inward normal with
//! `X × y_axis = normal`, so the frame `(X, y_axis, normal)` is a proper
//! rotation whose third column is the drilling direction.
//!
//! World frame: X along the length, Y vertical, Z across the width; Y and Z
//! are centred on the member axis.

use glam::{DMat3, DQuat, DVec3};
use nc1_model::{FaceCode, ProfileDescriptor, ProfileFamily};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::TransformError;

/// Where the face origin sits through the thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Anchor {
    /// On the material surface the tool enters from.
    Surface,
    /// On the mid-plane of the plate (I/H web).
    MidPlane,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceShape {
    Planar {
        origin: DVec3,
        y_axis: DVec3,
        normal: DVec3,
    },
    /// Round tube outer surface; y is the arc length from the top line.
    Cylindrical { radius: f64 },
}

/// Resolved face description for one profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceSpec {
    pub face: FaceCode,
    pub shape: FaceShape,
    /// Material thickness traversed by a through feature.
    pub thickness: f64,
    pub anchor: Anchor,
    /// Face size along (x, y).
    pub extent: (f64, f64),
    /// Span of face y owned by this plate alone. Narrower than `extent.1`
    /// where the face meets a flange or another wall.
    pub clear: (f64, f64),
}

/// Faces each family defines.
///
/// ## Example
///
/// ```rust
/// use nc1_model::{FaceCode, ProfileFamily};
/// use nc1_transform::supported_faces;
///
/// assert!(supported_faces(ProfileFamily::TubeRect).contains(&FaceCode::Back));
/// assert!(!supported_faces(ProfileFamily::Plate).contains(&FaceCode::Top));
/// ```
pub fn supported_faces(family: ProfileFamily) -> &'static [FaceCode] {
    use FaceCode::*;
    match family {
        ProfileFamily::IH | ProfileFamily::UC => &[Front, Top, Bottom],
        ProfileFamily::LAngle => &[Front, Bottom],
        ProfileFamily::TubeRect => &[Front, Top, Bottom, Back],
        ProfileFamily::TubeCirc | ProfileFamily::Plate => &[Front],
    }
}

/// Looks up the frame of `face` on `profile`.
pub fn face_spec(profile: &ProfileDescriptor, face: FaceCode) -> Result<FaceSpec, TransformError> {
    let family = profile.family;
    if !supported_faces(family).contains(&face) {
        return Err(TransformError::unsupported(family, face));
    }

    let h = profile.height * 0.5;
    let w = profile.width * 0.5;
    let length = profile.length;

    let top = planar(
        DVec3::new(0.0, h, -w),
        DVec3::Z,
        DVec3::NEG_Y,
    );
    let bottom = planar(
        DVec3::new(0.0, -h, w),
        DVec3::NEG_Z,
        DVec3::Y,
    );
    let back_web = planar(
        DVec3::new(0.0, -h, -w),
        DVec3::Y,
        DVec3::Z,
    );

    let spec = |shape, thickness, anchor, across| FaceSpec {
        face,
        shape,
        thickness,
        anchor,
        extent: (length, across),
        clear: (0.0, across),
    };
    let between = |spec: FaceSpec, low: f64, high: f64| FaceSpec {
        clear: (low, spec.extent.1 - high),
        ..spec
    };

    let resolved = match (family, face) {
        (ProfileFamily::IH | ProfileFamily::UC, FaceCode::Top) => {
            spec(top, profile.flange_thickness, Anchor::Surface, profile.width)
        }
        (ProfileFamily::IH | ProfileFamily::UC, FaceCode::Bottom) => {
            spec(bottom, profile.flange_thickness, Anchor::Surface, profile.width)
        }
        (ProfileFamily::IH, FaceCode::Front) => between(
            spec(
                planar(DVec3::new(0.0, -h, 0.0), DVec3::Y, DVec3::Z),
                profile.web_thickness,
                Anchor::MidPlane,
                profile.height,
            ),
            profile.flange_thickness,
            profile.flange_thickness,
        ),
        (ProfileFamily::UC, FaceCode::Front) => between(
            spec(back_web, profile.web_thickness, Anchor::Surface, profile.height),
            profile.flange_thickness,
            profile.flange_thickness,
        ),
        (ProfileFamily::LAngle, FaceCode::Front) => between(
            spec(back_web, profile.web_thickness, Anchor::Surface, profile.height),
            profile.flange_thickness,
            0.0,
        ),
        (ProfileFamily::LAngle, FaceCode::Bottom) => {
            spec(bottom, profile.flange_thickness, Anchor::Surface, profile.width)
        }
        (ProfileFamily::TubeRect, FaceCode::Top) => {
            spec(top, profile.wall_thickness, Anchor::Surface, profile.width)
        }
        (ProfileFamily::TubeRect, FaceCode::Bottom) => {
            spec(bottom, profile.wall_thickness, Anchor::Surface, profile.width)
        }
        (ProfileFamily::TubeRect, FaceCode::Front) => between(
            spec(
                planar(DVec3::new(0.0, h, w), DVec3::NEG_Y, DVec3::NEG_Z),
                profile.wall_thickness,
                Anchor::Surface,
                profile.height,
            ),
            profile.wall_thickness,
            profile.wall_thickness,
        ),
        (ProfileFamily::TubeRect, FaceCode::Back) => between(
            spec(back_web, profile.wall_thickness, Anchor::Surface, profile.height),
            profile.wall_thickness,
            profile.wall_thickness,
        ),
        (ProfileFamily::Plate, FaceCode::Front) => spec(
            planar(
                DVec3::new(0.0, -h, -profile.plate_thickness() * 0.5),
                DVec3::Y,
                DVec3::Z,
            ),
            profile.plate_thickness(),
            Anchor::Surface,
            profile.height,
        ),
        (ProfileFamily::TubeCirc, FaceCode::Front) => spec(
            FaceShape::Cylindrical {
                radius: profile.radius(),
            },
            profile.wall_thickness,
            Anchor::Surface,
            TAU * profile.radius(),
        ),
        _ => return Err(TransformError::unsupported(family, face)),
    };
    Ok(resolved)
}

fn planar(origin: DVec3, y_axis: DVec3, normal: DVec3) -> FaceShape {
    FaceShape::Planar {
        origin,
        y_axis,
        normal,
    }
}

/// A face-local coordinate resolved to world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePoint {
    /// Anchor point (surface or mid-plane).
    pub point: DVec3,
    pub y_axis: DVec3,
    /// Inward normal, the drilling direction.
    pub normal: DVec3,
    pub thickness: f64,
    pub anchor: Anchor,
}

impl FacePoint {
    /// Point on the surface the tool enters through.
    pub fn entry(&self) -> DVec3 {
        match self.anchor {
            Anchor::Surface => self.point,
            Anchor::MidPlane => self.point - self.normal * (self.thickness * 0.5),
        }
    }

    /// Rotation mapping local (X, Y, Z) onto (length, face y, normal).
    pub fn rotation(&self) -> DQuat {
        DQuat::from_mat3(&DMat3::from_cols(DVec3::X, self.y_axis, self.normal))
    }
}

impl FaceSpec {
    /// Resolves a face-local `(x, y)`.
    pub fn point_at(&self, x: f64, y: f64) -> FacePoint {
        match self.shape {
            FaceShape::Planar {
                origin,
                y_axis,
                normal,
            } => FacePoint {
                point: origin + DVec3::X * x + y_axis * y,
                y_axis,
                normal,
                thickness: self.thickness,
                anchor: self.anchor,
            },
            FaceShape::Cylindrical { radius } => {
                let theta = y / radius;
                let (sin, cos) = theta.sin_cos();
                FacePoint {
                    point: DVec3::new(x, radius * cos, radius * sin),
                    y_axis: DVec3::new(0.0, -sin, cos),
                    normal: DVec3::new(0.0, -cos, -sin),
                    thickness: self.thickness,
                    anchor: self.anchor,
                }
            }
        }
    }
}
