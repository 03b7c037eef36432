//! # Transformer
//!
//! Pure mapping between face-local `(face, x, y)` and world poses. Outputs
//! depend only on the inputs, so repeated calls are bit-identical and the
//! functions are safe to call from any number of threads.

use config::constants::{BOUNDS_MARGIN, PLANE_EPSILON};
use glam::DVec3;
use nc1_model::{FaceCode, ProfileDescriptor};
use std::f64::consts::TAU;

use crate::envelope::Envelope;
use crate::error::{Axis, TransformError};
use crate::frame::{face_spec, supported_faces, FaceShape};
use crate::pose::Pose;

/// Resolves a face-local position with the default envelope margin.
///
/// ## Example
///
/// ```rust
/// use nc1_model::{FaceCode, ProfileDescriptor, ProfileFamily};
/// use nc1_transform::transform;
///
/// let beam = ProfileDescriptor::from_dimension_lines(
///     ProfileFamily::IH, "HEB200", 3000.0, [200.0, 200.0, 15.0, 9.0]);
/// let pose = transform(&beam, FaceCode::Front, 1200.0, 50.0).unwrap();
/// assert_eq!(pose.position.y, -50.0);
/// assert!(transform(&beam, FaceCode::Front, 3050.0, 50.0).is_err());
/// ```
pub fn transform(
    profile: &ProfileDescriptor,
    face: FaceCode,
    x: f64,
    y: f64,
) -> Result<Pose, TransformError> {
    transform_with_margin(profile, face, x, y, BOUNDS_MARGIN)
}

/// Same as [`transform`] with an explicit margin.
pub fn transform_with_margin(
    profile: &ProfileDescriptor,
    face: FaceCode,
    x: f64,
    y: f64,
    margin: f64,
) -> Result<Pose, TransformError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(TransformError::NonFinite { x, y });
    }
    let spec = face_spec(profile, face)?;
    if let FaceShape::Cylindrical { radius } = spec.shape {
        check_arc(y, TAU * radius)?;
    }
    let resolved = spec.point_at(x, y);
    let envelope = Envelope::of(profile);
    envelope.check(resolved.point, margin)?;
    envelope.check(resolved.entry(), margin)?;

    Ok(Pose {
        face,
        position: resolved.point,
        entry: resolved.entry(),
        rotation: resolved.rotation(),
        depth: resolved.thickness,
    })
}

/// Round-tube positions must lie on one turn, `[0, circumference)`, so the
/// inverse recovers the same `y`.
fn check_arc(y: f64, circumference: f64) -> Result<(), TransformError> {
    if (0.0..circumference).contains(&y) {
        return Ok(());
    }
    Err(TransformError::OutOfBounds {
        axis: Axis::Arc,
        value: y,
        min: 0.0,
        max: circumference,
        margin: 0.0,
    })
}

/// Maps a single face point (e.g. a contour vertex) to world space and
/// checks it against the envelope.
pub fn face_point(
    profile: &ProfileDescriptor,
    face: FaceCode,
    x: f64,
    y: f64,
    margin: f64,
) -> Result<DVec3, TransformError> {
    Ok(transform_with_margin(profile, face, x, y, margin)?.entry)
}

/// Recovers `(face, x, y)` from a pose produced by [`transform`].
///
/// The face is identified by its normal and the anchor must lie on that
/// face's plane (or cylinder).
pub fn inverse_transform(
    profile: &ProfileDescriptor,
    pose: &Pose,
) -> Result<(FaceCode, f64, f64), TransformError> {
    let normal = pose.normal();
    for &face in supported_faces(profile.family) {
        let spec = face_spec(profile, face)?;
        match spec.shape {
            FaceShape::Planar {
                origin,
                y_axis,
                normal: face_normal,
            } => {
                if normal.dot(face_normal) < 1.0 - PLANE_EPSILON {
                    continue;
                }
                let offset = pose.position - origin;
                if offset.dot(face_normal).abs() > PLANE_EPSILON {
                    continue;
                }
                return Ok((face, offset.x, offset.dot(y_axis)));
            }
            FaceShape::Cylindrical { radius } => {
                let radial = pose.position.y.hypot(pose.position.z);
                if (radial - radius).abs() > PLANE_EPSILON {
                    continue;
                }
                let mut theta = pose.position.z.atan2(pose.position.y);
                if theta < 0.0 {
                    theta += TAU;
                }
                return Ok((face, pose.position.x, theta * radius));
            }
        }
    }
    Err(TransformError::NoMatchingFace {
        family: profile.family,
    })
}
