//! # End Cuts
//!
//! Saw cuts at both ends of the member, from the four ST cut angles.
//!
//! ## Sign rule
//!
//! Angles are in degrees. The start plane is `X = Y·tan(web_start) +
//! Z·tan(flange_start)` and everything with a smaller X is removed. The end
//! plane mirrors it, `X = L − Y·tan(web_end) − Z·tan(flange_end)`, and
//! everything with a larger X is removed. A positive web angle therefore
//! shortens the top of the member at both ends.

use config::constants::{CONTOUR_SLAB_PADDING, EPSILON};
use glam::{DAffine3, DMat3, DVec3};
use nc1_mesh::primitives::cuboid;
use nc1_mesh::{BooleanKernel, Mesh, MeshError};
use nc1_model::ProfileDescriptor;

/// Steepest accepted cut angle, in degrees.
pub const MAX_CUT_ANGLE: f64 = 85.0;

/// Which end of the member a cut trims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Start,
    End,
}

/// A planar end cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndCut {
    pub end: End,
    /// Web angle in degrees (shear along Y).
    pub web: f64,
    /// Flange angle in degrees (shear along Z).
    pub flange: f64,
}

impl EndCut {
    /// X of the cut plane at `(y, z)`.
    pub fn plane_x(&self, length: f64, y: f64, z: f64) -> f64 {
        let shear = y * self.web.to_radians().tan() + z * self.flange.to_radians().tan();
        match self.end {
            End::Start => shear,
            End::End => length - shear,
        }
    }

    /// Box covering the removed half-space around the member section.
    fn cutter(&self, profile: &ProfileDescriptor) -> Result<Mesh, MeshError> {
        for angle in [self.web, self.flange] {
            if !angle.is_finite() || angle.abs() > MAX_CUT_ANGLE {
                return Err(MeshError::degenerate(format!(
                    "end cut angle must be within ±{MAX_CUT_ANGLE}°: {angle}"
                )));
            }
        }

        let (tan_web, tan_flange) = (self.web.to_radians().tan(), self.flange.to_radians().tan());
        let reach = 0.5 * profile.height.max(profile.width).max(profile.diameter)
            + CONTOUR_SLAB_PADDING;
        let depth = profile.length + reach * (1.0 + tan_web.abs() + tan_flange.abs());

        let (min_x, max_x, sign, offset) = match self.end {
            End::Start => (-depth, 0.0, 1.0, 0.0),
            End::End => (0.0, depth, -1.0, profile.length),
        };
        let mut mesh = cuboid(
            DVec3::new(min_x, -reach, -reach),
            DVec3::new(max_x, reach, reach),
        )?;
        let shear = DMat3::from_cols(
            DVec3::X,
            DVec3::new(sign * tan_web, 1.0, 0.0),
            DVec3::new(sign * tan_flange, 0.0, 1.0),
        );
        mesh.transform(&DAffine3::from_mat3_translation(shear, DVec3::X * offset));
        Ok(mesh)
    }
}

/// Non-square end cuts of `profile`, start first.
pub fn end_cuts(profile: &ProfileDescriptor) -> Vec<EndCut> {
    let cuts = profile.cuts;
    [
        EndCut {
            end: End::Start,
            web: cuts.web_start,
            flange: cuts.flange_start,
        },
        EndCut {
            end: End::End,
            web: cuts.web_end,
            flange: cuts.flange_end,
        },
    ]
    .into_iter()
    .filter(|cut| cut.web.abs() > EPSILON || cut.flange.abs() > EPSILON)
    .collect()
}

/// Trims `mesh` with every end cut of `profile`.
pub fn apply_end_cuts(
    mesh: &Mesh,
    profile: &ProfileDescriptor,
    kernel: &dyn BooleanKernel,
) -> Result<Mesh, MeshError> {
    let mut current = mesh.clone();
    for cut in end_cuts(profile) {
        let cutter = cut.cutter(profile)?;
        current = kernel.subtract(&current, &cutter)?;
        tracing::debug!(
            end = ?cut.end,
            web = cut.web,
            flange = cut.flange,
            triangles = current.triangle_count(),
            "applied end cut"
        );
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use config::PipelineConfig;
    use nc1_mesh::{base_solid, BspKernel};
    use nc1_model::{EndCuts, ProfileFamily};

    fn plate(cuts: EndCuts) -> ProfileDescriptor {
        let mut plate = ProfileDescriptor::from_dimension_lines(
            ProfileFamily::Plate,
            "BL12",
            400.0,
            [200.0, 0.0, 0.0, 12.0],
        );
        plate.cuts = cuts;
        plate
    }

    fn cut(profile: &ProfileDescriptor) -> Mesh {
        let base = base_solid(profile, &PipelineConfig::default()).unwrap();
        apply_end_cuts(&base, profile, &BspKernel).unwrap()
    }

    #[test]
    fn test_square_ends_have_no_cuts() {
        assert!(end_cuts(&plate(EndCuts::default())).is_empty());
    }

    #[test]
    fn test_plane_rule() {
        let start = EndCut {
            end: End::Start,
            web: 45.0,
            flange: 0.0,
        };
        let end = EndCut {
            end: End::End,
            web: 45.0,
            flange: 0.0,
        };
        assert_relative_eq!(start.plane_x(400.0, 100.0, 0.0), 100.0, epsilon = 1e-9);
        assert_relative_eq!(start.plane_x(400.0, -100.0, 0.0), -100.0, epsilon = 1e-9);
        assert_relative_eq!(end.plane_x(400.0, 100.0, 0.0), 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_positive_web_start_trims_top_corner() {
        let profile = plate(EndCuts {
            web_start: 45.0,
            ..EndCuts::default()
        });
        let mesh = cut(&profile);

        // Triangle 100 x 100 / 2 removed through the 12 mm thickness.
        assert_relative_eq!(mesh.signed_volume(), 400.0 * 200.0 * 12.0 - 5000.0 * 12.0, epsilon = 1e-3);
        let top_start = mesh
            .vertices()
            .iter()
            .filter(|v| (v.y - 100.0).abs() < 1e-9)
            .map(|v| v.x)
            .fold(f64::MAX, f64::min);
        assert_relative_eq!(top_start, 100.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.bounding_box().0.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_positive_web_end_trims_top_corner_too() {
        let profile = plate(EndCuts {
            web_end: 45.0,
            ..EndCuts::default()
        });
        let mesh = cut(&profile);
        let top_end = mesh
            .vertices()
            .iter()
            .filter(|v| (v.y - 100.0).abs() < 1e-9)
            .map(|v| v.x)
            .fold(f64::MIN, f64::max);
        assert_relative_eq!(top_end, 300.0, epsilon = 1e-6);
        assert_relative_eq!(mesh.bounding_box().1.x, 400.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flange_angle_shears_across_width() {
        let profile = plate(EndCuts {
            flange_start: 30.0,
            ..EndCuts::default()
        });
        let mesh = cut(&profile);
        let removed = 400.0 * 200.0 * 12.0 - mesh.signed_volume();
        // Wedge over z in [0, 6]: area 6 * 6 tan 30 / 2 across 200 of height.
        let expected = 0.5 * 6.0 * 6.0 * 30f64.to_radians().tan() * 200.0;
        assert_relative_eq!(removed, expected, epsilon = 1e-3);
    }

    #[test]
    fn test_steep_angle_rejected() {
        let profile = plate(EndCuts {
            web_start: 89.0,
            ..EndCuts::default()
        });
        let base = base_solid(&profile, &PipelineConfig::default()).unwrap();
        assert!(apply_end_cuts(&base, &profile, &BspKernel)
            .unwrap_err()
            .is_degenerate());
    }
}
