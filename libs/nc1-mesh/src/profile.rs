//! # Profile Base Solids
//!
//! Builds the uncut member: the family's cross-section swept along world X
//! from 0 to the member length. Sections are drawn in the (Y, Z) plane with
//! the same conventions the face frames use: webs of U and L sections sit at
//! `Z = -width/2`, the L leg at `Y = -height/2`.

use config::constants::compute_segments_bounded;
use config::PipelineConfig;
use glam::{DAffine3, DMat3, DVec2, DVec3};
use nc1_model::{ProfileDescriptor, ProfileFamily};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::{extrude, extrude_ring};
use crate::primitives::outline::{circle, rectangle};

/// Section coordinates `(Y, Z)` extruded along local Z, mapped to world.
fn section_to_world() -> DAffine3 {
    DAffine3::from_mat3(DMat3::from_cols(DVec3::Y, DVec3::Z, DVec3::X))
}

/// Builds the base solid of `profile`.
///
/// # Example
///
/// ```rust
/// use config::PipelineConfig;
/// use nc1_mesh::profile::base_solid;
/// use nc1_model::{ProfileDescriptor, ProfileFamily};
///
/// let beam = ProfileDescriptor::from_dimension_lines(
///     ProfileFamily::IH, "HEB200", 3000.0, [200.0, 200.0, 15.0, 9.0]);
/// let solid = base_solid(&beam, &PipelineConfig::default()).unwrap();
/// let (min, max) = solid.bounding_box();
/// assert_eq!((min.x, max.x), (0.0, 3000.0));
/// assert_eq!((min.y, max.y), (-100.0, 100.0));
/// ```
pub fn base_solid(profile: &ProfileDescriptor, config: &PipelineConfig) -> Result<Mesh, MeshError> {
    profile
        .validate()
        .map_err(|err| MeshError::degenerate(format!("{}: {err}", profile.designation)))?;

    let length = profile.length;
    let mut mesh = match profile.family {
        ProfileFamily::IH => extrude(&i_section(profile), 0.0, length)?,
        ProfileFamily::UC => extrude(&u_section(profile), 0.0, length)?,
        ProfileFamily::LAngle => extrude(&l_section(profile), 0.0, length)?,
        ProfileFamily::Plate => extrude(
            &rectangle(profile.height, profile.plate_thickness()),
            0.0,
            length,
        )?,
        ProfileFamily::TubeRect => {
            let wall = 2.0 * profile.wall_thickness;
            extrude_ring(
                &rectangle(profile.height, profile.width),
                &rectangle(profile.height - wall, profile.width - wall),
                0.0,
                length,
            )?
        }
        ProfileFamily::TubeCirc => {
            let segments =
                compute_segments_bounded(profile.diameter, config.min_segments, config.max_segments);
            let radius = profile.radius();
            extrude_ring(
                &circle(radius, segments),
                &circle(radius - profile.wall_thickness, segments),
                0.0,
                length,
            )?
        }
    };

    mesh.transform(&section_to_world());
    mesh.compute_normals();
    tracing::debug!(
        profile = %profile.designation,
        family = %profile.family,
        triangles = mesh.triangle_count(),
        "built base solid"
    );
    Ok(mesh)
}

/// Twelve-corner I/H section.
fn i_section(profile: &ProfileDescriptor) -> Vec<DVec2> {
    let (h, w) = (profile.height * 0.5, profile.width * 0.5);
    let tf = profile.flange_thickness;
    let tw = profile.web_thickness * 0.5;
    [
        (-h, -w),
        (-h, w),
        (-h + tf, w),
        (-h + tf, tw),
        (h - tf, tw),
        (h - tf, w),
        (h, w),
        (h, -w),
        (h - tf, -w),
        (h - tf, -tw),
        (-h + tf, -tw),
        (-h + tf, -w),
    ]
    .into_iter()
    .map(|(y, z)| DVec2::new(y, z))
    .collect()
}

/// Eight-corner channel, web at `Z = -width/2`, flanges opening to +Z.
fn u_section(profile: &ProfileDescriptor) -> Vec<DVec2> {
    let (h, w) = (profile.height * 0.5, profile.width * 0.5);
    let tf = profile.flange_thickness;
    let web = -w + profile.web_thickness;
    [
        (-h, -w),
        (-h, w),
        (-h + tf, w),
        (-h + tf, web),
        (h - tf, web),
        (h - tf, w),
        (h, w),
        (h, -w),
    ]
    .into_iter()
    .map(|(y, z)| DVec2::new(y, z))
    .collect()
}

/// Six-corner angle: vertical leg at `Z = -width/2`, horizontal leg at
/// `Y = -height/2`.
fn l_section(profile: &ProfileDescriptor) -> Vec<DVec2> {
    let (h, w) = (profile.height * 0.5, profile.width * 0.5);
    let leg = -h + profile.flange_thickness;
    let web = -w + profile.web_thickness;
    [
        (-h, -w),
        (-h, w),
        (leg, w),
        (leg, web),
        (h, web),
        (h, -w),
    ]
    .into_iter()
    .map(|(y, z)| DVec2::new(y, z))
    .collect()
}
