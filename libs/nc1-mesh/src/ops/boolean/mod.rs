//! # Boolean Operations (CSG)
//!
//! Subtraction of cutting primitives from a running solid using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert();
//!   B.clipTo(A); B.invert(); A.build(B); A.invert()
//!
//! ## Kernel seam
//!
//! Callers go through [`BooleanKernel`] so the engine can swap the kernel
//! (or inject a failing one in tests). [`BspKernel`] is the default.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use nc1_mesh::ops::boolean::{BooleanKernel, BspKernel};
//! use nc1_mesh::primitives::cuboid;
//!
//! let block = cuboid(DVec3::ZERO, DVec3::splat(10.0)).unwrap();
//! let notch = cuboid(DVec3::new(5.0, 5.0, -1.0), DVec3::new(11.0, 11.0, 11.0)).unwrap();
//! let result = BspKernel.subtract(&block, &notch).unwrap();
//! assert!((result.signed_volume() - 750.0).abs() < 1e-6);
//! ```

mod bsp;
mod plane;
mod polygon;


use config::constants::MAX_TRIANGLES;
use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;
use bsp::BspTree;
use polygon::Polygon;

// =============================================================================
// KERNEL SEAM
// =============================================================================

/// Narrow boolean interface: `subtract(a, b) -> a − b`.
///
/// Implementations must leave both inputs untouched and either return a
/// valid closed mesh or an error.
pub trait BooleanKernel: Send + Sync {
    fn subtract(&self, base: &Mesh, cutter: &Mesh) -> Result<Mesh, MeshError>;
}

/// Default kernel backed by [`difference`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BspKernel;

impl BooleanKernel for BspKernel {
    fn subtract(&self, base: &Mesh, cutter: &Mesh) -> Result<Mesh, MeshError> {
        difference(base, cutter)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes `a − b`.
///
/// A cutter that misses the base's bounding box returns the base unchanged.
/// An empty base, an empty or invalid result and results above
/// [`MAX_TRIANGLES`] are errors.
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Err(MeshError::boolean_failed("base solid is empty"));
    }
    if b.is_empty() || !boxes_overlap(a.bounding_box(), b.bounding_box()) {
        return Ok(a.clone());
    }

    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);
    if polys_a.is_empty() {
        return Err(MeshError::boolean_failed("base solid has no valid faces"));
    }
    if polys_b.is_empty() {
        return Err(MeshError::boolean_failed("cutter has no valid faces"));
    }

    let mut bsp_a = BspTree::new(polys_a);
    let mut bsp_b = BspTree::new(polys_b);

    // A − B = ~(~A ∪ B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    let result = polygons_to_mesh(&bsp_a.all_polygons());

    if result.triangle_count() > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: result.triangle_count(),
            max: MAX_TRIANGLES,
        });
    }
    if result.is_empty() {
        return Err(MeshError::boolean_failed("subtraction removed the whole solid"));
    }
    if !result.validate() {
        return Err(MeshError::boolean_failed("subtraction produced an invalid mesh"));
    }

    Ok(result)
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

fn boxes_overlap((a_min, a_max): (DVec3, DVec3), (b_min, b_max): (DVec3, DVec3)) -> bool {
    a_min.cmple(b_max).all() && b_min.cmple(a_max).all()
}

/// Each non-degenerate triangle becomes a polygon.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| Polygon::from_vertices(mesh.triangle_points(i).to_vec()))
        .collect()
}

/// Fan-triangulates convex polygons and welds shared vertices.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let triangle_estimate = polygons.iter().map(|p| p.vertices().len() - 2).sum();
    let mut mesh = Mesh::with_capacity(triangle_estimate + 2, triangle_estimate);

    for poly in polygons {
        let indices: Vec<u32> = poly
            .vertices()
            .iter()
            .map(|v| mesh.add_vertex(*v))
            .collect();
        mesh.add_polygon(&indices);
    }

    mesh.weld()
}
