//! # Running Solid
//!
//! A mesh plus the metadata of every feature applied to it. Solids are
//! values: each successful step produces a new one and the previous solid
//! stays valid.

use glam::DVec3;
use nc1_mesh::Mesh;
use nc1_model::{FaceCode, FeatureId, FeatureRecord};
use nc1_transform::Pose;
use serde::Serialize;

/// Metadata kept for an applied feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedFeature {
    pub id: FeatureId,
    pub kind: &'static str,
    pub face: FaceCode,
    pub x: f64,
    pub y: f64,
    pub pose: Pose,
    /// False when the feature removed no material.
    pub cut: bool,
}

impl AppliedFeature {
    pub fn new(feature: &FeatureRecord, pose: Pose, cut: bool) -> Self {
        Self {
            id: feature.id,
            kind: feature.kind.label(),
            face: feature.face,
            x: feature.x,
            y: feature.y,
            pose,
            cut,
        }
    }
}

/// Vertex/triangle counts, volume and bounds of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeshStats {
    pub vertices: usize,
    pub triangles: usize,
    pub volume: f64,
    pub min: DVec3,
    pub max: DVec3,
}

impl MeshStats {
    pub fn of(mesh: &Mesh) -> Self {
        let (min, max) = mesh.bounding_box();
        Self {
            vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            volume: mesh.signed_volume(),
            min,
            max,
        }
    }
}

/// Flat f32 buffers for a renderer: `[x, y, z, ...]` positions and normals,
/// three indices per triangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBuffers {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

fn flatten(points: &[DVec3]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}

/// Mesh with normals and bounds kept current, plus applied-feature metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solid {
    mesh: Mesh,
    features: Vec<AppliedFeature>,
}

impl Solid {
    /// Wraps a base mesh with no features applied.
    pub fn new(mut mesh: Mesh) -> Self {
        mesh.compute_normals();
        Self {
            mesh,
            features: Vec::new(),
        }
    }

    /// New solid from a cut result, carrying this solid's metadata plus
    /// `applied`.
    pub(crate) fn with_cut(&self, mut mesh: Mesh, applied: AppliedFeature) -> Self {
        mesh.compute_normals();
        let mut features = self.features.clone();
        features.push(applied);
        Self { mesh, features }
    }

    /// Same mesh, one more metadata entry.
    pub(crate) fn with_noop(&self, applied: AppliedFeature) -> Self {
        let mut next = self.clone();
        next.features.push(applied);
        next
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Applied features in application order.
    pub fn features(&self) -> &[AppliedFeature] {
        &self.features
    }

    pub fn is_applied(&self, id: FeatureId) -> bool {
        self.features.iter().any(|f| f.id == id)
    }

    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        self.mesh.bounding_box()
    }

    pub fn stats(&self) -> MeshStats {
        MeshStats::of(&self.mesh)
    }

    pub fn buffers(&self) -> RenderBuffers {
        RenderBuffers {
            positions: flatten(self.mesh.vertices()),
            normals: self.mesh.normals().map(flatten).unwrap_or_default(),
            indices: self.mesh.triangles().iter().flatten().copied().collect(),
        }
    }
}
