//! # Primitive Factory
//!
//! Turns a feature record plus its resolved pose into a world-space cutting
//! solid. Cutters are built in the pose's local frame (origin at the entry
//! point, X along the member, Y along the face y axis, Z into the material)
//! and then placed with [`Pose::to_world`].
//!
//! ## Cutter span
//!
//! Along local Z a cutter covers `depth_factor` times the depth it must
//! remove. Through features straddle the material evenly; blind features
//! stop exactly at their depth and overshoot on the entry side only.

use config::constants::{compute_segments_bounded, CONTOUR_SLAB_PADDING, ROUND_TRIP_TOLERANCE};
use config::PipelineConfig;
use glam::DVec2;
use nc1_model::{Contour, ContourKind, Depth, FeatureKind, FeatureRecord};
use nc1_transform::{FaceSpec, Pose};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::boolean::BooleanKernel;
use crate::primitives::{capsule, cylinder, outline, polygon_prism, rectangular};

/// Result of building a feature's cutter.
#[derive(Debug, Clone, PartialEq)]
pub enum Cutter {
    /// World-space solid to subtract.
    Solid(Mesh),
    /// The feature removes no material (an outer contour covering its face).
    NoOp,
}

/// Extent of a cutter along the drilling axis, relative to the entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutterSpan {
    pub near: f64,
    pub far: f64,
}

impl CutterSpan {
    /// Plans the span for `depth` on a face of `thickness`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nc1_mesh::factory::CutterSpan;
    /// use nc1_model::Depth;
    ///
    /// let through = CutterSpan::plan(Depth::Through, 10.0, 1.2).unwrap();
    /// assert!((through.near + 1.0).abs() < 1e-12 && (through.far - 11.0).abs() < 1e-12);
    ///
    /// let blind = CutterSpan::plan(Depth::Blind(5.0), 10.0, 1.2).unwrap();
    /// assert!((blind.near + 1.0).abs() < 1e-12 && blind.far == 5.0);
    /// ```
    pub fn plan(depth: Depth, thickness: f64, factor: f64) -> Result<Self, MeshError> {
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(MeshError::degenerate(format!(
                "face thickness must be positive: {thickness}"
            )));
        }
        let span = match depth {
            Depth::Through => {
                let overshoot = (factor - 1.0) * 0.5 * thickness;
                Self {
                    near: -overshoot,
                    far: thickness + overshoot,
                }
            }
            Depth::Blind(depth) => {
                if !depth.is_finite() || depth <= 0.0 {
                    return Err(MeshError::degenerate(format!(
                        "feature depth must be positive: {depth}"
                    )));
                }
                Self {
                    near: depth - factor * depth,
                    far: depth,
                }
            }
        };
        Ok(span)
    }

    pub fn length(&self) -> f64 {
        self.far - self.near
    }
}

/// Builds cutters with the segment bounds and depth factor of a pipeline
/// configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimitiveFactory {
    config: PipelineConfig,
}

impl PrimitiveFactory {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Segment count for a full circle of `diameter`.
    pub fn segments(&self, diameter: f64) -> u32 {
        compute_segments_bounded(diameter, self.config.min_segments, self.config.max_segments)
    }

    /// Builds the world-space cutter of `feature` at `pose` on `face`.
    ///
    /// `kernel` is only used for outer contours, whose cutter is the face
    /// slab minus the contour prism.
    pub fn build(
        &self,
        feature: &FeatureRecord,
        pose: &Pose,
        face: &FaceSpec,
        kernel: &dyn BooleanKernel,
    ) -> Result<Cutter, MeshError> {
        let depth = feature.kind.depth().unwrap_or(Depth::Through);
        let span = CutterSpan::plan(depth, pose.depth, self.config.depth_factor)?;

        let local = match &feature.kind {
            FeatureKind::Hole { diameter, .. } => cylinder(
                diameter * 0.5,
                span.near,
                span.far,
                self.segments(*diameter),
            )?,
            FeatureKind::SlottedHole {
                diameter,
                elongation,
                angle,
                ..
            } => capsule(
                *diameter,
                *elongation,
                *angle,
                span.near,
                span.far,
                self.segments(*diameter),
            )?,
            FeatureKind::RectHole { width, height, .. } => {
                rectangular(*width, *height, span.near, span.far)?
            }
            FeatureKind::Contour(contour) => {
                let origin = DVec2::new(feature.x, feature.y);
                match contour.kind {
                    ContourKind::Internal => self.contour_prism(contour, origin, span)?,
                    ContourKind::External => {
                        if covers_face(contour, face) {
                            tracing::debug!(id = %feature.id, "outer contour covers its face");
                            return Ok(Cutter::NoOp);
                        }
                        let slab = self.face_slab(face, origin, span)?;
                        let padded = CutterSpan {
                            near: span.near - CONTOUR_SLAB_PADDING,
                            far: span.far + CONTOUR_SLAB_PADDING,
                        };
                        let keep = self.contour_prism(contour, origin, padded)?;
                        kernel.subtract(&slab, &keep)?
                    }
                }
            }
        };

        let mut mesh = local;
        mesh.transform(&pose.to_world());
        tracing::debug!(
            id = %feature.id,
            kind = feature.kind.label(),
            near = span.near,
            far = span.far,
            triangles = mesh.triangle_count(),
            "built cutter"
        );
        Ok(Cutter::Solid(mesh))
    }

    fn contour_prism(
        &self,
        contour: &Contour,
        origin: DVec2,
        span: CutterSpan,
    ) -> Result<Mesh, MeshError> {
        let points = outline::contour(
            &contour.ring(),
            origin,
            self.config.min_segments,
            self.config.max_segments,
        )?;
        polygon_prism(&points, span.near, span.far)
    }

    /// Box over the face in the local frame of a pose anchored at `origin`.
    /// Free edges are padded; edges shared with a flange or another wall stop
    /// at the clear span so the trim never reaches into them.
    fn face_slab(&self, face: &FaceSpec, origin: DVec2, span: CutterSpan) -> Result<Mesh, MeshError> {
        let (length, across) = face.extent;
        let (low, high) = face.clear;
        let low = if low > 0.0 { low } else { -CONTOUR_SLAB_PADDING };
        let high = if high < across { high } else { across + CONTOUR_SLAB_PADDING };
        let min = DVec2::new(-CONTOUR_SLAB_PADDING, low) - origin;
        let max = DVec2::new(length + CONTOUR_SLAB_PADDING, high) - origin;
        polygon_prism(&outline::rectangle_between(min, max), span.near, span.far)
    }
}

/// True when a straight-edged rectangular contour spans the whole face.
fn covers_face(contour: &Contour, face: &FaceSpec) -> bool {
    if !contour.is_rectangular() {
        return false;
    }
    let ((min_x, min_y), (max_x, max_y)) = contour.bounds();
    let (length, across) = face.extent;
    min_x <= ROUND_TRIP_TOLERANCE
        && min_y <= ROUND_TRIP_TOLERANCE
        && max_x >= length - ROUND_TRIP_TOLERANCE
        && max_y >= across - ROUND_TRIP_TOLERANCE
}
