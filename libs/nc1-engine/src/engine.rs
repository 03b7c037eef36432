//! # Feature Engine
//!
//! Applies features to a running solid, one boolean at a time:
//!
//! ```text
//! Validate → Transform → Build → Subtract → record metadata
//! ```
//!
//! Single features fail fast with a [`FeatureError`] and leave the input
//! solid untouched. Batches pre-check every feature before the first
//! subtraction; after that a failed feature is recorded and the batch moves
//! on.

use std::sync::atomic::{AtomicBool, Ordering};

use config::{PipelineConfig, PrecheckPolicy};
use nc1_mesh::{base_solid, BooleanKernel, BspKernel, Cutter, Mesh, PrimitiveFactory};
use nc1_model::{FeatureKind, FeatureRecord, Nc1Document, ProfileDescriptor};
use nc1_transform::{face_point, face_spec, transform_with_margin, Pose};
use rayon::prelude::*;

use crate::cuts::apply_end_cuts;
use crate::error::{EngineError, FeatureError};
use crate::report::{BatchResult, BatchStatus, Failure, FeatureOutcome, Outcome, SkipReason};
use crate::solid::{AppliedFeature, Solid};

/// CSG feature engine over a boolean kernel.
#[derive(Debug, Clone, Default)]
pub struct CsgEngine<K: BooleanKernel = BspKernel> {
    kernel: K,
    factory: PrimitiveFactory,
    config: PipelineConfig,
}

impl CsgEngine<BspKernel> {
    /// Engine over the BSP kernel.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_kernel(BspKernel, config)
    }
}

impl<K: BooleanKernel> CsgEngine<K> {
    pub fn with_kernel(kernel: K, config: PipelineConfig) -> Self {
        Self {
            kernel,
            factory: PrimitiveFactory::new(config),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Extruded section of `profile` with its end cuts applied.
    pub fn base(&self, profile: &ProfileDescriptor) -> Result<Solid, EngineError> {
        let mesh = base_solid(profile, &self.config).map_err(EngineError::BaseSolid)?;
        let mesh = apply_end_cuts(&mesh, profile, &self.kernel).map_err(EngineError::EndCut)?;
        tracing::debug!(
            designation = %profile.designation,
            triangles = mesh.triangle_count(),
            "built base solid"
        );
        Ok(Solid::new(mesh))
    }

    /// Validates `feature` and resolves its pose without building anything.
    ///
    /// Contour vertices are checked against the envelope one by one.
    pub fn precheck(
        &self,
        feature: &FeatureRecord,
        profile: &ProfileDescriptor,
    ) -> Result<Pose, FeatureError> {
        feature.validate()?;
        let margin = self.config.bounds_margin;
        let pose = transform_with_margin(profile, feature.face, feature.x, feature.y, margin)?;
        if let FeatureKind::Contour(contour) = &feature.kind {
            for point in &contour.points {
                face_point(profile, feature.face, point.x, point.y, margin)?;
            }
        }
        Ok(pose)
    }

    /// Applies one feature to `base`.
    ///
    /// Returns a new solid on success and leaves `base` untouched either
    /// way. A feature whose id `base` already carries returns an unchanged
    /// copy.
    pub fn process(
        &self,
        base: &Solid,
        feature: &FeatureRecord,
        profile: &ProfileDescriptor,
    ) -> Result<Solid, FeatureError> {
        if base.is_applied(feature.id) {
            tracing::debug!(id = %feature.id, "feature already applied");
            return Ok(base.clone());
        }
        let pose = self.precheck(feature, profile)?;
        match self.cutter(feature, profile, &pose)? {
            Cutter::NoOp => Ok(base.with_noop(AppliedFeature::new(feature, pose, false))),
            Cutter::Solid(cutter) => self.subtract(base, feature, pose, &cutter),
        }
    }

    /// Applies `features` in order.
    pub fn process_batch(
        &self,
        base: &Solid,
        features: &[FeatureRecord],
        profile: &ProfileDescriptor,
    ) -> BatchResult {
        self.process_batch_until(base, features, profile, &AtomicBool::new(false))
    }

    /// Same as [`Self::process_batch`], stopping before the next feature
    /// once `cancel` is set.
    pub fn process_batch_until(
        &self,
        base: &Solid,
        features: &[FeatureRecord],
        profile: &ProfileDescriptor,
        cancel: &AtomicBool,
    ) -> BatchResult {
        let checks: Vec<Result<Pose, FeatureError>> = features
            .iter()
            .map(|feature| self.precheck(feature, profile))
            .collect();

        let rejected: Vec<_> = features
            .iter()
            .zip(&checks)
            .filter(|(_, check)| check.is_err())
            .map(|(feature, _)| feature.id)
            .collect();

        if !rejected.is_empty() && self.config.precheck == PrecheckPolicy::Strict {
            tracing::warn!(rejected = rejected.len(), "batch rejected by pre-check");
            let outcomes = features
                .iter()
                .zip(&checks)
                .map(|(feature, check)| {
                    let outcome = match check {
                        Err(err) => Outcome::Rejected(Failure::from(err)),
                        Ok(_) => Outcome::Skipped {
                            reason: SkipReason::BatchRejected,
                        },
                    };
                    FeatureOutcome::new(feature, outcome)
                })
                .collect();
            return BatchResult {
                solid: base.clone(),
                outcomes,
                booleans_attempted: 0,
                status: BatchStatus::Rejected { features: rejected },
            };
        }

        let mut solid = base.clone();
        let mut outcomes = Vec::with_capacity(features.len());
        let mut booleans_attempted = 0;
        let mut cancelled = false;

        for (feature, check) in features.iter().zip(checks) {
            if cancelled || cancel.load(Ordering::Relaxed) {
                cancelled = true;
                outcomes.push(FeatureOutcome::new(
                    feature,
                    Outcome::Skipped {
                        reason: SkipReason::Cancelled,
                    },
                ));
                continue;
            }
            let outcome = match check {
                Err(err) => {
                    tracing::warn!(id = %feature.id, code = err.code(), "{err}");
                    Outcome::Rejected(Failure::from(&err))
                }
                Ok(_) if solid.is_applied(feature.id) => Outcome::Skipped {
                    reason: SkipReason::AlreadyApplied,
                },
                Ok(pose) => {
                    let step = self.cutter(feature, profile, &pose).and_then(|cutter| match cutter {
                        Cutter::NoOp => Ok(solid.with_noop(AppliedFeature::new(feature, pose, false))),
                        Cutter::Solid(cutter) => {
                            booleans_attempted += 1;
                            self.subtract(&solid, feature, pose, &cutter)
                        }
                    });
                    match step {
                        Ok(next) => {
                            let cut = next.features().last().is_some_and(|f| f.cut);
                            solid = next;
                            Outcome::Applied { pose, cut }
                        }
                        Err(err) => {
                            tracing::warn!(id = %feature.id, code = err.code(), "{err}");
                            Outcome::Failed(Failure::from(&err))
                        }
                    }
                }
            };
            outcomes.push(FeatureOutcome::new(feature, outcome));
        }

        let status = if cancelled {
            BatchStatus::Cancelled
        } else if outcomes.iter().any(|o| o.failure().is_some()) {
            BatchStatus::Partial
        } else {
            BatchStatus::Complete
        };
        tracing::info!(
            features = features.len(),
            booleans = booleans_attempted,
            triangles = solid.mesh().triangle_count(),
            %status,
            "batch finished"
        );
        BatchResult {
            solid,
            outcomes,
            booleans_attempted,
            status,
        }
    }

    /// Builds and processes every member in parallel. Results keep the
    /// input order.
    pub fn process_members(&self, documents: &[Nc1Document]) -> Vec<Result<BatchResult, EngineError>> {
        documents
            .par_iter()
            .map(|document| {
                let base = self.base(&document.profile)?;
                Ok(self.process_batch(&base, &document.features, &document.profile))
            })
            .collect()
    }

    fn cutter(
        &self,
        feature: &FeatureRecord,
        profile: &ProfileDescriptor,
        pose: &Pose,
    ) -> Result<Cutter, FeatureError> {
        let face = face_spec(profile, feature.face)?;
        self.factory
            .build(feature, pose, &face, &self.kernel)
            .map_err(FeatureError::Build)
    }

    fn subtract(
        &self,
        base: &Solid,
        feature: &FeatureRecord,
        pose: Pose,
        cutter: &Mesh,
    ) -> Result<Solid, FeatureError> {
        let mesh = self
            .kernel
            .subtract(base.mesh(), cutter)
            .map_err(FeatureError::Boolean)?;
        tracing::debug!(
            id = %feature.id,
            kind = feature.kind.label(),
            triangles = mesh.triangle_count(),
            "subtracted feature"
        );
        Ok(base.with_cut(mesh, AppliedFeature::new(feature, pose, true)))
    }
}
