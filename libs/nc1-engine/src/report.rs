//! # Batch Reports
//!
//! Per-feature outcomes of a batch and the serializable member report built
//! from them.

use std::fmt;

use nc1_model::{FeatureId, FeatureRecord, Marking, Nc1Document, ProfileFamily};
use nc1_transform::Pose;
use serde::Serialize;

use crate::error::{FeatureError, Stage};
use crate::solid::{MeshStats, Solid};

/// Serializable summary of a [`FeatureError`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub stage: Stage,
    pub code: &'static str,
    pub message: String,
}

impl From<&FeatureError> for Failure {
    fn from(err: &FeatureError) -> Self {
        Self {
            stage: err.stage(),
            code: err.code(),
            message: err.to_string(),
        }
    }
}

/// Why a feature was not attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The solid already carries a feature with this id.
    AlreadyApplied,
    /// Another feature failed the strict pre-check.
    BatchRejected,
    /// The batch was cancelled before this feature.
    Cancelled,
}

/// What happened to one feature of a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Outcome {
    /// Subtracted, or recorded as a no-op when `cut` is false.
    Applied { pose: Pose, cut: bool },
    /// Failed the pre-check; no cutter was built.
    Rejected(Failure),
    /// Passed the pre-check but its cutter or subtraction failed.
    Failed(Failure),
    Skipped { reason: SkipReason },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureOutcome {
    pub id: FeatureId,
    pub kind: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl FeatureOutcome {
    pub fn new(feature: &FeatureRecord, outcome: Outcome) -> Self {
        Self {
            id: feature.id,
            kind: feature.kind.label(),
            outcome,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, Outcome::Applied { .. })
    }

    /// The failure, for rejected and failed features.
    pub fn failure(&self) -> Option<&Failure> {
        match &self.outcome {
            Outcome::Rejected(failure) | Outcome::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Overall state of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum BatchStatus {
    /// Every feature was applied or already present.
    Complete,
    /// Some features were rejected or failed; the rest were applied.
    Partial,
    /// The strict pre-check failed; nothing was subtracted.
    Rejected { features: Vec<FeatureId> },
    /// Stopped early; the solid holds every feature applied before the stop.
    Cancelled,
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchStatus::Complete => write!(f, "complete"),
            BatchStatus::Partial => write!(f, "partial"),
            BatchStatus::Rejected { features } => {
                write!(f, "rejected: invalid features")?;
                for id in features {
                    write!(f, " {id}")?;
                }
                Ok(())
            }
            BatchStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Best solid of a batch plus what happened to each feature, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResult {
    pub solid: Solid,
    pub outcomes: Vec<FeatureOutcome>,
    /// Number of subtractions handed to the kernel.
    pub booleans_attempted: usize,
    pub status: BatchStatus,
}

impl BatchResult {
    pub fn applied(&self) -> impl Iterator<Item = &FeatureOutcome> {
        self.outcomes.iter().filter(|o| o.is_applied())
    }

    /// Rejected and failed features.
    pub fn failures(&self) -> impl Iterator<Item = &FeatureOutcome> {
        self.outcomes.iter().filter(|o| o.failure().is_some())
    }

    pub fn outcome(&self, id: FeatureId) -> Option<&FeatureOutcome> {
        self.outcomes.iter().find(|o| o.id == id)
    }

    pub fn is_complete(&self) -> bool {
        self.status == BatchStatus::Complete
    }
}

/// JSON-ready summary of one processed member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberReport {
    pub piece: String,
    pub designation: String,
    pub family: ProfileFamily,
    pub length: f64,
    pub status: BatchStatus,
    pub booleans_attempted: usize,
    pub applied: usize,
    pub failed: usize,
    pub features: Vec<FeatureOutcome>,
    pub markings: Vec<Marking>,
    /// Absent when the solid was not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mesh: Option<MeshStats>,
}

impl MemberReport {
    pub fn new(document: &Nc1Document, batch: &BatchResult, with_mesh: bool) -> Self {
        let profile = &document.profile;
        Self {
            piece: document.header.piece.clone(),
            designation: profile.designation.clone(),
            family: profile.family,
            length: profile.length,
            status: batch.status.clone(),
            booleans_attempted: batch.booleans_attempted,
            applied: batch.applied().count(),
            failed: batch.failures().count(),
            features: batch.outcomes.clone(),
            markings: document.markings.clone(),
            mesh: with_mesh.then(|| batch.solid.stats()),
        }
    }
}
