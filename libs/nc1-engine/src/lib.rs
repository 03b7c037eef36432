//! # NC1 Engine
//!
//! Turns a parsed member into a cut solid: builds the base solid, applies
//! end cuts, then subtracts features one at a time and reports what happened
//! to each.
//!
//! ## Architecture
//!
//! ```text
//! Nc1Document → base (section + end cuts) → process_batch → BatchResult → MemberReport
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::PipelineConfig;
//! use nc1_engine::CsgEngine;
//! use nc1_model::{Depth, FaceCode, FeatureId, FeatureRecord, ProfileDescriptor, ProfileFamily};
//!
//! let plate = ProfileDescriptor::from_dimension_lines(
//!     ProfileFamily::Plate, "BL12", 400.0, [200.0, 0.0, 0.0, 12.0]);
//! let engine = CsgEngine::new(PipelineConfig::default());
//! let base = engine.base(&plate).unwrap();
//!
//! let holes = [
//!     FeatureRecord::hole(FeatureId(1), FaceCode::Front, 100.0, 100.0, 18.0, Depth::Through),
//!     FeatureRecord::hole(FeatureId(2), FaceCode::Front, 300.0, 100.0, 18.0, Depth::Through),
//! ];
//! let batch = engine.process_batch(&base, &holes, &plate);
//! assert!(batch.is_complete());
//! assert_eq!(batch.solid.features().len(), 2);
//! ```

pub mod cuts;
pub mod engine;
pub mod error;
pub mod report;
pub mod solid;

pub use cuts::{apply_end_cuts, end_cuts, End, EndCut};
pub use engine::CsgEngine;
pub use error::{EngineError, FeatureError, Stage};
pub use report::{
    BatchResult, BatchStatus, Failure, FeatureOutcome, MemberReport, Outcome, SkipReason,
};
pub use solid::{AppliedFeature, MeshStats, RenderBuffers, Solid};
