//! # NC1 Model
//!
//! Typed records produced by the NC1 parser and consumed by the transformer,
//! the primitive factory and the feature engine.
//!
//! ## Records
//!
//! - [`ProfileDescriptor`]: member family, length and cross-section
//! - [`FeatureRecord`]: tagged hole/slot/rectangle/contour variants
//! - [`Marking`]: SI text markings (never subtracted)
//! - [`Nc1Document`]: everything a single file describes
//!
//! ## Example
//!
//! ```rust
//! use nc1_model::{Depth, FaceCode, FeatureId, FeatureRecord};
//!
//! let hole = FeatureRecord::hole(FeatureId(1), FaceCode::Top, 500.0, 100.0, 22.0, Depth::Through);
//! assert!(hole.validate().is_ok());
//! ```

pub mod block;
pub mod document;
pub mod error;
pub mod face;
pub mod feature;
pub mod lookup;
pub mod marking;
pub mod profile;

pub use block::{Block, BlockCode, BlockLine};
pub use document::{Nc1Document, PieceHeader};
pub use error::ValidationError;
pub use face::{FaceCode, PointMark};
pub use feature::{
    Contour, ContourKind, ContourPoint, Depth, FeatureId, FeatureKind, FeatureRecord,
};
pub use lookup::{NoLookup, ProfileDimensions, ProfileLookup, ProfileTable};
pub use marking::Marking;
pub use profile::{EndCuts, ProfileDescriptor, ProfileFamily};
