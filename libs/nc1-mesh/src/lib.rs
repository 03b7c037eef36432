//! # NC1 Mesh
//!
//! Triangle meshes, the boolean kernel and the primitive factory used to
//! turn a parsed member into a cut solid.
//!
//! ## Architecture
//!
//! ```text
//! nc1-model (records) + nc1-transform (poses) → nc1-mesh (base solid, cutters, subtract)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust:
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Triangulation**: Ear clipping with exact orientation predicates
//! - **Primitives**: Extruded outlines (cylinder, capsule, prism, contour)
//!
//! ## Usage
//!
//! ```rust
//! use config::PipelineConfig;
//! use nc1_mesh::profile::base_solid;
//! use nc1_mesh::{BooleanKernel, BspKernel, Cutter, PrimitiveFactory};
//! use nc1_model::{Depth, FaceCode, FeatureId, FeatureRecord, ProfileDescriptor, ProfileFamily};
//! use nc1_transform::{face_spec, transform};
//!
//! let plate = ProfileDescriptor::from_dimension_lines(
//!     ProfileFamily::Plate, "BL12", 400.0, [200.0, 0.0, 0.0, 12.0]);
//! let base = base_solid(&plate, &PipelineConfig::default()).unwrap();
//!
//! let hole = FeatureRecord::hole(FeatureId(1), FaceCode::Front, 100.0, 100.0, 18.0, Depth::Through);
//! let pose = transform(&plate, hole.face, hole.x, hole.y).unwrap();
//! let face = face_spec(&plate, hole.face).unwrap();
//! let Cutter::Solid(cutter) = PrimitiveFactory::default()
//!     .build(&hole, &pose, &face, &BspKernel)
//!     .unwrap() else { panic!("hole always cuts") };
//!
//! let drilled = BspKernel.subtract(&base, &cutter).unwrap();
//! assert!(drilled.signed_volume() < base.signed_volume());
//! ```

pub mod error;
pub mod factory;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod profile;

pub use error::MeshError;
pub use factory::{Cutter, CutterSpan, PrimitiveFactory};
pub use mesh::Mesh;
pub use ops::boolean::{difference, BooleanKernel, BspKernel};
pub use profile::base_solid;
