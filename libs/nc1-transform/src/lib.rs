//! # NC1 Transform
//!
//! Face-aware coordinate transformer: maps a feature's face-local offset
//! into the member's 3D frame according to the profile topology.
//!
//! ```text
//! (profile, face, x, y) → face table → FacePoint → envelope check → Pose
//! ```

pub mod envelope;
pub mod error;
pub mod frame;
pub mod pose;
pub mod transform;

pub use envelope::Envelope;
pub use error::{Axis, TransformError};
pub use frame::{face_spec, supported_faces, Anchor, FacePoint, FaceShape, FaceSpec};
pub use pose::Pose;
pub use transform::{face_point, inverse_transform, transform, transform_with_margin};
