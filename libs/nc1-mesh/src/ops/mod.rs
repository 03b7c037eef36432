//! # Mesh Operations
//!
//! - **boolean**: BSP subtraction behind the [`boolean::BooleanKernel`] seam
//! - **extrude**: outlines and rings swept along Z
//! - **triangulate**: ear clipping for extrusion caps

pub mod boolean;
pub mod extrude;
pub mod triangulate;
