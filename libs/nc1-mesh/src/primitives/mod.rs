//! # Primitives
//!
//! Cutting solids and their 2D outlines. Every prism is built in a local
//! frame where Z is the extrusion axis; callers place it with an affine.

pub mod cuboid;
pub mod cylinder;
pub mod outline;
pub mod prism;

pub use cuboid::cuboid;
pub use cylinder::cylinder;
pub use prism::{capsule, polygon_prism, rectangular};
