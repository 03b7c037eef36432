//! # Config Crate
//!
//! Centralized configuration constants for the NC1 profile pipeline.
//! All magic numbers and tunable parameters are defined here so the parser,
//! transformer, mesh kernel and feature engine agree on tolerances and
//! formatting.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BOUNDS_MARGIN, DEPTH_SAFETY_FACTOR, compute_segments};
//!
//! // Features may sit at most BOUNDS_MARGIN outside the member envelope
//! assert_eq!(BOUNDS_MARGIN, 10.0);
//!
//! // Cutting primitives are longer than the material they traverse
//! let cutter_length = 12.0 * DEPTH_SAFETY_FACTOR;
//! assert!(cutter_length > 12.0);
//!
//! // Curved primitives use an adaptive segment count
//! assert_eq!(compute_segments(20.0), 20);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Overrides**: `PipelineConfig::new` rejects nonsensical values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
pub mod pipeline;

pub use pipeline::{ConfigError, PipelineConfig, PrecheckPolicy};

#[cfg(test)]
mod tests;
