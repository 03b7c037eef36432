//! Pipeline-wide settings shared between the transformer, the mesh kernel and
//! the feature engine.
//!
//! Each value defaults to the corresponding constant in
//! [`crate::constants`]; overrides go through [`PipelineConfig::new`] or the
//! `with_*` builders so invalid values never reach the geometry code.

use std::fmt;

use crate::constants::{
    BOUNDS_MARGIN, DEPTH_SAFETY_FACTOR, MAX_SEGMENTS, MIN_SEGMENTS,
};

/// How a batch reacts to features that fail validation before any boolean
/// work starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrecheckPolicy {
    /// Any invalid feature fails the whole batch; the base solid is returned
    /// untouched.
    #[default]
    Strict,
    /// Invalid features are reported and skipped; valid ones are applied.
    Lenient,
}

/// Immutable snapshot of pipeline settings.
///
/// # Examples
/// ```
/// use config::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert_eq!(config.bounds_margin, 10.0);
/// assert_eq!(config.depth_factor, 1.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Allowed distance outside the member envelope.
    pub bounds_margin: f64,
    /// Cutter length multiplier over the traversal depth.
    pub depth_factor: f64,
    /// Lower bound of the adaptive segment count.
    pub min_segments: u32,
    /// Upper bound of the adaptive segment count.
    pub max_segments: u32,
    /// Batch pre-check behaviour.
    pub precheck: PrecheckPolicy,
}

impl PipelineConfig {
    /// Builds a configuration, validating every numeric field.
    ///
    /// # Examples
    /// ```
    /// use config::{PipelineConfig, PrecheckPolicy};
    /// let cfg = PipelineConfig::new(5.0, 1.5, 16, 24, PrecheckPolicy::Lenient)
    ///     .expect("valid config");
    /// assert_eq!(cfg.max_segments, 24);
    /// ```
    pub fn new(
        bounds_margin: f64,
        depth_factor: f64,
        min_segments: u32,
        max_segments: u32,
        precheck: PrecheckPolicy,
    ) -> Result<Self, ConfigError> {
        if !bounds_margin.is_finite() || bounds_margin < 0.0 {
            return Err(ConfigError::InvalidMargin(bounds_margin));
        }
        if !depth_factor.is_finite() || depth_factor < 1.0 {
            return Err(ConfigError::InvalidDepthFactor(depth_factor));
        }
        if min_segments < 3 || max_segments < min_segments {
            return Err(ConfigError::InvalidSegments {
                min: min_segments,
                max: max_segments,
            });
        }
        Ok(Self {
            bounds_margin,
            depth_factor,
            min_segments,
            max_segments,
            precheck,
        })
    }

    /// Returns a copy with a different bounds margin.
    pub fn with_bounds_margin(self, bounds_margin: f64) -> Result<Self, ConfigError> {
        Self::new(
            bounds_margin,
            self.depth_factor,
            self.min_segments,
            self.max_segments,
            self.precheck,
        )
    }

    /// Returns a copy with a different pre-check policy.
    pub fn with_precheck(mut self, precheck: PrecheckPolicy) -> Self {
        self.precheck = precheck;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            bounds_margin: BOUNDS_MARGIN,
            depth_factor: DEPTH_SAFETY_FACTOR,
            min_segments: MIN_SEGMENTS,
            max_segments: MAX_SEGMENTS,
            precheck: PrecheckPolicy::Strict,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the bounds margin is negative or not finite.
    InvalidMargin(f64),
    /// Raised when the depth factor would shorten cutters.
    InvalidDepthFactor(f64),
    /// Raised when the segment bounds cannot form a polygon or are inverted.
    InvalidSegments { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMargin(value) => {
                write!(f, "bounds margin must be a finite non-negative number: {value}")
            }
            ConfigError::InvalidDepthFactor(value) => {
                write!(f, "depth factor must be >= 1.0: {value}")
            }
            ConfigError::InvalidSegments { min, max } => {
                write!(f, "segment bounds must satisfy 3 <= min <= max: {min}..{max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
