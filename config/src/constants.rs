//! # Configuration Constants
//!
//! Centralized constants for the NC1 pipeline. All geometry tolerances,
//! tessellation bounds and DSTV field formatting values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Feature Geometry**: Bounds margin, cutter safety factor
//! - **Resolution**: Adaptive segment bounds for curved primitives
//! - **Formatting**: DSTV column widths and decimal places

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for vertex deduplication.
///
/// Slightly larger tolerance used when welding nearly-identical vertices
/// after boolean operations.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Plane thickness used by the BSP kernel when classifying points.
///
/// Points closer than this to a splitting plane count as coplanar.
pub const PLANE_EPSILON: f64 = 1e-5;

/// Distance under which the first and last contour points are considered
/// the same point (the contour is closed).
///
/// # Example
///
/// ```rust
/// use config::constants::CONTOUR_CLOSE_EPSILON;
///
/// let first = (0.0_f64, 0.0_f64);
/// let last = (0.0005_f64, 0.0_f64);
/// let gap = ((first.0 - last.0).powi(2) + (first.1 - last.1).powi(2)).sqrt();
/// assert!(gap < CONTOUR_CLOSE_EPSILON);
/// ```
pub const CONTOUR_CLOSE_EPSILON: f64 = 1e-3;

/// Tolerance used when comparing parsed values against serialized ones.
///
/// Serialized coordinates carry two decimals, so round-trips are exact to
/// half of the last printed digit.
pub const ROUND_TRIP_TOLERANCE: f64 = 5e-3;

// =============================================================================
// FEATURE GEOMETRY CONSTANTS
// =============================================================================

/// Distance a transformed feature position may exceed the member envelope
/// before it is rejected as out of bounds (length units, mm).
///
/// # Example
///
/// ```rust
/// use config::constants::BOUNDS_MARGIN;
///
/// let length = 3000.0;
/// let x = length + 50.0;
/// assert!(x > length + BOUNDS_MARGIN);
/// ```
pub const BOUNDS_MARGIN: f64 = 10.0;

/// Cutter length multiplier applied to traversal depths.
///
/// A cutting primitive is longer than the material it traverses so the
/// subtraction never leaves a skin on the far side.
pub const DEPTH_SAFETY_FACTOR: f64 = 1.2;

/// Padding added around a face when building the slab for external contours.
pub const CONTOUR_SLAB_PADDING: f64 = 20.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of segments for curved primitives (holes, slot caps, arcs).
pub const MIN_SEGMENTS: u32 = 16;

/// Maximum number of segments for curved primitives.
pub const MAX_SEGMENTS: u32 = 32;

/// Segments per unit of feature diameter before clamping.
pub const SEGMENTS_PER_UNIT: f64 = 1.0;

/// Computes the segment count for a full circle of the given diameter.
///
/// The count grows with feature size and is clamped to
/// [`MIN_SEGMENTS`, `MAX_SEGMENTS`].
///
/// # Example
///
/// ```rust
/// use config::constants::{compute_segments, MAX_SEGMENTS, MIN_SEGMENTS};
///
/// assert_eq!(compute_segments(4.0), MIN_SEGMENTS);
/// assert_eq!(compute_segments(24.0), 24);
/// assert_eq!(compute_segments(400.0), MAX_SEGMENTS);
/// ```
pub fn compute_segments(diameter: f64) -> u32 {
    compute_segments_bounded(diameter, MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Same as [`compute_segments`] with explicit bounds.
pub fn compute_segments_bounded(diameter: f64, min: u32, max: u32) -> u32 {
    if !diameter.is_finite() || diameter <= 0.0 {
        return min;
    }
    let raw = (diameter * SEGMENTS_PER_UNIT).ceil();
    if raw >= max as f64 {
        max
    } else {
        (raw as u32).clamp(min, max)
    }
}

// =============================================================================
// FORMATTING CONSTANTS
// =============================================================================

/// Width of a right-aligned coordinate column in NC1 output.
pub const COORDINATE_COLUMN_WIDTH: usize = 12;

/// Decimal places for lengths and coordinates.
pub const LENGTH_DECIMALS: usize = 2;

/// Decimal places for angles, weights and surfaces.
pub const ANGLE_DECIMALS: usize = 3;

/// Indentation in front of every NC1 data line.
pub const LINE_INDENT: &str = "  ";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum input size accepted by the parser (in bytes).
pub const MAX_FILE_SIZE: usize = 64 * 1024 * 1024;

/// Maximum number of triangles a running solid may grow to.
pub const MAX_TRIANGLES: usize = 5_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks whether two values are approximately equal using [`EPSILON`].
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-12));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks whether a value is approximately zero.
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
