//! SI text markings. Reported and re-emitted, never subtracted.

use serde::{Deserialize, Serialize};

use crate::face::{FaceCode, PointMark};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marking {
    pub face: FaceCode,
    pub x: f64,
    pub y: f64,
    pub reference: Option<PointMark>,
    /// Text direction in degrees.
    pub angle: f64,
    /// Letter height.
    pub height: f64,
    pub text: String,
}
