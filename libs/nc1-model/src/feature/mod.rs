//! # Feature Records
//!
//! Tagged feature variants with their invariants. Every record carries a face
//! code and a 2D face-local position (x along the length, y across the face).

mod contour;

#[cfg(test)]
mod tests;

pub use contour::{Contour, ContourKind, ContourPoint};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ensure_finite, ensure_positive, ValidationError};
use crate::face::{FaceCode, PointMark};

/// Position of a feature in its source file (1-based, in file order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FeatureId(pub u32);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hole depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Depth {
    /// Through the face thickness.
    Through,
    /// Explicit blind depth.
    Blind(f64),
}

impl Depth {
    /// DSTV encodes "through" as an absent or zero depth.
    pub fn from_field(value: Option<f64>) -> Self {
        match value {
            Some(depth) if depth != 0.0 => Depth::Blind(depth),
            _ => Depth::Through,
        }
    }

    /// Resolves to a traversal length for a face of the given thickness.
    pub fn resolve(self, thickness: f64) -> f64 {
        match self {
            Depth::Through => thickness,
            Depth::Blind(depth) => depth,
        }
    }

    fn validate(self) -> Result<(), ValidationError> {
        match self {
            Depth::Through => Ok(()),
            Depth::Blind(depth) => ensure_positive("depth", depth),
        }
    }
}

/// Feature geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeatureKind {
    Hole {
        diameter: f64,
        depth: Depth,
    },
    SlottedHole {
        diameter: f64,
        /// Straight length between the two cap centres.
        elongation: f64,
        /// In-plane rotation in degrees, counter-clockwise from the face x axis.
        angle: f64,
        depth: Depth,
    },
    RectHole {
        width: f64,
        height: f64,
        depth: Depth,
    },
    Contour(Contour),
}

impl FeatureKind {
    /// Short lowercase tag used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureKind::Hole { .. } => "hole",
            FeatureKind::SlottedHole { .. } => "slot",
            FeatureKind::RectHole { .. } => "rect",
            FeatureKind::Contour(contour) => match contour.kind {
                ContourKind::External => "outer-contour",
                ContourKind::Internal => "inner-contour",
            },
        }
    }

    /// Requested depth, `None` for contours which always traverse the face.
    pub fn depth(&self) -> Option<Depth> {
        match self {
            FeatureKind::Hole { depth, .. }
            | FeatureKind::SlottedHole { depth, .. }
            | FeatureKind::RectHole { depth, .. } => Some(*depth),
            FeatureKind::Contour(_) => None,
        }
    }

    /// Footprint extent along the face axes before rotation.
    pub fn footprint(&self) -> (f64, f64) {
        match self {
            FeatureKind::Hole { diameter, .. } => (*diameter, *diameter),
            FeatureKind::SlottedHole {
                diameter,
                elongation,
                ..
            } => (elongation + diameter, *diameter),
            FeatureKind::RectHole { width, height, .. } => (*width, *height),
            FeatureKind::Contour(contour) => {
                let (min, max) = contour.bounds();
                (max.0 - min.0, max.1 - min.1)
            }
        }
    }
}

/// One manufacturing feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub id: FeatureId,
    pub face: FaceCode,
    /// Face-local position along the member length.
    pub x: f64,
    /// Face-local position across the face.
    pub y: f64,
    /// Reference letter following the x field in BO/SI lines.
    pub reference: Option<PointMark>,
    pub kind: FeatureKind,
}

impl FeatureRecord {
    pub fn new(id: FeatureId, face: FaceCode, x: f64, y: f64, kind: FeatureKind) -> Self {
        Self {
            id,
            face,
            x,
            y,
            reference: None,
            kind,
        }
    }

    pub fn hole(id: FeatureId, face: FaceCode, x: f64, y: f64, diameter: f64, depth: Depth) -> Self {
        Self::new(id, face, x, y, FeatureKind::Hole { diameter, depth })
    }

    pub fn slot(
        id: FeatureId,
        face: FaceCode,
        x: f64,
        y: f64,
        diameter: f64,
        elongation: f64,
        angle: f64,
    ) -> Self {
        Self::new(
            id,
            face,
            x,
            y,
            FeatureKind::SlottedHole {
                diameter,
                elongation,
                angle,
                depth: Depth::Through,
            },
        )
    }

    pub fn rect(id: FeatureId, face: FaceCode, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            id,
            face,
            x,
            y,
            FeatureKind::RectHole {
                width,
                height,
                depth: Depth::Through,
            },
        )
    }

    /// Contour record. Its position is the first contour point, the points
    /// themselves stay absolute face coordinates.
    pub fn contour(id: FeatureId, face: FaceCode, contour: Contour) -> Self {
        let (x, y) = contour
            .points
            .first()
            .map(|p| (p.x, p.y))
            .unwrap_or((0.0, 0.0));
        Self::new(id, face, x, y, FeatureKind::Contour(contour))
    }

    /// Checks every invariant of the record.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use nc1_model::{Depth, FaceCode, FeatureId, FeatureRecord, ValidationError};
    ///
    /// let bad = FeatureRecord::hole(FeatureId(2), FaceCode::Top, 10.0, 10.0, -5.0, Depth::Through);
    /// assert_eq!(bad.validate(), Err(ValidationError::non_positive("diameter", -5.0)));
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_finite("x", self.x)?;
        ensure_finite("y", self.y)?;
        match &self.kind {
            FeatureKind::Hole { diameter, depth } => {
                ensure_positive("diameter", *diameter)?;
                depth.validate()
            }
            FeatureKind::SlottedHole {
                diameter,
                elongation,
                angle,
                depth,
            } => {
                ensure_positive("diameter", *diameter)?;
                ensure_finite("elongation", *elongation)?;
                if *elongation < 0.0 {
                    return Err(ValidationError::non_positive("elongation", *elongation));
                }
                ensure_finite("angle", *angle)?;
                depth.validate()
            }
            FeatureKind::RectHole {
                width,
                height,
                depth,
            } => {
                ensure_positive("width", *width)?;
                ensure_positive("height", *height)?;
                depth.validate()
            }
            FeatureKind::Contour(contour) => contour.validate(),
        }
    }
}
