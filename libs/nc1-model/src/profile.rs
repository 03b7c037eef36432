//! # Profile Descriptor
//!
//! Member family, length and cross-section dimensions as read from the ST
//! block. Immutable after parsing; [`crate::lookup`] may produce an enriched
//! copy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ensure_finite, ensure_positive, ValidationError};

// =============================================================================
// PROFILE FAMILY
// =============================================================================

/// Cross-section topology.
///
/// ## Example
///
/// ```rust
/// use nc1_model::ProfileFamily;
///
/// assert_eq!(ProfileFamily::from_code("C"), Some(ProfileFamily::UC));
/// assert_eq!(ProfileFamily::TubeCirc.code(), "RO");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileFamily {
    #[serde(rename = "I_H")]
    IH,
    #[serde(rename = "U_C")]
    UC,
    #[serde(rename = "L_ANGLE")]
    LAngle,
    #[serde(rename = "TUBE_RECT")]
    TubeRect,
    #[serde(rename = "TUBE_CIRC")]
    TubeCirc,
    #[serde(rename = "PLATE")]
    Plate,
}

impl ProfileFamily {
    /// Maps a DSTV profile code to its family.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "I" => Some(Self::IH),
            "U" | "C" => Some(Self::UC),
            "L" => Some(Self::LAngle),
            "M" => Some(Self::TubeRect),
            "RO" => Some(Self::TubeCirc),
            "B" => Some(Self::Plate),
            _ => None,
        }
    }

    /// Canonical DSTV code written by the serializer.
    pub const fn code(self) -> &'static str {
        match self {
            Self::IH => "I",
            Self::UC => "U",
            Self::LAngle => "L",
            Self::TubeRect => "M",
            Self::TubeCirc => "RO",
            Self::Plate => "B",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::IH => "I_H",
            Self::UC => "U_C",
            Self::LAngle => "L_ANGLE",
            Self::TubeRect => "TUBE_RECT",
            Self::TubeCirc => "TUBE_CIRC",
            Self::Plate => "PLATE",
        }
    }
}

impl fmt::Display for ProfileFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// END CUTS
// =============================================================================

/// Saw-cut angles in degrees at both ends of the member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EndCuts {
    pub web_start: f64,
    pub web_end: f64,
    pub flange_start: f64,
    pub flange_end: f64,
}

impl EndCuts {
    /// True when both ends are cut square.
    pub fn is_square(&self) -> bool {
        [self.web_start, self.web_end, self.flange_start, self.flange_end]
            .iter()
            .all(|angle| angle.abs() < config::constants::EPSILON)
    }
}

// =============================================================================
// PROFILE DESCRIPTOR
// =============================================================================

/// Member description.
///
/// Dimensions that do not apply to a family are zero. For plates `height` is
/// the plate width and `width` mirrors the thickness so the envelope stays
/// `Z ∈ [-width/2, width/2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDescriptor {
    pub family: ProfileFamily,
    /// Catalogue designation, e.g. `HEA200`.
    pub designation: String,
    pub length: f64,
    pub height: f64,
    pub width: f64,
    pub flange_thickness: f64,
    pub web_thickness: f64,
    pub wall_thickness: f64,
    pub diameter: f64,
    pub root_radius: f64,
    pub weight_per_length: f64,
    pub painting_surface: f64,
    pub cuts: EndCuts,
}

impl ProfileDescriptor {
    /// Builds a descriptor from the four ST dimension lines.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use nc1_model::{ProfileDescriptor, ProfileFamily};
    ///
    /// let plate = ProfileDescriptor::from_dimension_lines(
    ///     ProfileFamily::Plate, "BL10", 500.0, [200.0, 0.0, 0.0, 10.0]);
    /// assert_eq!(plate.height, 200.0);
    /// assert_eq!(plate.web_thickness, 10.0);
    /// ```
    pub fn from_dimension_lines(
        family: ProfileFamily,
        designation: impl Into<String>,
        length: f64,
        dims: [f64; 4],
    ) -> Self {
        let [d1, d2, d3, d4] = dims;
        let mut profile = Self {
            family,
            designation: designation.into(),
            length,
            height: 0.0,
            width: 0.0,
            flange_thickness: 0.0,
            web_thickness: 0.0,
            wall_thickness: 0.0,
            diameter: 0.0,
            root_radius: 0.0,
            weight_per_length: 0.0,
            painting_surface: 0.0,
            cuts: EndCuts::default(),
        };
        match family {
            ProfileFamily::IH | ProfileFamily::UC | ProfileFamily::LAngle => {
                profile.height = d1;
                profile.width = d2;
                profile.flange_thickness = d3;
                profile.web_thickness = if d4 > 0.0 { d4 } else { d3 };
            }
            ProfileFamily::TubeRect => {
                profile.height = d1;
                profile.width = d2;
                profile.wall_thickness = d3;
                profile.flange_thickness = d3;
                profile.web_thickness = if d4 > 0.0 { d4 } else { d3 };
            }
            ProfileFamily::TubeCirc => {
                profile.diameter = d1;
                profile.height = d1;
                profile.width = d1;
                profile.wall_thickness = d3;
                profile.flange_thickness = d3;
                profile.web_thickness = d3;
            }
            ProfileFamily::Plate => {
                profile.height = d1;
                profile.width = d4;
                profile.web_thickness = d4;
            }
        }
        profile
    }

    /// The four ST dimension lines, inverse of [`Self::from_dimension_lines`].
    pub fn dimension_lines(&self) -> [f64; 4] {
        match self.family {
            ProfileFamily::IH | ProfileFamily::UC | ProfileFamily::LAngle => [
                self.height,
                self.width,
                self.flange_thickness,
                self.web_thickness,
            ],
            ProfileFamily::TubeRect => [
                self.height,
                self.width,
                self.wall_thickness,
                self.web_thickness,
            ],
            ProfileFamily::TubeCirc => [
                self.diameter,
                self.diameter,
                self.wall_thickness,
                self.wall_thickness,
            ],
            ProfileFamily::Plate => [self.height, 0.0, 0.0, self.web_thickness],
        }
    }

    /// Plate thickness (zero for other families).
    pub fn plate_thickness(&self) -> f64 {
        match self.family {
            ProfileFamily::Plate => self.web_thickness,
            _ => 0.0,
        }
    }

    /// Outer radius of a round tube.
    pub fn radius(&self) -> f64 {
        self.diameter * 0.5
    }

    /// Checks the cross-section can be built as a solid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        ensure_positive("length", self.length)?;
        for (field, value) in [
            ("root radius", self.root_radius),
            ("weight per length", self.weight_per_length),
            ("painting surface", self.painting_surface),
            ("web start cut", self.cuts.web_start),
            ("web end cut", self.cuts.web_end),
            ("flange start cut", self.cuts.flange_start),
            ("flange end cut", self.cuts.flange_end),
        ] {
            ensure_finite(field, value)?;
        }
        let family = self.family.name();
        match self.family {
            ProfileFamily::IH | ProfileFamily::UC => {
                ensure_positive("height", self.height)?;
                ensure_positive("width", self.width)?;
                ensure_positive("flange thickness", self.flange_thickness)?;
                ensure_positive("web thickness", self.web_thickness)?;
                if 2.0 * self.flange_thickness >= self.height {
                    return Err(ValidationError::invalid_section(
                        family,
                        "flanges thicker than the section height",
                    ));
                }
                if self.web_thickness >= self.width {
                    return Err(ValidationError::invalid_section(
                        family,
                        "web thicker than the section width",
                    ));
                }
            }
            ProfileFamily::LAngle => {
                ensure_positive("height", self.height)?;
                ensure_positive("width", self.width)?;
                ensure_positive("flange thickness", self.flange_thickness)?;
                ensure_positive("web thickness", self.web_thickness)?;
                if self.web_thickness >= self.width || self.flange_thickness >= self.height {
                    return Err(ValidationError::invalid_section(
                        family,
                        "legs thicker than the section",
                    ));
                }
            }
            ProfileFamily::TubeRect => {
                ensure_positive("height", self.height)?;
                ensure_positive("width", self.width)?;
                ensure_positive("wall thickness", self.wall_thickness)?;
                if 2.0 * self.wall_thickness >= self.height.min(self.width) {
                    return Err(ValidationError::invalid_section(
                        family,
                        "walls leave no hollow",
                    ));
                }
            }
            ProfileFamily::TubeCirc => {
                ensure_positive("diameter", self.diameter)?;
                ensure_positive("wall thickness", self.wall_thickness)?;
                if 2.0 * self.wall_thickness >= self.diameter {
                    return Err(ValidationError::invalid_section(
                        family,
                        "walls leave no hollow",
                    ));
                }
            }
            ProfileFamily::Plate => {
                ensure_positive("plate width", self.height)?;
                ensure_positive("plate thickness", self.web_thickness)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hea200() -> ProfileDescriptor {
        ProfileDescriptor::from_dimension_lines(
            ProfileFamily::IH,
            "HEA200",
            3000.0,
            [190.0, 200.0, 10.0, 6.5],
        )
    }

    #[test]
    fn test_family_codes() {
        assert_eq!(ProfileFamily::from_code("I"), Some(ProfileFamily::IH));
        assert_eq!(ProfileFamily::from_code("U"), Some(ProfileFamily::UC));
        assert_eq!(ProfileFamily::from_code("L"), Some(ProfileFamily::LAngle));
        assert_eq!(ProfileFamily::from_code("M"), Some(ProfileFamily::TubeRect));
        assert_eq!(ProfileFamily::from_code("ro"), Some(ProfileFamily::TubeCirc));
        assert_eq!(ProfileFamily::from_code("B"), Some(ProfileFamily::Plate));
        assert_eq!(ProfileFamily::from_code("Q"), None);
    }

    #[test]
    fn test_dimension_lines_are_inverse() {
        let cases = [
            (ProfileFamily::IH, [190.0, 200.0, 10.0, 6.5]),
            (ProfileFamily::UC, [200.0, 75.0, 11.5, 8.5]),
            (ProfileFamily::LAngle, [100.0, 80.0, 8.0, 8.0]),
            (ProfileFamily::TubeRect, [120.0, 80.0, 5.0, 5.0]),
            (ProfileFamily::TubeCirc, [168.3, 168.3, 6.3, 6.3]),
            (ProfileFamily::Plate, [250.0, 0.0, 0.0, 12.0]),
        ];
        for (family, dims) in cases {
            let profile = ProfileDescriptor::from_dimension_lines(family, "X", 1000.0, dims);
            assert_eq!(profile.dimension_lines(), dims, "{family}");
        }
    }

    #[test]
    fn test_plate_thickness_drives_width() {
        let plate = ProfileDescriptor::from_dimension_lines(
            ProfileFamily::Plate,
            "BL12",
            600.0,
            [250.0, 0.0, 0.0, 12.0],
        );
        assert_eq!(plate.width, 12.0);
        assert_eq!(plate.plate_thickness(), 12.0);
        assert!(plate.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_real_section() {
        assert!(hea200().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_length() {
        let mut profile = hea200();
        profile.length = 0.0;
        assert_eq!(
            profile.validate(),
            Err(ValidationError::non_positive("length", 0.0))
        );
    }

    #[test]
    fn test_validate_rejects_solid_tube() {
        let tube = ProfileDescriptor::from_dimension_lines(
            ProfileFamily::TubeCirc,
            "RO60",
            1000.0,
            [60.0, 60.0, 30.0, 30.0],
        );
        assert!(matches!(
            tube.validate(),
            Err(ValidationError::InvalidSection { .. })
        ));
    }

    #[test]
    fn test_end_cuts_square() {
        let mut cuts = EndCuts::default();
        assert!(cuts.is_square());
        cuts.flange_end = 15.0;
        assert!(!cuts.is_square());
    }
}
