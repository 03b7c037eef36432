//! # Face Codes
//!
//! Closed enumeration of the DSTV face letters. Which faces exist depends on
//! the profile family; the per-family table lives in the transformer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// DSTV face letter.
///
/// ## Example
///
/// ```rust
/// use nc1_model::FaceCode;
///
/// assert_eq!(FaceCode::from_char('o'), Some(FaceCode::Top));
/// assert_eq!(FaceCode::Front.as_char(), 'v');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FaceCode {
    /// `v`: web / front face.
    Front,
    /// `o`: top flange.
    Top,
    /// `u`: bottom flange.
    Bottom,
    /// `h`: rear face.
    Back,
}

impl FaceCode {
    /// All face codes in DSTV order.
    pub const ALL: [FaceCode; 4] = [
        FaceCode::Front,
        FaceCode::Top,
        FaceCode::Bottom,
        FaceCode::Back,
    ];

    /// Parses a face letter (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'v' => Some(FaceCode::Front),
            'o' => Some(FaceCode::Top),
            'u' => Some(FaceCode::Bottom),
            'h' => Some(FaceCode::Back),
            _ => None,
        }
    }

    /// Parses a one-letter token.
    pub fn from_token(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Lower-case DSTV letter.
    pub const fn as_char(self) -> char {
        match self {
            FaceCode::Front => 'v',
            FaceCode::Top => 'o',
            FaceCode::Bottom => 'u',
            FaceCode::Back => 'h',
        }
    }
}

impl fmt::Display for FaceCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Letter attached to a numeric token.
///
/// Contour points use face marks and the `s` segment mark; hole reference
/// indicators may use any letter, kept verbatim for re-emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointMark {
    Face(FaceCode),
    Segment,
    Letter(char),
}

impl PointMark {
    pub fn from_char(c: char) -> Self {
        match c {
            's' | 'S' => PointMark::Segment,
            other => match FaceCode::from_char(other) {
                Some(face) => PointMark::Face(face),
                None => PointMark::Letter(other),
            },
        }
    }

    pub fn as_char(self) -> char {
        match self {
            PointMark::Face(face) => face.as_char(),
            PointMark::Segment => 's',
            PointMark::Letter(c) => c,
        }
    }

    /// True for the marks contour grammar accepts (`v o u h s`).
    pub fn is_contour_mark(self) -> bool {
        !matches!(self, PointMark::Letter(_))
    }
}
