//! # Blocks
//!
//! Two-letter block tags and their raw lines. Blocks without geometric
//! meaning are kept verbatim on the document so they can be re-emitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known DSTV block codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCode {
    /// Piece header.
    ST,
    /// Holes.
    BO,
    /// External contour.
    AK,
    /// Internal contour.
    IK,
    /// Text marking.
    SI,
    /// Powder marking.
    PU,
    /// Punch marking.
    KO,
    /// Saw cut.
    SC,
    /// Tolerance.
    TO,
    /// Camber.
    UE,
    /// Profile.
    PR,
    /// Bending.
    KA,
    /// Information.
    IN,
    /// End of file.
    EN,
}

impl BlockCode {
    pub const ALL: [BlockCode; 14] = [
        BlockCode::ST,
        BlockCode::BO,
        BlockCode::AK,
        BlockCode::IK,
        BlockCode::SI,
        BlockCode::PU,
        BlockCode::KO,
        BlockCode::SC,
        BlockCode::TO,
        BlockCode::UE,
        BlockCode::PR,
        BlockCode::KA,
        BlockCode::IN,
        BlockCode::EN,
    ];

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == tag)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            BlockCode::ST => "ST",
            BlockCode::BO => "BO",
            BlockCode::AK => "AK",
            BlockCode::IK => "IK",
            BlockCode::SI => "SI",
            BlockCode::PU => "PU",
            BlockCode::KO => "KO",
            BlockCode::SC => "SC",
            BlockCode::TO => "TO",
            BlockCode::UE => "UE",
            BlockCode::PR => "PR",
            BlockCode::KA => "KA",
            BlockCode::IN => "IN",
            BlockCode::EN => "EN",
        }
    }

    /// Blocks decoded into typed records.
    pub const fn is_decoded(self) -> bool {
        matches!(
            self,
            BlockCode::ST | BlockCode::BO | BlockCode::AK | BlockCode::IK | BlockCode::SI
        )
    }
}

impl fmt::Display for BlockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw field line with its 1-based source line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLine {
    pub number: usize,
    pub text: String,
}

/// Block tag plus its ordered field lines (comments and blanks removed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub code: BlockCode,
    /// Line number of the tag itself.
    pub line: usize,
    pub lines: Vec<BlockLine>,
}

impl Block {
    pub fn new(code: BlockCode, line: usize) -> Self {
        Self {
            code,
            line,
            lines: Vec::new(),
        }
    }
}
