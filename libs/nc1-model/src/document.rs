//! # NC1 Document
//!
//! Everything one file describes: header, profile, features in file order,
//! markings and retained raw blocks.

use serde::{Deserialize, Serialize};

use crate::block::Block;
use crate::feature::{FeatureId, FeatureKind, FeatureRecord};
use crate::marking::Marking;
use crate::profile::ProfileDescriptor;

/// Identification lines of the ST block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceHeader {
    pub order: String,
    pub drawing: String,
    pub phase: String,
    pub piece: String,
    pub grade: String,
    pub quantity: u32,
    /// Free-text lines; empty strings are written as `-`.
    pub texts: [String; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nc1Document {
    pub header: PieceHeader,
    pub profile: ProfileDescriptor,
    pub features: Vec<FeatureRecord>,
    pub markings: Vec<Marking>,
    /// Known blocks without typed decoding, in file order.
    pub retained: Vec<Block>,
}

impl Nc1Document {
    pub fn new(header: PieceHeader, profile: ProfileDescriptor) -> Self {
        Self {
            header,
            profile,
            features: Vec::new(),
            markings: Vec::new(),
            retained: Vec::new(),
        }
    }

    pub fn feature(&self, id: FeatureId) -> Option<&FeatureRecord> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Holes, slots and rectangular holes (BO records).
    pub fn holes(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.features
            .iter()
            .filter(|f| !matches!(f.kind, FeatureKind::Contour(_)))
    }

    pub fn contours(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.features
            .iter()
            .filter(|f| matches!(f.kind, FeatureKind::Contour(_)))
    }
}
