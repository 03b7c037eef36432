//! # Profile Lookup
//!
//! Read-only `designation → dimensions` source injected into the parser.
//! Tables are built explicitly by the caller and dropped with it; nothing
//! here is global.
//!
//! ## Example
//!
//! ```rust
//! use nc1_model::{ProfileDimensions, ProfileFamily, ProfileLookup, ProfileTable};
//!
//! let mut table = ProfileTable::new();
//! table.insert("HEA 200", ProfileDimensions {
//!     family: ProfileFamily::IH,
//!     height: 190.0,
//!     width: 200.0,
//!     flange_thickness: 10.0,
//!     web_thickness: 6.5,
//!     root_radius: 18.0,
//!     weight_per_length: 42.3,
//! });
//! assert!(table.dimensions("hea200").is_some());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::profile::{ProfileDescriptor, ProfileFamily};

/// Catalogue dimensions for one designation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileDimensions {
    pub family: ProfileFamily,
    pub height: f64,
    pub width: f64,
    pub flange_thickness: f64,
    pub web_thickness: f64,
    pub root_radius: f64,
    pub weight_per_length: f64,
}

/// Read-only dimension source.
pub trait ProfileLookup: Send + Sync {
    fn dimensions(&self, designation: &str) -> Option<ProfileDimensions>;
}

/// Lookup that never knows anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl ProfileLookup for NoLookup {
    fn dimensions(&self, _designation: &str) -> Option<ProfileDimensions> {
        None
    }
}

/// In-memory table keyed by normalised designation (upper case, no blanks).
#[derive(Debug, Clone, Default)]
pub struct ProfileTable {
    entries: BTreeMap<String, ProfileDimensions>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, designation: &str, dimensions: ProfileDimensions) {
        self.entries.insert(normalize(designation), dimensions);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(String, ProfileDimensions)> for ProfileTable {
    fn from_iter<I: IntoIterator<Item = (String, ProfileDimensions)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (designation, dims) in iter {
            table.insert(&designation, dims);
        }
        table
    }
}

impl ProfileLookup for ProfileTable {
    fn dimensions(&self, designation: &str) -> Option<ProfileDimensions> {
        self.entries.get(&normalize(designation)).copied()
    }
}

fn normalize(designation: &str) -> String {
    designation
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl ProfileDescriptor {
    /// Copy with zero dimensions filled from `lookup`.
    ///
    /// Values present in the file always win; an entry for a different
    /// family is ignored.
    pub fn enriched(&self, lookup: &dyn ProfileLookup) -> ProfileDescriptor {
        let mut profile = self.clone();
        let Some(dims) = lookup.dimensions(&self.designation) else {
            return profile;
        };
        if dims.family != self.family {
            return profile;
        }
        fill(&mut profile.height, dims.height);
        fill(&mut profile.width, dims.width);
        fill(&mut profile.flange_thickness, dims.flange_thickness);
        fill(&mut profile.web_thickness, dims.web_thickness);
        fill(&mut profile.root_radius, dims.root_radius);
        fill(&mut profile.weight_per_length, dims.weight_per_length);
        if profile.family == ProfileFamily::TubeCirc {
            fill(&mut profile.diameter, dims.height);
        }
        if matches!(profile.family, ProfileFamily::TubeRect | ProfileFamily::TubeCirc) {
            fill(&mut profile.wall_thickness, dims.web_thickness);
        }
        profile
    }
}

fn fill(slot: &mut f64, value: f64) {
    if *slot == 0.0 {
        *slot = value;
    }
}
