//! # NC1 Writer
//!
//! Re-emits a document in the grammar the parser reads: lengths with two
//! decimals, angles and surfaces with three, coordinates right-aligned in
//! fixed columns.
//!
//! ## Example
//!
//! ```rust
//! use nc1_parser::{parse, serialize};
//!
//! let text = "ST\n  1\n  2\n  3\n  4\n  S355\n  1\n  HEA200\n  I\n  3000\n  190\n  200\n  10\n  6.5\nBO\n  o  500  100  22\nEN\n";
//! let first = parse(text).unwrap().document;
//! let again = parse(&serialize(&first)).unwrap().document;
//! assert_eq!(first, again);
//! ```

use config::constants::{ANGLE_DECIMALS, COORDINATE_COLUMN_WIDTH, LENGTH_DECIMALS, LINE_INDENT};
use nc1_model::{
    Block, Contour, Depth, FeatureKind, FeatureRecord, Marking, Nc1Document, PointMark,
};

/// Serializes a document, ending with `EN`.
pub fn serialize(document: &Nc1Document) -> String {
    let mut writer = Writer::default();
    writer.header(document);

    let mut holes: Vec<&FeatureRecord> = Vec::new();
    for feature in &document.features {
        match &feature.kind {
            FeatureKind::Contour(contour) => {
                writer.holes(&holes);
                holes.clear();
                writer.contour(feature, contour);
            }
            _ => holes.push(feature),
        }
    }
    writer.holes(&holes);

    writer.markings(&document.markings);
    for block in &document.retained {
        writer.retained(block);
    }
    writer.raw("EN");
    writer.out
}

#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn raw(&mut self, line: &str) {
        self.out.push_str(line);
        self.out.push('\n');
    }

    fn value(&mut self, value: &str) {
        let text = if value.is_empty() { "-" } else { value };
        self.out.push_str(LINE_INDENT);
        self.raw(text);
    }

    fn header(&mut self, document: &Nc1Document) {
        let header = &document.header;
        let profile = &document.profile;
        self.raw("ST");
        self.value(&header.order);
        self.value(&header.drawing);
        self.value(&header.phase);
        self.value(&header.piece);
        self.value(&header.grade);
        self.value(&header.quantity.to_string());
        self.value(&profile.designation);
        self.value(profile.family.code());
        self.value(&length(profile.length));
        for dim in profile.dimension_lines() {
            self.value(&length(dim));
        }
        self.value(&length(profile.root_radius));
        self.value(&angle(profile.weight_per_length));
        self.value(&angle(profile.painting_surface));
        let cuts = profile.cuts;
        for cut in [cuts.web_start, cuts.web_end, cuts.flange_start, cuts.flange_end] {
            self.value(&angle(cut));
        }
        for text in &header.texts {
            self.value(text);
        }
    }

    fn holes(&mut self, holes: &[&FeatureRecord]) {
        if holes.is_empty() {
            return;
        }
        self.raw("BO");
        for hole in holes {
            let mut line = face_prefix(hole.face.as_char());
            line.push_str(&column(&marked(hole.x, hole.reference)));
            line.push_str(&column(&length(hole.y)));
            match &hole.kind {
                FeatureKind::Hole { diameter, depth } => {
                    line.push_str(&column(&length(*diameter)));
                    line.push_str(&column(&length(depth_field(*depth))));
                }
                FeatureKind::SlottedHole {
                    diameter,
                    elongation,
                    angle: rotation,
                    depth,
                } => {
                    line.push_str(&column(&length(*diameter)));
                    line.push_str(&column(&length(depth_field(*depth))));
                    line.push_str(&column("l"));
                    line.push_str(&column(&length(*elongation)));
                    line.push_str(&column(&angle(*rotation)));
                }
                FeatureKind::RectHole {
                    width,
                    height,
                    depth,
                } => {
                    line.push_str(&column(&length(*width)));
                    line.push_str(&column(&length(depth_field(*depth))));
                    line.push_str(&column("r"));
                    line.push_str(&column(&length(*height)));
                }
                FeatureKind::Contour(_) => continue,
            }
            self.raw(&line);
        }
    }

    fn contour(&mut self, feature: &FeatureRecord, contour: &Contour) {
        self.raw(contour.kind.block_code());
        for (index, point) in contour.points.iter().enumerate() {
            let mut line = if index == 0 {
                face_prefix(feature.face.as_char())
            } else {
                face_prefix(' ')
            };
            line.push_str(&column(&marked(point.x, point.mark)));
            line.push_str(&column(&length(point.y)));
            line.push_str(&column(&length(point.bulge)));
            self.raw(line.trim_end());
        }
    }

    fn markings(&mut self, markings: &[Marking]) {
        if markings.is_empty() {
            return;
        }
        self.raw("SI");
        for marking in markings {
            let mut line = face_prefix(marking.face.as_char());
            line.push_str(&column(&marked(marking.x, marking.reference)));
            line.push_str(&column(&length(marking.y)));
            line.push_str(&column(&angle(marking.angle)));
            line.push_str(&column(&length(marking.height)));
            line.push_str("  ");
            line.push_str(&marking.text);
            self.raw(&line);
        }
    }

    fn retained(&mut self, block: &Block) {
        self.raw(block.code.as_str());
        for line in &block.lines {
            self.raw(&line.text);
        }
    }
}

fn face_prefix(face: char) -> String {
    format!("{LINE_INDENT}{face}")
}

/// Right-aligned column, always separated from the previous one.
fn column(text: &str) -> String {
    format!(" {:>width$}", text, width = COORDINATE_COLUMN_WIDTH - 1)
}

fn length(value: f64) -> String {
    format!("{:.*}", LENGTH_DECIMALS, value)
}

fn angle(value: f64) -> String {
    format!("{:.*}", ANGLE_DECIMALS, value)
}

fn marked(value: f64, mark: Option<PointMark>) -> String {
    match mark {
        Some(mark) => format!("{}{}", length(value), mark.as_char()),
        None => length(value),
    }
}

fn depth_field(depth: Depth) -> f64 {
    match depth {
        Depth::Through => 0.0,
        Depth::Blind(value) => value,
    }
}
