//! Closed polygonal contours (AK/IK).

use config::constants::{CONTOUR_CLOSE_EPSILON, EPSILON};
use robust::{orient2d, Coord};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ValidationError};
use crate::face::PointMark;

/// Minimum stored points: three distinct corners plus the closing point.
pub const MIN_CONTOUR_POINTS: usize = 4;

/// Which side of the polygon is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContourKind {
    /// `AK`: material outside the polygon is removed.
    External,
    /// `IK`: material inside the polygon is removed.
    Internal,
}

impl ContourKind {
    pub const fn block_code(self) -> &'static str {
        match self {
            ContourKind::External => "AK",
            ContourKind::Internal => "IK",
        }
    }
}

/// One contour vertex in face coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContourPoint {
    pub x: f64,
    pub y: f64,
    /// Signed radius of the arc to the next point, 0 for a straight edge.
    /// Positive arcs run counter-clockwise around a centre left of the chord.
    pub bulge: f64,
    pub mark: Option<PointMark>,
}

impl ContourPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            bulge: 0.0,
            mark: None,
        }
    }

    pub const fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }

    fn distance(&self, other: &ContourPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Ordered closed polygon. The first point is repeated at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    pub kind: ContourKind,
    pub points: Vec<ContourPoint>,
}

impl Contour {
    pub fn new(kind: ContourKind, points: Vec<ContourPoint>) -> Self {
        Self { kind, points }
    }

    /// Builds a closed contour from straight-edged `(x, y)` corners.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use nc1_model::{Contour, ContourKind};
    ///
    /// let c = Contour::from_corners(ContourKind::Internal, &[(0.0, 0.0), (50.0, 0.0), (50.0, 30.0)]);
    /// assert!(c.is_closed());
    /// assert_eq!(c.points.len(), 4);
    /// ```
    pub fn from_corners(kind: ContourKind, corners: &[(f64, f64)]) -> Self {
        let mut contour = Self::new(
            kind,
            corners
                .iter()
                .map(|&(x, y)| ContourPoint::new(x, y))
                .collect(),
        );
        contour.close();
        contour
    }

    /// Gap between the first and last point.
    pub fn closing_gap(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first.distance(last),
            _ => 0.0,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.closing_gap() < CONTOUR_CLOSE_EPSILON
    }

    /// Appends the first point when the contour is open. Returns `true` when
    /// a point was added.
    pub fn close(&mut self) -> bool {
        if self.points.len() < 2 || self.is_closed() {
            return false;
        }
        let mut first = self.points[0];
        first.bulge = 0.0;
        self.points.push(first);
        true
    }

    /// Distinct corners without the closing point, consecutive duplicates
    /// dropped. Bulges stay on the point that starts each edge.
    pub fn ring(&self) -> Vec<ContourPoint> {
        let mut ring: Vec<ContourPoint> = Vec::with_capacity(self.points.len());
        for point in &self.points {
            match ring.last() {
                Some(prev) if prev.distance(point) < CONTOUR_CLOSE_EPSILON => {}
                _ => ring.push(*point),
            }
        }
        if ring.len() > 1 {
            if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
                if first.distance(last) < CONTOUR_CLOSE_EPSILON {
                    ring.pop();
                }
            }
        }
        ring
    }

    /// Shoelace area of the chord polygon; positive when counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let ring = self.ring();
        let n = ring.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = ring[i];
                let b = ring[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice * 0.5
    }

    /// Axis-aligned bounds `((min_x, min_y), (max_x, max_y))`.
    pub fn bounds(&self) -> ((f64, f64), (f64, f64)) {
        let mut min = (f64::INFINITY, f64::INFINITY);
        let mut max = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min = (min.0.min(p.x), min.1.min(p.y));
            max = (max.0.max(p.x), max.1.max(p.y));
        }
        if self.points.is_empty() {
            ((0.0, 0.0), (0.0, 0.0))
        } else {
            (min, max)
        }
    }

    /// True when the contour is a straight-edged, axis-aligned rectangle.
    pub fn is_rectangular(&self) -> bool {
        let ring = self.ring();
        if ring.len() != 4 || ring.iter().any(|p| p.bulge.abs() > EPSILON) {
            return false;
        }
        let axis_aligned = (0..4).all(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % 4];
            let horizontal = (a.y - b.y).abs() < CONTOUR_CLOSE_EPSILON;
            let vertical = (a.x - b.x).abs() < CONTOUR_CLOSE_EPSILON;
            horizontal != vertical
        });
        axis_aligned && self.signed_area().abs() > EPSILON
    }

    /// First pair of non-adjacent chord edges that cross or touch.
    pub fn self_intersection(&self) -> Option<(usize, usize)> {
        let ring = self.ring();
        let n = ring.len();
        if n < 4 {
            return None;
        }
        for i in 0..n {
            let a1 = &ring[i];
            let a2 = &ring[(i + 1) % n];
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let b1 = &ring[j];
                let b2 = &ring[(j + 1) % n];
                if segments_intersect(a1, a2, b1, b2) {
                    return Some((i, j));
                }
            }
        }
        None
    }

    /// Checks closure, point count, finiteness, area and simplicity.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.points.len() < MIN_CONTOUR_POINTS {
            return Err(ValidationError::TooFewPoints {
                count: self.points.len(),
                min: MIN_CONTOUR_POINTS,
            });
        }
        for point in &self.points {
            ensure_finite("contour x", point.x)?;
            ensure_finite("contour y", point.y)?;
            ensure_finite("contour bulge", point.bulge)?;
        }
        if !self.is_closed() {
            return Err(ValidationError::OpenContour {
                gap: self.closing_gap(),
            });
        }
        if self.ring().len() < 3 {
            return Err(ValidationError::TooFewPoints {
                count: self.points.len(),
                min: MIN_CONTOUR_POINTS,
            });
        }
        if let Some((first, second)) = self.self_intersection() {
            return Err(ValidationError::SelfIntersecting { first, second });
        }
        if self.signed_area().abs() <= EPSILON {
            return Err(ValidationError::ZeroArea);
        }
        Ok(())
    }
}

fn orient(a: &ContourPoint, b: &ContourPoint, c: &ContourPoint) -> f64 {
    orient2d(
        Coord { x: a.x, y: a.y },
        Coord { x: b.x, y: b.y },
        Coord { x: c.x, y: c.y },
    )
}

fn on_segment(a: &ContourPoint, b: &ContourPoint, p: &ContourPoint) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_intersect(
    a1: &ContourPoint,
    a2: &ContourPoint,
    b1: &ContourPoint,
    b2: &ContourPoint,
) -> bool {
    let d1 = orient(b1, b2, a1);
    let d2 = orient(b1, b2, a2);
    let d3 = orient(a1, a2, b1);
    let d4 = orient(a1, a2, b2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(b1, b2, a1))
        || (d2 == 0.0 && on_segment(b1, b2, a2))
        || (d3 == 0.0 && on_segment(a1, a2, b1))
        || (d4 == 0.0 && on_segment(a1, a2, b2))
}
