//! # 2D Outlines
//!
//! Section outlines for cutters: circles, slot capsules, rectangles and
//! contour rings with arc edges. All outlines are counter-clockwise.

use config::constants::{compute_segments_bounded, EPSILON};
use glam::DVec2;
use nc1_model::ContourPoint;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::error::MeshError;

/// Regular polygon inscribed in a circle of `radius`.
pub fn circle(radius: f64, segments: u32) -> Vec<DVec2> {
    (0..segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            DVec2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Slot outline: two semicircular caps whose centres sit `elongation` apart
/// on the X axis, centred on the origin.
///
/// `segments` is the count of a full circle; each cap gets half of it.
pub fn capsule(diameter: f64, elongation: f64, segments: u32) -> Vec<DVec2> {
    let radius = diameter * 0.5;
    if elongation <= EPSILON {
        return circle(radius, segments);
    }

    let half = (segments / 2).max(2);
    let offset = elongation * 0.5;
    let mut points = Vec::with_capacity(2 * half as usize + 2);
    for (centre, start) in [(offset, -FRAC_PI_2), (-offset, FRAC_PI_2)] {
        for i in 0..=half {
            let theta = start + PI * i as f64 / half as f64;
            points.push(DVec2::new(centre + radius * theta.cos(), radius * theta.sin()));
        }
    }
    points
}

/// Axis-aligned rectangle centred on the origin.
pub fn rectangle(width: f64, height: f64) -> Vec<DVec2> {
    let (hw, hh) = (width * 0.5, height * 0.5);
    vec![
        DVec2::new(-hw, -hh),
        DVec2::new(hw, -hh),
        DVec2::new(hw, hh),
        DVec2::new(-hw, hh),
    ]
}

/// Rectangle spanning two corners.
pub fn rectangle_between(min: DVec2, max: DVec2) -> Vec<DVec2> {
    vec![
        min,
        DVec2::new(max.x, min.y),
        max,
        DVec2::new(min.x, max.y),
    ]
}

/// Rotates points counter-clockwise by `degrees` about the origin.
pub fn rotate(points: &mut [DVec2], degrees: f64) {
    if degrees.abs() <= EPSILON {
        return;
    }
    let rotation = DVec2::from_angle(degrees.to_radians());
    for p in points {
        *p = rotation.rotate(*p);
    }
}

/// Contour ring relative to `origin`, with arc edges tessellated.
///
/// `ring` holds distinct corners without the closing point. A point's bulge
/// is the signed radius of the arc to the next point: positive arcs run
/// counter-clockwise (centre left of the chord), negative clockwise, zero is
/// a straight edge. Radii shorter than half the chord are widened to a
/// half circle. Each arc gets its share of the adaptive segment count of its
/// full circle.
pub fn contour(
    ring: &[ContourPoint],
    origin: DVec2,
    min_segments: u32,
    max_segments: u32,
) -> Result<Vec<DVec2>, MeshError> {
    if ring.len() < 3 {
        return Err(MeshError::degenerate(format!(
            "contour needs at least 3 distinct points, got {}",
            ring.len()
        )));
    }

    let mut points = Vec::with_capacity(ring.len());
    for (i, start) in ring.iter().enumerate() {
        let end = &ring[(i + 1) % ring.len()];
        let p = DVec2::new(start.x, start.y) - origin;
        let q = DVec2::new(end.x, end.y) - origin;
        if !p.is_finite() {
            return Err(MeshError::degenerate("contour has a non-finite point"));
        }
        points.push(p);
        if start.bulge.abs() > EPSILON {
            points.extend(arc_interior(p, q, start.bulge, min_segments, max_segments));
        }
    }
    Ok(points)
}

/// Interior points of the arc from `p` to `q` (endpoints excluded).
fn arc_interior(p: DVec2, q: DVec2, bulge: f64, min_segments: u32, max_segments: u32) -> Vec<DVec2> {
    let chord = q - p;
    let length = chord.length();
    if length <= EPSILON {
        return Vec::new();
    }

    let radius = bulge.abs().max(length * 0.5);
    let rise = (radius * radius - length * length * 0.25).max(0.0).sqrt();
    let left = chord.perp() / length;
    let ccw = bulge > 0.0;
    let centre = (p + q) * 0.5 + if ccw { left * rise } else { -left * rise };

    let a0 = angle_of(p - centre);
    let a1 = angle_of(q - centre);
    let sweep = if ccw {
        (a1 - a0).rem_euclid(TAU)
    } else {
        -(a0 - a1).rem_euclid(TAU)
    };

    let full = compute_segments_bounded(2.0 * radius, min_segments, max_segments) as f64;
    let steps = ((full * sweep.abs() / TAU).ceil() as usize).max(2);
    (1..steps)
        .map(|k| {
            let theta = a0 + sweep * k as f64 / steps as f64;
            centre + DVec2::new(theta.cos(), theta.sin()) * radius
        })
        .collect()
}

fn angle_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::triangulate::signed_area2;
    use approx::assert_relative_eq;

    #[test]
    fn test_capsule_extent() {
        let points = capsule(20.0, 40.0, 16);
        let max_x = points.iter().map(|p| p.x).fold(f64::MIN, f64::max);
        let min_x = points.iter().map(|p| p.x).fold(f64::MAX, f64::min);
        assert_relative_eq!(max_x - min_x, 60.0, epsilon = 1e-9);
        assert!(signed_area2(&points) > 0.0);
    }

    #[test]
    fn test_capsule_without_elongation_is_circle() {
        assert_eq!(capsule(10.0, 0.0, 16).len(), 16);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let mut points = vec![DVec2::X];
        rotate(&mut points, 90.0);
        assert!(points[0].abs_diff_eq(DVec2::Y, 1e-12));
    }

    #[test]
    fn test_contour_relative_to_origin() {
        let ring = [
            ContourPoint::new(100.0, 10.0),
            ContourPoint::new(200.0, 10.0),
            ContourPoint::new(200.0, 60.0),
            ContourPoint::new(100.0, 60.0),
        ];
        let points = contour(&ring, DVec2::new(100.0, 10.0), 16, 32).unwrap();
        assert_eq!(points[0], DVec2::ZERO);
        assert_eq!(points[2], DVec2::new(100.0, 50.0));
    }

    #[test]
    fn test_positive_bulge_bows_outward() {
        // Half circle of radius 10 over the top edge of a 20 x 10 box.
        let ring = [
            ContourPoint::new(0.0, 0.0),
            ContourPoint::new(20.0, 0.0),
            ContourPoint::new(20.0, 10.0).with_bulge(10.0),
            ContourPoint::new(0.0, 10.0),
        ];
        let points = contour(&ring, DVec2::ZERO, 16, 32).unwrap();
        assert!(points.len() > 4);
        let top = points.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        assert_relative_eq!(top, 20.0, epsilon = 1e-9);
        for p in &points[3..points.len() - 1] {
            assert_relative_eq!(p.distance(DVec2::new(10.0, 10.0)), 10.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_negative_bulge_bows_inward() {
        let ring = [
            ContourPoint::new(0.0, 0.0),
            ContourPoint::new(20.0, 0.0),
            ContourPoint::new(20.0, 30.0).with_bulge(-10.0),
            ContourPoint::new(0.0, 30.0),
        ];
        let points = contour(&ring, DVec2::ZERO, 16, 32).unwrap();
        let lowest_arc = points[3..points.len() - 1]
            .iter()
            .map(|p| p.y)
            .fold(f64::MAX, f64::min);
        assert!(lowest_arc < 30.0);
        assert_relative_eq!(lowest_arc, 20.0, epsilon = 1e-9);
    }
}
