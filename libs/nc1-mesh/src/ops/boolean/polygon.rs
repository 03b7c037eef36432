//! # Polygon for BSP Operations
//!
//! Convex planar polygon with splitting support.

use glam::DVec3;

use super::plane::{Classification, Plane};

/// Output buckets of [`Polygon::split`].
#[derive(Debug, Default)]
pub struct SplitParts {
    pub coplanar_front: Vec<Polygon>,
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

/// A convex polygon and the plane that contains it.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon, deriving the plane from the first three vertices.
    ///
    /// Returns `None` for fewer than three vertices or a degenerate start.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding and plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classifies the whole polygon against `plane`.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = false;
        let mut back = false;
        for v in &self.vertices {
            match plane.classify_point(*v) {
                Classification::Front => front = true,
                Classification::Back => back = true,
                _ => {}
            }
        }
        match (front, back) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Splits this polygon by `plane` into the matching buckets of `parts`.
    ///
    /// Coplanar polygons go to `coplanar_front` when they face the same way
    /// as the plane. Split pieces keep the parent plane.
    pub fn split(self, plane: &Plane, parts: &mut SplitParts) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal().dot(plane.normal()) > 0.0 {
                    parts.coplanar_front.push(self);
                } else {
                    parts.coplanar_back.push(self);
                }
            }
            Classification::Front => parts.front.push(self),
            Classification::Back => parts.back.push(self),
            Classification::Spanning => {
                let count = self.vertices.len();
                let mut front = Vec::with_capacity(count + 1);
                let mut back = Vec::with_capacity(count + 1);

                for i in 0..count {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % count];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front.push(vi);
                    }
                    if ti != Classification::Front {
                        back.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let point = vi.lerp(vj, di / (di - dj));
                        front.push(point);
                        back.push(point);
                    }
                }

                if front.len() >= 3 {
                    parts.front.push(Polygon {
                        vertices: front,
                        plane: self.plane,
                    });
                }
                if back.len() >= 3 {
                    parts.back.push(Polygon {
                        vertices: back,
                        plane: self.plane,
                    });
                }
            }
        }
    }
}
