//! # Mesh Data Structure
//!
//! Core triangle mesh shared by base solids, cutters and boolean results.

use std::collections::HashMap;

use config::constants::VERTEX_MERGE_EPSILON;
use glam::{DAffine3, DVec3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh in member coordinates (f64).
///
/// Solids are wound counter-clockwise seen from outside, so the signed
/// volume of a closed solid is positive.
///
/// # Example
///
/// ```rust
/// use nc1_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut facet = Mesh::new();
/// let a = facet.add_vertex(DVec3::ZERO);
/// let b = facet.add_vertex(DVec3::X);
/// let c = facet.add_vertex(DVec3::Y);
/// facet.add_triangle(a, b, c);
/// assert_eq!((facet.vertex_count(), facet.triangle_count()), (3, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    /// Per-vertex normals; cleared whenever vertices change.
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True without triangles, even if loose vertices exist.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends `point` and returns its index.
    pub fn add_vertex(&mut self, point: DVec3) -> u32 {
        self.normals = None;
        self.vertices.push(point);
        (self.vertices.len() - 1) as u32
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Adds a convex planar polygon as a triangle fan.
    pub fn add_polygon(&mut self, indices: &[u32]) {
        for i in 1..indices.len().saturating_sub(1) {
            self.add_triangle(indices[0], indices[i], indices[i + 1]);
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Corner positions of triangle `index`.
    pub fn triangle_points(&self, index: usize) -> [DVec3; 3] {
        self.triangles[index].map(|i| self.vertex(i))
    }

    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Area-weighted vertex normals.
    pub fn compute_normals(&mut self) {
        let mut sums = vec![DVec3::ZERO; self.vertices.len()];
        for (i, tri) in self.triangles.iter().enumerate() {
            let [a, b, c] = self.triangle_points(i);
            let facet = (b - a).cross(c - a);
            for &corner in tri {
                sums[corner as usize] += facet;
            }
        }
        self.normals = Some(sums.into_iter().map(DVec3::normalize_or_zero).collect());
    }

    /// `(min, max)` corners; both zero for a mesh without vertices.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Enclosed volume by the divergence theorem; positive for a closed,
    /// outward-wound solid.
    pub fn signed_volume(&self) -> f64 {
        (0..self.triangles.len())
            .map(|i| {
                let [a, b, c] = self.triangle_points(i);
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Maps every vertex through `affine`. Mirroring transforms flip the
    /// winding back so the solid stays outward-facing.
    pub fn transform(&mut self, affine: &DAffine3) {
        for v in &mut self.vertices {
            *v = affine.transform_point3(*v);
        }
        if let Some(normals) = &mut self.normals {
            let normal_matrix = affine.matrix3.inverse().transpose();
            for n in normals {
                *n = (normal_matrix * *n).normalize_or_zero();
            }
        }
        if affine.matrix3.determinant() < 0.0 {
            for tri in &mut self.triangles {
                tri.swap(1, 2);
            }
        }
    }

    pub fn translate(&mut self, offset: DVec3) {
        self.transform(&DAffine3::from_translation(offset));
    }

    /// Merges vertices closer than [`VERTEX_MERGE_EPSILON`] and drops
    /// triangles that collapse.
    ///
    /// Vertex order follows first appearance, so welding is deterministic.
    pub fn weld(&self) -> Mesh {
        let mut welded = Mesh::with_capacity(self.vertices.len(), self.triangles.len());
        let mut lookup: HashMap<[i64; 3], u32> = HashMap::with_capacity(self.vertices.len());
        let remap: Vec<u32> = self
            .vertices
            .iter()
            .map(|v| {
                *lookup
                    .entry(quantize(*v))
                    .or_insert_with(|| welded.add_vertex(*v))
            })
            .collect();

        for tri in &self.triangles {
            let [a, b, c] = tri.map(|i| remap[i as usize]);
            if a == b || b == c || a == c {
                continue;
            }
            let area = (welded.vertex(b) - welded.vertex(a))
                .cross(welded.vertex(c) - welded.vertex(a))
                .length();
            if area < VERTEX_MERGE_EPSILON {
                continue;
            }
            welded.add_triangle(a, b, c);
        }

        welded
    }

    /// False on out-of-range indices, non-finite coordinates or triangles
    /// with a repeated corner or no area.
    pub fn validate(&self) -> bool {
        let count = self.vertices.len() as u32;
        self.vertices.iter().all(|v| v.is_finite())
            && self.triangles.iter().enumerate().all(|(i, tri)| {
                let [a, b, c] = *tri;
                if a >= count || b >= count || c >= count || a == b || b == c || a == c {
                    return false;
                }
                let [p, q, r] = self.triangle_points(i);
                (q - p).cross(r - p).length() >= VERTEX_MERGE_EPSILON
            })
    }
}

fn quantize(v: DVec3) -> [i64; 3] {
    let scale = 1.0 / VERTEX_MERGE_EPSILON;
    [
        (v.x * scale).round() as i64,
        (v.y * scale).round() as i64,
        (v.z * scale).round() as i64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cuboid;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
        assert_eq!(mesh.signed_volume(), 0.0);
    }

    #[test]
    fn test_bounds_cover_loose_vertices() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(3.0, -7.0, 0.5));
        mesh.add_vertex(DVec3::new(-2.0, 4.0, 9.0));
        assert_eq!(
            mesh.bounding_box(),
            (DVec3::new(-2.0, -7.0, 0.5), DVec3::new(3.0, 4.0, 9.0))
        );
    }

    #[test]
    fn test_box_volume() {
        let mesh = cuboid(DVec3::ZERO, DVec3::new(2.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(mesh.signed_volume(), 24.0, epsilon = 1e-9);
        assert!(mesh.validate());
    }

    #[test]
    fn test_normals_point_outward() {
        let mut mesh = cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
        mesh.compute_normals();
        let centre = DVec3::splat(0.5);
        for (v, n) in mesh.vertices().iter().zip(mesh.normals().unwrap()) {
            assert!(n.dot(*v - centre) > 0.0);
        }
    }

    #[test]
    fn test_adding_vertex_clears_normals() {
        let mut mesh = cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
        mesh.compute_normals();
        mesh.add_vertex(DVec3::splat(5.0));
        assert!(mesh.normals().is_none());
    }

    #[test]
    fn test_mirror_transform_keeps_outward_winding() {
        let mut mesh = cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
        mesh.transform(&DAffine3::from_scale(DVec3::new(-1.0, 1.0, 1.0)));
        assert_relative_eq!(mesh.signed_volume(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_translate_moves_bounds() {
        let mut mesh = cuboid(DVec3::ZERO, DVec3::ONE).unwrap();
        mesh.translate(DVec3::new(10.0, 0.0, -1.0));
        assert_eq!(mesh.bounding_box().0, DVec3::new(10.0, 0.0, -1.0));
    }

    #[test]
    fn test_weld_merges_duplicates_and_drops_slivers() {
        let mut mesh = Mesh::new();
        for p in [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::X, DVec3::Y, DVec3::ONE] {
            mesh.add_vertex(p);
        }
        mesh.add_triangle(0, 1, 2);
        mesh.add_triangle(3, 5, 4);
        mesh.add_triangle(1, 3, 2);

        let welded = mesh.weld();
        assert_eq!(welded.vertex_count(), 4);
        assert_eq!(welded.triangle_count(), 2);
        assert!(welded.validate());
    }

    #[test]
    fn test_validate_rejects_dangling_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }
}
