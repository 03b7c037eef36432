//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations, after the
//! csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Stack Safety
//!
//! Nodes live in a flat arena addressed by index and every traversal uses an
//! explicit work stack, so deep trees never recurse.

use super::plane::Plane;
use super::polygon::{Polygon, SplitParts};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    plane: Option<Plane>,
    polygons: Vec<Polygon>,
    front: Option<usize>,
    back: Option<usize>,
}

/// A BSP tree over convex polygons.
///
/// # Example
///
/// ```rust,ignore
/// let tree = BspTree::new(mesh_to_polygons(&mesh));
/// ```
#[derive(Debug, Clone)]
pub struct BspTree {
    nodes: Vec<Node>,
}

impl BspTree {
    /// Builds a tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut tree = Self {
            nodes: vec![Node::default()],
        };
        tree.build(polygons);
        tree
    }

    /// Inserts polygons into the existing tree.
    ///
    /// The first polygon reaching an empty node supplies its splitting plane.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack = vec![(ROOT, polygons)];

        while let Some((index, polygons)) = stack.pop() {
            let Some(first) = polygons.first() else {
                continue;
            };
            let plane = *self.nodes[index].plane.get_or_insert(*first.plane());

            let mut parts = SplitParts::default();
            for polygon in polygons {
                polygon.split(&plane, &mut parts);
            }

            let node = &mut self.nodes[index];
            node.polygons.append(&mut parts.coplanar_front);
            node.polygons.append(&mut parts.coplanar_back);

            if !parts.front.is_empty() {
                let child = self.child(index, Side::Front);
                stack.push((child, parts.front));
            }
            if !parts.back.is_empty() {
                let child = self.child(index, Side::Back);
                stack.push((child, parts.back));
            }
        }
    }

    /// Flips every polygon and plane, swapping front and back subtrees.
    ///
    /// Turns the solid inside out.
    pub fn invert(&mut self) {
        for node in &mut self.nodes {
            for polygon in &mut node.polygons {
                polygon.flip();
            }
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);
        }
    }

    /// Removes the parts of `polygons` inside the solid this tree bounds.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![(ROOT, polygons)];

        while let Some((index, polygons)) = stack.pop() {
            let node = &self.nodes[index];
            let Some(plane) = node.plane else {
                result.extend(polygons);
                continue;
            };

            let mut parts = SplitParts::default();
            for polygon in polygons {
                polygon.split(&plane, &mut parts);
            }
            let mut front = parts.coplanar_front;
            front.append(&mut parts.front);
            let mut back = parts.coplanar_back;
            back.append(&mut parts.back);

            match node.front {
                Some(child) => stack.push((child, front)),
                None => result.extend(front),
            }
            // Polygons behind a leaf are inside the solid.
            if let Some(child) = node.back {
                stack.push((child, back));
            }
        }

        result
    }

    /// Removes the parts of this tree's polygons inside `other`.
    pub fn clip_to(&mut self, other: &BspTree) {
        for node in &mut self.nodes {
            let polygons = std::mem::take(&mut node.polygons);
            node.polygons = other.clip_polygons(polygons);
        }
    }

    /// Collects all polygons in arena order.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        self.nodes
            .iter()
            .flat_map(|node| node.polygons.iter().cloned())
            .collect()
    }

    /// Returns the number of polygons in the tree.
    pub fn polygon_count(&self) -> usize {
        self.nodes.iter().map(|node| node.polygons.len()).sum()
    }

    fn child(&mut self, index: usize, side: Side) -> usize {
        let existing = match side {
            Side::Front => self.nodes[index].front,
            Side::Back => self.nodes[index].back,
        };
        if let Some(child) = existing {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(Node::default());
        match side {
            Side::Front => self.nodes[index].front = Some(child),
            Side::Back => self.nodes[index].back = Some(child),
        }
        child
    }
}

#[derive(Debug, Clone, Copy)]
enum Side {
    Front,
    Back,
}
