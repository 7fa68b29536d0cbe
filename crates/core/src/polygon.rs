//! Simple polygon with even-odd containment.
//!
//! Vertices are stored in insertion order and the outline is implicitly
//! closed: the last vertex connects back to the first. Containment uses
//! ray casting with half-open edge spans, so a horizontal ray through a
//! shared vertex is counted exactly once.

use glam::DVec2;

/// An implicitly closed polygon defined by its ordered vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<DVec2>,
}

impl Polygon {
    /// Creates a polygon from ordered vertices. Never fails; polygons with
    /// fewer than three vertices simply contain nothing.
    pub fn new(vertices: Vec<DVec2>) -> Self {
        Self { vertices }
    }

    /// The ordered vertex list.
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the polygon has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consumes the polygon, returning its vertices.
    pub fn into_vertices(self) -> Vec<DVec2> {
        self.vertices
    }

    /// Even-odd ray-casting containment test.
    ///
    /// Casts a horizontal ray to the right of `p` and counts edge
    /// crossings. Each edge spans the half-open interval
    /// `[min(y), max(y))`, which skips horizontal edges and avoids
    /// double-counting shared vertices. Returns false for polygons with
    /// fewer than three vertices.
    pub fn contains(&self, p: DVec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            let (y_min, y_max) = if a.y < b.y { (a.y, b.y) } else { (b.y, a.y) };
            if p.y < y_min || p.y >= y_max {
                continue;
            }
            let t = (p.y - a.y) / (b.y - a.y);
            let x_crossing = a.x + t * (b.x - a.x);
            if x_crossing > p.x {
                inside = !inside;
            }
        }
        inside
    }
}
