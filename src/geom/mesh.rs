//! Triangle mesh and the area-measurement seam used by ETTV surfaces.

use crate::Point;
use crate::Vector;
use crate::geom::IsClose;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type for holding vertex indices for a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriangleIndex(pub usize, pub usize, pub usize);

/// Geometry that can report its own surface area.
///
/// This is the only thing the ETTV core asks of a surface's geometry.
/// Implementations must return a non-negative area and `0.0` for invalid
/// or empty geometry.
pub trait MeasureArea: fmt::Debug {
    /// Surface area in m^2.
    fn area(&self) -> f64;

    /// Outward normal, if the geometry can provide one.
    fn normal(&self) -> Option<Vector> {
        None
    }
}

/// A triangle mesh defined by vertices and face indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point>,
    pub faces: Vec<TriangleIndex>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point>, faces: Vec<TriangleIndex>) -> Self {
        Self { vertices, faces }
    }

    /// Fan-triangulates a planar, convex polygon.
    ///
    /// Points should be ordered counter-clockwise when looking at the
    /// outward-facing side.
    pub fn from_polygon(pts: Vec<Point>) -> Self {
        let faces = (1..pts.len().saturating_sub(1))
            .map(|i| TriangleIndex(0, i, i + 1))
            .collect();
        Self::new(pts, faces)
    }

    /// A mesh is valid if it has at least one face and all face indices
    /// point at existing vertices.
    pub fn is_valid(&self) -> bool {
        let n = self.vertices.len();
        !self.faces.is_empty()
            && self
                .faces
                .iter()
                .all(|&TriangleIndex(a, b, c)| a < n && b < n && c < n)
    }

    /// Sum of the (non-normalized) face cross products.
    ///
    /// Its length is twice the total area of a planar mesh.
    fn cross_sum(&self) -> Vector {
        self.faces
            .iter()
            .map(|&TriangleIndex(a, b, c)| {
                let pa = self.vertices[a];
                let v1 = self.vertices[b] - pa;
                let v2 = self.vertices[c] - pa;
                v1.cross(v2)
            })
            .fold(Vector::zero(), |acc, v| acc + v)
    }
}

impl MeasureArea for Mesh {
    fn area(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        self.faces
            .iter()
            .map(|&TriangleIndex(a, b, c)| {
                let pa = self.vertices[a];
                let v1 = self.vertices[b] - pa;
                let v2 = self.vertices[c] - pa;
                0.5 * v1.cross(v2).length()
            })
            .sum()
    }

    /// Area-weighted unit normal of all faces.
    fn normal(&self) -> Option<Vector> {
        if !self.is_valid() {
            return None;
        }
        let sum = self.cross_sum();
        if sum.length().is_close(0.) {
            return None;
        }
        sum.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn south_facing_rect(width: f64, height: f64) -> Mesh {
        // XZ plane at y=0, counter-clockwise when seen from -Y
        Mesh::from_polygon(vec![
            Point::new(0., 0., 0.),
            Point::new(width, 0., 0.),
            Point::new(width, 0., height),
            Point::new(0., 0., height),
        ])
    }

    #[test]
    fn test_rectangle_area() {
        let mesh = south_facing_rect(2., 5.);
        assert_eq!(mesh.faces.len(), 2);
        assert!((mesh.area() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_rectangle_normal() {
        let mesh = south_facing_rect(2., 5.);
        let vn = mesh.normal().unwrap();
        assert!((vn + Vector::new(0., 1., 0.)).length() < 1e-12);
    }

    #[test]
    fn test_invalid_mesh_has_zero_area() {
        let empty = Mesh::new(vec![], vec![]);
        assert_eq!(empty.area(), 0.0);
        assert!(empty.normal().is_none());

        let dangling = Mesh::new(
            vec![Point::new(0., 0., 0.), Point::new(1., 0., 0.)],
            vec![TriangleIndex(0, 1, 2)],
        );
        assert!(!dangling.is_valid());
        assert_eq!(dangling.area(), 0.0);
    }

    #[test]
    fn test_degenerate_polygon() {
        let mesh = Mesh::from_polygon(vec![Point::new(0., 0., 0.), Point::new(1., 0., 0.)]);
        assert!(mesh.faces.is_empty());
        assert_eq!(mesh.area(), 0.0);
    }
}
