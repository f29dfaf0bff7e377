//! Empty-circumcircle and structure checks
//!
//! A triangulation is Delaunay when its triangles tile the hull without
//! overlap and no triangle's circumcircle strictly contains another vertex.
//! Points on or within a relative tolerance of the circle (cocircular inputs
//! such as the corners of a square) are accepted.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use super::Triangulation;
use crate::geometry::predicates::orientation;
use crate::geometry::{Circumcircle, Edge, Point2, Triangle, VertexId};

/// Relative slack on the squared radius
const RELATIVE_TOLERANCE: f64 = 1e-9;

/// First fault found in a triangulation
#[derive(Error, Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Violation {
    #[error("vertex {} lies inside the circumcircle of {:?}", .vertex.index(), .triangle.vertices())]
    NotEmpty { triangle: Triangle, vertex: VertexId },

    #[error("triangle {:?} has no area", .0.vertices())]
    Degenerate(Triangle),

    #[error("edge {:?} is shared by {count} triangles", .edge.key())]
    OverlappingEdge { edge: Edge, count: usize },

    #[error("vertex {} is not a corner of any triangle", .0.index())]
    UnusedVertex(VertexId),

    #[error("{found} triangles where a hull of {hull} edges needs {expected}")]
    TriangleCount {
        found: usize,
        expected: usize,
        hull: usize,
    },
}

/// Check that `triangles` tile a region without overlap.
///
/// Every edge must bound at most two triangles, every vertex must be used,
/// no triangle may be flat, and the count must match `2n - h - 2` for `n`
/// vertices and `h` boundary edges. An empty list passes: collinear and
/// tiny inputs legitimately triangulate to nothing.
///
/// Panics if a triangle references a vertex outside `positions`.
pub fn find_structural_fault(triangles: &[Triangle], positions: &[Point2]) -> Option<Violation> {
    if triangles.is_empty() {
        return None;
    }

    for &triangle in triangles {
        let [a, b, c] = triangle.vertices().map(|id| positions[id.index()]);
        if orientation(a, b, c) == 0.0 {
            return Some(Violation::Degenerate(triangle));
        }
    }

    let mut owners: HashMap<Edge, usize> = HashMap::new();
    for edge in triangles.iter().flat_map(Triangle::edges) {
        *owners.entry(edge).or_default() += 1;
    }
    for edge in triangles.iter().flat_map(Triangle::edges) {
        if let Some(&count) = owners.get(&edge)
            && count > 2
        {
            return Some(Violation::OverlappingEdge { edge, count });
        }
    }

    let mut used = vec![false; positions.len()];
    for id in triangles.iter().flat_map(Triangle::vertices) {
        used[id.index()] = true;
    }
    if let Some(unused) = used.iter().position(|&u| !u) {
        return Some(Violation::UnusedVertex(VertexId(unused)));
    }

    let hull = owners.values().filter(|&&count| count == 1).count();
    let expected = (2 * positions.len()).saturating_sub(hull + 2);
    if triangles.len() != expected {
        return Some(Violation::TriangleCount {
            found: triangles.len(),
            expected,
            hull,
        });
    }
    None
}

/// Find the first fault: structure first, then the first triangle, in
/// output order, breaking the empty-circumcircle property.
pub fn find_violation<T>(triangulation: &Triangulation<T>) -> Option<Violation> {
    let positions: Vec<Point2> = triangulation.vertices().iter().map(|v| v.position).collect();
    if let Some(fault) = find_structural_fault(triangulation.triangles(), &positions) {
        return Some(fault);
    }

    for &triangle in triangulation.triangles() {
        let [a, b, c] = triangle.vertices().map(|id| positions[id.index()]);
        let Some(circle) = Circumcircle::checked(a, b, c) else {
            return Some(Violation::Degenerate(triangle));
        };
        let limit = circle.radius_sq * (1.0 - RELATIVE_TOLERANCE);

        for (index, position) in positions.iter().enumerate() {
            let id = VertexId(index);
            if triangle.contains(id) {
                continue;
            }
            if position.distance_sq(circle.center) < limit {
                return Some(Violation::NotEmpty {
                    triangle,
                    vertex: id,
                });
            }
        }
    }
    None
}

/// Check structure and the empty-circumcircle property over the whole
/// triangulation
pub fn is_delaunay<T>(triangulation: &Triangulation<T>) -> bool {
    find_violation(triangulation).is_none()
}
