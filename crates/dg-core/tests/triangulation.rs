//! Triangulation engine behavioral tests
//!
//! Fixed point sets with known Delaunay triangulations, error reporting, and
//! the equality semantics of edges and triangles.

use std::collections::HashSet;

use dg_core::delaunay::{is_delaunay, triangulate};
use dg_core::geometry::predicates::edges_almost_equal;
use dg_core::geometry::{Edge, Point2, Triangle, Vertex, VertexId};
use dg_core::TriangulationError;

fn vertices(points: &[(f64, f64)]) -> Vec<Vertex<usize>> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Vertex::new(Point2::new(x, y), i))
        .collect()
}

fn edge(u: usize, v: usize) -> Edge {
    Edge::new(VertexId(u), VertexId(v))
}

// ============================================================================
// Known layouts
// ============================================================================

#[test]
fn test_unit_square_with_center() {
    let tri = triangulate(vertices(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (0.5, 0.5),
    ]))
    .unwrap();

    assert_eq!(tri.triangles().len(), 4);
    assert_eq!(tri.edges().len(), 8);

    let edges: HashSet<Edge> = tri.edges().iter().copied().collect();
    let expected: HashSet<Edge> = [
        edge(0, 1),
        edge(1, 3),
        edge(3, 2),
        edge(2, 0),
        edge(0, 4),
        edge(1, 4),
        edge(2, 4),
        edge(3, 4),
    ]
    .into_iter()
    .collect();
    assert_eq!(edges, expected);
    assert!(is_delaunay(&tri));
}

#[test]
fn test_three_points() {
    let tri = triangulate(vertices(&[(2.0, 1.0), (8.0, 3.0), (4.0, 7.0)])).unwrap();
    assert_eq!(tri.triangles().len(), 1);
    assert_eq!(
        tri.triangles()[0],
        Triangle::new(VertexId(2), VertexId(0), VertexId(1))
    );

    let edges: HashSet<Edge> = tri.edges().iter().copied().collect();
    assert_eq!(edges.len(), 3);
    assert!(edges.contains(&edge(0, 1)));
    assert!(edges.contains(&edge(1, 2)));
    assert!(edges.contains(&edge(2, 0)));
}

#[test]
fn test_hexagon_with_center() {
    let mut points: Vec<(f64, f64)> = (0..6)
        .map(|k| {
            let angle = f64::from(k) * std::f64::consts::PI / 3.0 + 0.1;
            (10.0 * angle.cos(), 10.0 * angle.sin())
        })
        .collect();
    points.push((0.3, -0.2));

    let tri = triangulate(vertices(&points)).unwrap();
    // n points with h on the hull: 2n - h - 2 triangles, 3n - h - 3 edges
    assert_eq!(tri.triangles().len(), 6);
    assert_eq!(tri.edges().len(), 12);
    assert!(is_delaunay(&tri));
}

#[test]
fn test_edges_follow_triangle_order() {
    let tri = triangulate(vertices(&[
        (0.0, 0.0),
        (6.0, 0.0),
        (3.0, 5.0),
        (9.0, 5.0),
    ]))
    .unwrap();

    // First triangle's edges come first, in AB, BC, CA order
    let first = tri.triangles()[0].edges();
    assert_eq!(&tri.edges()[..3], &first[..]);
}

#[test]
fn test_payloads_preserved() {
    let tri = triangulate(vertices(&[(0.0, 0.0), (5.0, 0.0), (0.0, 5.0), (5.0, 5.0)])).unwrap();
    for (i, v) in tri.vertices().iter().enumerate() {
        assert_eq!(v.payload, Some(i));
    }
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input_is_error() {
    let result = triangulate(Vec::<Vertex<()>>::new());
    assert_eq!(result.unwrap_err(), TriangulationError::EmptyInput);
}

#[test]
fn test_duplicate_point_is_error() {
    let result = triangulate(vertices(&[(1.0, 1.0), (4.0, 2.0), (1.0, 1.0)]));
    assert_eq!(
        result.unwrap_err(),
        TriangulationError::CoincidentVertices {
            first: 0,
            second: 2
        }
    );
}

#[test]
fn test_collinear_points_yield_nothing() {
    let tri = triangulate(vertices(&[(0.0, 0.0), (2.0, 2.0), (4.0, 4.0)])).unwrap();
    assert!(tri.triangles().is_empty());
    assert!(tri.edges().is_empty());
}

// ============================================================================
// Equality semantics
// ============================================================================

#[test]
fn test_identity_and_near_equality_are_distinct() {
    let positions = [Point2::new(0.0, 0.0), Point2::new(3.0, 0.0)];
    // Ids 2 and 3 alias the positions of 0 and 1
    let position = |id: VertexId| positions[id.index() % 2];

    let a = edge(0, 1);
    let b = edge(3, 2);
    assert!(edges_almost_equal(&a, &b, position));
    assert_ne!(a, b);
    assert_eq!(a, edge(1, 0));
}
