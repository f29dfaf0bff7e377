//! Bowyer-Watson triangulation engine
//!
//! Builds the Delaunay triangulation of a batch of vertices by inserting them
//! one at a time into a triangulation of a synthetic super-triangle:
//!
//! 1. Seed the triangle list with a super-triangle enclosing every input.
//! 2. For each input vertex: drop every triangle whose circumcircle contains
//!    it, cancel the cavity edges shared by two dropped triangles and fan
//!    the remaining boundary edges to the new vertex.
//! 3. Discard triangles touching a super-triangle vertex.
//! 4. Collect unique edges in first-seen order.
//!
//! Near-cocircular input makes the circumcircle test round differently for
//! neighbouring triangles. The cavity is therefore taken as the connected
//! region around the triangle holding the new vertex, then grown until every
//! boundary edge faces the vertex, so the fan never overlaps. The finished
//! triangles are checked once more for overlap before they are returned.
//!
//! Working vertex ids are the input indices followed by the three synthetic
//! vertices, so every id in the result addresses the caller's input slice.

use std::collections::{HashMap, HashSet};

use super::validation::find_structural_fault;
use crate::error::TriangulationError;
use crate::geometry::predicates::{edges_almost_equal, orientation, points_almost_equal};
use crate::geometry::{Circumcircle, Edge, Point2, Triangle, Vertex, VertexId};

/// Circumradius of the super-triangle, in multiples of twice the larger
/// bounding-box side.
pub const SUPER_TRIANGLE_SCALE: f64 = 1000.0;

/// Result of one triangulation run
#[derive(Debug, Clone)]
pub struct Triangulation<T> {
    vertices: Vec<Vertex<T>>,
    triangles: Vec<Triangle>,
    edges: Vec<Edge>,
}

impl<T> Triangulation<T> {
    /// Input vertices, in input order. `VertexId(i)` is `vertices()[i]`.
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    /// Output triangles, none touching the super-triangle
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Unique undirected edges of the output triangles, in first-seen order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    pub fn position(&self, id: VertexId) -> Option<Point2> {
        self.vertex(id).map(|v| v.position)
    }

    pub fn payload(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).and_then(|v| v.payload.as_ref())
    }

    /// Assemble a triangulation from arbitrary triangles, bypassing the engine
    #[cfg(test)]
    pub(crate) fn from_parts(vertices: Vec<Vertex<T>>, triangles: Vec<Triangle>) -> Self {
        let edges = unique_edges(&triangles);
        Self {
            vertices,
            triangles,
            edges,
        }
    }
}

impl<T> Default for Triangulation<T> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            edges: Vec::new(),
        }
    }
}

/// Triangulate a batch of vertices.
///
/// Fewer than three vertices give an empty triangulation. Coincident inputs
/// are rejected up front; a non-finite circumcircle met during construction
/// fails with [`TriangulationError::DegenerateGeometry`]. Output that would
/// overlap or drop a vertex fails instead of being returned.
pub fn triangulate<T>(vertices: Vec<Vertex<T>>) -> Result<Triangulation<T>, TriangulationError> {
    let positions: Vec<Point2> = vertices.iter().map(|v| v.position).collect();
    let builder = Builder::new(positions)?;
    let (triangles, edges) = builder.run()?;

    log::debug!(
        "triangulated {} vertices: {} triangles, {} edges",
        vertices.len(),
        triangles.len(),
        edges.len()
    );

    Ok(Triangulation {
        vertices,
        triangles,
        edges,
    })
}

/// A triangle with its circumcircle, computed once at creation
#[derive(Debug, Clone, Copy)]
struct CachedTriangle {
    triangle: Triangle,
    circle: Circumcircle,
}

/// Single-use construction state
struct Builder {
    /// Input positions, then the three super-triangle corners
    positions: Vec<Point2>,
    input_count: usize,
    triangles: Vec<CachedTriangle>,
}

impl Builder {
    fn new(mut positions: Vec<Point2>) -> Result<Self, TriangulationError> {
        if positions.is_empty() {
            return Err(TriangulationError::EmptyInput);
        }
        check_coincident(&positions)?;

        let input_count = positions.len();
        positions.extend(super_triangle(&positions[..input_count]));

        let mut builder = Self {
            positions,
            input_count,
            triangles: Vec::new(),
        };
        let seed = Triangle::new(
            VertexId(input_count),
            VertexId(input_count + 1),
            VertexId(input_count + 2),
        );
        let seed = builder.cache(seed)?;
        builder.triangles.push(seed);
        Ok(builder)
    }

    fn position(&self, id: VertexId) -> Point2 {
        self.positions[id.index()]
    }

    fn super_ids(&self) -> [VertexId; 3] {
        let n = self.input_count;
        [VertexId(n), VertexId(n + 1), VertexId(n + 2)]
    }

    fn cache(&self, triangle: Triangle) -> Result<CachedTriangle, TriangulationError> {
        let [a, b, c] = triangle.vertices().map(|id| self.position(id));
        match Circumcircle::checked(a, b, c) {
            Some(circle) => Ok(CachedTriangle { triangle, circle }),
            None => Err(TriangulationError::DegenerateGeometry {
                triangle: triangle.vertices().map(VertexId::index),
            }),
        }
    }

    fn run(mut self) -> Result<(Vec<Triangle>, Vec<Edge>), TriangulationError> {
        for index in 0..self.input_count {
            self.insert(VertexId(index))?;
        }

        let super_ids = self.super_ids();
        let triangles: Vec<Triangle> = self
            .triangles
            .iter()
            .map(|cached| cached.triangle)
            .filter(|t| !t.touches_any(&super_ids))
            .collect();

        if let Some(fault) =
            find_structural_fault(&triangles, &self.positions[..self.input_count])
        {
            log::warn!("triangulation rejected: {fault}");
            return Err(TriangulationError::InvalidStructure(fault));
        }

        let edges = unique_edges(&triangles);
        Ok((triangles, edges))
    }

    fn insert(&mut self, id: VertexId) -> Result<(), TriangulationError> {
        let point = self.position(id);
        let bad = self.cavity(id, point)?;

        let mut polygon: Vec<Edge> = Vec::new();
        let mut kept = Vec::with_capacity(self.triangles.len());
        for (cached, bad) in std::mem::take(&mut self.triangles).into_iter().zip(bad) {
            if bad {
                polygon.extend(cached.triangle.edges());
            } else {
                kept.push(cached);
            }
        }
        self.triangles = kept;

        // Edges shared by two bad triangles are interior to the cavity
        let position = |v: VertexId| self.positions[v.index()];
        let mut shared = vec![false; polygon.len()];
        for i in 0..polygon.len() {
            for j in (i + 1)..polygon.len() {
                if edges_almost_equal(&polygon[i], &polygon[j], position) {
                    shared[i] = true;
                    shared[j] = true;
                }
            }
        }

        for (edge, shared) in polygon.iter().zip(shared) {
            if shared {
                continue;
            }
            let cached = self.cache(Triangle::new(edge.u, edge.v, id))?;
            self.triangles.push(cached);
        }
        Ok(())
    }

    /// Mark the triangles replaced by `point`.
    ///
    /// Starts from the triangle holding the point and floods through
    /// neighbours whose circumcircle contains it, then grows across every
    /// boundary edge the point does not strictly face.
    fn cavity(&self, id: VertexId, point: Point2) -> Result<Vec<bool>, TriangulationError> {
        let invalid = || TriangulationError::InvalidCavity { vertex: id.index() };

        let mut owners: HashMap<Edge, Vec<usize>> = HashMap::new();
        for (index, cached) in self.triangles.iter().enumerate() {
            for edge in cached.triangle.edges() {
                owners.entry(edge).or_default().push(index);
            }
        }
        let across = |edge: &Edge, from: usize| {
            owners
                .get(edge)
                .and_then(|list| list.iter().copied().find(|&index| index != from))
        };

        let start = self
            .triangles
            .iter()
            .position(|cached| self.encloses(cached.triangle, point))
            .ok_or_else(invalid)?;

        let mut bad = vec![false; self.triangles.len()];
        bad[start] = true;
        let mut stack = vec![start];
        while let Some(index) = stack.pop() {
            for edge in self.triangles[index].triangle.edges() {
                if let Some(next) = across(&edge, index)
                    && !bad[next]
                    && self.triangles[next].circle.contains(point)
                {
                    bad[next] = true;
                    stack.push(next);
                }
            }
        }

        loop {
            let mut grown = false;
            for index in 0..bad.len() {
                if !bad[index] {
                    continue;
                }
                let triangle = self.triangles[index].triangle;
                for edge in triangle.edges() {
                    let next = across(&edge, index);
                    if next.is_some_and(|next| bad[next]) || self.faces(triangle, edge, point) {
                        continue;
                    }
                    let next = next.ok_or_else(invalid)?;
                    bad[next] = true;
                    grown = true;
                }
            }
            if !grown {
                return Ok(bad);
            }
        }
    }

    /// Point lies inside or on the boundary of the triangle
    fn encloses(&self, triangle: Triangle, point: Point2) -> bool {
        let [a, b, c] = triangle.vertices().map(|id| self.position(id));
        let sides = [
            orientation(a, b, point),
            orientation(b, c, point),
            orientation(c, a, point),
        ];
        sides.iter().all(|&s| s >= 0.0) || sides.iter().all(|&s| s <= 0.0)
    }

    /// Point lies strictly on the same side of `edge` as the triangle's
    /// third corner
    fn faces(&self, triangle: Triangle, edge: Edge, point: Point2) -> bool {
        let Some(apex) = triangle.vertices().into_iter().find(|&v| !edge.contains(v)) else {
            return false;
        };
        let (u, v) = (self.position(edge.u), self.position(edge.v));
        let inner = orientation(u, v, self.position(apex));
        let side = orientation(u, v, point);
        (inner > 0.0 && side > 0.0) || (inner < 0.0 && side < 0.0)
    }
}

/// Edges AB, BC, CA of every triangle, identity-deduplicated, first seen first
fn unique_edges(triangles: &[Triangle]) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for edge in triangles.iter().flat_map(Triangle::edges) {
        if seen.insert(edge) {
            edges.push(edge);
        }
    }
    edges
}

fn check_coincident(positions: &[Point2]) -> Result<(), TriangulationError> {
    for (first, &p) in positions.iter().enumerate() {
        for (offset, &q) in positions[first + 1..].iter().enumerate() {
            if points_almost_equal(p, q) {
                return Err(TriangulationError::CoincidentVertices {
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }
    Ok(())
}

/// Equilateral triangle centered on the bounding box of `points`.
///
/// Its inscribed circle is far larger than the box, so every point lies
/// strictly inside.
fn super_triangle(points: &[Point2]) -> [Point2; 3] {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }

    let delta = 2.0 * (max_x - min_x).max(max_y - min_y);
    let radius = SUPER_TRIANGLE_SCALE * delta.max(1.0);
    let mid = Point2::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
    let half_base = radius * 3f64.sqrt() / 2.0;

    [
        Point2::new(mid.x - half_base, mid.y - radius / 2.0),
        Point2::new(mid.x + half_base, mid.y - radius / 2.0),
        Point2::new(mid.x, mid.y + radius),
    ]
}
