//! Triangles over vertex references

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Edge, VertexId};

/// Unordered triple of vertex references
///
/// Equality is set equality of the three ids under any correspondence, so
/// `(a, b, c)`, `(c, a, b)` and `(b, a, c)` are all the same triangle.
/// It is only used to spot duplicate entries, never for geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Triangle {
    pub a: VertexId,
    pub b: VertexId,
    pub c: VertexId,
}

impl Triangle {
    pub const fn new(a: VertexId, b: VertexId, c: VertexId) -> Self {
        Self { a, b, c }
    }

    /// Corners in construction order
    pub const fn vertices(&self) -> [VertexId; 3] {
        [self.a, self.b, self.c]
    }

    /// Corners sorted by id
    pub fn sorted(&self) -> [VertexId; 3] {
        let mut ids = self.vertices();
        ids.sort_unstable();
        ids
    }

    /// Edges AB, BC, CA
    pub const fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.a, self.b),
            Edge::new(self.b, self.c),
            Edge::new(self.c, self.a),
        ]
    }

    /// Check if `id` is one of the corners
    pub fn contains(&self, id: VertexId) -> bool {
        self.a == id || self.b == id || self.c == id
    }

    /// Check if any corner is in `ids`
    pub fn touches_any(&self, ids: &[VertexId]) -> bool {
        ids.iter().any(|&id| self.contains(id))
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}
