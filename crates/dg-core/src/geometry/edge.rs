//! Undirected edges between vertices

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::VertexId;

/// Unordered pair of vertex references
///
/// `PartialEq` and `Hash` are identity-based and ignore orientation:
/// `Edge::new(a, b) == Edge::new(b, a)`. Position-based near-equality lives
/// in [`super::predicates::edges_almost_equal`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
}

impl Edge {
    pub const fn new(u: VertexId, v: VertexId) -> Self {
        Self { u, v }
    }

    /// Endpoints ordered by id, the canonical key of the edge
    pub fn key(&self) -> (VertexId, VertexId) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }

    /// Same pair of vertices, in either orientation
    pub fn same_endpoints(&self, other: &Edge) -> bool {
        self.key() == other.key()
    }

    /// Check if the edge touches a vertex
    pub fn contains(&self, id: VertexId) -> bool {
        self.u == id || self.v == id
    }

}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.same_endpoints(other)
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
