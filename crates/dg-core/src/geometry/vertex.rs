//! Triangulation vertices

use serde::{Deserialize, Serialize};

use super::Point2;

/// Index of a vertex in a triangulation's working vertex list
///
/// Identity of a vertex is its id: two vertices at the same position with
/// different ids are different vertices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct VertexId(pub usize);

impl VertexId {
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A point with an optional opaque payload (e.g. the room it belongs to)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex<T> {
    pub position: Point2,
    pub payload: Option<T>,
}

impl<T> Vertex<T> {
    /// Create a vertex carrying a payload
    pub fn new(position: Point2, payload: T) -> Self {
        Self {
            position,
            payload: Some(payload),
        }
    }

    /// Create a vertex without payload
    pub fn bare(position: Point2) -> Self {
        Self {
            position,
            payload: None,
        }
    }
}
