//! Geometric data model for the triangulation engine
//!
//! Vertices are owned by the engine and referenced by [`VertexId`]; edges and
//! triangles only hold ids. Two equality notions exist for edges and must
//! not be mixed:
//! - identity: same pair of vertex ids, order-independent (`PartialEq`/`Hash`)
//! - near-equality: endpoint positions within tolerance
//!   ([`predicates::edges_almost_equal`]), used only to cancel shared cavity
//!   edges during construction.

mod edge;
mod point;
pub mod predicates;
mod triangle;
mod vertex;

pub use edge::Edge;
pub use point::Point2;
pub use predicates::Circumcircle;
pub use triangle::Triangle;
pub use vertex::{Vertex, VertexId};
