//! Connectivity selection over triangulation edges
//!
//! - `prim`: minimum spanning tree of a weighted undirected edge list
//! - `selection`: spanning tree plus randomly retained extra edges

mod prim;
mod selection;

pub use prim::{WeightedEdge, minimum_spanning_tree};
pub use selection::{Selection, chain_edges, select_edges, weigh_edges};
