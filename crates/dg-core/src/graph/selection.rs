//! Corridor selection
//!
//! Keeps the minimum spanning tree of the triangulation so every room is
//! reachable, then keeps each remaining edge with a fixed probability to
//! add a few loops.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::prim::{WeightedEdge, minimum_spanning_tree};
use crate::geometry::{Edge, Point2, VertexId};
use crate::rng::DungeonRng;

/// Edges chosen for corridors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Spanning tree edges, in selection order
    pub tree: Vec<Edge>,
    /// Retained non-tree edges, in triangulation order
    pub extras: Vec<Edge>,
}

impl Selection {
    /// Tree edges followed by extras
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.tree.iter().chain(self.extras.iter())
    }

    pub fn len(&self) -> usize {
        self.tree.len() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty() && self.extras.is_empty()
    }
}

/// Weight each edge by the Euclidean distance between its endpoints
pub fn weigh_edges<F>(edges: &[Edge], position: F) -> Vec<WeightedEdge>
where
    F: Fn(VertexId) -> Point2,
{
    edges
        .iter()
        .map(|&edge| WeightedEdge::new(edge, position(edge.u).distance(position(edge.v))))
        .collect()
}

/// Path through `count` vertices in index order: 0-1, 1-2, ...
pub fn chain_edges(count: usize) -> Vec<Edge> {
    (1..count)
        .map(|i| Edge::new(VertexId(i - 1), VertexId(i)))
        .collect()
}

/// Select corridor edges from a weighted edge list.
///
/// The tree is rooted at the first edge's first endpoint. Every non-tree
/// edge, in input order, costs exactly one draw from `rng`. An empty input
/// selects nothing and draws nothing.
pub fn select_edges(edges: &[WeightedEdge], rng: &mut DungeonRng, probability: f64) -> Selection {
    let Some(first) = edges.first() else {
        return Selection::default();
    };

    let tree: Vec<Edge> = minimum_spanning_tree(edges, first.edge.u)
        .into_iter()
        .map(|weighted| weighted.edge)
        .collect();
    let in_tree: HashSet<Edge> = tree.iter().copied().collect();

    let mut extras = Vec::new();
    for weighted in edges {
        if in_tree.contains(&weighted.edge) {
            continue;
        }
        if rng.chance(probability) {
            extras.push(weighted.edge);
        }
    }

    log::debug!(
        "selected {} tree edges and {} extras from {} candidates",
        tree.len(),
        extras.len(),
        edges.len()
    );

    Selection { tree, extras }
}
