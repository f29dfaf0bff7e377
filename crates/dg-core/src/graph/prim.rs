//! Prim's minimum spanning tree
//!
//! Grows the tree from a root vertex, always taking the cheapest edge that
//! reaches a vertex not yet in the tree. Equal weights resolve to the edge
//! that comes first in the input, so the result is reproducible.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::geometry::{Edge, VertexId};

/// An undirected edge with a non-negative weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub edge: Edge,
    pub weight: f64,
}

impl WeightedEdge {
    pub fn new(edge: Edge, weight: f64) -> Self {
        Self { edge, weight }
    }
}

/// Candidate edge on the tree's fringe
#[derive(Debug, Clone, Copy)]
struct FringeEdge {
    weight: f64,
    index: usize,
}

impl Ord for FringeEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for FringeEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FringeEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FringeEdge {}

/// Spanning tree of the component containing `root`, in selection order.
///
/// Vertices unreachable from `root` are left out. A root that touches no
/// edge gives an empty tree.
pub fn minimum_spanning_tree(edges: &[WeightedEdge], root: VertexId) -> Vec<WeightedEdge> {
    let mut incident: HashMap<VertexId, Vec<usize>> = HashMap::new();
    for (index, weighted) in edges.iter().enumerate() {
        incident.entry(weighted.edge.u).or_default().push(index);
        incident.entry(weighted.edge.v).or_default().push(index);
    }

    let mut in_tree = HashSet::from([root]);
    let mut fringe = BinaryHeap::new();
    let mut tree = Vec::new();

    let push_fringe = |vertex: VertexId, fringe: &mut BinaryHeap<FringeEdge>| {
        for &index in incident.get(&vertex).map(Vec::as_slice).unwrap_or_default() {
            fringe.push(FringeEdge {
                weight: edges[index].weight,
                index,
            });
        }
    };
    push_fringe(root, &mut fringe);

    while let Some(FringeEdge { index, .. }) = fringe.pop() {
        let weighted = edges[index];
        let Edge { u, v } = weighted.edge;
        let next = match (in_tree.contains(&u), in_tree.contains(&v)) {
            (true, false) => v,
            (false, true) => u,
            _ => continue,
        };

        in_tree.insert(next);
        tree.push(weighted);
        push_fringe(next, &mut fringe);
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(u: usize, v: usize, weight: f64) -> WeightedEdge {
        WeightedEdge::new(Edge::new(VertexId(u), VertexId(v)), weight)
    }

    fn total(tree: &[WeightedEdge]) -> f64 {
        tree.iter().map(|e| e.weight).sum()
    }

    #[test]
    fn test_square_with_diagonal() {
        let edges = [
            edge(0, 1, 1.0),
            edge(1, 2, 2.0),
            edge(2, 3, 1.0),
            edge(3, 0, 3.0),
            edge(0, 2, 1.5),
        ];
        let tree = minimum_spanning_tree(&edges, VertexId(0));
        assert_eq!(tree.len(), 3);
        assert_eq!(total(&tree), 3.5);
        assert_eq!(tree[0].edge, Edge::new(VertexId(0), VertexId(1)));
        assert_eq!(tree[1].edge, Edge::new(VertexId(0), VertexId(2)));
        assert_eq!(tree[2].edge, Edge::new(VertexId(2), VertexId(3)));
    }

    #[test]
    fn test_equal_weights_take_earliest_edge() {
        let edges = [edge(0, 2, 1.0), edge(0, 1, 1.0), edge(1, 2, 1.0)];
        let tree = minimum_spanning_tree(&edges, VertexId(0));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].edge, Edge::new(VertexId(0), VertexId(2)));
        assert_eq!(tree[1].edge, Edge::new(VertexId(0), VertexId(1)));
    }

    #[test]
    fn test_only_root_component() {
        let edges = [edge(0, 1, 1.0), edge(2, 3, 1.0)];
        let tree = minimum_spanning_tree(&edges, VertexId(3));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].edge, Edge::new(VertexId(2), VertexId(3)));
    }

    #[test]
    fn test_isolated_root() {
        let edges = [edge(0, 1, 1.0)];
        assert!(minimum_spanning_tree(&edges, VertexId(5)).is_empty());
        assert!(minimum_spanning_tree(&[], VertexId(0)).is_empty());
    }
}
