// Graph trait abstraction shared by seed selection and the ordering backends.
use super::{CsrGraph, Graph, NodeId};

/// Read-only adjacency access over nodes `0..number_of_nodes()`.
///
/// Implemented by the owned [`Graph`] and by the exported [`CsrGraph`], so
/// traversal helpers run unchanged on either side of the backend boundary.
pub trait AdjacencyGraph {
    fn number_of_nodes(&self) -> usize;

    /// Neighbours of `v` in storage order.
    fn neighbors(&self, v: NodeId) -> &[NodeId];

    /// Degree of a vertex (number of neighbors).
    fn degree(&self, v: NodeId) -> usize {
        self.neighbors(v).len()
    }

    /// All undirected edges `(u, v)` with `u < v`.
    fn undirected_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        (0..self.number_of_nodes()).flat_map(move |u| {
            self.neighbors(u)
                .iter()
                .filter(move |&&v| u < v)
                .map(move |&v| (u, v))
        })
    }
}

impl AdjacencyGraph for Graph {
    fn number_of_nodes(&self) -> usize {
        Graph::number_of_nodes(self)
    }
    fn neighbors(&self, v: NodeId) -> &[NodeId] {
        Graph::neighbors(self, v)
    }
}

impl AdjacencyGraph for CsrGraph {
    fn number_of_nodes(&self) -> usize {
        CsrGraph::number_of_nodes(self)
    }
    fn neighbors(&self, v: NodeId) -> &[NodeId] {
        CsrGraph::neighbors(self, v)
    }
}
