//! Flat CSR export handed to ordering backends.
//
// Returned in METIS-ready CSR arrays:
//
// * `xadj[i] .. xadj[i+1]`   = neighbour list of node *i*
// * `adjncy`                 = concatenated neighbour nodes
// * `vwgt[i]`                = node weight
// * `adjwgt[e]`              = edge weight
//
// The arrays are sized to the graph they were exported from, which for the
// reduction pipeline is the *active* graph, not the caller's input.

use super::NodeId;

/// CSR arrays of a [`Graph`](super::Graph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    pub xadj: Vec<usize>,
    pub adjncy: Vec<NodeId>,
    pub vwgt: Vec<i64>,
    pub adjwgt: Vec<i64>,
}

impl CsrGraph {
    pub fn number_of_nodes(&self) -> usize {
        self.xadj.len().saturating_sub(1)
    }

    pub fn neighbors(&self, v: NodeId) -> &[NodeId] {
        &self.adjncy[self.xadj[v]..self.xadj[v + 1]]
    }

    pub fn degree(&self, v: NodeId) -> usize {
        self.xadj[v + 1] - self.xadj[v]
    }
}
