//! Minimum degree ordering.
//!
//! Nodes are eliminated one at a time from the elimination graph, always
//! taking a node of smallest current degree (lowest id on ties). Eliminating
//! a node turns its neighbourhood into a clique.

use super::{OrderingBackend, Permutation};
use crate::graph::{AdjacencyGraph, CsrGraph, NodeId};
use crate::graph_error::GraphError;
use hashbrown::HashSet;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Elimination sequence of `graph` by minimum degree.
pub fn minimum_degree_sequence<G: AdjacencyGraph>(graph: &G) -> Vec<NodeId> {
    let n = graph.number_of_nodes();
    let mut adj: Vec<HashSet<NodeId>> = (0..n)
        .map(|v| graph.neighbors(v).iter().copied().filter(|&u| u != v).collect())
        .collect();
    let mut eliminated = vec![false; n];
    let mut heap: BinaryHeap<Reverse<(usize, NodeId)>> =
        (0..n).map(|v| Reverse((adj[v].len(), v))).collect();
    let mut sequence = Vec::with_capacity(n);

    while let Some(Reverse((degree, v))) = heap.pop() {
        if eliminated[v] || degree != adj[v].len() {
            continue;
        }
        eliminated[v] = true;
        sequence.push(v);
        let nbrs: Vec<NodeId> = std::mem::take(&mut adj[v]).into_iter().collect();
        for &a in &nbrs {
            adj[a].remove(&v);
            for &b in &nbrs {
                if a != b {
                    adj[a].insert(b);
                }
            }
            heap.push(Reverse((adj[a].len(), a)));
        }
    }
    sequence
}

/// [`OrderingBackend`] wrapper around [`minimum_degree_sequence`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimumDegree;

impl OrderingBackend for MinimumDegree {
    fn name(&self) -> &'static str {
        "minimum-degree"
    }

    fn node_nd(&self, graph: &CsrGraph, _seed: u64) -> Result<Permutation, GraphError> {
        Permutation::from_sequence(minimum_degree_sequence(graph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn star_eliminates_leaves_first() {
        let g = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let seq = minimum_degree_sequence(&g);
        assert_eq!(*seq.last().unwrap(), 0);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn path_is_eaten_from_the_ends() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        // 0 (deg 1), then 1 (now deg 1), then 2, then 3
        assert_eq!(minimum_degree_sequence(&g), vec![0, 1, 2, 3]);
    }

    #[test]
    fn backend_returns_valid_permutation() {
        let g = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4)]);
        let p = MinimumDegree.node_nd(&g.to_csr(), 0).unwrap();
        assert_eq!(p.len(), 6);
        assert!(crate::ordering::is_permutation(&p.perm));
        // isolated node 5 has degree 0 and goes first
        assert_eq!(p.perm[0], 5);
    }
}
