//! Reverse Cuthill-McKee (RCM) ordering.
//!
//! Each connected component is traversed breadth-first from a
//! pseudo-peripheral root; the children of every node are visited in order
//! of increasing degree. The concatenated Cuthill-McKee sequence is then
//! reversed.

use super::{OrderingBackend, Permutation};
use crate::graph::{AdjacencyGraph, CsrGraph, NodeId};
use crate::graph_error::GraphError;
use crate::partitioning::seed_select::pseudo_peripheral_node;
use std::collections::VecDeque;

/// RCM elimination sequence of `graph`.
pub fn reverse_cuthill_mckee<G: AdjacencyGraph>(graph: &G) -> Vec<NodeId> {
    let n = graph.number_of_nodes();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for start in 0..n {
        if visited[start] {
            continue;
        }
        let root = pseudo_peripheral_node(graph, start);
        visited[root] = true;
        let mut queue = VecDeque::from([root]);
        while let Some(u) = queue.pop_front() {
            order.push(u);
            let mut next: Vec<NodeId> = graph
                .neighbors(u)
                .iter()
                .copied()
                .filter(|&v| !visited[v])
                .collect();
            next.sort_unstable_by_key(|&v| (graph.degree(v), v));
            next.dedup();
            for v in next {
                visited[v] = true;
                queue.push_back(v);
            }
        }
    }
    order.reverse();
    order
}

/// [`OrderingBackend`] wrapper around [`reverse_cuthill_mckee`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseCuthillMcKee;

impl OrderingBackend for ReverseCuthillMcKee {
    fn name(&self) -> &'static str {
        "rcm"
    }

    fn node_nd(&self, graph: &CsrGraph, _seed: u64) -> Result<Permutation, GraphError> {
        Permutation::from_sequence(reverse_cuthill_mckee(graph))
    }
}
