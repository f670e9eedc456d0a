//! Simplicial node elimination.
//!
//! A node whose neighbourhood is a clique can be eliminated without fill.
//! Removing one simplicial node keeps every other simplicial node
//! simplicial, so all qualifying nodes are eliminated in one sweep, in
//! ascending id order.

use super::{Contraction, ContractionBuilder, ReductionType};
use crate::graph::{Graph, NodeId};

/// Eliminate every simplicial node of degree at most `max_degree`.
pub fn contract(graph: &Graph, max_degree: usize) -> Contraction {
    let n = graph.number_of_nodes();
    let mut builder = ContractionBuilder::new(graph, ReductionType::SimplicialNodes);
    let mut scratch = Scratch {
        owner: vec![usize::MAX; n],
        hit: vec![0; n],
        epoch: 0,
    };
    for v in 0..n {
        if graph.degree(v) <= max_degree && is_simplicial(graph, v, &mut scratch) {
            builder.eliminate(v);
        }
    }
    builder.finish()
}

struct Scratch {
    /// `owner[u] == v` marks `u` as a neighbour of the node under test.
    owner: Vec<usize>,
    /// Per-neighbour-scan marks, valid where equal to `epoch`.
    hit: Vec<usize>,
    epoch: usize,
}

/// True when the distinct neighbours of `v` are pairwise adjacent.
/// Repeated adjacency entries count once.
fn is_simplicial(graph: &Graph, v: NodeId, scratch: &mut Scratch) -> bool {
    let mut others = Vec::with_capacity(graph.degree(v));
    for &u in graph.neighbors(v) {
        if u != v && scratch.owner[u] != v {
            scratch.owner[u] = v;
            others.push(u);
        }
    }
    others.iter().all(|&u| {
        scratch.epoch += 1;
        for &w in graph.neighbors(u) {
            scratch.hit[w] = scratch.epoch;
        }
        others
            .iter()
            .all(|&x| x == u || scratch.hit[x] == scratch.epoch)
    })
}
