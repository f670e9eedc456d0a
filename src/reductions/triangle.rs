//! Triangle contraction.
//!
//! A degree-3 node whose three neighbours miss at most one of their three
//! possible edges is eliminated, adding the missing edge as fill. Candidates
//! are taken greedily by ascending id as an independent set.

use super::{Contraction, ContractionBuilder, ReductionType};
use crate::graph::{Graph, NodeId};
use itertools::Itertools;

pub fn contract(graph: &Graph) -> Contraction {
    let n = graph.number_of_nodes();
    let mut builder = ContractionBuilder::new(graph, ReductionType::TriangleContraction);
    let mut blocked = vec![false; n];
    for v in 0..n {
        if blocked[v] {
            continue;
        }
        let Some(missing) = missing_pairs(graph, v) else {
            continue;
        };
        if missing.len() > 1 {
            continue;
        }
        builder.eliminate(v);
        for &(a, b) in &missing {
            builder.add_fill(a, b);
        }
        blocked[v] = true;
        for &u in graph.neighbors(v) {
            blocked[u] = true;
        }
    }
    builder.finish()
}

/// Non-adjacent neighbour pairs of a node with exactly three distinct
/// neighbours; `None` for any other node.
fn missing_pairs(graph: &Graph, v: NodeId) -> Option<Vec<(NodeId, NodeId)>> {
    let nbrs = graph.neighbors(v);
    if nbrs.len() != 3 || nbrs.iter().any(|&u| u == v) || !nbrs.iter().all_unique() {
        return None;
    }
    Some(
        nbrs.iter()
            .copied()
            .tuple_combinations()
            .filter(|&(a, b)| !graph.has_edge(a, b))
            .collect(),
    )
}
