//! Degree-2 elimination.
//!
//! Eliminating a node with neighbours `a` and `b` adds the fill edge
//! `a - b`. The rule picks an independent set of such nodes greedily by
//! ascending id, so the eliminations do not interact and the output is
//! exactly the elimination graph.

use super::{Contraction, ContractionBuilder, ReductionType};
use crate::graph::{Graph, NodeId};

pub fn contract(graph: &Graph) -> Contraction {
    let n = graph.number_of_nodes();
    let mut builder = ContractionBuilder::new(graph, ReductionType::Degree2Nodes);
    let mut blocked = vec![false; n];
    for v in 0..n {
        if blocked[v] {
            continue;
        }
        let Some((a, b)) = two_neighbors(graph, v) else {
            continue;
        };
        builder.eliminate(v);
        builder.add_fill(a, b);
        blocked[v] = true;
        blocked[a] = true;
        blocked[b] = true;
    }
    builder.finish()
}

fn two_neighbors(graph: &Graph, v: NodeId) -> Option<(NodeId, NodeId)> {
    match graph.neighbors(v) {
        &[a, b] if a != b && a != v && b != v => Some((a, b)),
        _ => None,
    }
}
