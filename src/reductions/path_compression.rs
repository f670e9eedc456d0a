//! Path compression.
//!
//! Every maximal chain of degree-2 nodes collapses into one node whose
//! members are listed in path order, starting at a chain end. A chain that
//! closes on itself (an isolated cycle) starts at its smallest node.

use super::{Contraction, ContractionBuilder, ReductionType};
use crate::graph::{Graph, NodeId};

pub fn contract(graph: &Graph) -> Contraction {
    let n = graph.number_of_nodes();
    let mut builder = ContractionBuilder::new(graph, ReductionType::PathCompression);
    let on_chain: Vec<bool> = (0..n).map(|v| graph.degree(v) == 2).collect();
    let mut visited = vec![false; n];

    // Open chains first, walked from the end with fewer chain neighbours.
    for v in 0..n {
        if !on_chain[v] || visited[v] {
            continue;
        }
        let chain_nbrs = graph.neighbors(v).iter().filter(|&&u| on_chain[u]).count();
        if chain_nbrs < 2 {
            let chain = walk(graph, v, &on_chain, &mut visited);
            merge_chain(&mut builder, &chain);
        }
    }
    // Whatever is left lies on cycles made only of degree-2 nodes.
    for v in 0..n {
        if on_chain[v] && !visited[v] {
            let chain = walk(graph, v, &on_chain, &mut visited);
            merge_chain(&mut builder, &chain);
        }
    }
    builder.finish()
}

fn walk(graph: &Graph, start: NodeId, on_chain: &[bool], visited: &mut [bool]) -> Vec<NodeId> {
    let mut chain = vec![start];
    visited[start] = true;
    let mut current = start;
    while let Some(&next) = graph
        .neighbors(current)
        .iter()
        .find(|&&u| on_chain[u] && !visited[u])
    {
        visited[next] = true;
        chain.push(next);
        current = next;
    }
    chain
}

fn merge_chain(builder: &mut ContractionBuilder<'_>, chain: &[NodeId]) {
    if let Some((&head, rest)) = chain.split_first() {
        for &v in rest {
            builder.merge(head, v);
        }
    }
}
