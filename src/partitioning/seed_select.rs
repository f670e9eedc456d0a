//! Seed selection for graph growing.
//!
//! This module provides [`pick_seed`], which chooses the node a bisection
//! grows its first block from, and the BFS helpers it shares with the
//! Cuthill-McKee ordering.

use crate::config::SeedStrategy;
use crate::graph::{AdjacencyGraph, NodeId};
use rand::Rng;
use rand::rngs::SmallRng;
use std::collections::VecDeque;

/// Upper bound on BFS sweeps while chasing the pseudo-diameter.
const MAX_SWEEPS: usize = 8;

/// Choose a growth seed according to `strategy`.
///
/// # Panics
/// Panics if the graph has no nodes.
pub fn pick_seed<G: AdjacencyGraph>(graph: &G, strategy: SeedStrategy, rng: &mut SmallRng) -> NodeId {
    let n = graph.number_of_nodes();
    assert!(n > 0, "cannot pick a seed in an empty graph");
    let start = rng.gen_range(0..n);
    match strategy {
        SeedStrategy::Random => start,
        SeedStrategy::PseudoPeripheral => pseudo_peripheral_node(graph, start),
    }
}

/// Repeated BFS from `start`: move to a minimum-degree node of the last
/// level until the eccentricity stops growing.
pub fn pseudo_peripheral_node<G: AdjacencyGraph>(graph: &G, start: NodeId) -> NodeId {
    let mut root = start;
    let mut levels = bfs_levels(graph, root);
    for _ in 0..MAX_SWEEPS {
        let Some(last) = levels.last() else {
            break;
        };
        let Some(&candidate) = last.iter().min_by_key(|&&v| (graph.degree(v), v)) else {
            break;
        };
        let next = bfs_levels(graph, candidate);
        if next.len() <= levels.len() {
            break;
        }
        root = candidate;
        levels = next;
    }
    root
}

/// BFS level structure of the component containing `root`.
pub fn bfs_levels<G: AdjacencyGraph>(graph: &G, root: NodeId) -> Vec<Vec<NodeId>> {
    let n = graph.number_of_nodes();
    let mut depth = vec![usize::MAX; n];
    let mut levels: Vec<Vec<NodeId>> = Vec::new();
    let mut queue = VecDeque::new();
    depth[root] = 0;
    queue.push_back(root);
    while let Some(u) = queue.pop_front() {
        let d = depth[u];
        if levels.len() <= d {
            levels.push(Vec::new());
        }
        levels[d].push(u);
        for &v in graph.neighbors(u) {
            if depth[v] == usize::MAX {
                depth[v] = d + 1;
                queue.push_back(v);
            }
        }
    }
    levels
}
