//! Partitioning metrics utilities.
//!
//! Functions for evaluating partition quality: weighted edge cut, block
//! weights and balance. Used by the refinement loop, by the entry points to
//! report the cut, and by tests to check results independently.

use super::error::PartitionError;
use crate::graph::{BlockId, Graph, NodeWeight};

/// Computes the weighted edge cut of a partitioning (O(E)).
///
/// Each undirected edge whose endpoints lie in different blocks
/// contributes its weight once.
///
/// # Panics
/// Panics if `part` is shorter than the node count.
pub fn edge_cut(graph: &Graph, part: &[BlockId]) -> i64 {
    let mut cut = 0;
    for u in 0..graph.number_of_nodes() {
        for (v, w) in graph.edges(u) {
            if u < v && part[u] != part[v] {
                cut += w;
            }
        }
    }
    cut
}

/// Sum of `weights` per block; labels at or above `k` are ignored.
pub fn block_weights(weights: &[NodeWeight], part: &[BlockId], k: usize) -> Vec<NodeWeight> {
    let mut out = vec![0; k];
    for (&w, &b) in weights.iter().zip(part) {
        if let Some(slot) = out.get_mut(b) {
            *slot += w;
        }
    }
    out
}

/// Heaviest block divided by the average block weight; 1.0 is perfect.
pub fn balance(weights: &[NodeWeight], part: &[BlockId], k: usize) -> f64 {
    let blocks = block_weights(weights, part, k);
    let total: NodeWeight = blocks.iter().sum();
    if total == 0 || k == 0 {
        return 1.0;
    }
    let heaviest = blocks.iter().copied().max().unwrap_or(0);
    heaviest as f64 * k as f64 / total as f64
}

/// Check that `part` labels every node with a block below `blocks`.
pub fn check_labels(n: usize, part: &[BlockId], blocks: usize) -> Result<(), PartitionError> {
    if part.len() != n {
        return Err(PartitionError::LabelCount {
            expected: n,
            got: part.len(),
        });
    }
    match part.iter().enumerate().find(|&(_, &b)| b >= blocks) {
        Some((node, &block)) => Err(PartitionError::BlockOutOfRange {
            node,
            block,
            blocks,
        }),
        None => Ok(()),
    }
}
