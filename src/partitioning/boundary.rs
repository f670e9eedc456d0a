//! Cut edges grouped by block pair.

use super::metrics::block_weights;
use crate::graph::{BlockId, Graph, NodeId, NodeWeight};
use std::collections::BTreeMap;

/// For every pair of adjacent blocks `(a, b)` with `a < b`, the undirected
/// cut edges between them, each stored once as `(node in a, node in b)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boundary {
    pairs: BTreeMap<(BlockId, BlockId), Vec<(NodeId, NodeId)>>,
    block_weights: Vec<NodeWeight>,
}

impl Boundary {
    /// Collect the cut edges of `part`. `weights` are the balance weights
    /// used to decide which side of a pair is heavier.
    pub fn build(graph: &Graph, part: &[BlockId], weights: &[NodeWeight], k: usize) -> Self {
        let mut pairs: BTreeMap<(BlockId, BlockId), Vec<(NodeId, NodeId)>> = BTreeMap::new();
        for u in 0..graph.number_of_nodes() {
            for &v in graph.neighbors(u) {
                if part[u] < part[v] {
                    pairs.entry((part[u], part[v])).or_default().push((u, v));
                }
            }
        }
        for edges in pairs.values_mut() {
            edges.sort_unstable();
            edges.dedup();
        }
        Self {
            pairs,
            block_weights: block_weights(weights, part, k),
        }
    }

    /// Adjacent block pairs in ascending order with their cut edges.
    pub fn pairs(&self) -> impl Iterator<Item = ((BlockId, BlockId), &[(NodeId, NodeId)])> {
        self.pairs.iter().map(|(&p, e)| (p, e.as_slice()))
    }

    pub fn cut_edges(&self, a: BlockId, b: BlockId) -> &[(NodeId, NodeId)] {
        let key = if a < b { (a, b) } else { (b, a) };
        self.pairs.get(&key).map_or(&[][..], Vec::as_slice)
    }

    pub fn block_weight(&self, b: BlockId) -> NodeWeight {
        self.block_weights.get(b).copied().unwrap_or(0)
    }

    pub fn number_of_pairs(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
