//! Vertex separators.
//!
//! [`compute_separator`] picks one of two strategies by block count:
//!
//! * `k > 2`: partition into `k` blocks, then cover the cut edges of every
//!   adjacent block pair with a minimum vertex cover
//!   ([`vertex_separator`]).
//! * `k <= 2`: switch the configuration to the given separator preset,
//!   ask the backend for a 3-way labelling and return the nodes
//!   labelled [`SEPARATOR_BLOCK`].

pub mod two_way;
pub mod vertex_cover;

pub use vertex_cover::min_vertex_cover;

use crate::config::balance::balance_weights;
use crate::config::{PartitionConfig, Preset, configure_balance};
use crate::graph::{BlockId, Graph, NodeId};
use crate::graph_error::GraphError;
use crate::partitioning::{Boundary, PartitionBackend, check_labels};
use rand::rngs::SmallRng;

/// Label of separator nodes in a 3-way labelling.
pub const SEPARATOR_BLOCK: BlockId = 2;

/// Nodes whose removal leaves no edge between different blocks.
///
/// Block pairs are processed in ascending order. Each pair contributes a
/// minimum vertex cover of its cut edges not yet covered by an earlier
/// pair, with the heavier block on the matching's left side. Nodes appear
/// in the order they were added.
pub fn vertex_separator(graph: &Graph, boundary: &Boundary) -> Vec<NodeId> {
    let mut chosen = vec![false; graph.number_of_nodes()];
    let mut separator = Vec::new();
    for ((a, b), edges) in boundary.pairs() {
        let a_is_left = boundary.block_weight(a) >= boundary.block_weight(b);
        let open: Vec<(NodeId, NodeId)> = edges
            .iter()
            .filter(|&&(u, v)| !chosen[u] && !chosen[v])
            .map(|&(u, v)| if a_is_left { (u, v) } else { (v, u) })
            .collect();
        for v in min_vertex_cover(&open) {
            chosen[v] = true;
            separator.push(v);
        }
    }
    separator
}

/// Compute a vertex separator of `graph` with the backend.
///
/// For `k <= 2` this rewrites `config`: `separator_preset`,
/// `mode_node_separators`, `k = 2` and a fresh block bound.
pub fn compute_separator<B: PartitionBackend + ?Sized>(
    backend: &B,
    config: &mut PartitionConfig,
    separator_preset: Preset,
    graph: &Graph,
    rng: &mut SmallRng,
) -> Result<Vec<NodeId>, GraphError> {
    let n = graph.number_of_nodes();
    if config.k == 0 {
        return Err(GraphError::InvalidBlockCount(0));
    }
    if n == 0 {
        return Ok(Vec::new());
    }
    if config.k > 2 {
        let part = backend.partition(config, graph, rng)?;
        check_labels(n, &part, config.k)?;
        let weights = balance_weights(graph, config.balance_edges);
        let boundary = Boundary::build(graph, &part, &weights, config.k);
        let separator = vertex_separator(graph, &boundary);
        log::debug!(
            "k-way separator: k={} pairs={} size={}",
            config.k,
            boundary.number_of_pairs(),
            separator.len()
        );
        Ok(separator)
    } else {
        config.apply_preset(separator_preset);
        config.mode_node_separators = true;
        config.k = 2;
        configure_balance(config, graph);
        let labels = backend.partition(config, graph, rng)?;
        check_labels(n, &labels, SEPARATOR_BLOCK + 1)?;
        Ok(labels
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == SEPARATOR_BLOCK)
            .map(|(v, _)| v)
            .collect())
    }
}
