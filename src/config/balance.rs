//! Block weight bounds.

use super::PartitionConfig;
use crate::graph::{Graph, NodeId, NodeWeight};

/// Weight budget derived from a graph and a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockBounds {
    /// Total balance weight of the graph.
    pub total: NodeWeight,
    /// Maximum balance weight a single block may carry.
    pub upper: NodeWeight,
}

/// Weight a node contributes to its block's balance.
pub fn balance_weight(graph: &Graph, v: NodeId, balance_edges: bool) -> NodeWeight {
    if balance_edges {
        graph.node_weight(v) + graph.weighted_degree(v)
    } else {
        graph.node_weight(v)
    }
}

pub fn balance_weights(graph: &Graph, balance_edges: bool) -> Vec<NodeWeight> {
    (0..graph.number_of_nodes())
        .map(|v| balance_weight(graph, v, balance_edges))
        .collect()
}

/// Compute `floor((1 + imbalance) * ceil(total / k))`, never below the
/// heaviest node, and store it in `config.upper_bound_partition`.
pub fn configure_balance(config: &mut PartitionConfig, graph: &Graph) -> BlockBounds {
    let weights = balance_weights(graph, config.balance_edges);
    let total: NodeWeight = weights.iter().sum();
    let heaviest = weights.iter().copied().max().unwrap_or(0);
    let k = config.k.max(1) as NodeWeight;
    let per_block = (total + k - 1) / k;
    let upper = (((1.0 + config.imbalance.max(0.0)) * per_block as f64).floor() as NodeWeight)
        .max(heaviest)
        .max(per_block);
    config.upper_bound_partition = upper;
    log::debug!("balance: total={total} k={k} upper={upper}");
    BlockBounds { total, upper }
}
