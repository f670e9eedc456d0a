//! Entry-point for native graph partitioning.
//!
//! The separator and ordering code only depend on [`PartitionBackend`].
//! [`BisectionPartitioner`] is the shipped implementation: recursive
//! bisection for `k` blocks, or a 3-way labelling (block 0, block 1,
//! separator) when `mode_node_separators` is set.

pub mod bisection;
pub mod boundary;
pub mod error;
pub mod metrics;
pub mod seed_select;

pub use self::bisection::{Bisection, BisectionTargets, bisect};
pub use self::boundary::Boundary;
pub use self::error::PartitionError;
pub use self::metrics::*;

use crate::config::{PartitionConfig, PresetParams, balance::balance_weights, configure_balance};
use crate::graph::{BlockId, Graph, NodeId, NodeWeight};
use rand::rngs::SmallRng;

/// Produces one block label per node.
pub trait PartitionBackend {
    /// Label every node of `graph`.
    ///
    /// With `config.mode_node_separators` the labels are 0 and 1 for the two
    /// sides and [`SEPARATOR_BLOCK`](crate::separator::SEPARATOR_BLOCK) for
    /// the separator; otherwise they lie in `0..config.k`.
    fn partition(
        &self,
        config: &PartitionConfig,
        graph: &Graph,
        rng: &mut SmallRng,
    ) -> Result<Vec<BlockId>, PartitionError>;
}

/// Recursive graph-growing bisection with FM refinement.
#[derive(Debug, Default, Clone, Copy)]
pub struct BisectionPartitioner;

impl PartitionBackend for BisectionPartitioner {
    fn partition(
        &self,
        config: &PartitionConfig,
        graph: &Graph,
        rng: &mut SmallRng,
    ) -> Result<Vec<BlockId>, PartitionError> {
        if config.k == 0 {
            return Err(PartitionError::NoParts);
        }
        let n = graph.number_of_nodes();
        if n == 0 {
            return Ok(Vec::new());
        }
        if config.mode_node_separators {
            return Ok(crate::separator::two_way::node_separator_labels(
                config, graph, rng,
            ));
        }
        let weights = balance_weights(graph, config.balance_edges);
        let upper = block_upper_bound(config, graph);
        let ids: Vec<NodeId> = (0..n).collect();
        let mut part = vec![0; n];
        let params = config.preset_params();
        recursive_bisection(
            graph, &weights, &ids, config.k, 0, upper, &params, rng, &mut part,
        );
        log::debug!(
            "partition: n={n} k={} cut={} upper={upper}",
            config.k,
            edge_cut(graph, &part)
        );
        Ok(part)
    }
}

/// `config.upper_bound_partition`, or a bound derived from `graph` when the
/// field still holds its unset value `i64::MAX`.
pub fn block_upper_bound(config: &PartitionConfig, graph: &Graph) -> NodeWeight {
    if config.upper_bound_partition == NodeWeight::MAX {
        configure_balance(&mut config.clone(), graph).upper
    } else {
        config.upper_bound_partition
    }
}

#[allow(clippy::too_many_arguments)]
fn recursive_bisection(
    graph: &Graph,
    weights: &[NodeWeight],
    ids: &[NodeId],
    k: usize,
    first_block: BlockId,
    upper: NodeWeight,
    params: &PresetParams,
    rng: &mut SmallRng,
    part: &mut [BlockId],
) {
    if k <= 1 || graph.is_empty() {
        for &id in ids {
            part[id] = first_block;
        }
        return;
    }
    let k0 = k / 2;
    let k1 = k - k0;
    let total: NodeWeight = weights.iter().sum();
    let targets = BisectionTargets::proportional(total, k0, k1, upper);
    let split = bisect(graph, weights, &targets, params, rng);
    for (side, side_k, side_first) in [(0, k0, first_block), (1, k1, first_block + k0)] {
        let local: Vec<NodeId> = (0..graph.number_of_nodes())
            .filter(|&v| split.part[v] == side)
            .collect();
        let sub = graph.subgraph(&local);
        let sub_weights: Vec<NodeWeight> = local.iter().map(|&v| weights[v]).collect();
        let sub_ids: Vec<NodeId> = local.iter().map(|&v| ids[v]).collect();
        recursive_bisection(
            &sub,
            &sub_weights,
            &sub_ids,
            side_k,
            side_first,
            upper,
            params,
            rng,
            part,
        );
    }
}

#[cfg(test)]
mod tests;
