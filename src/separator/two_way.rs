//! 2-way node separators.
//!
//! A balanced bisection is computed first; the smallest vertex cover of its
//! cut edges becomes the separator, taken from the heavier side where the
//! matching allows. Cleanup passes then hand separator nodes that touch only
//! one side back to that side while the block bound permits it.

use super::SEPARATOR_BLOCK;
use super::vertex_cover::min_vertex_cover;
use crate::config::PartitionConfig;
use crate::config::balance::balance_weights;
use crate::graph::{AdjacencyGraph, BlockId, Graph, NodeWeight};
use crate::partitioning::{BisectionTargets, bisect, block_upper_bound};
use rand::rngs::SmallRng;

/// Label every node 0, 1 or [`SEPARATOR_BLOCK`]; no edge joins block 0 and
/// block 1 in the result.
pub fn node_separator_labels(
    config: &PartitionConfig,
    graph: &Graph,
    rng: &mut SmallRng,
) -> Vec<BlockId> {
    if graph.is_empty() {
        return Vec::new();
    }
    let weights = balance_weights(graph, config.balance_edges);
    let upper = block_upper_bound(config, graph);
    let total: NodeWeight = weights.iter().sum();
    let targets = BisectionTargets::proportional(total, 1, 1, upper);
    let split = bisect(graph, &weights, &targets, &config.preset_params(), rng);

    let mut labels = split.part;
    let left = if split.block_weights[0] >= split.block_weights[1] { 0 } else { 1 };
    let cut: Vec<_> = graph
        .undirected_edges()
        .filter(|&(u, v)| labels[u] != labels[v])
        .map(|(u, v)| if labels[u] == left { (u, v) } else { (v, u) })
        .collect();
    let mut side = [split.block_weights[0], split.block_weights[1]];
    for v in min_vertex_cover(&cut) {
        side[labels[v]] -= weights[v];
        labels[v] = SEPARATOR_BLOCK;
    }
    let moved = release_separator_nodes(
        graph,
        &weights,
        &mut labels,
        &mut side,
        targets.max,
        config.separator_passes,
    );
    log::debug!(
        "node separator: n={} cut_edges={} separator={} released={moved}",
        graph.number_of_nodes(),
        cut.len(),
        labels.iter().filter(|&&b| b == SEPARATOR_BLOCK).count()
    );
    labels
}

/// Move separator nodes adjacent to only one side into that side.
/// Returns the number of nodes moved.
fn release_separator_nodes(
    graph: &Graph,
    weights: &[NodeWeight],
    labels: &mut [BlockId],
    side: &mut [NodeWeight; 2],
    max: [NodeWeight; 2],
    passes: usize,
) -> usize {
    let mut total = 0;
    for _ in 0..passes {
        let mut moved = 0;
        for v in 0..graph.number_of_nodes() {
            if labels[v] != SEPARATOR_BLOCK {
                continue;
            }
            let mut touches = [false, false];
            for &u in graph.neighbors(v) {
                if labels[u] < SEPARATOR_BLOCK {
                    touches[labels[u]] = true;
                }
            }
            let to = match touches {
                [true, true] => continue,
                [true, false] => 0,
                [false, true] => 1,
                [false, false] => usize::from(side[1] < side[0]),
            };
            if side[to] + weights[v] <= max[to] {
                labels[v] = to;
                side[to] += weights[v];
                moved += 1;
            }
        }
        total += moved;
        if moved == 0 {
            break;
        }
    }
    total
}
