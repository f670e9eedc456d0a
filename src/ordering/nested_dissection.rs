//! Reduction-aware nested dissection.
//!
//! The configured reductions shrink the graph first. The active graph is
//! then split recursively by 2-way vertex separators: both sides are
//! ordered before the separator, which is eliminated last. Pieces at or
//! below `dissection_rec_limit` nodes, and pieces no separator can split,
//! are ordered by minimum degree. Finally the ordering is lifted back
//! through the reduction stack.

use super::invert;
use super::min_degree::minimum_degree_sequence;
use crate::config::PartitionConfig;
use crate::graph::{Graph, NodeId};
use crate::graph_error::GraphError;
use crate::partitioning::{BisectionPartitioner, PartitionBackend, check_labels};
use crate::reductions::ReductionStack;
use crate::separator::SEPARATOR_BLOCK;
use rand::rngs::SmallRng;

enum Task {
    Dissect(Vec<NodeId>),
    Emit(Vec<NodeId>),
}

/// Rank vector over `graph` computed by reductions plus nested dissection.
pub fn perform_nested_dissection(
    config: &PartitionConfig,
    graph: &Graph,
    rng: &mut SmallRng,
) -> Result<Vec<usize>, GraphError> {
    let stack = ReductionStack::apply(config, graph);
    let active = stack.active_graph(graph);
    log::debug!(
        "nested dissection: {} nodes, {} after reductions",
        graph.number_of_nodes(),
        active.number_of_nodes()
    );
    let sequence = dissection_sequence(&BisectionPartitioner, config, active, rng)?;
    Ok(stack.map_ordering(invert(&sequence)))
}

/// Nested-dissection elimination sequence of `graph` using `backend` for
/// the separators.
pub fn dissection_sequence<B: PartitionBackend + ?Sized>(
    backend: &B,
    config: &PartitionConfig,
    graph: &Graph,
    rng: &mut SmallRng,
) -> Result<Vec<NodeId>, GraphError> {
    let n = graph.number_of_nodes();
    let mut separator_config = config.clone();
    separator_config.k = 2;
    separator_config.mode_node_separators = true;
    // derived per piece
    separator_config.upper_bound_partition = i64::MAX;
    let limit = config.dissection_rec_limit.max(1);

    let mut sequence = Vec::with_capacity(n);
    let mut tasks = vec![Task::Dissect((0..n).collect())];
    while let Some(task) = tasks.pop() {
        let nodes = match task {
            Task::Emit(nodes) => {
                sequence.extend(nodes);
                continue;
            }
            Task::Dissect(nodes) => nodes,
        };
        if nodes.is_empty() {
            continue;
        }
        let piece = graph.subgraph(&nodes);
        if nodes.len() > limit {
            let labels = backend.partition(&separator_config, &piece, rng)?;
            check_labels(nodes.len(), &labels, SEPARATOR_BLOCK + 1)?;
            let mut sides: [Vec<NodeId>; 3] = Default::default();
            for (&label, &node) in labels.iter().zip(&nodes) {
                sides[label].push(node);
            }
            if sides.iter().all(|s| s.len() < nodes.len()) {
                let [left, right, separator] = sides;
                tasks.push(Task::Emit(separator));
                tasks.push(Task::Dissect(right));
                tasks.push(Task::Dissect(left));
                continue;
            }
            log::debug!("no separator splits a piece of {} nodes", nodes.len());
        }
        sequence.extend(
            minimum_degree_sequence(&piece)
                .into_iter()
                .map(|local| nodes[local]),
        );
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use crate::graph::BlockId;
    use crate::ordering::is_permutation;
    use crate::partitioning::PartitionError;
    use crate::reductions::ReductionType;
    use rand::SeedableRng;

    /// Labels every piece with the same fixed vector.
    struct Fixed(Vec<BlockId>);
    impl PartitionBackend for Fixed {
        fn partition(
            &self,
            _config: &PartitionConfig,
            _graph: &Graph,
            _rng: &mut SmallRng,
        ) -> Result<Vec<BlockId>, PartitionError> {
            Ok(self.0.clone())
        }
    }

    fn grid(w: usize, h: usize) -> Graph {
        let mut edges = Vec::new();
        for y in 0..h {
            for x in 0..w {
                let v = y * w + x;
                if x + 1 < w {
                    edges.push((v, v + 1));
                }
                if y + 1 < h {
                    edges.push((v, v + w));
                }
            }
        }
        Graph::from_edges(w * h, &edges)
    }

    fn nd_config(limit: usize) -> PartitionConfig {
        let mut cfg = PartitionConfig {
            dissection_rec_limit: limit,
            ..Default::default()
        };
        cfg.apply_preset(Preset::EcoSeparator);
        cfg
    }

    #[test]
    fn small_graph_is_a_single_leaf() {
        let g = grid(3, 3);
        let mut rng = SmallRng::seed_from_u64(0);
        let seq = dissection_sequence(&BisectionPartitioner, &nd_config(120), &g, &mut rng).unwrap();
        assert_eq!(seq, minimum_degree_sequence(&g));
    }

    #[test]
    fn path_separator_comes_last() {
        let edges: Vec<_> = (0..6).map(|i| (i, i + 1)).collect();
        let g = Graph::from_edges(7, &edges);
        let mut rng = SmallRng::seed_from_u64(0);
        let seq = dissection_sequence(&BisectionPartitioner, &nd_config(2), &g, &mut rng).unwrap();
        assert!(is_permutation(&seq));
        // the top-level separator of a 7-path is one interior node
        let last = *seq.last().unwrap();
        assert!((1..=5).contains(&last), "last = {last}");
    }

    #[test]
    fn grid_ordering_is_permutation() {
        let g = grid(12, 12);
        let mut rng = SmallRng::seed_from_u64(4);
        let ord = perform_nested_dissection(&nd_config(16), &g, &mut rng).unwrap();
        assert_eq!(ord.len(), 144);
        assert!(is_permutation(&ord));
    }

    #[test]
    fn reductions_are_lifted() {
        let g = grid(10, 6);
        let cfg = PartitionConfig {
            reduction_order: ReductionType::ALL.to_vec(),
            ..nd_config(8)
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let ord = perform_nested_dissection(&cfg, &g, &mut rng).unwrap();
        assert!(is_permutation(&ord));
        assert_eq!(ord.len(), 60);
    }

    #[test]
    fn malformed_separator_labels_are_rejected() {
        let g = grid(3, 2);
        let mut rng = SmallRng::seed_from_u64(0);
        let short = dissection_sequence(&Fixed(vec![0, 1, 2]), &nd_config(2), &g, &mut rng);
        assert_eq!(
            short,
            Err(GraphError::Partition(PartitionError::LabelCount {
                expected: 6,
                got: 3
            }))
        );
        let wide = dissection_sequence(&Fixed(vec![0, 0, 2, 1, 1, 5]), &nd_config(2), &g, &mut rng);
        assert_eq!(
            wide,
            Err(GraphError::Partition(PartitionError::BlockOutOfRange {
                node: 5,
                block: 5,
                blocks: 3
            }))
        );
    }

    #[test]
    fn empty_graph() {
        let mut rng = SmallRng::seed_from_u64(0);
        let ord = perform_nested_dissection(&nd_config(4), &Graph::default(), &mut rng).unwrap();
        assert!(ord.is_empty());
    }
}
