//! Reversible graph reductions.
//!
//! A reduction turns its input graph into a smaller output graph and knows
//! how to lift an ordering of the output back to an ordering of the input.
//! [`ReductionStack`] chains them: entry *i* consumes the output of entry
//! *i - 1*, entry 0 consumes the caller's graph, and orderings are lifted by
//! walking the stack from the top down.
//!
//! Every shipped rule is expressed as a [`Contraction`]: some nodes are
//! eliminated ahead of everything else, the remaining nodes are grouped,
//! and each group becomes one node of the output graph.

pub mod contraction;
pub mod degree2;
pub mod indistinguishable;
pub mod order;
pub mod path_compression;
pub mod simplicial;
pub mod triangle;
pub mod twins;

pub use contraction::{Contraction, ContractionBuilder};
pub use order::{apply_reduction_order, parse_reduction_order};

use crate::config::PartitionConfig;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reduction rules in their fixed enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ReductionType {
    SimplicialNodes = 0,
    IndistinguishableNodes = 1,
    Twins = 2,
    PathCompression = 3,
    Degree2Nodes = 4,
    TriangleContraction = 5,
}

impl ReductionType {
    /// Number of reduction rules; valid indices are `0..COUNT`.
    pub const COUNT: usize = 6;

    pub const ALL: [ReductionType; Self::COUNT] = [
        ReductionType::SimplicialNodes,
        ReductionType::IndistinguishableNodes,
        ReductionType::Twins,
        ReductionType::PathCompression,
        ReductionType::Degree2Nodes,
        ReductionType::TriangleContraction,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ReductionType::SimplicialNodes => "simplicial nodes",
            ReductionType::IndistinguishableNodes => "indistinguishable nodes",
            ReductionType::Twins => "twins",
            ReductionType::PathCompression => "path compression",
            ReductionType::Degree2Nodes => "degree-2 nodes",
            ReductionType::TriangleContraction => "triangle contraction",
        }
    }
}

impl fmt::Display for ReductionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One reversible transformation.
pub trait Reduction: fmt::Debug + Send + Sync {
    fn reduction_type(&self) -> ReductionType;

    /// Output graph of this reduction.
    fn reduced_graph(&self) -> &Graph;

    /// Lift `reduced[v] = rank` over the output graph to a rank vector over
    /// the input graph.
    fn map_ordering(&self, reduced: &[usize]) -> Vec<usize>;
}

/// Construct the reduction of type `ty` over `graph`.
pub fn build_reduction(
    ty: ReductionType,
    graph: &Graph,
    config: &PartitionConfig,
) -> Box<dyn Reduction> {
    let contraction = match ty {
        ReductionType::SimplicialNodes => {
            simplicial::contract(graph, config.max_simplicial_degree)
        }
        ReductionType::IndistinguishableNodes => indistinguishable::contract(graph),
        ReductionType::Twins => twins::contract(graph),
        ReductionType::PathCompression => path_compression::contract(graph),
        ReductionType::Degree2Nodes => degree2::contract(graph),
        ReductionType::TriangleContraction => triangle::contract(graph),
    };
    Box::new(contraction)
}

/// Stack of applied reductions, owned by one call.
#[derive(Debug, Default)]
pub struct ReductionStack {
    stack: Vec<Box<dyn Reduction>>,
}

impl ReductionStack {
    /// Run the configured reductions over `input` until a pass stops
    /// shrinking the graph by more than `convergence_factor`.
    ///
    /// The stack stays empty when reductions are disabled or the order is
    /// empty.
    pub fn apply(config: &PartitionConfig, input: &Graph) -> Self {
        let mut stack = Self::default();
        if config.disable_reductions || config.reduction_order.is_empty() {
            return stack;
        }
        let factor = config.convergence_factor.max(1.0);
        let mut pass = 0usize;
        loop {
            let before = stack.active_graph(input).number_of_nodes();
            for &ty in &config.reduction_order {
                let current = stack.active_graph(input);
                if current.is_empty() {
                    break;
                }
                let nodes = current.number_of_nodes();
                let reduction = build_reduction(ty, current, config);
                log::debug!(
                    "reduction pass {pass}: {ty} {nodes} -> {} nodes",
                    reduction.reduced_graph().number_of_nodes()
                );
                stack.stack.push(reduction);
            }
            let after = stack.active_graph(input).number_of_nodes();
            pass += 1;
            if after == 0 || (before as f64) <= factor * after as f64 {
                break;
            }
        }
        log::debug!(
            "reductions: {} -> {} nodes in {pass} passes ({} steps)",
            input.number_of_nodes(),
            stack.active_graph(input).number_of_nodes(),
            stack.len()
        );
        stack
    }

    pub fn used_reductions(&self) -> bool {
        !self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Types in application order.
    pub fn applied(&self) -> impl Iterator<Item = ReductionType> + '_ {
        self.stack.iter().map(|r| r.reduction_type())
    }

    /// Output of the top entry, or `input` when nothing was applied.
    pub fn active_graph<'a>(&'a self, input: &'a Graph) -> &'a Graph {
        self.stack.last().map_or(input, |r| r.reduced_graph())
    }

    /// Lift an ordering of the active graph to the original graph.
    pub fn map_ordering(&self, ordering: Vec<usize>) -> Vec<usize> {
        self.stack
            .iter()
            .rev()
            .fold(ordering, |current, r| r.map_ordering(&current))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::is_permutation;

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

    #[test]
    fn index_round_trip() {
        for (i, ty) in ReductionType::ALL.iter().enumerate() {
            assert_eq!(ty.index(), i);
            assert_eq!(ReductionType::from_index(i), Some(*ty));
        }
        assert_eq!(ReductionType::from_index(ReductionType::COUNT), None);
    }

    #[test]
    fn disabled_stack_is_identity() {
        let g = grid(3, 3);
        let cfg = PartitionConfig {
            reduction_order: ReductionType::ALL.to_vec(),
            disable_reductions: true,
            ..Default::default()
        };
        let stack = ReductionStack::apply(&cfg, &g);
        assert!(!stack.used_reductions());
        assert!(std::ptr::eq(stack.active_graph(&g), &g));
        let ord: Vec<usize> = (0..9).rev().collect();
        assert_eq!(stack.map_ordering(ord.clone()), ord);
    }

    #[test]
    fn empty_order_leaves_stack_empty() {
        let g = grid(2, 2);
        let stack = ReductionStack::apply(&PartitionConfig::default(), &g);
        assert!(stack.is_empty());
    }

    #[test]
    fn path_collapses_and_expands_to_permutation() {
        let edges: Vec<_> = (0..9).map(|i| (i, i + 1)).collect();
        let g = Graph::from_edges(10, &edges);
        let cfg = PartitionConfig {
            reduction_order: vec![
                ReductionType::PathCompression,
                ReductionType::SimplicialNodes,
            ],
            ..Default::default()
        };
        let stack = ReductionStack::apply(&cfg, &g);
        assert!(stack.used_reductions());
        let active = stack.active_graph(&g);
        assert!(active.number_of_nodes() < 10);
        let ord: Vec<usize> = (0..active.number_of_nodes()).collect();
        let full = stack.map_ordering(ord);
        assert!(is_permutation(&full));
        assert_eq!(full.len(), 10);
    }

    #[test]
    fn all_rules_on_grid_give_permutation() {
        let g = grid(5, 4);
        let cfg = PartitionConfig {
            reduction_order: ReductionType::ALL.to_vec(),
            ..Default::default()
        };
        let stack = ReductionStack::apply(&cfg, &g);
        assert!(stack.used_reductions());
        let n = stack.active_graph(&g).number_of_nodes();
        let ord: Vec<usize> = (0..n).rev().collect();
        let full = stack.map_ordering(ord);
        assert!(is_permutation(&full));
        assert_eq!(full.len(), 20);
    }

    #[test]
    fn stops_when_graph_vanishes() {
        // A clique is entirely simplicial.
        let g = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let cfg = PartitionConfig {
            reduction_order: vec![ReductionType::SimplicialNodes, ReductionType::Twins],
            ..Default::default()
        };
        let stack = ReductionStack::apply(&cfg, &g);
        assert_eq!(stack.len(), 1);
        assert!(stack.active_graph(&g).is_empty());
        assert_eq!(stack.map_ordering(Vec::new()), vec![0, 1, 2, 3]);
    }
}
