//! Shared bookkeeping for elimination and merge rules.
//!
//! A [`Contraction`] records which input nodes are eliminated ahead of all
//! others and how the remaining nodes are grouped. Each group becomes one
//! node of the output graph, numbered by ascending representative id. The
//! representative is always the first member of its group.

use super::{Reduction, ReductionType};
use crate::graph::{EdgeWeight, Graph, NodeId};
use hashbrown::HashMap;

const UNASSIGNED: usize = usize::MAX;

/// Result of one reduction rule.
#[derive(Debug, Clone)]
pub struct Contraction {
    kind: ReductionType,
    input_nodes: usize,
    eliminated: Vec<NodeId>,
    members: Vec<Vec<NodeId>>,
    reduced: Graph,
}

impl Contraction {
    pub fn kind(&self) -> ReductionType {
        self.kind
    }

    /// Input nodes ranked ahead of every retained node, in rank order.
    pub fn eliminated(&self) -> &[NodeId] {
        &self.eliminated
    }

    /// Input nodes folded into output node `r`, representative first.
    pub fn members(&self, r: NodeId) -> &[NodeId] {
        &self.members[r]
    }

    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }
}

impl Reduction for Contraction {
    fn reduction_type(&self) -> ReductionType {
        self.kind
    }

    fn reduced_graph(&self) -> &Graph {
        &self.reduced
    }

    fn map_ordering(&self, reduced: &[usize]) -> Vec<usize> {
        debug_assert_eq!(reduced.len(), self.members.len());
        let mut sequence = vec![UNASSIGNED; self.members.len()];
        for (r, &rank) in reduced.iter().enumerate() {
            sequence[rank] = r;
        }
        let mut ordering = vec![UNASSIGNED; self.input_nodes];
        let mut next = 0;
        for &v in &self.eliminated {
            ordering[v] = next;
            next += 1;
        }
        for r in sequence {
            for &v in &self.members[r] {
                ordering[v] = next;
                next += 1;
            }
        }
        debug_assert_eq!(next, self.input_nodes);
        ordering
    }
}

/// Incremental construction of a [`Contraction`].
///
/// Rules call [`eliminate`](Self::eliminate), [`merge`](Self::merge) and
/// [`add_fill`](Self::add_fill) in any order; [`finish`](Self::finish)
/// assembles the output graph. Merges and fill edges must only name nodes
/// that are not eliminated.
#[derive(Debug)]
pub struct ContractionBuilder<'g> {
    graph: &'g Graph,
    kind: ReductionType,
    representative: Vec<NodeId>,
    groups: Vec<Vec<NodeId>>,
    removed: Vec<bool>,
    eliminated: Vec<NodeId>,
    fill: Vec<(NodeId, NodeId)>,
}

impl<'g> ContractionBuilder<'g> {
    pub fn new(graph: &'g Graph, kind: ReductionType) -> Self {
        let n = graph.number_of_nodes();
        Self {
            graph,
            kind,
            representative: (0..n).collect(),
            groups: (0..n).map(|v| vec![v]).collect(),
            removed: vec![false; n],
            eliminated: Vec::new(),
            fill: Vec::new(),
        }
    }

    pub fn is_eliminated(&self, v: NodeId) -> bool {
        self.removed[v]
    }

    /// Rank `v` ahead of every retained node.
    pub fn eliminate(&mut self, v: NodeId) {
        debug_assert_eq!(self.representative[v], v, "cannot eliminate a merged node");
        if !self.removed[v] {
            self.removed[v] = true;
            self.eliminated.push(v);
        }
    }

    /// Fold `v`'s group into `rep`'s group, after its current members.
    pub fn merge(&mut self, rep: NodeId, v: NodeId) {
        let (rep, v) = (self.representative[rep], self.representative[v]);
        if rep == v {
            return;
        }
        debug_assert!(!self.removed[rep] && !self.removed[v]);
        let moved = std::mem::take(&mut self.groups[v]);
        for &m in &moved {
            self.representative[m] = rep;
        }
        self.groups[rep].extend(moved);
    }

    /// Request an edge between the groups of `a` and `b` in the output.
    pub fn add_fill(&mut self, a: NodeId, b: NodeId) {
        self.fill.push((a, b));
    }

    pub fn finish(self) -> Contraction {
        let n = self.graph.number_of_nodes();
        let mut group_id = vec![UNASSIGNED; n];
        let mut members = Vec::new();
        for v in 0..n {
            if !self.removed[v] && self.representative[v] == v {
                group_id[v] = members.len();
                members.push(self.groups[v].clone());
            }
        }
        let target = |v: NodeId| -> Option<usize> {
            (!self.removed[v]).then(|| group_id[self.representative[v]])
        };

        let mut adjacency: Vec<HashMap<usize, EdgeWeight>> = vec![HashMap::new(); members.len()];
        let mut node_weights = Vec::with_capacity(members.len());
        for (g, group) in members.iter().enumerate() {
            let mut weight = 0;
            for &m in group {
                weight += self.graph.node_weight(m);
                for (t, w) in self.graph.edges(m) {
                    match target(t) {
                        Some(h) if h != g => *adjacency[g].entry(h).or_insert(0) += w,
                        _ => {}
                    }
                }
            }
            node_weights.push(weight);
        }
        for &(a, b) in &self.fill {
            let (Some(ga), Some(gb)) = (target(a), target(b)) else {
                debug_assert!(false, "fill edge touches an eliminated node");
                continue;
            };
            if ga != gb {
                adjacency[ga].entry(gb).or_insert(1);
                adjacency[gb].entry(ga).or_insert(1);
            }
        }

        let adjacency = adjacency
            .into_iter()
            .map(|map| {
                let mut list: Vec<_> = map.into_iter().collect();
                list.sort_unstable();
                list
            })
            .collect();
        let reduced = Graph::from_weighted_adjacency(node_weights, adjacency);
        Contraction {
            kind: self.kind,
            input_nodes: n,
            eliminated: self.eliminated,
            members,
            reduced,
        }
    }
}
