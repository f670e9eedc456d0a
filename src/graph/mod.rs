//! Weighted, undirected graph in compressed adjacency (CSR) form.
//!
//! [`Graph`] is the in-memory representation every other module works on.
//! Node `v` owns the edge slots `xadj[v] .. xadj[v + 1]`; slot `e` stores the
//! target `adjncy[e]` and the weight `edge_weights[e]`. Undirected edges are
//! stored in both directions.
//!
//! Graphs come from three places:
//! - caller arrays, validated through [`Graph::from_input`],
//! - reductions, which assemble their output with the crate-internal
//!   adjacency builder,
//! - METIS text files, see [`io`].

pub mod csr;
pub mod io;
pub mod traits;

pub use csr::CsrGraph;
pub use traits::AdjacencyGraph;

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use hashbrown::HashSet;
use std::ops::Range;

pub type NodeId = usize;
pub type EdgeId = usize;
pub type BlockId = usize;
pub type NodeWeight = i64;
pub type EdgeWeight = i64;

/// Borrowed compressed-adjacency input as handed over by a caller.
///
/// * `xadj[i] .. xadj[i+1]`   = neighbour range of node *i*
/// * `adjncy`                 = concatenated neighbour ids
/// * `vwgt[i]`                = optional node weight, default = 1
/// * `adjwgt[e]`              = optional edge weight, default = 1
#[derive(Debug, Clone, Copy)]
pub struct GraphInput<'a> {
    pub xadj: &'a [usize],
    pub adjncy: &'a [usize],
    pub vwgt: Option<&'a [NodeWeight]>,
    pub adjwgt: Option<&'a [EdgeWeight]>,
}

impl<'a> GraphInput<'a> {
    pub fn new(xadj: &'a [usize], adjncy: &'a [usize]) -> Self {
        Self {
            xadj,
            adjncy,
            vwgt: None,
            adjwgt: None,
        }
    }

    pub fn with_node_weights(mut self, vwgt: &'a [NodeWeight]) -> Self {
        self.vwgt = Some(vwgt);
        self
    }

    pub fn with_edge_weights(mut self, adjwgt: &'a [EdgeWeight]) -> Self {
        self.adjwgt = Some(adjwgt);
        self
    }

    /// Node count implied by the offset array.
    pub fn number_of_nodes(&self) -> usize {
        self.xadj.len().saturating_sub(1)
    }
}

/// Weighted CSR graph.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Graph {
    xadj: Vec<usize>,
    adjncy: Vec<NodeId>,
    node_weights: Vec<NodeWeight>,
    edge_weights: Vec<EdgeWeight>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            xadj: vec![0],
            adjncy: Vec::new(),
            node_weights: Vec::new(),
            edge_weights: Vec::new(),
        }
    }
}

impl Graph {
    /// Build a graph from caller arrays, applying the optional weights.
    ///
    /// # Errors
    /// Returns the first structural problem found: bad offset length or
    /// start, non-monotone offsets, a neighbor count mismatch, out-of-range
    /// targets, weight arrays of the wrong length, or an edge listed in one
    /// direction only.
    pub fn from_input(input: &GraphInput<'_>) -> Result<Self, GraphError> {
        let mut g = Self::from_csr(input.xadj.to_vec(), input.adjncy.to_vec())?;
        if let Some(vwgt) = input.vwgt {
            g.set_node_weights(vwgt)?;
        }
        if let Some(adjwgt) = input.adjwgt {
            g.set_edge_weights(adjwgt)?;
        }
        g.validate_symmetry()?;
        Ok(g)
    }

    /// Build a unit-weight graph from owned CSR vectors.
    pub fn from_csr(xadj: Vec<usize>, adjncy: Vec<NodeId>) -> Result<Self, GraphError> {
        let Some((&first, _)) = xadj.split_first() else {
            return Err(GraphError::OffsetsLength {
                expected: 1,
                got: 0,
            });
        };
        if first != 0 {
            return Err(GraphError::OffsetsStart(first));
        }
        let n = xadj.len() - 1;
        for (node, w) in xadj.windows(2).enumerate() {
            if w[0] > w[1] {
                return Err(GraphError::OffsetsNotMonotone {
                    node,
                    start: w[0],
                    end: w[1],
                });
            }
        }
        if xadj[n] != adjncy.len() {
            return Err(GraphError::NeighborCount {
                offsets_end: xadj[n],
                neighbors: adjncy.len(),
            });
        }
        if let Some((edge, &target)) = adjncy.iter().enumerate().find(|&(_, &t)| t >= n) {
            return Err(GraphError::NeighborOutOfRange {
                edge,
                target,
                nodes: n,
            });
        }
        let m = adjncy.len();
        Ok(Self {
            xadj,
            adjncy,
            node_weights: vec![1; n],
            edge_weights: vec![1; m],
        })
    }

    /// Build a unit-weight graph from an undirected edge list.
    ///
    /// Each pair is stored in both directions; duplicates and self loops are
    /// dropped. Neighbor lists come out sorted.
    pub fn from_edges(n: usize, edges: &[(NodeId, NodeId)]) -> Self {
        let mut adj: Vec<Vec<(NodeId, EdgeWeight)>> = vec![Vec::new(); n];
        for &(u, v) in edges {
            if u == v || u >= n || v >= n {
                continue;
            }
            adj[u].push((v, 1));
            adj[v].push((u, 1));
        }
        for list in &mut adj {
            list.sort_unstable();
            list.dedup_by_key(|&mut (t, _)| t);
        }
        Self::from_weighted_adjacency(vec![1; n], adj)
    }

    /// Assemble a graph from per-node adjacency lists. The caller guarantees
    /// symmetry and in-range targets.
    pub(crate) fn from_weighted_adjacency(
        node_weights: Vec<NodeWeight>,
        adj: Vec<Vec<(NodeId, EdgeWeight)>>,
    ) -> Self {
        debug_assert_eq!(node_weights.len(), adj.len());
        let m: usize = adj.iter().map(Vec::len).sum();
        let mut xadj = Vec::with_capacity(adj.len() + 1);
        let mut adjncy = Vec::with_capacity(m);
        let mut edge_weights = Vec::with_capacity(m);
        xadj.push(0);
        for list in adj {
            for (t, w) in list {
                adjncy.push(t);
                edge_weights.push(w);
            }
            xadj.push(adjncy.len());
        }
        let g = Self {
            xadj,
            adjncy,
            node_weights,
            edge_weights,
        };
        g.debug_assert_invariants();
        g
    }

    pub fn number_of_nodes(&self) -> usize {
        self.xadj.len() - 1
    }

    /// Number of directed edge slots (twice the undirected edge count).
    pub fn number_of_edges(&self) -> usize {
        self.adjncy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }

    #[inline]
    pub fn edge_range(&self, v: NodeId) -> Range<EdgeId> {
        self.xadj[v]..self.xadj[v + 1]
    }

    #[inline]
    pub fn edge_target(&self, e: EdgeId) -> NodeId {
        self.adjncy[e]
    }

    #[inline]
    pub fn edge_weight(&self, e: EdgeId) -> EdgeWeight {
        self.edge_weights[e]
    }

    #[inline]
    pub fn neighbors(&self, v: NodeId) -> &[NodeId] {
        &self.adjncy[self.edge_range(v)]
    }

    /// `(target, weight)` pairs of the edges leaving `v`.
    pub fn edges(&self, v: NodeId) -> impl Iterator<Item = (NodeId, EdgeWeight)> + '_ {
        self.edge_range(v)
            .map(move |e| (self.adjncy[e], self.edge_weights[e]))
    }

    #[inline]
    pub fn degree(&self, v: NodeId) -> usize {
        self.xadj[v + 1] - self.xadj[v]
    }

    pub fn weighted_degree(&self, v: NodeId) -> EdgeWeight {
        self.edge_weights[self.edge_range(v)].iter().sum()
    }

    #[inline]
    pub fn node_weight(&self, v: NodeId) -> NodeWeight {
        self.node_weights[v]
    }

    pub fn node_weights(&self) -> &[NodeWeight] {
        &self.node_weights
    }

    pub fn total_node_weight(&self) -> NodeWeight {
        self.node_weights.iter().sum()
    }

    pub fn max_node_weight(&self) -> NodeWeight {
        self.node_weights.iter().copied().max().unwrap_or(0)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors(u).contains(&v)
    }

    pub fn set_node_weights(&mut self, vwgt: &[NodeWeight]) -> Result<(), GraphError> {
        if vwgt.len() != self.number_of_nodes() {
            return Err(GraphError::WeightLength {
                what: "node",
                expected: self.number_of_nodes(),
                got: vwgt.len(),
            });
        }
        self.node_weights.copy_from_slice(vwgt);
        Ok(())
    }

    pub fn set_edge_weights(&mut self, adjwgt: &[EdgeWeight]) -> Result<(), GraphError> {
        if adjwgt.len() != self.number_of_edges() {
            return Err(GraphError::WeightLength {
                what: "edge",
                expected: self.number_of_edges(),
                got: adjwgt.len(),
            });
        }
        self.edge_weights.copy_from_slice(adjwgt);
        Ok(())
    }

    /// Induced subgraph on `nodes`. Local id `i` corresponds to `nodes[i]`;
    /// edges leaving the node set are dropped.
    pub fn subgraph(&self, nodes: &[NodeId]) -> Graph {
        let mut local = vec![usize::MAX; self.number_of_nodes()];
        for (i, &v) in nodes.iter().enumerate() {
            local[v] = i;
        }
        let adj = nodes
            .iter()
            .map(|&v| {
                self.edges(v)
                    .filter_map(|(t, w)| (local[t] != usize::MAX).then(|| (local[t], w)))
                    .collect()
            })
            .collect();
        let weights = nodes.iter().map(|&v| self.node_weights[v]).collect();
        Graph::from_weighted_adjacency(weights, adj)
    }

    /// Export to the flat array layout ordering backends consume.
    pub fn to_csr(&self) -> CsrGraph {
        CsrGraph {
            xadj: self.xadj.clone(),
            adjncy: self.adjncy.clone(),
            vwgt: self.node_weights.clone(),
            adjwgt: self.edge_weights.clone(),
        }
    }

    /// Check that every edge slot has its reverse.
    pub fn validate_symmetry(&self) -> Result<(), GraphError> {
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(self.number_of_edges());
        for u in 0..self.number_of_nodes() {
            for &v in self.neighbors(u) {
                seen.insert((u, v));
            }
        }
        for u in 0..self.number_of_nodes() {
            for &v in self.neighbors(u) {
                if !seen.contains(&(v, u)) {
                    return Err(GraphError::Asymmetric(u, v));
                }
            }
        }
        Ok(())
    }
}

impl DebugInvariants for Graph {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Graph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        let n = self.number_of_nodes();
        if self.node_weights.len() != n {
            return Err(GraphError::WeightLength {
                what: "node",
                expected: n,
                got: self.node_weights.len(),
            });
        }
        if self.edge_weights.len() != self.adjncy.len() {
            return Err(GraphError::WeightLength {
                what: "edge",
                expected: self.adjncy.len(),
                got: self.edge_weights.len(),
            });
        }
        for (node, w) in self.xadj.windows(2).enumerate() {
            if w[0] > w[1] {
                return Err(GraphError::OffsetsNotMonotone {
                    node,
                    start: w[0],
                    end: w[1],
                });
            }
        }
        if let Some((edge, &target)) = self.adjncy.iter().enumerate().find(|&(_, &t)| t >= n) {
            return Err(GraphError::NeighborOutOfRange {
                edge,
                target,
                nodes: n,
            });
        }
        self.validate_symmetry()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: usize) -> Graph {
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1)).collect();
        Graph::from_edges(n, &edges)
    }

    #[test]
    fn from_input_applies_weights() {
        let xadj = [0, 1, 3, 4];
        let adjncy = [1, 0, 2, 1];
        let vwgt = [2, 3, 4];
        let adjwgt = [5, 5, 7, 7];
        let input = GraphInput::new(&xadj, &adjncy)
            .with_node_weights(&vwgt)
            .with_edge_weights(&adjwgt);
        let g = Graph::from_input(&input).unwrap();
        assert_eq!(g.number_of_nodes(), 3);
        assert_eq!(g.total_node_weight(), 9);
        assert_eq!(g.weighted_degree(1), 12);
        assert_eq!(g.edges(2).collect::<Vec<_>>(), vec![(1, 7)]);
    }

    #[test]
    fn rejects_non_monotone_offsets() {
        let err = Graph::from_csr(vec![0, 2, 1, 2], vec![1, 2]).unwrap_err();
        assert!(matches!(err, GraphError::OffsetsNotMonotone { node: 1, .. }));
    }

    #[test]
    fn rejects_out_of_range_target() {
        let err = Graph::from_csr(vec![0, 1, 2], vec![1, 5]).unwrap_err();
        assert_eq!(
            err,
            GraphError::NeighborOutOfRange {
                edge: 1,
                target: 5,
                nodes: 2
            }
        );
    }

    #[test]
    fn rejects_neighbor_count_mismatch() {
        let err = Graph::from_csr(vec![0, 1, 3], vec![1, 0]).unwrap_err();
        assert!(matches!(err, GraphError::NeighborCount { .. }));
    }

    #[test]
    fn rejects_wrong_weight_length() {
        let xadj = [0, 1, 2];
        let adjncy = [1, 0];
        let vwgt = [1];
        let err = Graph::from_input(&GraphInput::new(&xadj, &adjncy).with_node_weights(&vwgt))
            .unwrap_err();
        assert!(matches!(err, GraphError::WeightLength { what: "node", .. }));
    }

    #[test]
    fn empty_graph_is_valid() {
        let g = Graph::from_csr(vec![0], vec![]).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.total_node_weight(), 0);
    }

    #[test]
    fn subgraph_drops_outside_edges() {
        let g = path(5);
        let sub = g.subgraph(&[1, 2, 4]);
        assert_eq!(sub.number_of_nodes(), 3);
        assert_eq!(sub.neighbors(0), &[1]);
        assert_eq!(sub.neighbors(1), &[0]);
        assert!(sub.neighbors(2).is_empty());
        assert!(sub.validate_invariants().is_ok());
    }

    #[test]
    fn asymmetric_graph_is_detected() {
        let g = Graph::from_csr(vec![0, 1, 1], vec![1]).unwrap();
        assert_eq!(g.validate_symmetry(), Err(GraphError::Asymmetric(0, 1)));
        let (xadj, adjncy) = ([0, 1, 1], [1]);
        assert_eq!(
            Graph::from_input(&GraphInput::new(&xadj, &adjncy)),
            Err(GraphError::Asymmetric(0, 1))
        );
    }
}
