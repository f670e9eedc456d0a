#![cfg_attr(docsrs, feature(doc_cfg))]
//! # graph-dissect
//!
//! graph-dissect partitions undirected graphs into balanced blocks, computes
//! vertex separators, and builds fill-reducing orderings for sparse
//! elimination by shrinking the graph with exact reductions before nested
//! dissection.
//!
//! ## Features
//! - Recursive bisection with FM refinement, tuned by six mode presets
//! - Vertex separators from `k`-way partitions or direct 2-way separators
//! - A reversible reduction pipeline (simplicial nodes, indistinguishable
//!   nodes, twins, path compression, degree-2 and triangle elimination)
//! - Nested dissection over the reduced graph, or any [`OrderingBackend`]
//!   including METIS `NodeND` behind `metis-support`
//! - METIS graph file reader and writer
//!
//! ## Determinism
//!
//! All randomized decisions use a `SmallRng` owned by the caller's
//! [`CallContext`] and reseeded from the request, so runs are reproducible.
//! With the `rayon` feature bisection trials run in parallel on seeds drawn
//! up front, giving the same results as a serial run.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! graph-dissect = "0.4"
//! # Optional features:
//! # features = ["rayon", "metis-support"]
//! ```
//!
//! ```
//! use graph_dissect::prelude::*;
//!
//! // 0 - 1 - 2 - 3
//! let xadj = [0, 1, 3, 5, 6];
//! let adjncy = [1, 0, 2, 1, 3, 2];
//! let input = GraphInput::new(&xadj, &adjncy);
//! let mut ctx = CallContext::silent();
//! let ordering = reduced_nd(&mut ctx, &input, &OrderingRequest::default()).unwrap();
//! assert_eq!(ordering.len(), 4);
//! ```

pub mod config;
pub mod context;
pub mod debug_invariants;
pub mod graph;
pub mod graph_error;
pub mod interface;
pub mod ordering;
pub mod partitioning;
pub mod reductions;
pub mod separator;

pub use debug_invariants::DebugInvariants;
pub use ordering::OrderingBackend;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::config::{Mode, PartitionConfig, Preset};
    pub use crate::context::{CallContext, Diagnostics};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph::{AdjacencyGraph, CsrGraph, Graph, GraphInput, NodeId};
    pub use crate::graph_error::GraphError;
    #[cfg(feature = "metis-support")]
    pub use crate::interface::reduced_nd_metis;
    pub use crate::interface::{
        OrderingRequest, PartitionOutcome, PartitionRequest, node_separator, partition,
        partition_balance_edges, reduced_nd, reduced_nd_with_backend,
    };
    #[cfg(feature = "metis-support")]
    pub use crate::ordering::MetisNodeNd;
    pub use crate::ordering::{MinimumDegree, OrderingBackend, Permutation, ReverseCuthillMcKee};
    pub use crate::partitioning::{BisectionPartitioner, PartitionBackend, PartitionError};
    pub use crate::reductions::{ReductionStack, ReductionType};
}
