//! GraphError: Unified error type for graph-dissect public APIs
//!
//! Every fallible entry point returns this type. Failures from the
//! partitioning backend are carried unchanged inside [`GraphError::Partition`].

use crate::partitioning::error::PartitionError;
use thiserror::Error;

/// Unified error type for graph-dissect operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The offset array must hold exactly `n + 1` entries.
    #[error("CSR offsets have length {got}, expected {expected}")]
    OffsetsLength { expected: usize, got: usize },
    /// `offsets[0]` must be zero.
    #[error("CSR offsets must start at 0, found {0}")]
    OffsetsStart(usize),
    /// Offsets must be monotone non-decreasing.
    #[error("CSR offsets decrease at node {node}: {start} > {end}")]
    OffsetsNotMonotone { node: usize, start: usize, end: usize },
    /// `offsets[n]` disagrees with the neighbor array length.
    #[error("CSR offsets end at {offsets_end} but {neighbors} neighbors were given")]
    NeighborCount { offsets_end: usize, neighbors: usize },
    /// A neighbor id lies outside `[0, n)`.
    #[error("edge {edge} targets node {target}, but the graph has {nodes} nodes")]
    NeighborOutOfRange { edge: usize, target: usize, nodes: usize },
    /// An optional weight array has the wrong length.
    #[error("{what} weights have length {got}, expected {expected}")]
    WeightLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    /// The graph is not stored symmetrically.
    #[error("edge ({0}, {1}) has no reverse edge")]
    Asymmetric(usize, usize),
    /// Requested number of blocks is unusable.
    #[error("invalid block count {0}: at least one block is required")]
    InvalidBlockCount(usize),
    /// A reduction-order token was unparsable or out of range.
    #[error("Unknown reduction type {token}")]
    UnknownReductionType { token: String },
    /// A vector claimed to be an ordering is not a permutation of `[0, n)`.
    #[error("ordering of length {len} is not a permutation: {reason}")]
    NotAPermutation { len: usize, reason: String },
    /// An ordering backend reported failure.
    #[error("ordering backend `{backend}` failed: {message}")]
    OrderingBackend {
        backend: &'static str,
        message: String,
    },
    /// Malformed METIS graph file.
    #[error("METIS format error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// Underlying reader/writer failure.
    #[error("I/O error: {0}")]
    Io(String),
    /// Failure inside the partitioning backend.
    #[error(transparent)]
    Partition(#[from] PartitionError),
}

impl From<std::io::Error> for GraphError {
    fn from(e: std::io::Error) -> Self {
        GraphError::Io(e.to_string())
    }
}
