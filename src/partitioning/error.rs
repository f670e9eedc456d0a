//! Partitioning errors for graph-dissect

use thiserror::Error;

/// Errors from the partitioning backend and the separator routines
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// Zero blocks were requested
    #[error("Partitioner asked for zero blocks")]
    NoParts,
    /// A label vector does not cover every node
    #[error("Partition has {got} labels for {expected} nodes")]
    LabelCount { expected: usize, got: usize },
    /// A label lies outside the admissible block range
    #[error("Node {node} carries block {block}, but only {blocks} blocks exist")]
    BlockOutOfRange {
        node: usize,
        block: usize,
        blocks: usize,
    },
    /// Other backend failures
    #[error("Partitioner error: {0}")]
    Other(String),
}
