//! Fill-reducing orderings.
//!
//! An ordering is a rank vector: `ordering[v]` is the elimination position
//! of node `v`, and the vector is a permutation of `0..n`. Backends work on
//! the exported [`CsrGraph`] and return a [`Permutation`] carrying both
//! directions.
//!
//! Shipped backends:
//! - [`MinimumDegree`]: greedy minimum degree on the elimination graph,
//! - [`ReverseCuthillMcKee`]: bandwidth-reducing BFS ordering,
//! - `MetisNodeNd` with the `metis-support` feature.
//!
//! [`nested_dissection`] holds the in-crate engine used by
//! [`reduced_nd`](crate::interface::reduced_nd).

#[cfg(feature = "metis-support")]
pub mod metis;
pub mod min_degree;
pub mod nested_dissection;
pub mod rcm;

#[cfg(feature = "metis-support")]
pub use metis::MetisNodeNd;
pub use min_degree::MinimumDegree;
pub use nested_dissection::perform_nested_dissection;
pub use rcm::ReverseCuthillMcKee;

use crate::graph::{CsrGraph, NodeId};
use crate::graph_error::GraphError;

/// Elimination order in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permutation {
    /// `perm[i]` is the node eliminated at position `i`.
    pub perm: Vec<NodeId>,
    /// `iperm[v]` is the position of node `v`.
    pub iperm: Vec<usize>,
}

impl Permutation {
    /// Build from an elimination sequence.
    ///
    /// # Errors
    /// [`GraphError::NotAPermutation`] if `perm` repeats or skips a node.
    pub fn from_sequence(perm: Vec<NodeId>) -> Result<Self, GraphError> {
        validate_ordering(&perm)?;
        let iperm = invert(&perm);
        Ok(Self { perm, iperm })
    }

    pub fn identity(n: usize) -> Self {
        Self {
            perm: (0..n).collect(),
            iperm: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.perm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }
}

/// A fill-reducing ordering algorithm.
pub trait OrderingBackend {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Order the nodes of `graph`. `seed` feeds any randomized choices.
    fn node_nd(&self, graph: &CsrGraph, seed: u64) -> Result<Permutation, GraphError>;
}

/// `out[p[i]] = i`. `p` must be a permutation.
pub fn invert(p: &[usize]) -> Vec<usize> {
    let mut out = vec![0; p.len()];
    for (i, &v) in p.iter().enumerate() {
        out[v] = i;
    }
    out
}

pub fn is_permutation(p: &[usize]) -> bool {
    validate_ordering(p).is_ok()
}

/// Check that `p` holds every value of `0..p.len()` exactly once.
pub fn validate_ordering(p: &[usize]) -> Result<(), GraphError> {
    let mut seen = vec![false; p.len()];
    for &v in p {
        if v >= p.len() {
            return Err(GraphError::NotAPermutation {
                len: p.len(),
                reason: format!("entry {v} out of range"),
            });
        }
        if std::mem::replace(&mut seen[v], true) {
            return Err(GraphError::NotAPermutation {
                len: p.len(),
                reason: format!("entry {v} repeated"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert_round_trip() {
        let p = vec![2, 0, 3, 1];
        let q = invert(&p);
        assert_eq!(q, vec![1, 3, 0, 2]);
        assert_eq!(invert(&q), p);
    }

    #[test]
    fn permutation_checks() {
        assert!(is_permutation(&[]));
        assert!(is_permutation(&[1, 0, 2]));
        assert!(!is_permutation(&[0, 0, 1]));
        assert!(!is_permutation(&[0, 3, 1]));
        assert!(matches!(
            Permutation::from_sequence(vec![1, 1]),
            Err(GraphError::NotAPermutation { len: 2, .. })
        ));
    }

    #[test]
    fn from_sequence_fills_inverse() {
        let p = Permutation::from_sequence(vec![2, 0, 1]).unwrap();
        assert_eq!(p.iperm, vec![1, 2, 0]);
        assert_eq!(Permutation::identity(3).iperm, vec![0, 1, 2]);
    }
}
