//! Indistinguishable node merging.
//!
//! Nodes with identical closed neighbourhoods `N[v] = N(v) ∪ {v}` are
//! pairwise adjacent and interchangeable in any elimination order. Each
//! class collapses into its smallest member.

use super::{Contraction, ContractionBuilder, ReductionType};
use crate::graph::{Graph, NodeId};
use hashbrown::HashMap;

pub fn contract(graph: &Graph) -> Contraction {
    let mut builder = ContractionBuilder::new(graph, ReductionType::IndistinguishableNodes);
    let mut classes: HashMap<Vec<NodeId>, NodeId> = HashMap::new();
    for v in 0..graph.number_of_nodes() {
        if graph.degree(v) == 0 {
            continue;
        }
        let mut key: Vec<NodeId> = graph.neighbors(v).to_vec();
        key.push(v);
        key.sort_unstable();
        key.dedup();
        match classes.get(&key) {
            Some(&rep) => builder.merge(rep, v),
            None => {
                classes.insert(key, v);
            }
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reductions::Reduction;

    #[test]
    fn clique_members_with_same_outside_merge() {
        // 0, 1 are adjacent and both see exactly {2}; 2 also sees 3.
        let g = Graph::from_edges(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]);
        let c = contract(&g);
        assert_eq!(c.reduced_graph().number_of_nodes(), 3);
        assert_eq!(c.members(0), &[0, 1]);
        assert_eq!(c.reduced_graph().node_weight(0), 2);
        let full = c.map_ordering(&[2, 1, 0]);
        // group {0, 1} is ranked last and stays consecutive
        assert_eq!(full[0], 2);
        assert_eq!(full[1], 3);
    }

    #[test]
    fn complete_graph_collapses_to_one_node() {
        let g = Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]);
        let c = contract(&g);
        assert_eq!(c.reduced_graph().number_of_nodes(), 1);
        assert_eq!(c.map_ordering(&[0]), vec![0, 1, 2]);
    }

    #[test]
    fn path_is_unchanged() {
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        let c = contract(&g);
        assert_eq!(c.reduced_graph(), &g);
    }
}
