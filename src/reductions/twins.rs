//! Twin merging: non-adjacent nodes with identical open neighbourhoods.

use super::{Contraction, ContractionBuilder, ReductionType};
use crate::graph::{Graph, NodeId};
use hashbrown::HashMap;

pub fn contract(graph: &Graph) -> Contraction {
    let mut builder = ContractionBuilder::new(graph, ReductionType::Twins);
    let mut classes: HashMap<Vec<NodeId>, NodeId> = HashMap::new();
    for v in 0..graph.number_of_nodes() {
        let mut key: Vec<NodeId> = graph
            .neighbors(v)
            .iter()
            .copied()
            .filter(|&u| u != v)
            .collect();
        if key.is_empty() {
            continue;
        }
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
    fn star_leaves_are_twins() {
        let g = Graph::from_edges(4, &[(0, 1), (0, 2), (0, 3)]);
        let c = contract(&g);
        let r = c.reduced_graph();
        assert_eq!(r.number_of_nodes(), 2);
        assert_eq!(c.members(1), &[1, 2, 3]);
        assert_eq!(r.node_weight(1), 3);
        assert_eq!(r.edges(0).collect::<Vec<_>>(), vec![(1, 3)]);
    }

    #[test]
    fn isolated_nodes_are_not_twins() {
        let g = Graph::from_edges(3, &[]);
        let c = contract(&g);
        assert_eq!(c.reduced_graph().number_of_nodes(), 3);
    }

    #[test]
    fn square_opposite_corners_merge() {
        // 4-cycle: 0 and 2 share {1, 3}, 1 and 3 share {0, 2}.
        let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let c = contract(&g);
        assert_eq!(c.reduced_graph().number_of_nodes(), 2);
        let full = c.map_ordering(&[1, 0]);
        assert_eq!(full, vec![2, 0, 3, 1]);
    }
}
