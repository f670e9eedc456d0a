//! `METIS_NodeND` through the bindgen bindings generated in `build.rs`.

use super::{OrderingBackend, Permutation};
use crate::graph::CsrGraph;
use crate::graph_error::GraphError;

#[allow(non_upper_case_globals, non_camel_case_types, non_snake_case, dead_code)]
mod ffi {
    include!(concat!(env!("OUT_DIR"), "/metis_bindings.rs"));
}

use ffi::idx_t;

/// Nested-dissection ordering computed by the system METIS library.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetisNodeNd;

impl OrderingBackend for MetisNodeNd {
    fn name(&self) -> &'static str {
        "metis"
    }

    fn node_nd(&self, graph: &CsrGraph, seed: u64) -> Result<Permutation, GraphError> {
        let n = graph.number_of_nodes();
        if n == 0 {
            return Ok(Permutation::default());
        }
        let convert = |x: i64| {
            idx_t::try_from(x).map_err(|_| GraphError::OrderingBackend {
                backend: "metis",
                message: format!("value {x} does not fit idx_t"),
            })
        };
        let mut nvtxs = convert(n as i64)?;
        let mut xadj = graph
            .xadj
            .iter()
            .map(|&o| convert(o as i64))
            .collect::<Result<Vec<_>, _>>()?;
        let mut adjncy = graph
            .adjncy
            .iter()
            .map(|&v| convert(v as i64))
            .collect::<Result<Vec<_>, _>>()?;
        let mut perm: Vec<idx_t> = vec![0; n];
        let mut iperm: Vec<idx_t> = vec![0; n];

        let mut options: [idx_t; ffi::METIS_NOPTIONS as usize] = [0; ffi::METIS_NOPTIONS as usize];
        let status = unsafe {
            ffi::METIS_SetDefaultOptions(options.as_mut_ptr());
            // METIS seeds are plain C ints
            options[ffi::moptions_et_METIS_OPTION_SEED as usize] = (seed & 0x7fff_ffff) as idx_t;
            ffi::METIS_NodeND(
                &mut nvtxs,
                xadj.as_mut_ptr(),
                adjncy.as_mut_ptr(),
                // unit weights
                std::ptr::null_mut(),
                options.as_mut_ptr(),
                perm.as_mut_ptr(),
                iperm.as_mut_ptr(),
            )
        };
        if status != ffi::rstatus_et_METIS_OK as i32 {
            return Err(GraphError::OrderingBackend {
                backend: "metis",
                message: format!("METIS_NodeND returned status {status}"),
            });
        }
        log::debug!("metis: ordered {n} nodes");
        Permutation::from_sequence(perm.into_iter().map(|p| p as usize).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::ordering::is_permutation;

    #[test]
    fn grid_ordering_is_permutation() {
        let mut edges = Vec::new();
        for y in 0..5 {
            for x in 0..5 {
                let v = y * 5 + x;
                if x < 4 {
                    edges.push((v, v + 1));
                }
                if y < 4 {
                    edges.push((v, v + 5));
                }
            }
        }
        let csr = Graph::from_edges(25, &edges).to_csr();
        let p = MetisNodeNd.node_nd(&csr, 3).unwrap();
        assert!(is_permutation(&p.perm));
        assert_eq!(p.iperm, crate::ordering::invert(&p.perm));
    }
}
