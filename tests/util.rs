#![allow(dead_code)]
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Owned CSR arrays for building a [`graph_dissect::graph::GraphInput`].
pub struct Csr {
    pub xadj: Vec<usize>,
    pub adjncy: Vec<usize>,
}

impl Csr {
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut adj = vec![Vec::new(); n];
        for &(u, v) in edges {
            adj[u].push(v);
            adj[v].push(u);
        }
        let mut xadj = vec![0];
        let mut adjncy = Vec::new();
        for mut list in adj {
            list.sort_unstable();
            adjncy.extend(list);
            xadj.push(adjncy.len());
        }
        Self { xadj, adjncy }
    }

    pub fn input(&self) -> graph_dissect::graph::GraphInput<'_> {
        graph_dissect::graph::GraphInput::new(&self.xadj, &self.adjncy)
    }

    pub fn n(&self) -> usize {
        self.xadj.len() - 1
    }

    pub fn edges(&self) -> Vec<(usize, usize)> {
        (0..self.n())
            .flat_map(|u| {
                self.adjncy[self.xadj[u]..self.xadj[u + 1]]
                    .iter()
                    .map(move |&v| (u, v))
            })
            .filter(|&(u, v)| u < v)
            .collect()
    }
}

pub fn path_edges(n: usize) -> Vec<(usize, usize)> {
    (1..n).map(|i| (i - 1, i)).collect()
}

pub fn grid_edges(w: usize, h: usize) -> Vec<(usize, usize)> {
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
    edges
}

/// Assert `ordering` is a permutation of `0..n`.
pub fn assert_permutation(ordering: &[usize], n: usize) {
    let mut sorted = ordering.to_vec();
    sorted.sort_unstable();
    let want: Vec<usize> = (0..n).collect();
    assert_eq!(sorted, want, "not a permutation: {ordering:?}");
}

/// Connected components of the graph after deleting `removed`, as
/// component ids (`usize::MAX` for removed nodes).
pub fn components_without(n: usize, edges: &[(usize, usize)], removed: &[usize]) -> Vec<usize> {
    let mut adj = vec![Vec::new(); n];
    for &(u, v) in edges {
        adj[u].push(v);
        adj[v].push(u);
    }
    let mut comp = vec![usize::MAX; n];
    let mut gone = vec![false; n];
    for &v in removed {
        gone[v] = true;
    }
    let mut next = 0;
    for s in 0..n {
        if gone[s] || comp[s] != usize::MAX {
            continue;
        }
        comp[s] = next;
        let mut stack = vec![s];
        while let Some(u) = stack.pop() {
            for &v in &adj[u] {
                if !gone[v] && comp[v] == usize::MAX {
                    comp[v] = next;
                    stack.push(v);
                }
            }
        }
        next += 1;
    }
    comp
}

/// Cloneable writer collecting everything written to it.
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
