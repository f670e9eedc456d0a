//! Minimum vertex cover of a bipartite edge set.
//!
//! Hopcroft-Karp finds a maximum matching between the left and right
//! endpoints; König's theorem turns it into a cover of the same size:
//! with `Z` the nodes reachable from unmatched left nodes along alternating
//! paths, the cover is `(L \ Z) ∪ (R ∩ Z)`.

use crate::graph::NodeId;
use hashbrown::HashMap;
use std::collections::VecDeque;

const INF: usize = usize::MAX;

/// Bipartite graph with compact local ids on both sides.
struct Bipartite {
    left: Vec<NodeId>,
    right: Vec<NodeId>,
    adj: Vec<Vec<usize>>,
}

impl Bipartite {
    fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut left_id: HashMap<NodeId, usize> = HashMap::new();
        let mut right_id: HashMap<NodeId, usize> = HashMap::new();
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut adj: Vec<Vec<usize>> = Vec::new();
        for &(u, v) in edges {
            let l = *left_id.entry(u).or_insert_with(|| {
                left.push(u);
                adj.push(Vec::new());
                left.len() - 1
            });
            let r = *right_id.entry(v).or_insert_with(|| {
                right.push(v);
                right.len() - 1
            });
            adj[l].push(r);
        }
        Self { left, right, adj }
    }
}

struct Matching {
    left_to_right: Vec<Option<usize>>,
    right_to_left: Vec<Option<usize>>,
}

/// Maximum matching by Hopcroft-Karp.
fn hopcroft_karp(g: &Bipartite) -> Matching {
    let nl = g.left.len();
    let mut m = Matching {
        left_to_right: vec![None; nl],
        right_to_left: vec![None; g.right.len()],
    };
    // dist[nl] is the distance of the free-right sentinel
    let mut dist = vec![INF; nl + 1];
    while bfs(g, &m, &mut dist) {
        for l in 0..nl {
            if m.left_to_right[l].is_none() {
                dfs(g, l, &mut m, &mut dist);
            }
        }
    }
    m
}

/// Layer the free left nodes; true if some free right node is reachable.
fn bfs(g: &Bipartite, m: &Matching, dist: &mut [usize]) -> bool {
    let nl = g.left.len();
    let mut queue = VecDeque::new();
    for l in 0..nl {
        if m.left_to_right[l].is_none() {
            dist[l] = 0;
            queue.push_back(l);
        } else {
            dist[l] = INF;
        }
    }
    dist[nl] = INF;
    while let Some(l) = queue.pop_front() {
        if dist[l] >= dist[nl] {
            continue;
        }
        for &r in &g.adj[l] {
            let next = m.right_to_left[r].unwrap_or(nl);
            if dist[next] == INF {
                dist[next] = dist[l] + 1;
                if next != nl {
                    queue.push_back(next);
                }
            }
        }
    }
    dist[nl] != INF
}

fn dfs(g: &Bipartite, l: usize, m: &mut Matching, dist: &mut [usize]) -> bool {
    let nl = g.left.len();
    for &r in &g.adj[l] {
        let next = m.right_to_left[r];
        let next_dist = dist[next.unwrap_or(nl)];
        if next_dist != dist[l] + 1 {
            continue;
        }
        if next.is_none_or(|l2| dfs(g, l2, m, dist)) {
            m.left_to_right[l] = Some(r);
            m.right_to_left[r] = Some(l);
            return true;
        }
    }
    dist[l] = INF;
    false
}

/// Smallest node set touching every edge of `edges`.
///
/// Each edge is `(left, right)`; the two sides must be disjoint. The result
/// is sorted by node id.
pub fn min_vertex_cover(edges: &[(NodeId, NodeId)]) -> Vec<NodeId> {
    if edges.is_empty() {
        return Vec::new();
    }
    let g = Bipartite::from_edges(edges);
    let m = hopcroft_karp(&g);

    let mut left_seen = vec![false; g.left.len()];
    let mut right_seen = vec![false; g.right.len()];
    let mut queue: VecDeque<usize> = (0..g.left.len())
        .filter(|&l| m.left_to_right[l].is_none())
        .collect();
    for &l in &queue {
        left_seen[l] = true;
    }
    while let Some(l) = queue.pop_front() {
        for &r in &g.adj[l] {
            if right_seen[r] || m.left_to_right[l] == Some(r) {
                continue;
            }
            right_seen[r] = true;
            if let Some(l2) = m.right_to_left[r] {
                if !left_seen[l2] {
                    left_seen[l2] = true;
                    queue.push_back(l2);
                }
            }
        }
    }

    let mut cover: Vec<NodeId> = g
        .left
        .iter()
        .zip(&left_seen)
        .filter(|&(_, &seen)| !seen)
        .map(|(&v, _)| v)
        .chain(
            g.right
                .iter()
                .zip(&right_seen)
                .filter(|&(_, &seen)| seen)
                .map(|(&v, _)| v),
        )
        .collect();
    cover.sort_unstable();
    cover
}
