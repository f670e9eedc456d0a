//! Seeded 2-way partitioning: BFS graph growing followed by FM refinement.
//!
//! Each trial grows block 0 from a seed node until it reaches its target
//! weight, then runs boundary Fiduccia-Mattheyses passes that move single
//! nodes across the cut, keeping the best prefix of each pass. Trials are
//! compared by `(infeasibility, cut)`; ties go to the earliest trial.
//!
//! Trial seeds are drawn from the caller's RNG before any trial runs, so
//! the parallel and sequential schedules produce the same result.

use super::metrics::edge_cut;
use super::seed_select::pick_seed;
use crate::config::PresetParams;
use crate::graph::{BlockId, Graph, NodeId, NodeWeight};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

#[cfg(feature = "rayon")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Weight targets for one bisection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BisectionTargets {
    /// Weight block 0 is grown to.
    pub target0: NodeWeight,
    /// Hard per-block limit.
    pub max: [NodeWeight; 2],
}

impl BisectionTargets {
    /// Split `total` in proportion `k0 : k1`, capping block `i` at
    /// `upper * k_i`.
    pub fn proportional(total: NodeWeight, k0: usize, k1: usize, upper: NodeWeight) -> Self {
        let k = (k0 + k1).max(1) as i128;
        let target0 = (total as i128 * k0 as i128 / k) as NodeWeight;
        Self {
            target0,
            max: [
                upper.saturating_mul(k0 as NodeWeight),
                upper.saturating_mul(k1 as NodeWeight),
            ],
        }
    }

    fn infeasibility(&self, weights: &[NodeWeight; 2]) -> NodeWeight {
        (weights[0] - self.max[0]).max(0) + (weights[1] - self.max[1]).max(0)
    }
}

/// A 2-way labelling with its cut and block weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bisection {
    pub part: Vec<BlockId>,
    pub cut: i64,
    pub block_weights: [NodeWeight; 2],
}

impl Bisection {
    fn key(&self, targets: &BisectionTargets) -> (NodeWeight, i64) {
        (targets.infeasibility(&self.block_weights), self.cut)
    }
}

/// Best of `params.initial_trials` grow-and-refine trials.
///
/// `weights` are the balance weights of the nodes.
pub fn bisect(
    graph: &Graph,
    weights: &[NodeWeight],
    targets: &BisectionTargets,
    params: &PresetParams,
    rng: &mut SmallRng,
) -> Bisection {
    let n = graph.number_of_nodes();
    if n == 0 {
        return Bisection {
            part: Vec::new(),
            cut: 0,
            block_weights: [0, 0],
        };
    }
    let seeds: Vec<u64> = (0..params.initial_trials.max(1))
        .map(|_| rng.next_u64())
        .collect();

    #[cfg(feature = "rayon")]
    let trials: Vec<Bisection> = seeds
        .into_par_iter()
        .map(|seed| run_trial(graph, weights, targets, params, seed))
        .collect();
    #[cfg(not(feature = "rayon"))]
    let trials: Vec<Bisection> = seeds
        .into_iter()
        .map(|seed| run_trial(graph, weights, targets, params, seed))
        .collect();

    let (index, best) = trials
        .into_iter()
        .enumerate()
        .min_by_key(|(i, t)| (t.key(targets), *i))
        .unwrap_or_else(|| unreachable!("at least one trial runs"));
    log::debug!(
        "bisection: n={n} trial={index} cut={} weights={:?} max={:?}",
        best.cut,
        best.block_weights,
        targets.max
    );
    best
}

fn run_trial(
    graph: &Graph,
    weights: &[NodeWeight],
    targets: &BisectionTargets,
    params: &PresetParams,
    seed: u64,
) -> Bisection {
    let mut rng = SmallRng::seed_from_u64(seed);
    let start = pick_seed(graph, params.seed_strategy, &mut rng);
    let part = grow(graph, weights, start, targets.target0, &mut rng);
    let mut bisection = Bisection {
        cut: edge_cut(graph, &part),
        block_weights: side_weights(weights, &part),
        part,
    };
    fm_refine(graph, weights, &mut bisection, targets, params);
    bisection
}

fn side_weights(weights: &[NodeWeight], part: &[BlockId]) -> [NodeWeight; 2] {
    let mut w = [0, 0];
    for (&x, &b) in weights.iter().zip(part) {
        w[b] += x;
    }
    w
}

/// BFS from `start`, assigning nodes to block 0 until it weighs `target0`.
/// When the frontier runs dry a random unreached node restarts the search.
fn grow(
    graph: &Graph,
    weights: &[NodeWeight],
    start: NodeId,
    target0: NodeWeight,
    rng: &mut SmallRng,
) -> Vec<BlockId> {
    let n = graph.number_of_nodes();
    let mut part = vec![1; n];
    let mut touched = vec![false; n];
    let mut queue = VecDeque::from([start]);
    touched[start] = true;
    let mut grown = 0;
    let mut reached = 1;
    while grown < target0 {
        let v = match queue.pop_front() {
            Some(v) => v,
            None if reached < n => {
                let offset = rng.gen_range(0..n);
                let Some(v) = (0..n).map(|i| (i + offset) % n).find(|&v| !touched[v]) else {
                    break;
                };
                touched[v] = true;
                reached += 1;
                v
            }
            None => break,
        };
        part[v] = 0;
        grown += weights[v];
        for &u in graph.neighbors(v) {
            if !touched[u] {
                touched[u] = true;
                reached += 1;
                queue.push_back(u);
            }
        }
    }
    part
}

/// FM passes with rollback to the best prefix of each pass.
fn fm_refine(
    graph: &Graph,
    weights: &[NodeWeight],
    b: &mut Bisection,
    targets: &BisectionTargets,
    params: &PresetParams,
) {
    let n = graph.number_of_nodes();
    let window = params.fm_window.max(1);
    let slack = weights.iter().copied().max().unwrap_or(0);
    for _ in 0..params.refinement_passes {
        let mut gain = vec![0i64; n];
        for v in 0..n {
            for (u, w) in graph.edges(v) {
                if u != v {
                    gain[v] += if b.part[u] != b.part[v] { w } else { -w };
                }
            }
        }
        let mut heap: BinaryHeap<(i64, Reverse<NodeId>)> =
            (0..n).map(|v| (gain[v], Reverse(v))).collect();
        let mut locked = vec![false; n];
        let mut moves: Vec<NodeId> = Vec::new();
        let start_key = b.key(targets);
        let mut best_key = start_key;
        let mut best_len = 0;
        let mut best_weights = b.block_weights;
        let mut since_best = 0;

        while let Some((g, Reverse(v))) = heap.pop() {
            if locked[v] || g != gain[v] {
                continue;
            }
            locked[v] = true;
            let from = b.part[v];
            let to = 1 - from;
            let mut after = b.block_weights;
            after[from] -= weights[v];
            after[to] += weights[v];
            let now = targets.infeasibility(&b.block_weights);
            let next = targets.infeasibility(&after);
            // A balanced state may overshoot by one node so that swaps can
            // form; an unbalanced one must not get worse.
            if !(next == 0 || next < now || (now == 0 && next <= slack)) {
                continue;
            }
            b.part[v] = to;
            b.block_weights = after;
            b.cut -= g;
            moves.push(v);
            for (u, w) in graph.edges(v) {
                if u == v || locked[u] {
                    continue;
                }
                gain[u] += if b.part[u] == to { -2 * w } else { 2 * w };
                heap.push((gain[u], Reverse(u)));
            }
            let key = b.key(targets);
            if key < best_key {
                best_key = key;
                best_len = moves.len();
                best_weights = b.block_weights;
                since_best = 0;
            } else {
                since_best += 1;
                if since_best >= window {
                    break;
                }
            }
        }
        for &v in moves[best_len..].iter().rev() {
            b.part[v] = 1 - b.part[v];
        }
        b.block_weights = best_weights;
        b.cut = best_key.1;
        if best_key >= start_key {
            break;
        }
    }
}
