//! Algorithm configuration.
//!
//! [`PartitionConfig`] is filled once from a [`Mode`] preset and may then be
//! overridden field by field, either in code with struct-update syntax or
//! from a partial serde document (every field has a default).

pub mod balance;
pub mod mode;

pub use balance::{BlockBounds, configure_balance};
pub use mode::{Mode, Preset, PresetParams, SeedStrategy};

use crate::reductions::ReductionType;
use serde::{Deserialize, Serialize};

/// Mutable parameter bundle shared by partitioning, separator and ordering calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Number of blocks.
    pub k: usize,
    /// Allowed block overload as a fraction (0.03 = 3%).
    pub imbalance: f64,
    pub seed: u64,
    /// Ask the partitioner for a 3-way labelling (block 0, block 1, separator).
    pub mode_node_separators: bool,
    /// Balance node weight plus weighted degree instead of node weight.
    pub balance_edges: bool,
    pub disable_reductions: bool,
    /// Reductions in application order.
    pub reduction_order: Vec<ReductionType>,
    /// Subgraphs at or below this node count are not dissected further.
    pub dissection_rec_limit: usize,
    /// Another reduction pass runs only while a pass shrinks the graph by more than this factor.
    pub convergence_factor: f64,
    pub max_simplicial_degree: usize,
    /// Per-block weight bound, derived by [`configure_balance`].
    pub upper_bound_partition: i64,
    pub initial_trials: usize,
    pub refinement_passes: usize,
    pub fm_window: usize,
    pub seed_strategy: SeedStrategy,
    pub separator_passes: usize,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        let mut cfg = Self {
            k: 2,
            imbalance: 0.03,
            seed: 0,
            mode_node_separators: false,
            balance_edges: false,
            disable_reductions: false,
            reduction_order: Vec::new(),
            dissection_rec_limit: 120,
            convergence_factor: 1.0,
            max_simplicial_degree: 12,
            upper_bound_partition: i64::MAX,
            initial_trials: 0,
            refinement_passes: 0,
            fm_window: 0,
            seed_strategy: SeedStrategy::default(),
            separator_passes: 0,
        };
        cfg.apply_preset(Preset::Eco);
        cfg
    }
}

impl PartitionConfig {
    /// Configuration for `k` blocks tuned by `mode`.
    pub fn for_mode(mode: Mode, k: usize) -> Self {
        let mut cfg = Self {
            k,
            ..Default::default()
        };
        cfg.apply_preset(mode.preset());
        cfg
    }

    /// Overwrite the algorithm parameters with `preset`'s bundle. Block
    /// count, imbalance, seed and ordering settings are left untouched.
    pub fn apply_preset(&mut self, preset: Preset) {
        let p = preset.params();
        self.initial_trials = p.initial_trials;
        self.refinement_passes = p.refinement_passes;
        self.fm_window = p.fm_window;
        self.seed_strategy = p.seed_strategy;
        self.separator_passes = p.separator_passes;
    }

    pub fn preset_params(&self) -> PresetParams {
        PresetParams {
            initial_trials: self.initial_trials,
            refinement_passes: self.refinement_passes,
            fm_window: self.fm_window,
            seed_strategy: self.seed_strategy,
            separator_passes: self.separator_passes,
        }
    }
}
