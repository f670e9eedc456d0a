//! Mode presets.
//!
//! A [`Mode`] picks one of two parameter bundles: the partitioning preset
//! returned by [`Mode::preset`] or, for separator computation, the one
//! returned by [`Mode::separator_preset`]. The social variants of the
//! separator family alias their non-social counterpart.
//!
//! Raw codes from foreign callers fall back differently per family: an
//! unknown code partitions with [`Preset::Eco`] but computes separators
//! with [`Preset::StrongSeparator`].

use serde::{Deserialize, Serialize};

/// Quality/speed trade-off requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i32)]
pub enum Mode {
    Fast = 0,
    #[default]
    Eco = 1,
    Strong = 2,
    FastSocial = 3,
    EcoSocial = 4,
    StrongSocial = 5,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Fast,
        Mode::Eco,
        Mode::Strong,
        Mode::FastSocial,
        Mode::EcoSocial,
        Mode::StrongSocial,
    ];

    /// Decode a raw mode code. Unrecognized codes resolve to [`Mode::Eco`].
    pub fn from_raw(raw: i32) -> Mode {
        match raw {
            0 => Mode::Fast,
            1 => Mode::Eco,
            2 => Mode::Strong,
            3 => Mode::FastSocial,
            4 => Mode::EcoSocial,
            5 => Mode::StrongSocial,
            _ => Mode::Eco,
        }
    }

    pub fn preset(self) -> Preset {
        match self {
            Mode::Fast => Preset::Fast,
            Mode::Eco => Preset::Eco,
            Mode::Strong => Preset::Strong,
            Mode::FastSocial => Preset::FastSocial,
            Mode::EcoSocial => Preset::EcoSocial,
            Mode::StrongSocial => Preset::StrongSocial,
        }
    }

    /// Separator-family preset. Social modes share the non-social tuning.
    pub fn separator_preset(self) -> Preset {
        match self {
            Mode::Fast | Mode::FastSocial => Preset::FastSeparator,
            Mode::Eco | Mode::EcoSocial => Preset::EcoSeparator,
            Mode::Strong | Mode::StrongSocial => Preset::StrongSeparator,
        }
    }

    /// Partitioning preset for a raw code; unknown codes use [`Preset::Eco`].
    pub fn preset_for(raw: i32) -> Preset {
        Mode::from_raw(raw).preset()
    }

    /// Separator preset for a raw code; unknown codes use
    /// [`Preset::StrongSeparator`].
    pub fn separator_preset_for(raw: i32) -> Preset {
        match raw {
            0..=5 => Mode::from_raw(raw).separator_preset(),
            _ => Preset::StrongSeparator,
        }
    }
}

/// Named parameter bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    Fast,
    Eco,
    Strong,
    FastSocial,
    EcoSocial,
    StrongSocial,
    FastSeparator,
    EcoSeparator,
    StrongSeparator,
}

/// How the bisection picks the node it grows a block from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeedStrategy {
    /// Endpoint of a repeated-BFS pseudo-diameter, starting from a random node.
    #[default]
    PseudoPeripheral,
    /// Uniformly random node.
    Random,
}

/// Algorithm parameters written by a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetParams {
    pub initial_trials: usize,
    pub refinement_passes: usize,
    pub fm_window: usize,
    pub seed_strategy: SeedStrategy,
    pub separator_passes: usize,
}

impl Preset {
    pub fn params(self) -> PresetParams {
        use SeedStrategy::{PseudoPeripheral, Random};
        let (initial_trials, refinement_passes, fm_window, seed_strategy, separator_passes) =
            match self {
                Preset::Fast => (1, 2, 25, PseudoPeripheral, 0),
                Preset::Eco => (4, 4, 50, PseudoPeripheral, 0),
                Preset::Strong => (8, 8, 100, PseudoPeripheral, 0),
                Preset::FastSocial => (2, 2, 25, Random, 0),
                Preset::EcoSocial => (6, 4, 50, Random, 0),
                Preset::StrongSocial => (12, 8, 100, Random, 0),
                Preset::FastSeparator => (2, 2, 25, PseudoPeripheral, 1),
                Preset::EcoSeparator => (4, 4, 50, PseudoPeripheral, 2),
                Preset::StrongSeparator => (8, 8, 100, PseudoPeripheral, 4),
            };
        PresetParams {
            initial_trials,
            refinement_passes,
            fm_window,
            seed_strategy,
            separator_passes,
        }
    }
}
