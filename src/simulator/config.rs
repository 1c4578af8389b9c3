//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum turns per session before it is cut off
    pub max_turns_per_run: u64,

    /// A run counts as successful once the player reaches this level
    pub target_level: u32,

    /// Chance per turn that the player meets an enemy
    pub encounter_chance: f64,

    /// Chance that a won encounter drops an item
    pub loot_chance: f64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_turns_per_run: 500,
            target_level: 10,
            encounter_chance: 0.5,
            loot_chance: 0.4,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for a fast sanity check
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            max_turns_per_run: 200,
            target_level: 5,
            ..Default::default()
        }
    }

    /// Parses a probability flag, clamped to 0-1. Rejects NaN and infinities.
    pub fn parse_chance(raw: &str) -> Option<f64> {
        raw.parse::<f64>()
            .ok()
            .filter(|chance| chance.is_finite())
            .map(|chance| chance.clamp(0.0, 1.0))
    }

    /// Long sessions to look at late progression and achievement coverage
    pub fn marathon() -> Self {
        Self {
            num_runs: 50,
            max_turns_per_run: 5_000,
            target_level: 25,
            ..Default::default()
        }
    }
}
