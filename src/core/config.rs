//! Simulation configuration.
//!
//! The recognized surface is deliberately small: a combined-score run cap
//! (the safety valve against runaway extra-inning ties) and an optional
//! per-at-bat pitch cap for misbehaving oracles.

use serde::{Deserialize, Serialize};

/// Default combined-score cap triggering immediate game termination.
pub const DEFAULT_MAX_RUNS: u32 = 50;

/// Configuration for a simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Combined-score cap. When `batting_score + pitching_score` exceeds
    /// this, the current inning and game terminate immediately. This is the
    /// only guaranteed terminator for a game tied past the 9th inning.
    pub max_runs: u32,

    /// Optional safety cap on pitches within one at-bat. Disabled by
    /// default to preserve fidelity with the reference behavior: a
    /// well-behaved oracle eventually emits a terminating event. When set,
    /// exceeding the cap aborts the game with `SimError::AtBatStalled`.
    pub max_pitches_per_at_bat: Option<u32>,

    /// Seed for the runner's root RNG stream.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_runs: DEFAULT_MAX_RUNS,
            max_pitches_per_at_bat: None,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the combined-score run cap.
    #[must_use]
    pub fn with_max_runs(mut self, max_runs: u32) -> Self {
        self.max_runs = max_runs;
        self
    }

    /// Enable the per-at-bat pitch cap.
    #[must_use]
    pub fn with_max_pitches_per_at_bat(mut self, cap: u32) -> Self {
        self.max_pitches_per_at_bat = Some(cap);
        self
    }

    /// Set the root RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_eq!(config.max_runs, 50);
        assert_eq!(config.max_pitches_per_at_bat, None);
        assert_eq!(config.seed, 0);
    }

    #[test]
    fn test_builders() {
        let config = SimConfig::new()
            .with_max_runs(20)
            .with_max_pitches_per_at_bat(200)
            .with_seed(99);

        assert_eq!(config.max_runs, 20);
        assert_eq!(config.max_pitches_per_at_bat, Some(200));
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SimConfig::new().with_max_runs(10).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
