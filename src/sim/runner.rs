//! Multi-game simulation runner and run-distribution statistics.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{SimConfig, SimRng};
use crate::error::SimError;
use crate::model::{EventModel, PitchModel};

use super::game::GameSim;

/// Aggregate statistics over a batch of simulated games.
///
/// Each sample is a game's combined run total divided by two - a documented
/// approximation treating half the combined runs as "runs by one team", not
/// a correction of the underlying totals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Per-game samples (combined runs / 2), in play order.
    pub runs: Vec<f64>,

    /// Arithmetic mean of the samples.
    pub mean: f64,

    /// Population standard deviation of the samples.
    pub std_dev: f64,
}

impl SimulationReport {
    /// Compute a report from per-game samples.
    #[must_use]
    pub fn from_runs(runs: Vec<f64>) -> Self {
        let mean = mean(&runs);
        let std_dev = population_std_dev(&runs, mean);
        Self {
            runs,
            mean,
            std_dev,
        }
    }

    /// Number of games in the batch.
    #[must_use]
    pub fn games(&self) -> usize {
        self.runs.len()
    }
}

/// Runs `GameSim` for a configured number of games and collects the
/// run-total distribution.
///
/// Games are independent: each draws from a forked RNG stream, so the
/// sequence of per-game results is deterministic for a given seed and
/// uncorrelated across games.
pub struct SimulationRunner<P: PitchModel, E: EventModel> {
    sim: GameSim<P, E>,
    rng: SimRng,
}

impl<P: PitchModel, E: EventModel> SimulationRunner<P, E> {
    /// Create a runner. The root RNG stream is seeded from the config.
    pub fn new(pitch_model: P, event_model: E, config: SimConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self {
            sim: GameSim::new(pitch_model, event_model, config),
            rng,
        }
    }

    /// Get the underlying single-game simulator.
    pub fn sim(&self) -> &GameSim<P, E> {
        &self.sim
    }

    /// Simulate `n_games` games and report the run distribution.
    ///
    /// Fails fast on the first oracle contract violation; completed games
    /// are not retried (there is nothing transient to retry). Callers that
    /// want partial statistics can run smaller batches incrementally.
    pub fn run(&mut self, n_games: usize) -> Result<SimulationReport, SimError> {
        let mut runs = Vec::with_capacity(n_games);

        for game_index in 0..n_games {
            let mut game_rng = self.rng.fork();
            let combined = self.sim.play_game(&mut game_rng)?;
            debug!("game {game_index}: combined runs {combined}");
            runs.push(f64::from(combined) / 2.0);
        }

        let report = SimulationReport::from_runs(runs);
        info!(
            "simulated {} games: mean {:.3}, std {:.3}",
            report.games(),
            report.mean,
            report.std_dev
        );
        Ok(report)
    }
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

fn population_std_dev(samples: &[f64], mean: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let variance = samples
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / samples.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;
    use crate::model::{FixedEventModel, StaticPitchModel};

    fn runner_with(
        event: Event,
        config: SimConfig,
    ) -> SimulationRunner<StaticPitchModel, FixedEventModel> {
        SimulationRunner::new(
            StaticPitchModel::center_cut_fastball(),
            FixedEventModel::new(event),
            config,
        )
    }

    #[test]
    fn test_mean_and_std() {
        let report = SimulationReport::from_runs(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((report.mean - 5.0).abs() < 1e-9);
        assert!((report.std_dev - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_report() {
        let report = SimulationReport::from_runs(vec![]);
        assert_eq!(report.games(), 0);
        assert_eq!(report.mean, 0.0);
        assert_eq!(report.std_dev, 0.0);
    }

    #[test]
    fn test_single_sample_has_zero_std() {
        let report = SimulationReport::from_runs(vec![3.5]);
        assert_eq!(report.mean, 3.5);
        assert_eq!(report.std_dev, 0.0);
    }

    #[test]
    fn test_home_run_batch_is_constant() {
        // Solo home runs until the cap: every game yields the same total, so
        // the distribution is a point mass.
        let mut runner = runner_with(Event::HomeRun, SimConfig::new().with_max_runs(10));
        let report = runner.run(20).unwrap();

        assert_eq!(report.games(), 20);
        assert!(report.runs.iter().all(|&r| (r - 5.5).abs() < 1e-9));
        assert!((report.mean - 5.5).abs() < 1e-9);
        assert_eq!(report.std_dev, 0.0);
    }

    #[test]
    fn test_runner_is_deterministic_per_seed() {
        let config = SimConfig::new().with_max_runs(8).with_seed(1234);

        let mut runner1 = runner_with(Event::HomeRun, config.clone());
        let mut runner2 = runner_with(Event::HomeRun, config);

        let report1 = runner1.run(10).unwrap();
        let report2 = runner2.run(10).unwrap();
        assert_eq!(report1, report2);
    }

    #[test]
    fn test_report_serde_round_trip() {
        let report = SimulationReport::from_runs(vec![1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&report).unwrap();
        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
