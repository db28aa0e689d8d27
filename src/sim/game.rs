//! Single-game simulation: the at-bat, inning, and game loops.
//!
//! The loop layers own state-reset timing and the termination predicates;
//! all event mutation goes through `events::resolve`. Scores are
//! perspective totals, so the half-inning and inning boundaries swap them
//! rather than tracking team identity.

use crate::core::{GameState, SimConfig, SimRng};
use crate::error::SimError;
use crate::events::resolve;
use crate::model::{sample_event, EventModel, PitchModel};

/// Drives one game at a time against a pair of oracle models.
///
/// Holds no per-game state; `GameState` is created fresh in `play_game` and
/// threaded through the loop layers by `&mut`.
pub struct GameSim<P: PitchModel, E: EventModel> {
    pitch_model: P,
    event_model: E,
    config: SimConfig,
}

impl<P: PitchModel, E: EventModel> GameSim<P, E> {
    /// Create a simulator from the two oracles and a configuration.
    pub fn new(pitch_model: P, event_model: E, config: SimConfig) -> Self {
        Self {
            pitch_model,
            event_model,
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulate a complete game and return the **combined** run total of
    /// both teams, not a single team's runs.
    ///
    /// The game ends after the 9th inning only when the score is not tied;
    /// ties extend into extra innings, and the combined-score run cap is the
    /// only guaranteed terminator for a persistent tie.
    pub fn play_game(&self, rng: &mut SimRng) -> Result<u32, SimError> {
        let mut state = GameState::new();

        while !self.is_game_over(&state) {
            self.play_inning(&mut state, rng)?;
        }

        Ok(state.combined_score())
    }

    /// Simulate one full inning (both halves).
    ///
    /// Resets the per-inning state, alternates the score perspective at the
    /// half-inning boundary, and leaves `state.inning` incremented.
    pub fn play_inning(&self, state: &mut GameState, rng: &mut SimRng) -> Result<(), SimError> {
        state.reset_for_inning();

        while !self.is_inning_over(state) {
            self.play_at_bat(state, rng)?;

            if state.outs >= 3 && state.is_top_half {
                state.begin_bottom_half();
            }
        }

        state.swap_scores();
        state.inning += 1;
        Ok(())
    }

    /// Simulate one at-bat: pitch, outcome, resolve, until the at-bat ends.
    pub fn play_at_bat(&self, state: &mut GameState, rng: &mut SimRng) -> Result<(), SimError> {
        state.reset_for_at_bat(rng);

        loop {
            if let Some(cap) = self.config.max_pitches_per_at_bat {
                if state.pitch_number > cap {
                    return Err(SimError::AtBatStalled {
                        pitches: state.pitch_number - 1,
                    });
                }
            }

            let pitch = self.pitch_model.throw_pitch(state, rng)?;
            let probabilities = self.event_model.event_probabilities(&pitch, state)?;
            let event = sample_event(&probabilities, rng)?;

            if resolve(state, event) {
                return Ok(());
            }
        }
    }

    /// Game-over predicate: run cap exceeded, or the 9th inning is complete
    /// and the score is not tied.
    #[must_use]
    pub fn is_game_over(&self, state: &GameState) -> bool {
        if state.combined_score() > self.config.max_runs {
            return true;
        }

        state.inning > 9 && state.batting_score != state.pitching_score
    }

    /// Inning-over predicate: run cap exceeded, or three outs in the bottom
    /// half.
    #[must_use]
    pub fn is_inning_over(&self, state: &GameState) -> bool {
        if state.combined_score() > self.config.max_runs {
            return true;
        }

        !state.is_top_half && state.outs >= 3
    }
}
