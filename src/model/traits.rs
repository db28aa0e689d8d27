//! Oracle traits for pitch selection and event outcomes.
//!
//! These traits define the interface between the simulator and the learned
//! models (typically neural networks living outside this crate). The
//! simulator owns randomness: models that need random draws take the game's
//! `SimRng` rather than carrying their own source, which keeps whole games
//! reproducible from a single seed.
//!
//! Baseline implementations (`StaticPitchModel`, `UniformEventModel`,
//! `FixedEventModel`) exist for testing and as reference behavior.

use crate::core::{GameState, SimRng};
use crate::error::SimError;
use crate::events::Event;

use super::pitch::{Pitch, PitchType};

/// Pitch-selection oracle.
pub trait PitchModel {
    /// Produce the next pitch for the current game situation.
    ///
    /// The state carries the count, baserunners, handedness, and pitch
    /// number the model conditions on.
    fn throw_pitch(&self, state: &GameState, rng: &mut SimRng) -> Result<Pitch, SimError>;
}

/// Event-outcome oracle.
///
/// Produces a probability vector over `Event::ALL` for a given pitch in a
/// given situation. The simulator thresholds and samples it via
/// `model::sampler::sample_event`; implementations never sample themselves.
pub trait EventModel {
    /// Probability of each outcome event, aligned with `Event::ALL`.
    ///
    /// Weights need not sum to 1.0 but must be finite and non-negative.
    fn event_probabilities(&self, pitch: &Pitch, state: &GameState) -> Result<Vec<f32>, SimError>;
}

impl<M: PitchModel + ?Sized> PitchModel for &M {
    fn throw_pitch(&self, state: &GameState, rng: &mut SimRng) -> Result<Pitch, SimError> {
        (**self).throw_pitch(state, rng)
    }
}

impl<M: EventModel + ?Sized> EventModel for &M {
    fn event_probabilities(&self, pitch: &Pitch, state: &GameState) -> Result<Vec<f32>, SimError> {
        (**self).event_probabilities(pitch, state)
    }
}

/// Pitch model that always throws the same pitch (baseline for testing).
#[derive(Clone, Debug)]
pub struct StaticPitchModel {
    pitch: Pitch,
}

impl StaticPitchModel {
    /// Create a model that repeats the given pitch.
    pub fn new(pitch: Pitch) -> Self {
        Self { pitch }
    }

    /// A belt-high four-seam fastball down the middle.
    #[must_use]
    pub fn center_cut_fastball() -> Self {
        Self::new(Pitch {
            pitch_type: PitchType::FourSeam,
            start_speed: 92.0,
            px: 0.0,
            pz: 2.5,
            spin_rate: 2200.0,
            spin_dir: 180.0,
        })
    }
}

impl PitchModel for StaticPitchModel {
    fn throw_pitch(&self, _state: &GameState, _rng: &mut SimRng) -> Result<Pitch, SimError> {
        Ok(self.pitch.clone())
    }
}

/// Event model assigning equal probability to every outcome (baseline).
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformEventModel;

impl EventModel for UniformEventModel {
    fn event_probabilities(&self, _pitch: &Pitch, _state: &GameState) -> Result<Vec<f32>, SimError> {
        let prob = 1.0 / Event::COUNT as f32;
        Ok(vec![prob; Event::COUNT])
    }
}

/// Event model that deterministically produces one outcome.
///
/// Returns a one-hot vector, so after thresholded sampling the configured
/// event is drawn every time. The workhorse for exercising the rules engine
/// along a known path.
#[derive(Clone, Copy, Debug)]
pub struct FixedEventModel {
    event: Event,
}

impl FixedEventModel {
    /// Create a model that always yields `event`.
    pub fn new(event: Event) -> Self {
        Self { event }
    }
}

impl EventModel for FixedEventModel {
    fn event_probabilities(&self, _pitch: &Pitch, _state: &GameState) -> Result<Vec<f32>, SimError> {
        let mut probs = vec![0.0; Event::COUNT];
        probs[self.event.index()] = 1.0;
        Ok(probs)
    }
}
