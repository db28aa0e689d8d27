//! # diamond-sim
//!
//! A stochastic baseball game simulator driven by learned event-probability
//! models. Given a pitch-selection oracle and an event-outcome oracle, it
//! simulates full games pitch-by-pitch and aggregates run totals over many
//! simulated games.
//!
//! ## Design Principles
//!
//! 1. **Closed rule set**: the 27 plate-appearance outcomes form a closed
//!    enum, exhaustiveness-checked at compile time. There is no runtime
//!    fallback arm for "unknown event" inside the rules engine; unknown
//!    labels are rejected at the model boundary.
//!
//! 2. **Oracles behind traits**: pitch selection and event outcomes are
//!    opaque probabilistic models consumed through `PitchModel` and
//!    `EventModel`. The simulator owns sampling and thresholding so model
//!    implementations stay pure probability producers.
//!
//! 3. **Deterministic given a seed**: all randomness (handedness coin flips,
//!    outcome sampling) flows through a seeded, forkable `SimRng`. Each game
//!    draws from an independently forked stream.
//!
//! ## Modules
//!
//! - `core`: Game state, RNG, configuration
//! - `events`: Outcome event enum and the event-resolution rules
//! - `model`: Oracle traits, pitch descriptors, categorical sampling
//! - `sim`: At-bat/inning/game loops and the multi-game runner
//! - `error`: Oracle-contract error taxonomy

pub mod core;
pub mod error;
pub mod events;
pub mod model;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{GameState, SimConfig, SimRng, SimRngState};
pub use crate::error::SimError;
pub use crate::events::{resolve, Event};
pub use crate::model::{
    sample_event, EventModel, FixedEventModel, Pitch, PitchModel, PitchType, StaticPitchModel,
    UniformEventModel, EVENT_PROBABILITY_FLOOR,
};
pub use crate::sim::{GameSim, SimulationReport, SimulationRunner};
