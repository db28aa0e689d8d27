//! Core simulator types: game state, RNG, configuration.
//!
//! These are the building blocks the rules engine and the loop layers share.
//! Nothing in here knows about oracles or probability models.

pub mod config;
pub mod rng;
pub mod state;

pub use config::SimConfig;
pub use rng::{SimRng, SimRngState};
pub use state::GameState;
