//! Simulation loops: at-bat, inning, game, and the multi-game runner.
//!
//! ## Overview
//!
//! - `GameSim`: drives one game to completion against a pitch model and an
//!   event model, layering the at-bat, half-inning, and game termination
//!   rules
//! - `SimulationRunner`: runs many games on independently forked RNG streams
//!   and aggregates the run-total distribution

pub mod game;
pub mod runner;

pub use game::GameSim;
pub use runner::{SimulationReport, SimulationRunner};
