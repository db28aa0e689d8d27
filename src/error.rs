//! Error taxonomy for oracle contract violations.
//!
//! The simulation itself is infallible: given well-formed oracle output it
//! always terminates (modulo the documented tie/run-cap interplay). Every
//! error here marks a broken oracle contract, and none of them are
//! recoverable - the core has no fallback model and nothing transient to
//! retry. A failed game aborts; statistics from games already completed stay
//! with the caller when games are run incrementally.

use thiserror::Error;

/// Fatal errors surfaced by the simulation core.
#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    /// The event oracle produced a label outside the closed 27-entry set.
    #[error("unknown event label: {0:?}")]
    UnknownEvent(String),

    /// A pitch-type tag outside the closed 10-entry vocabulary.
    #[error("unknown pitch type: {0:?}")]
    UnknownPitchType(String),

    /// The event oracle returned a probability vector of the wrong length.
    #[error("probability vector has {actual} entries, expected {expected}")]
    ProbabilityShape { expected: usize, actual: usize },

    /// The event oracle produced a NaN or infinite probability.
    #[error("non-finite probability {value} at index {index}")]
    NonFiniteProbability { index: usize, value: f32 },

    /// Every probability fell below the sampling floor, leaving nothing to
    /// draw from.
    #[error("all event probabilities are zero after thresholding")]
    DegenerateDistribution,

    /// The optional per-at-bat pitch cap was exceeded (the oracle never
    /// emitted a terminating event).
    #[error("at-bat exceeded the configured pitch cap after {pitches} pitches")]
    AtBatStalled { pitches: u32 },
}
