//! Oracle interfaces: pitch descriptors, model traits, outcome sampling.
//!
//! The pitch-selection and event-outcome models are external probabilistic
//! collaborators. This module defines the narrow contracts they are consumed
//! through:
//!
//! - `Pitch` / `PitchType`: the fixed-shape pitch descriptor and its closed
//!   10-entry type vocabulary
//! - `PitchModel` / `EventModel`: the oracle traits
//! - `sampler`: thresholded categorical sampling over the event set
//!
//! Model internals (training, feature scaling, artifact I/O) live outside
//! this crate.

pub mod pitch;
pub mod sampler;
pub mod traits;

pub use pitch::{Pitch, PitchType};
pub use sampler::{sample_event, EVENT_PROBABILITY_FLOOR};
pub use traits::{EventModel, FixedEventModel, PitchModel, StaticPitchModel, UniformEventModel};
