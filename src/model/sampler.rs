//! Thresholded categorical sampling over the closed event set.
//!
//! The event oracle produces a probability vector aligned with
//! `Event::ALL`. Before sampling, entries below `EVENT_PROBABILITY_FLOOR`
//! are zeroed - trained outcome models emit tiny residual mass on implausible
//! outcomes, and the floor must be preserved for bit-compatible behavior.

use crate::core::SimRng;
use crate::error::SimError;
use crate::events::Event;

/// Probabilities below this are treated as zero before sampling.
pub const EVENT_PROBABILITY_FLOOR: f32 = 1e-3;

/// Draw an event from a model-produced probability vector.
///
/// The vector must have exactly `Event::COUNT` finite, non-negative entries;
/// weights need not sum to 1. Violations are oracle contract errors:
///
/// - wrong length: `ProbabilityShape`
/// - NaN/inf (or negative) entry: `NonFiniteProbability`
/// - nothing left after thresholding: `DegenerateDistribution`
pub fn sample_event(probabilities: &[f32], rng: &mut SimRng) -> Result<Event, SimError> {
    if probabilities.len() != Event::COUNT {
        return Err(SimError::ProbabilityShape {
            expected: Event::COUNT,
            actual: probabilities.len(),
        });
    }

    let mut weights = [0.0f32; Event::COUNT];
    for (i, &p) in probabilities.iter().enumerate() {
        if !p.is_finite() || p < 0.0 {
            return Err(SimError::NonFiniteProbability { index: i, value: p });
        }
        weights[i] = if p > EVENT_PROBABILITY_FLOOR { p } else { 0.0 };
    }

    let index = rng
        .choose_weighted(&weights)
        .ok_or(SimError::DegenerateDistribution)?;

    Ok(Event::ALL[index])
}
