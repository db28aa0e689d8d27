//! The closed set of plate-appearance outcome events.
//!
//! The event oracle speaks in label strings and probability vectors; the
//! rules engine speaks in enum variants. `Event::ALL` fixes the canonical
//! ordering, and a probability vector from the oracle must align with it
//! index-for-index. An out-of-vocabulary label is a broken oracle contract
//! and is rejected at this boundary - the resolver itself has no fallback
//! arm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A plate-appearance outcome drawn from the event oracle.
///
/// Exactly the 27 outcomes the outcome model was trained on. Variants are
/// ordered to match the model's output vector; use `Event::ALL` or
/// `Event::index` when working with probability vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    BallInDirt,
    Ball,
    BuntGroundout,
    BuntPopOut,
    CalledStrike,
    Double,
    DoublePlay,
    FoulBall,
    Flyout,
    Forceout,
    GroundedIntoDoublePlay,
    Groundout,
    HitByPitch,
    HomeRun,
    FoulBunt,
    Lineout,
    MissedBunt,
    PopOut,
    SwingingStrike,
    SacBunt,
    SacFly,
    SacFlyDoublePlay,
    Single,
    FoulTip,
    Triple,
    TriplePlay,
    SwingingStrikeBlocked,
}

impl Event {
    /// Number of distinct outcome events.
    pub const COUNT: usize = 27;

    /// All events in canonical (model output) order.
    pub const ALL: [Event; Event::COUNT] = [
        Event::BallInDirt,
        Event::Ball,
        Event::BuntGroundout,
        Event::BuntPopOut,
        Event::CalledStrike,
        Event::Double,
        Event::DoublePlay,
        Event::FoulBall,
        Event::Flyout,
        Event::Forceout,
        Event::GroundedIntoDoublePlay,
        Event::Groundout,
        Event::HitByPitch,
        Event::HomeRun,
        Event::FoulBunt,
        Event::Lineout,
        Event::MissedBunt,
        Event::PopOut,
        Event::SwingingStrike,
        Event::SacBunt,
        Event::SacFly,
        Event::SacFlyDoublePlay,
        Event::Single,
        Event::FoulTip,
        Event::Triple,
        Event::TriplePlay,
        Event::SwingingStrikeBlocked,
    ];

    /// The label string the oracles use for this event.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Event::BallInDirt => "Ball in Dirt",
            Event::Ball => "Ball",
            Event::BuntGroundout => "Bunt Groundout",
            Event::BuntPopOut => "Bunt Pop Out",
            Event::CalledStrike => "Called Strike",
            Event::Double => "Double",
            Event::DoublePlay => "Double Play",
            Event::FoulBall => "Foul Ball",
            Event::Flyout => "Flyout",
            Event::Forceout => "Forceout",
            Event::GroundedIntoDoublePlay => "Grounded Into DP",
            Event::Groundout => "Groundout",
            Event::HitByPitch => "Hit by pitch",
            Event::HomeRun => "Home Run",
            Event::FoulBunt => "Foul Bunt",
            Event::Lineout => "Lineout",
            Event::MissedBunt => "Missed Bunt",
            Event::PopOut => "Pop Out",
            Event::SwingingStrike => "Swinging Strike",
            Event::SacBunt => "Sac Bunt",
            Event::SacFly => "Sac Fly",
            Event::SacFlyDoublePlay => "Sac Fly DP",
            Event::Single => "Single",
            Event::FoulTip => "Foul Tip",
            Event::Triple => "Triple",
            Event::TriplePlay => "Triple Play",
            Event::SwingingStrikeBlocked => "Swinging Strike (Blocked)",
        }
    }

    /// Parse an oracle label.
    ///
    /// Returns `SimError::UnknownEvent` for anything outside the closed set.
    pub fn from_label(label: &str) -> Result<Self, SimError> {
        Event::ALL
            .iter()
            .copied()
            .find(|event| event.label() == label)
            .ok_or_else(|| SimError::UnknownEvent(label.to_string()))
    }

    /// Position of this event in `Event::ALL` (and in oracle probability
    /// vectors).
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Event {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Event::from_label(s)
    }
}
