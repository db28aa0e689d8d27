//! Game state: everything needed to resolve at-bats and decide termination.
//!
//! ## Score perspective
//!
//! `batting_score` and `pitching_score` are *perspective* totals: they always
//! hold "runs for the side batting next" and "runs for the side fielding
//! next". The loop layers swap them at every half-inning boundary instead of
//! tracking per-team identity. Callers that want a per-team breakdown must do
//! their own bookkeeping; the simulator only promises the combined total.
//!
//! ## Mutation discipline
//!
//! Only `events::resolve` mutates scores, bases, and outs. The loop layers
//! own reset timing via `reset_for_inning` / `reset_for_at_bat`, and nothing
//! else touches the state.

use serde::{Deserialize, Serialize};

use super::rng::SimRng;

/// Complete game state for one simulated game.
///
/// One live instance per game. Fields are a closed, known set, so this is a
/// fixed-field struct rather than any kind of keyed map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Runs for the side currently batting.
    pub batting_score: u32,

    /// Runs for the side currently fielding.
    pub pitching_score: u32,

    /// Balls in the current count. Always in `[0, 3]` between pitches; the
    /// fourth ball is converted to a walk before it is ever observable.
    pub balls: u8,

    /// Strikes in the current count. Always in `[0, 2]` between pitches; the
    /// third strike is converted to a strikeout before it is ever observable.
    pub strikes: u8,

    /// Outs in the current half-inning. Multi-out events (double/triple
    /// plays) may push this past 3 transiently; the inning loop reacts on the
    /// same iteration.
    pub outs: u8,

    /// Pitch counter within the current at-bat, starting at 1. Informational;
    /// consumed by the pitch oracle.
    pub pitch_number: u32,

    /// Runner on first base.
    pub on_first: bool,

    /// Runner on second base.
    pub on_second: bool,

    /// Runner on third base.
    pub on_third: bool,

    /// Current inning, 1-based. Incremented once per completed full inning.
    pub inning: u32,

    /// Pitcher handedness, redrawn uniformly each at-bat.
    pub pitcher_is_righty: bool,

    /// Batter handedness, redrawn uniformly each at-bat.
    pub batter_is_righty: bool,

    /// True during the top half (away side batting).
    pub is_top_half: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create a fresh state for the start of a game.
    #[must_use]
    pub fn new() -> Self {
        Self {
            batting_score: 0,
            pitching_score: 0,
            balls: 0,
            strikes: 0,
            outs: 0,
            pitch_number: 1,
            on_first: false,
            on_second: false,
            on_third: false,
            inning: 1,
            pitcher_is_righty: true,
            batter_is_righty: false,
            is_top_half: true,
        }
    }

    /// Reset the per-inning subset: outs, all three bases, top-half flag.
    pub fn reset_for_inning(&mut self) {
        self.outs = 0;
        self.clear_bases();
        self.is_top_half = true;
    }

    /// Reset the per-half subset when the top half ends: outs and bases
    /// clear, bottom half begins, and the score perspective swaps.
    pub fn begin_bottom_half(&mut self) {
        self.outs = 0;
        self.clear_bases();
        self.is_top_half = false;
        self.swap_scores();
    }

    /// Reset the per-at-bat subset: count, pitch counter, handedness.
    ///
    /// Handedness is redrawn as two independent coin flips; it is a feature
    /// fed to the oracles, not derived from any roster.
    pub fn reset_for_at_bat(&mut self, rng: &mut SimRng) {
        self.balls = 0;
        self.strikes = 0;
        self.pitch_number = 1;
        self.pitcher_is_righty = rng.coin_flip();
        self.batter_is_righty = rng.coin_flip();
    }

    /// Remove all runners.
    pub fn clear_bases(&mut self) {
        self.on_first = false;
        self.on_second = false;
        self.on_third = false;
    }

    /// Swap the offense/defense score perspective.
    pub fn swap_scores(&mut self) {
        std::mem::swap(&mut self.batting_score, &mut self.pitching_score);
    }

    /// Combined run total of both sides.
    #[must_use]
    pub fn combined_score(&self) -> u32 {
        self.batting_score + self.pitching_score
    }

    /// Number of occupied bases.
    #[must_use]
    pub fn runners_on(&self) -> u8 {
        u8::from(self.on_first) + u8::from(self.on_second) + u8::from(self.on_third)
    }

    /// True when first, second, and third are all occupied.
    #[must_use]
    pub fn bases_loaded(&self) -> bool {
        self.on_first && self.on_second && self.on_third
    }
}
