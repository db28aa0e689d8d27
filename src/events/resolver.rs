//! Event resolution: the transition rules of the game-state machine.
//!
//! `resolve` maps (current state, drawn event) to the next state and an
//! at-bat-over flag. All scoring increments `batting_score`; the loop layers
//! handle the perspective swap at half-inning boundaries.
//!
//! ## Rule summary
//!
//! - Balls and strikes accumulate on the count; the fourth ball converts to
//!   a walk and the third strike to a strikeout before the count would ever
//!   exceed its bound. Fouls add a strike but never the third.
//! - Hits shift runners station-to-station by hit size. A home run scores
//!   batter plus occupants and empties the bases.
//! - Double plays take the lead force: the runner on first if there is one,
//!   otherwise the runners on first and second both clear.
//! - Walks force runners one base only when a trailing runner occupies the
//!   base behind them; a bases-loaded walk scores exactly one run.

use crate::core::GameState;

use super::event::Event;

/// Resolve one drawn event against the game state.
///
/// Mutates `state` in place and returns true when the at-bat is over. The
/// pitch counter advances before the event is applied, so the pitch oracle
/// sees the number of the pitch about to be thrown.
pub fn resolve(state: &mut GameState, event: Event) -> bool {
    state.pitch_number += 1;

    match event {
        Event::Ball | Event::BallInDirt => ball(state),

        Event::FoulBall | Event::FoulBunt => {
            // A foul can bring the count to two strikes but never rings up
            // the third.
            if state.strikes < 2 {
                state.strikes += 1;
            }
            false
        }

        Event::CalledStrike
        | Event::SwingingStrike
        | Event::SwingingStrikeBlocked
        | Event::FoulTip
        | Event::MissedBunt => strike(state),

        Event::Groundout
        | Event::Flyout
        | Event::Lineout
        | Event::PopOut
        | Event::Forceout
        | Event::BuntGroundout
        | Event::BuntPopOut => {
            state.outs += 1;
            true
        }

        Event::Single => {
            state.batting_score += u32::from(state.on_third);
            state.on_third = state.on_second;
            state.on_second = state.on_first;
            state.on_first = true;
            true
        }

        Event::Double => {
            state.batting_score += u32::from(state.on_second) + u32::from(state.on_third);
            state.on_third = state.on_first;
            state.on_second = true;
            state.on_first = false;
            true
        }

        Event::Triple => {
            state.batting_score += u32::from(state.runners_on());
            state.on_third = true;
            state.on_second = false;
            state.on_first = false;
            true
        }

        Event::HomeRun => {
            state.batting_score += 1 + u32::from(state.runners_on());
            state.clear_bases();
            true
        }

        Event::GroundedIntoDoublePlay | Event::DoublePlay | Event::SacFlyDoublePlay => {
            state.outs += 2;
            double_play_bases(state);
            true
        }

        Event::TriplePlay => {
            state.outs += 3;
            true
        }

        Event::SacFly | Event::SacBunt => {
            state.outs += 1;
            state.batting_score += u32::from(state.on_third);
            state.on_third = state.on_second;
            state.on_second = state.on_first;
            state.on_first = false;
            true
        }

        Event::HitByPitch => {
            walk(state);
            true
        }
    }
}

/// Add a ball to the count; the fourth converts to a walk.
fn ball(state: &mut GameState) -> bool {
    state.balls += 1;

    if state.balls == 4 {
        walk(state);
        true
    } else {
        false
    }
}

/// Add a strike to the count; the third is a strikeout.
fn strike(state: &mut GameState) -> bool {
    state.strikes += 1;

    if state.strikes == 3 {
        state.outs += 1;
        true
    } else {
        false
    }
}

/// Award the batter first base, forcing trailing runners.
///
/// A runner advances from base N only when forced by a runner behind them,
/// so all advancement is computed from a snapshot of the pre-walk occupancy.
/// Only a bases-loaded walk scores, and it scores exactly one run.
fn walk(state: &mut GameState) {
    let (first, second, third) = (state.on_first, state.on_second, state.on_third);

    state.batting_score += u32::from(first && second && third);
    state.on_third = third || (first && second);
    state.on_second = second || first;
    state.on_first = true;
}

/// Base clearing for the two-out plays: the lead force is the runner on
/// first when occupied, otherwise first and second both clear.
fn double_play_bases(state: &mut GameState) {
    if state.on_first {
        state.on_first = false;
    } else {
        state.on_first = false;
        state.on_second = false;
    }
}
