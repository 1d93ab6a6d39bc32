//! Round countdown
//!
//! One real-time second per call. Reaching zero ends the run no matter how
//! much health the survivor has left.

use super::state::{GameEvent, GameOverReason, GamePhase, GameState};

/// Interval callback: take one second off the clock
pub fn tick_clock(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_remaining = state.time_remaining.saturating_sub(1);
    state.events.push(GameEvent::ClockTick {
        seconds_remaining: state.time_remaining,
    });

    if state.time_remaining == 0 {
        state.end(GameOverReason::TimeUp);
    }
}
