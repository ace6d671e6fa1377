//! Notifications the engine hands back to its host.

use serde::{Deserialize, Serialize};

/// Events produced by engine entry points.
///
/// Every mutating call returns the events it produced, in order. The host
/// reacts after the call comes back: redraw the board, update the clock
/// label, show the solved screen. Nothing re-enters the engine while it is
/// mid-mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Board contents changed; re-render every card
    BoardChanged,

    /// Elapsed time changed (also fired with 0 right after a reset)
    ClockChanged { seconds: u32 },

    /// Every pair has been matched; terminal for the current game
    Solved { total_seconds: u32 },
}
