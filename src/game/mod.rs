//! # Game Module
//!
//! Per-player session state and the multi-session manager.
//!
//! Everything a turn can produce is expressed as a [`TurnOutcome`] value so
//! that presentation layers pattern-match on outcomes instead of comparing
//! message strings.

pub mod manager;
pub mod session;

pub use manager::{GameStatus, SessionManager};
pub use session::{GameSession, SessionPhase};

use serde::{Deserialize, Serialize};

/// The outcome of one processed player command.
///
/// Recoverable problems (bad direction, missing item, unrecognized input)
/// are outcomes, not errors: the session state is unchanged and play
/// continues. The presentation layer decides, per variant, whether to
/// redisplay the full room information or just reprompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Keep playing; redisplay the current room
    Continue,
    /// The player reached the ending room
    Win,
    /// The player asked to quit
    Exit,
    /// An item moved from the room into the inventory
    ItemTaken,
    /// An item moved from the inventory into the room
    ItemDropped,
    /// The named item is not in the current room
    NoSuchItem(String),
    /// The named item is not in the inventory
    NotInInventory(String),
    /// No exit of the current room matches the given direction
    NoSuchDirection(String),
    /// The raw input did not form a recognizable command
    Unrecognized(String),
    /// The formatted visit history, ready for display
    History(String),
}

impl TurnOutcome {
    /// Whether this outcome ends the session (win or explicit quit).
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnOutcome::Win | TurnOutcome::Exit)
    }

    /// Whether the presentation layer should redisplay the full room
    /// information (as opposed to just reprompting).
    pub fn redisplays_room(&self) -> bool {
        matches!(self, TurnOutcome::Continue)
    }
}
