//! # Rendering Module
//!
//! Console formatting for the CLI. Everything here is pure string
//! building; the engine core never prints and this module never mutates
//! game state.

use crate::game::TurnOutcome;
use crate::map::Room;

/// Prompt printed before each read of player input.
pub const PROMPT: &str = "> ";

/// Message shown when the player reaches the ending room.
pub const WIN_MESSAGE: &str = "You've made it on time to code review; you win!";

/// Joins a list in prose style: `A, B or C`.
///
/// A single element is printed bare and two elements become `A or B`.
pub fn join_with_or(items: &[String]) -> String {
    match items.split_last() {
        None => String::new(),
        Some((only, [])) => only.clone(),
        Some((last, rest)) => format!("{} or {last}", rest.join(", ")),
    }
}

/// Formats the full room information block: description, reachable
/// directions, and visible items. The items line is omitted entirely when
/// the room holds nothing.
pub fn room_info(room: &Room) -> String {
    let mut info = format!(
        "{}\nFrom here you can go: {}",
        room.description,
        join_with_or(&room.direction_labels()),
    );
    if !room.items.is_empty() {
        info.push_str(&format!("\nItems visible: {}", join_with_or(&room.items)));
    }
    info
}

/// The message a given outcome should print, if any.
///
/// Silent outcomes (successful take/drop, plain continue) return `None`:
/// the caller either redisplays the room or just reprompts.
pub fn outcome_message(outcome: &TurnOutcome) -> Option<String> {
    match outcome {
        TurnOutcome::Win => Some(WIN_MESSAGE.to_string()),
        TurnOutcome::NoSuchDirection(direction) => Some(format!("I can't go \"{direction}\"!")),
        TurnOutcome::NoSuchItem(item) => {
            Some(format!("There is no item \"{item}\" in the room."))
        }
        TurnOutcome::NotInInventory(item) => Some(format!("You don't have \"{item}\"!")),
        TurnOutcome::Unrecognized(raw) => Some(format!("I don't understand \"{raw}\"!")),
        TurnOutcome::History(listing) => Some(listing.clone()),
        TurnOutcome::Continue
        | TurnOutcome::Exit
        | TurnOutcome::ItemTaken
        | TurnOutcome::ItemDropped => None,
    }
}
