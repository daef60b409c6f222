//! # Schema Validation
//!
//! Structural well-formedness checks run on a loaded map before play
//! begins. A `false` result is fatal: the caller must refuse to start a
//! session on the map.
//!
//! All comparisons here are exact-string (no trimming, no case folding).
//! The only case-insensitive matching in the engine is exit-label matching
//! during navigation, and that asymmetry is intentional.

use crate::map::GameMap;

/// Checks the structural validity of a loaded map.
///
/// Returns `false` when any of the following hold:
/// - the starting or ending room name is unset (empty)
/// - fewer than two rooms exist
/// - any room has an empty name, empty description, or zero exits
/// - any exit has an empty label or an empty target room name
///
/// Exit targets are *not* required to resolve to rooms in the set; an
/// unresolvable target surfaces at move time instead.
///
/// # Examples
///
/// ```
/// use wayfarer::{is_schema_valid, GameMap};
///
/// let map = GameMap::from_json(
///     r#"{"startingRoom": "A", "endingRoom": "B", "rooms": [
///         {"name": "A", "description": "a",
///          "directions": [{"directionName": "East", "room": "B"}]},
///         {"name": "B", "description": "b",
///          "directions": [{"directionName": "West", "room": "A"}]}
///     ]}"#,
/// ).unwrap();
/// assert!(is_schema_valid(&map));
/// ```
pub fn is_schema_valid(map: &GameMap) -> bool {
    if map.starting_room.is_empty() || map.ending_room.is_empty() || map.rooms.len() < 2 {
        return false;
    }

    for room in &map.rooms {
        if room.name.is_empty() || room.description.is_empty() || room.directions.is_empty() {
            return false;
        }

        for exit in &room.directions {
            if exit.direction_name.is_empty() || exit.room.is_empty() {
                return false;
            }
        }
    }

    true
}
