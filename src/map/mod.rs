//! # Map Module
//!
//! The static world description: rooms, exits, and the items they hold.
//!
//! A [`GameMap`] is loaded once from a JSON document and is immutable for
//! the rest of the game, with one deliberate exception: each room owns its
//! item list, which the active session mutates on take/drop. Rooms are
//! identified by exact, case-sensitive name; a name index built at load
//! time makes lookups O(1) instead of scanning the room list.

pub mod validate;

pub use validate::is_schema_valid;

use crate::{WayfarerError, WayfarerResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A labeled edge from one room to another.
///
/// The label is matched case-insensitively during navigation; the target
/// room name is matched exactly. The target is not required to resolve to a
/// room in the map at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    /// Direction label shown to the player, e.g. "East"
    #[serde(rename = "directionName")]
    pub direction_name: String,
    /// Name of the room this exit leads to
    pub room: String,
}

impl Exit {
    /// Creates a new exit with the given label and target room name.
    pub fn new(direction_name: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            direction_name: direction_name.into(),
            room: room.into(),
        }
    }
}

/// A single location in the world.
///
/// Identity is the `name` field, compared case-sensitively. Only the item
/// list mutates after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room name (case-sensitive key)
    pub name: String,
    /// Description shown when the player enters or examines the room
    pub description: String,
    /// Items currently lying in the room, in order
    #[serde(default)]
    pub items: Vec<String>,
    /// Optional image reference for rich presentation layers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Exits out of this room, in declaration order
    #[serde(default)]
    pub directions: Vec<Exit>,
}

impl Room {
    /// Returns the direction labels of this room's exits, in order.
    pub fn direction_labels(&self) -> Vec<String> {
        self.directions
            .iter()
            .map(|exit| exit.direction_name.clone())
            .collect()
    }

    /// Finds the exit whose label matches `direction` case-insensitively.
    ///
    /// Later exits win when labels collide, matching the reference scan
    /// order.
    pub fn exit_matching(&self, direction: &str) -> Option<&Exit> {
        let wanted = direction.to_lowercase();
        self.directions
            .iter()
            .rev()
            .find(|exit| exit.direction_name.to_lowercase() == wanted)
    }
}

/// The full static world: starting/ending room names plus the room set.
///
/// # Examples
///
/// ```
/// use wayfarer::GameMap;
///
/// let map = GameMap::from_json(
///     r#"{
///         "startingRoom": "A",
///         "endingRoom": "B",
///         "rooms": [
///             {"name": "A", "description": "start",
///              "directions": [{"directionName": "East", "room": "B"}]},
///             {"name": "B", "description": "end",
///              "directions": [{"directionName": "West", "room": "A"}]}
///         ]
///     }"#,
/// ).unwrap();
/// assert_eq!(map.starting_room, "A");
/// assert_eq!(map.room("B").unwrap().description, "end");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMap {
    /// Name of the room the player starts in
    #[serde(default)]
    pub starting_room: String,
    /// Name of the room the player must reach to win
    #[serde(default)]
    pub ending_room: String,
    /// Optional auxiliary media reference shown by rich presentation layers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    /// All rooms in the world, in declaration order
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Name -> index into `rooms`, built once at load time
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl GameMap {
    /// Parses a map from its JSON description.
    ///
    /// Fails with [`WayfarerError::Malformed`] when the document does not
    /// parse. Structural validity is a separate concern; see
    /// [`is_schema_valid`].
    pub fn from_json(text: &str) -> WayfarerResult<Self> {
        let mut map: GameMap = serde_json::from_str(text)?;
        map.build_index();
        Ok(map)
    }

    /// Reads and parses a map description from a file.
    ///
    /// Fails with [`WayfarerError::NotFound`] when the file cannot be read
    /// and [`WayfarerError::Malformed`] when it cannot be parsed.
    pub fn load_from_file(path: impl AsRef<Path>) -> WayfarerResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::info!("loaded map description from {}", path.as_ref().display());
        Self::from_json(&text)
    }

    /// Looks up a room by exact name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.index.get(name).map(|&i| &self.rooms[i])
    }

    /// Looks up a room by exact name, mutably.
    ///
    /// Only the room's item list is expected to change after load.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        let i = *self.index.get(name)?;
        self.rooms.get_mut(i)
    }

    /// Rebuilds the name index. Later rooms win on duplicate names,
    /// matching the reference scan order.
    fn build_index(&mut self) {
        self.index = self
            .rooms
            .iter()
            .enumerate()
            .map(|(i, room)| (room.name.clone(), i))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_json() -> &'static str {
        r#"{
            "startingRoom": "Dorm",
            "endingRoom": "Siebel",
            "videoUrl": "https://example.com/win.mp4",
            "rooms": [
                {
                    "name": "Dorm",
                    "description": "Your dorm room.",
                    "items": ["key", "map"],
                    "directions": [{"directionName": "East", "room": "Siebel"}]
                },
                {
                    "name": "Siebel",
                    "description": "The CS building.",
                    "items": [],
                    "image": "https://example.com/siebel.png",
                    "directions": [{"directionName": "West", "room": "Dorm"}]
                }
            ]
        }"#
    }

    #[test]
    fn parses_wire_format_field_names() {
        let map = GameMap::from_json(two_room_json()).unwrap();
        assert_eq!(map.starting_room, "Dorm");
        assert_eq!(map.ending_room, "Siebel");
        assert_eq!(map.video_url.as_deref(), Some("https://example.com/win.mp4"));
        assert_eq!(map.rooms.len(), 2);
        assert_eq!(map.rooms[0].directions[0].direction_name, "East");
        assert_eq!(map.rooms[1].image.as_deref(), Some("https://example.com/siebel.png"));
    }

    #[test]
    fn optional_fields_default() {
        let map = GameMap::from_json(
            r#"{"startingRoom": "A", "endingRoom": "B",
                "rooms": [{"name": "A", "description": "d",
                           "directions": [{"directionName": "Up", "room": "B"}]}]}"#,
        )
        .unwrap();
        assert!(map.video_url.is_none());
        assert!(map.rooms[0].items.is_empty());
        assert!(map.rooms[0].image.is_none());
    }

    #[test]
    fn room_lookup_is_exact_and_case_sensitive() {
        let map = GameMap::from_json(two_room_json()).unwrap();
        assert!(map.room("Dorm").is_some());
        assert!(map.room("dorm").is_none());
        assert!(map.room("Attic").is_none());
    }

    #[test]
    fn exit_matching_is_case_insensitive() {
        let map = GameMap::from_json(two_room_json()).unwrap();
        let dorm = map.room("Dorm").unwrap();
        assert_eq!(dorm.exit_matching("east").unwrap().room, "Siebel");
        assert_eq!(dorm.exit_matching("EAST").unwrap().room, "Siebel");
        assert!(dorm.exit_matching("north").is_none());
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = GameMap::from_json("{ not json").unwrap_err();
        assert!(matches!(err, crate::WayfarerError::Malformed(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = GameMap::load_from_file("/no/such/map.json").unwrap_err();
        assert!(matches!(err, crate::WayfarerError::NotFound(_)));
    }
}
