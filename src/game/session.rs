//! # Game Session
//!
//! One player's mutable progress through a [`GameMap`]: current room,
//! inventory, visit history, and the set of currently available direction
//! labels. All state transitions of the engine live here.
//!
//! A session is created once per player at map-load time and mutates on
//! every successful move, take, or drop. It is single-threaded and
//! turn-based: one command is fully processed before the next is accepted.

use crate::game::TurnOutcome;
use crate::map::{is_schema_valid, GameMap, Room};
use crate::{WayfarerError, WayfarerResult};

/// Lifecycle phase of a session.
///
/// There is no losing terminal state; a session ends by winning or by an
/// explicit quit. Callers must stop issuing commands once a terminal phase
/// is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// The player is still exploring
    InProgress,
    /// The player reached the ending room
    Won,
    /// The player quit explicitly
    Exited,
}

/// A single player's game state, owning its map.
///
/// # Examples
///
/// ```
/// use wayfarer::{GameMap, GameSession, TurnOutcome};
///
/// let map = GameMap::from_json(
///     r#"{"startingRoom": "A", "endingRoom": "B", "rooms": [
///         {"name": "A", "description": "start",
///          "directions": [{"directionName": "East", "room": "B"}]},
///         {"name": "B", "description": "end",
///          "directions": [{"directionName": "West", "room": "A"}]}
///     ]}"#,
/// ).unwrap();
/// let mut session = GameSession::new(map).unwrap();
/// assert_eq!(session.current_room(), "A");
/// assert_eq!(session.go("east").unwrap(), TurnOutcome::Win);
/// assert_eq!(session.history(), ["A", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    map: GameMap,
    current_room: String,
    inventory: Vec<String>,
    history: Vec<String>,
    directions: Vec<String>,
    phase: SessionPhase,
    /// The last (verb, argument) pair executed through a manager, owned per
    /// session so concurrent sessions cannot observe each other's commands.
    last_command: Option<(String, String)>,
}

impl GameSession {
    /// Creates a session bound to the map's starting room.
    ///
    /// Validates the map schema first and fails with
    /// [`WayfarerError::SchemaInvalid`] on a structurally invalid map, or
    /// [`WayfarerError::UnknownRoom`] when the starting room name does not
    /// resolve. On success the starting room is the first history entry and
    /// the available directions reflect its exits.
    pub fn new(map: GameMap) -> WayfarerResult<Self> {
        if !is_schema_valid(&map) {
            return Err(WayfarerError::SchemaInvalid);
        }

        let current_room = map.starting_room.clone();
        let start = map
            .room(&current_room)
            .ok_or_else(|| WayfarerError::UnknownRoom(current_room.clone()))?;
        let directions = start.direction_labels();

        log::info!("session started in room {current_room:?}");

        Ok(Self {
            map,
            history: vec![current_room.clone()],
            current_room,
            inventory: Vec::new(),
            directions,
            phase: SessionPhase::InProgress,
            last_command: None,
        })
    }

    /// The name of the room the player is currently in.
    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    /// The current room's full description, if it resolves in the map.
    ///
    /// The only way this can be `None` is a prior move onto an exit whose
    /// target room does not exist.
    pub fn current_room_object(&self) -> Option<&Room> {
        self.map.room(&self.current_room)
    }

    /// The items currently held by the player, in pickup order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    /// Every room name visited, in order, duplicates included. The starting
    /// room is always the first entry.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Direction labels available from the current room. Empty once the
    /// ending room is reached.
    pub fn directions(&self) -> &[String] {
        &self.directions
    }

    /// The map this session plays on.
    pub fn map(&self) -> &GameMap {
        &self.map
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Whether the player has reached the ending room.
    pub fn has_won(&self) -> bool {
        self.phase == SessionPhase::Won
    }

    /// Marks the session as explicitly quit.
    pub fn mark_exited(&mut self) {
        self.phase = SessionPhase::Exited;
    }

    /// Records the last (verb, argument) pair executed against this session.
    pub fn set_last_command(&mut self, verb: &str, argument: &str) {
        self.last_command = Some((verb.to_string(), argument.to_string()));
    }

    /// The last command executed against this session, if any.
    pub fn last_command(&self) -> Option<(&str, &str)> {
        self.last_command
            .as_ref()
            .map(|(v, a)| (v.as_str(), a.as_str()))
    }

    /// Moves the player through the exit whose label matches `direction`
    /// case-insensitively.
    ///
    /// On a match the target room name becomes the current room and is
    /// appended to history unconditionally, before the target is checked
    /// against the room set. Reaching the ending room yields
    /// [`TurnOutcome::Win`] and leaves the available directions empty.
    /// Otherwise the directions are recomputed from the new room; a target
    /// that does not resolve is a [`WayfarerError::UnknownRoom`] error (with
    /// the history entry already appended).
    ///
    /// No matching exit yields [`TurnOutcome::NoSuchDirection`] carrying the
    /// raw input, with all state unchanged.
    pub fn go(&mut self, direction: &str) -> WayfarerResult<TurnOutcome> {
        let room = self
            .map
            .room(&self.current_room)
            .ok_or_else(|| WayfarerError::UnknownRoom(self.current_room.clone()))?;

        let target = match room.exit_matching(direction) {
            Some(exit) => exit.room.clone(),
            None => return Ok(TurnOutcome::NoSuchDirection(direction.to_string())),
        };

        log::debug!("moving {} -> {target}", self.current_room);

        self.current_room = target.clone();
        self.history.push(target.clone());
        self.directions.clear();

        if target == self.map.ending_room {
            self.phase = SessionPhase::Won;
            log::info!("ending room {target:?} reached");
            return Ok(TurnOutcome::Win);
        }

        let next = self
            .map
            .room(&target)
            .ok_or(WayfarerError::UnknownRoom(target))?;
        self.directions = next.direction_labels();

        Ok(TurnOutcome::Continue)
    }

    /// Takes an item from the current room into the inventory.
    ///
    /// Matching against the room's item list lowercases the stored names;
    /// the input is expected to be lowercased already by the interpreter.
    /// The first matching occurrence leaves the room and the input string is
    /// appended to the inventory as given.
    pub fn take(&mut self, item: &str) -> WayfarerResult<TurnOutcome> {
        let current = self.current_room.clone();
        let room = self
            .map
            .room_mut(&current)
            .ok_or(WayfarerError::UnknownRoom(current))?;

        match room.items.iter().position(|held| held.to_lowercase() == item) {
            Some(i) => {
                room.items.remove(i);
                self.inventory.push(item.to_string());
                log::debug!("took {item:?} in {}", self.current_room);
                Ok(TurnOutcome::ItemTaken)
            }
            None => Ok(TurnOutcome::NoSuchItem(item.to_string())),
        }
    }

    /// Drops an item from the inventory into the current room.
    ///
    /// Inventory matching is exact. The first matching occurrence is removed
    /// and the typed string is appended to the room's item list; a room may
    /// end up holding duplicates.
    pub fn drop_item(&mut self, item: &str) -> WayfarerResult<TurnOutcome> {
        let Some(i) = self.inventory.iter().position(|held| held == item) else {
            return Ok(TurnOutcome::NotInInventory(item.to_string()));
        };

        let current = self.current_room.clone();
        let room = self
            .map
            .room_mut(&current)
            .ok_or(WayfarerError::UnknownRoom(current))?;

        self.inventory.remove(i);
        room.items.push(item.to_string());
        log::debug!("dropped {item:?} in {}", self.current_room);
        Ok(TurnOutcome::ItemDropped)
    }

    /// Formats the full visit history as a single display string.
    pub fn show_history(&self) -> TurnOutcome {
        TurnOutcome::History(format!("Your history rooms: [{}]", self.history.join(", ")))
    }

    /// Redisplays the current room. No state change.
    pub fn examine(&self) -> TurnOutcome {
        TurnOutcome::Continue
    }
}
