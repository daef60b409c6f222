//! # Session Manager
//!
//! An optional multi-session wrapper around [`GameSession`], for embedding
//! the engine behind a request handler. Sessions are independent, keyed by
//! a monotonically increasing integer id, and share no mutable state; in
//! particular each session owns its own last-command memory.
//!
//! The manager exposes a poll-style surface: [`SessionManager::execute`]
//! applies a command and returns nothing, and callers observe the result
//! through [`SessionManager::status`].

use crate::game::GameSession;
use crate::input::{dispatch, Command};
use crate::map::GameMap;
use crate::{WayfarerError, WayfarerResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Fixed label offered for the `history` verb in the command options map.
const HISTORY_OPTION_LABEL: &str = "Visited Locations";

/// A point-in-time snapshot of one session, shaped for presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    /// True when the session state could not be read coherently
    pub error: bool,
    /// The session this snapshot describes
    pub id: i64,
    /// Current room description, or the visit listing after a `history`
    /// command
    pub message: String,
    /// Image reference of the current room, if any
    pub image_url: Option<String>,
    /// The map's auxiliary media reference; cleared once the game is won
    pub video_url: Option<String>,
    /// Verb -> argument candidates; empty once the game is won
    pub command_options: HashMap<String, Vec<String>>,
}

/// Owns every live session plus the id counter.
///
/// # Examples
///
/// ```
/// use wayfarer::{GameMap, SessionManager};
///
/// let map = GameMap::from_json(
///     r#"{"startingRoom": "A", "endingRoom": "B", "rooms": [
///         {"name": "A", "description": "start",
///          "directions": [{"directionName": "East", "room": "B"}]},
///         {"name": "B", "description": "end",
///          "directions": [{"directionName": "West", "room": "A"}]}
///     ]}"#,
/// ).unwrap();
/// let mut manager = SessionManager::new(map);
/// let id = manager.new_session().unwrap();
/// assert_eq!(id, 0);
/// manager.execute(id, "go", "East").unwrap();
/// assert!(manager.status(id).unwrap().command_options.is_empty());
/// ```
#[derive(Debug)]
pub struct SessionManager {
    template: GameMap,
    sessions: BTreeMap<i64, GameSession>,
    next_id: i64,
}

impl SessionManager {
    /// Creates a manager that spawns sessions on copies of `template`.
    ///
    /// Each session gets its own map copy so take/drop in one session never
    /// shows up in another.
    pub fn new(template: GameMap) -> Self {
        Self {
            template,
            sessions: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Creates a manager from a map description file.
    pub fn from_file(path: impl AsRef<Path>) -> WayfarerResult<Self> {
        Ok(Self::new(GameMap::load_from_file(path)?))
    }

    /// Drops every session and resets the id counter to zero.
    pub fn reset(&mut self) {
        self.sessions.clear();
        self.next_id = 0;
        log::info!("session manager reset");
    }

    /// Starts a new session and returns its id.
    ///
    /// Ids start at 0 and increase monotonically for the life of the
    /// manager; destroyed ids are never reused.
    pub fn new_session(&mut self) -> WayfarerResult<i64> {
        let session = GameSession::new(self.template.clone())?;
        let id = self.next_id;
        self.next_id += 1;
        self.sessions.insert(id, session);
        log::info!("created session {id}");
        Ok(id)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no sessions are live.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Borrows a session by id.
    pub fn session(&self, id: i64) -> WayfarerResult<&GameSession> {
        if id < 0 {
            return Err(WayfarerError::InvalidId(id));
        }
        self.sessions
            .get(&id)
            .ok_or(WayfarerError::SessionNotFound(id))
    }

    /// Returns the state snapshot of the session with the given id.
    ///
    /// The message is the current room's description, or the visit listing
    /// when this session's own last command was `history`. The command
    /// options map offers `go` the direction labels, `take` the room items,
    /// `drop` the inventory, and `history` a fixed label. Once the ending
    /// room is reached the video reference and the entire options map are
    /// cleared.
    pub fn status(&self, id: i64) -> WayfarerResult<GameStatus> {
        let session = self.session(id)?;

        let mut error = false;
        let room = session.current_room_object();
        let message = match session.last_command() {
            Some(("history", _)) => {
                format!("you've visited: [{}]", session.history().join(", "))
            }
            _ => match room {
                Some(room) => room.description.clone(),
                None => {
                    error = true;
                    String::new()
                }
            },
        };

        let image_url = room.and_then(|r| r.image.clone());
        let mut video_url = session.map().video_url.clone();

        let mut command_options = HashMap::new();
        command_options.insert("go".to_string(), session.directions().to_vec());
        command_options.insert(
            "history".to_string(),
            vec![HISTORY_OPTION_LABEL.to_string()],
        );
        command_options.insert(
            "take".to_string(),
            room.map(|r| r.items.clone()).unwrap_or_default(),
        );
        command_options.insert("drop".to_string(), session.inventory().to_vec());

        if session.has_won() {
            video_url = None;
            command_options.clear();
        }

        Ok(GameStatus {
            error,
            id,
            message,
            image_url,
            video_url,
            command_options,
        })
    }

    /// Destroys the session with the given id.
    ///
    /// Returns whether a session was found and removed.
    pub fn destroy(&mut self, id: i64) -> WayfarerResult<bool> {
        if id < 0 {
            return Err(WayfarerError::InvalidId(id));
        }
        let removed = self.sessions.remove(&id).is_some();
        if removed {
            log::info!("destroyed session {id}");
        }
        Ok(removed)
    }

    /// Applies one command to the session with the given id.
    ///
    /// Both command parts are lowercased before dispatch and recorded as the
    /// session's last command. There is no direct return value; callers
    /// observe the effect through [`SessionManager::status`].
    pub fn execute(&mut self, id: i64, verb: &str, argument: &str) -> WayfarerResult<()> {
        if id < 0 {
            return Err(WayfarerError::InvalidId(id));
        }
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(WayfarerError::SessionNotFound(id))?;

        let verb = verb.to_lowercase();
        let argument = argument.to_lowercase();
        session.set_last_command(&verb, &argument);

        let outcome = dispatch(&Command::new(verb, argument), session)?;
        log::debug!("session {id}: {outcome:?}");
        Ok(())
    }

    /// Leaderboard computation is not implemented.
    pub fn fetch_leaderboard(&self) -> Option<BTreeMap<String, i64>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        let map = GameMap::from_json(
            r#"{"startingRoom": "Hall", "endingRoom": "Vault",
                "videoUrl": "https://example.com/win.mp4",
                "rooms": [
                {"name": "Hall", "description": "A long hall.",
                 "items": ["key"],
                 "image": "https://example.com/hall.png",
                 "directions": [{"directionName": "East", "room": "Vault"}]},
                {"name": "Vault", "description": "The vault.",
                 "directions": [{"directionName": "West", "room": "Hall"}]}
            ]}"#,
        )
        .unwrap();
        SessionManager::new(map)
    }

    #[test]
    fn ids_start_at_zero_and_increment() {
        let mut manager = manager();
        assert_eq!(manager.new_session().unwrap(), 0);
        assert_eq!(manager.new_session().unwrap(), 1);
        assert_eq!(manager.new_session().unwrap(), 2);
    }

    #[test]
    fn destroyed_ids_are_not_reused() {
        let mut manager = manager();
        let id = manager.new_session().unwrap();
        assert!(manager.destroy(id).unwrap());
        assert_eq!(manager.new_session().unwrap(), 1);
    }

    #[test]
    fn destroy_reports_missing_sessions() {
        let mut manager = manager();
        assert!(!manager.destroy(7).unwrap());
    }

    #[test]
    fn negative_ids_are_rejected_everywhere() {
        let mut manager = manager();
        assert!(matches!(manager.status(-1), Err(WayfarerError::InvalidId(-1))));
        assert!(matches!(manager.destroy(-1), Err(WayfarerError::InvalidId(-1))));
        assert!(matches!(
            manager.execute(-1, "go", "East"),
            Err(WayfarerError::InvalidId(-1))
        ));
    }

    #[test]
    fn unknown_ids_are_session_not_found() {
        let manager = manager();
        assert!(matches!(
            manager.status(3),
            Err(WayfarerError::SessionNotFound(3))
        ));
    }

    #[test]
    fn status_reflects_the_current_room() {
        let mut manager = manager();
        let id = manager.new_session().unwrap();
        let status = manager.status(id).unwrap();
        assert!(!status.error);
        assert_eq!(status.message, "A long hall.");
        assert_eq!(status.image_url.as_deref(), Some("https://example.com/hall.png"));
        assert_eq!(status.video_url.as_deref(), Some("https://example.com/win.mp4"));
        assert_eq!(status.command_options["go"], vec!["East"]);
        assert_eq!(status.command_options["take"], vec!["key"]);
        assert!(status.command_options["drop"].is_empty());
        assert_eq!(status.command_options["history"], vec![HISTORY_OPTION_LABEL]);
    }

    #[test]
    fn history_command_switches_the_status_message() {
        let mut manager = manager();
        let id = manager.new_session().unwrap();
        manager.execute(id, "history", "").unwrap();
        let status = manager.status(id).unwrap();
        assert_eq!(status.message, "you've visited: [Hall]");
    }

    #[test]
    fn winning_clears_video_and_command_options() {
        let mut manager = manager();
        let id = manager.new_session().unwrap();
        manager.execute(id, "go", "East").unwrap();
        let status = manager.status(id).unwrap();
        assert!(status.video_url.is_none());
        assert!(status.command_options.is_empty());
    }

    #[test]
    fn sessions_do_not_share_last_command_state() {
        let mut manager = manager();
        let a = manager.new_session().unwrap();
        let b = manager.new_session().unwrap();
        manager.execute(a, "history", "").unwrap();
        assert_eq!(manager.status(a).unwrap().message, "you've visited: [Hall]");
        assert_eq!(manager.status(b).unwrap().message, "A long hall.");
    }

    #[test]
    fn sessions_do_not_share_room_items() {
        let mut manager = manager();
        let a = manager.new_session().unwrap();
        let b = manager.new_session().unwrap();
        manager.execute(a, "take", "key").unwrap();
        assert!(manager.status(a).unwrap().command_options["take"].is_empty());
        assert_eq!(manager.status(b).unwrap().command_options["take"], vec!["key"]);
    }

    #[test]
    fn reset_restarts_the_id_counter() {
        let mut manager = manager();
        manager.new_session().unwrap();
        manager.new_session().unwrap();
        manager.reset();
        assert!(manager.is_empty());
        assert_eq!(manager.new_session().unwrap(), 0);
    }

    #[test]
    fn leaderboard_is_a_stub() {
        assert!(manager().fetch_leaderboard().is_none());
    }
}
