//! # Wayfarer
//!
//! A single-player, room-based text adventure engine.
//!
//! ## Architecture Overview
//!
//! Wayfarer is split into a small core and thin peripheral layers:
//!
//! - **Map Model**: immutable-after-load description of rooms, exits, and
//!   items, loaded from a JSON map document
//! - **Schema Validator**: structural well-formedness checks run before play
//! - **Game Session**: per-player mutable state (current room, inventory,
//!   visit history) and all transition logic
//! - **Command Interpreter**: turns tokenized player input into session
//!   operations and a [`TurnOutcome`] signal
//! - **Session Manager**: an optional multi-session wrapper keyed by
//!   integer ids, for embedding the engine behind a request handler
//!
//! The presentation layer (console formatting, the CLI loop) consumes
//! [`TurnOutcome`] values and decides what to display; the core never
//! prints.
//!
//! [`TurnOutcome`]: game::TurnOutcome

pub mod game;
pub mod input;
pub mod map;
pub mod rendering;

// Explicit re-exports for commonly used types.
pub use game::{GameSession, GameStatus, SessionManager, SessionPhase, TurnOutcome};
pub use input::{dispatch, tokenize, Command};
pub use map::{is_schema_valid, Exit, GameMap, Room};

/// Core error type for the Wayfarer engine.
#[derive(thiserror::Error, Debug)]
pub enum WayfarerError {
    /// Map description could not be located or read
    #[error("map not found: {0}")]
    NotFound(#[from] std::io::Error),

    /// Map description exists but could not be parsed
    #[error("malformed map: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Map failed schema validation
    #[error("invalid map schema")]
    SchemaInvalid,

    /// A room name did not resolve against the map's room set
    #[error("unknown room: {0}")]
    UnknownRoom(String),

    /// No session exists for the given id
    #[error("no session with id {0}")]
    SessionNotFound(i64),

    /// Session ids are non-negative
    #[error("invalid session id {0}")]
    InvalidId(i64),
}

/// Result type used throughout the Wayfarer codebase.
pub type WayfarerResult<T> = Result<T, WayfarerError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
