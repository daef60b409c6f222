//! # Input Module
//!
//! Tokenizing raw player input and interpreting it as session commands.
//!
//! The interpreter works on pre-tokenized, lowercased input: the first
//! token is the verb and every remaining token is rejoined into a single
//! argument, so `take frontdoor key` becomes verb `take` with argument
//! `frontdoor key`. Dispatch turns a [`Command`] into a [`TurnOutcome`] by
//! calling into the [`GameSession`].

use crate::game::{GameSession, TurnOutcome};
use crate::WayfarerResult;

/// Splits raw input into lowercase tokens.
///
/// Token boundaries are runs of non-word characters (anything that is not
/// alphanumeric or an underscore); empty tokens never survive, so leading
/// and repeated whitespace is harmless.
///
/// # Examples
///
/// ```
/// use wayfarer::tokenize;
///
/// assert_eq!(tokenize("  go     WEST "), ["go", "west"]);
/// assert_eq!(tokenize("take frontdoor key"), ["take", "frontdoor", "key"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// A player command: a verb plus a single rejoined argument.
///
/// The argument is empty for verbs that do not need one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The first input token
    pub verb: String,
    /// Every following token, rejoined with single spaces
    pub argument: String,
}

impl Command {
    /// Creates a command from an already-split verb and argument.
    pub fn new(verb: impl Into<String>, argument: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            argument: argument.into(),
        }
    }

    /// Builds a command from tokenized input: first token is the verb, the
    /// rest become the argument.
    pub fn from_tokens(tokens: &[String]) -> Self {
        match tokens.split_first() {
            Some((verb, rest)) => Self::new(verb.clone(), rest.join(" ")),
            None => Self::new("", ""),
        }
    }

    /// The start-of-session sentinel, injected by the driver rather than
    /// typed by the player. Its capitalization distinguishes it from any
    /// lowercased player input.
    pub fn start_sentinel() -> Self {
        Self::new("Start", "Game")
    }

    /// Reconstructs the input as the player would recognize it, for
    /// unrecognized-command reporting.
    pub fn raw(&self) -> String {
        if self.argument.is_empty() {
            self.verb.clone()
        } else {
            format!("{} {}", self.verb, self.argument)
        }
    }
}

/// Interprets one command against a session.
///
/// Recognized verbs: `quit`/`exit` end the session, `examine` redisplays
/// the current room, `history` lists visited rooms (all four work without
/// an argument), and `go`/`take`/`drop` delegate to the session and require
/// one. Anything else, including an argument-taking verb with no argument,
/// yields [`TurnOutcome::Unrecognized`] carrying the raw input. The start
/// sentinel produces [`TurnOutcome::Continue`], which triggers the initial
/// room display.
pub fn dispatch(command: &Command, session: &mut GameSession) -> WayfarerResult<TurnOutcome> {
    if *command == Command::start_sentinel() {
        return Ok(TurnOutcome::Continue);
    }

    let has_argument = !command.argument.is_empty();
    let outcome = match command.verb.as_str() {
        "quit" | "exit" => {
            session.mark_exited();
            TurnOutcome::Exit
        }
        "examine" => session.examine(),
        "history" => session.show_history(),
        "go" if has_argument => session.go(&command.argument)?,
        "take" if has_argument => session.take(&command.argument)?,
        "drop" if has_argument => session.drop_item(&command.argument)?,
        _ => TurnOutcome::Unrecognized(command.raw()),
    };

    Ok(outcome)
}
