//! # Wayfarer CLI Entry Point
//!
//! Loads a map description, builds a session, and runs a synchronous
//! read-eval-print loop over stdin. All game logic lives in the library;
//! this binary only acquires input lines and prints per the outcome of
//! each turn.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use wayfarer::rendering::{outcome_message, room_info, PROMPT};
use wayfarer::{dispatch, tokenize, Command, GameMap, GameSession, WayfarerResult};

/// Command line arguments for the Wayfarer adventure.
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(about = "A room-based text adventure")]
#[command(version)]
struct Args {
    /// Path to the JSON map description
    #[arg(short, long, default_value = "maps/sample.json")]
    map: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> WayfarerResult<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level.as_str()),
    )
    .init();

    log::info!("starting wayfarer v{}", wayfarer::VERSION);

    // Load and schema errors are fatal; nothing to recover into.
    let map = GameMap::load_from_file(&args.map)?;
    let mut session = GameSession::new(map)?;

    run_game_loop(&mut session)
}

/// Main read-eval-print loop. One command is fully processed before the
/// next line is read.
fn run_game_loop(session: &mut GameSession) -> WayfarerResult<()> {
    let stdin = io::stdin();

    // The start sentinel is injected by the driver, not typed by the
    // player; it triggers the initial room display.
    let opening = dispatch(&Command::start_sentinel(), session)?;
    if opening.redisplays_room() {
        print_room(session);
    }
    prompt()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let command = Command::from_tokens(&tokenize(&line));
        let outcome = dispatch(&command, session)?;

        if let Some(message) = outcome_message(&outcome) {
            println!("{message}");
        }
        if outcome.is_terminal() {
            break;
        }
        if outcome.redisplays_room() {
            print_room(session);
        }
        prompt()?;
    }

    log::info!("game loop ended");
    Ok(())
}

fn print_room(session: &GameSession) {
    if let Some(room) = session.current_room_object() {
        println!("{}", room_info(room));
    }
}

fn prompt() -> WayfarerResult<()> {
    print!("{PROMPT}");
    io::stdout().flush()?;
    Ok(())
}
