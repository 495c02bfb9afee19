//! domino-autoplay - Play a game between automated players
//!
//! Deals a seeded game, lets every seat play by the move search, and prints
//! each step and the final standing.
//!
//! Usage: domino-autoplay --seed 7 --players 3
//!
//! Set `RUST_LOG=domino_rules=debug` to watch placements and draws.

use clap::Parser;
use domino_rules::{DominoGameBuilder, EndReason, GameResult, PlayerKind, StepOutcome};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "domino-autoplay")]
#[command(about = "Play a seeded dominoes game between automated players")]
#[command(version)]
struct Args {
    /// Seed for the shuffle
    #[arg(short = 's', long = "seed", default_value_t = 42)]
    seed: u64,

    /// Number of players (2-4)
    #[arg(short = 'p', long = "players", default_value_t = 2)]
    players: usize,

    /// Tiles dealt to each player
    #[arg(long = "hand-size", default_value_t = 7)]
    hand_size: usize,

    /// Highest pip value in the set
    #[arg(long = "max-pip", default_value_t = 6)]
    max_pip: u8,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    let mut game = match DominoGameBuilder::new()
        .seed(args.seed)
        .players(vec![PlayerKind::Automated; args.players])
        .tiles_per_hand(args.hand_size)
        .max_pip(args.max_pip)
        .build()
    {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Invalid game setup: {}", e);
            std::process::exit(2);
        }
    };

    match game.open() {
        Ok((player, turn)) => println!("{} opens with {}", player, turn.tile()),
        Err(e) => {
            eprintln!("Could not open: {}", e);
            std::process::exit(1);
        }
    }

    let outcome = loop {
        match game.step() {
            Ok(StepOutcome::Played { player, turn }) => match turn.anchor() {
                Some(site) => println!("{} plays {} {:?} of {}", player, turn.tile(), site.direction, site.anchor),
                None => println!("{} plays {}", player, turn.tile()),
            },
            Ok(StepOutcome::Drew { player, tile }) => println!("{} draws {}", player, tile),
            Ok(StepOutcome::Passed { player }) => println!("{} passes", player),
            Ok(StepOutcome::Finished(outcome)) => break outcome,
            Ok(other) => {
                eprintln!("Unexpected step for an automated game: {:?}", other);
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("Step failed: {}", e);
                std::process::exit(1);
            }
        }
    };

    let how = match outcome.reason {
        EndReason::Domino => "domino",
        EndReason::Blocked => "blocked",
    };
    match &outcome.result {
        GameResult::Winner(player) => println!("{} wins ({})", player, how),
        GameResult::Draw(players) => {
            let names: Vec<String> = players.iter().map(ToString::to_string).collect();
            println!("Draw between {} ({})", names.join(", "), how);
        }
    }
    for (player, value) in outcome.hand_values.iter() {
        println!("  {}: {} pips left", player, value);
    }
}
