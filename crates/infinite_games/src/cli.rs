//! Command-line interface for infinite_games.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Infinite Games - tic-tac-toe where the oldest piece moves
#[derive(Parser, Debug)]
#[command(name = "infinite_games")]
#[command(about = "Infinite tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal UI
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = "infinite_games.toml")]
        config: PathBuf,
    },

    /// Play matches headless and print a summary
    Simulate {
        /// Number of matches to play
        #[arg(short, long, default_value = "10")]
        matches: u32,

        /// Base seed; match `i` uses `seed + i`
        #[arg(short, long)]
        seed: Option<u64>,

        /// Strategy for the X side
        #[arg(short, long, value_enum, default_value = "random")]
        player: PlayerKind,

        /// Moves after which a match is abandoned without a winner
        #[arg(long, default_value_t = crate::orchestrator::MAX_MOVES_PER_MATCH)]
        max_moves: u32,

        /// Path to the TOML config file
        #[arg(short, long, default_value = "infinite_games.toml")]
        config: PathBuf,
    },
}

/// Scripted strategies for the X side in headless play.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Uniform random among empty cells
    Random,
    /// The same cascade the opponent uses
    Heuristic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulate() {
        let cli = Cli::parse_from([
            "infinite_games",
            "simulate",
            "--matches",
            "5",
            "--seed",
            "42",
            "--player",
            "heuristic",
            "--max-moves",
            "200",
        ]);
        match cli.command {
            Command::Simulate {
                matches,
                seed,
                player,
                max_moves,
                config,
            } => {
                assert_eq!(matches, 5);
                assert_eq!(max_moves, 200);
                assert_eq!(seed, Some(42));
                assert_eq!(player, PlayerKind::Heuristic);
                assert_eq!(config, PathBuf::from("infinite_games.toml"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_simulate_move_limit_default() {
        let cli = Cli::parse_from(["infinite_games", "simulate"]);
        match cli.command {
            Command::Simulate { max_moves, .. } => {
                assert_eq!(max_moves, crate::orchestrator::MAX_MOVES_PER_MATCH);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_play_defaults() {
        let cli = Cli::parse_from(["infinite_games", "play"]);
        assert!(matches!(cli.command, Command::Play { .. }));
    }
}
