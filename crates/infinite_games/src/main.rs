//! Infinite Games - terminal UI and headless simulator
//!
//! Infinite tic-tac-toe against a heuristic opponent.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app_config;
mod cli;
mod orchestrator;
mod players;
mod tui;

use anyhow::Result;
use app_config::AppConfig;
use clap::Parser;
use cli::{Cli, Command, PlayerKind};
use infinite_tictactoe::{GameEvent, MatchController, Side};
use orchestrator::{MatchSummary, Orchestrator};
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = AppConfig::load_or_default(&config)?;
            init_file_tracing(config.log_file())?;
            tui::run_tui(config).await
        }
        Command::Simulate {
            matches,
            seed,
            player,
            max_moves,
            config,
        } => {
            init_stderr_tracing();
            let config = AppConfig::load_or_default(&config)?;
            run_simulation(&config, matches, seed, player, max_moves).await?;
            Ok(())
        }
    }
}

/// Logs to a file so the terminal UI is not overwritten.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Plays `matches` headless matches and prints the tally.
#[instrument(skip(config))]
async fn run_simulation(
    config: &AppConfig,
    matches: u32,
    seed: Option<u64>,
    player: PlayerKind,
    max_moves: u32,
) -> Result<Tally> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();

    let logger = tokio::spawn(async move {
        let mut rounds = 0u32;
        while let Some(event) = event_rx.recv().await {
            debug!(?event, "Game event");
            if matches!(event, GameEvent::RoundWon { .. }) {
                rounds += 1;
            }
        }
        rounds
    });

    let mut summaries = Vec::with_capacity(matches as usize);
    let mut rounds_played = 0;
    for i in 0..matches {
        let match_seed = seed.map(|s| s.wrapping_add(u64::from(i)));
        let controller = MatchController::new(config.headless_match(match_seed)?)?;
        // Offset so the two sides do not share a random stream.
        let scripted = players::build(player, match_seed.map(|s| s ^ 0x9e37_79b9_7f4a_7c15));
        let mut orchestrator =
            Orchestrator::new(controller, scripted, event_tx.clone()).with_max_moves(max_moves);
        summaries.push(orchestrator.run().await?);
        rounds_played += orchestrator.controller().match_state().round_count() + 1;
    }
    drop(event_tx);
    let rounds = logger.await?;

    let tally = Tally::from_summaries(&summaries);
    info!(?tally, rounds, rounds_played, "Simulation finished");
    println!("Matches played: {}", summaries.len());
    println!("Rounds played:  {}", rounds_played);
    println!("Rounds won:     {}", rounds);
    println!("Player ({:?}) wins: {}", player, tally.player_wins);
    println!("Opponent wins:  {}", tally.opponent_wins);
    println!("Abandoned:      {}", tally.abandoned);
    Ok(tally)
}

/// Match results per side.
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    player_wins: u32,
    opponent_wins: u32,
    abandoned: u32,
}

impl Tally {
    fn from_summaries(summaries: &[MatchSummary]) -> Self {
        summaries.iter().fold(Self::default(), |mut tally, summary| {
            match summary.winner() {
                Some(Side::Player) => tally.player_wins += 1,
                Some(Side::Opponent) => tally.opponent_wins += 1,
                None => tally.abandoned += 1,
            }
            tally
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orchestrator::MAX_MOVES_PER_MATCH;

    #[test]
    fn test_tally() {
        let summaries = vec![
            MatchSummary::new(Some(Side::Opponent), 1, 3, 40),
            MatchSummary::new(Some(Side::Player), 3, 2, 55),
            MatchSummary::new(None, 0, 0, 5_000),
            MatchSummary::new(Some(Side::Opponent), 0, 3, 20),
        ];
        assert_eq!(
            Tally::from_summaries(&summaries),
            Tally {
                player_wins: 1,
                opponent_wins: 2,
                abandoned: 1
            }
        );
    }

    #[tokio::test]
    async fn test_simulation_runs() {
        let config = AppConfig::default();
        let tally = run_simulation(&config, 2, Some(3), PlayerKind::Random, MAX_MOVES_PER_MATCH)
            .await
            .unwrap();
        assert_eq!(tally.player_wins + tally.opponent_wins + tally.abandoned, 2);
    }

    #[tokio::test]
    async fn test_simulation_honours_move_limit() {
        let config = AppConfig::default();
        // Three moves cannot finish a round, let alone a match.
        let tally = run_simulation(&config, 3, Some(8), PlayerKind::Heuristic, 3)
            .await
            .unwrap();
        assert_eq!(
            tally,
            Tally {
                player_wins: 0,
                opponent_wins: 0,
                abandoned: 3
            }
        );
    }
}
