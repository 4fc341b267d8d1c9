//! Scripted players for the X side in headless play.

mod heuristic;
mod random;

pub use heuristic::HeuristicPlayer;
pub use random::RandomPlayer;

use crate::cli::PlayerKind;
use anyhow::Result;
use infinite_tictactoe::{MatchController, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Only called when the X side is on turn and input is accepted.
    async fn get_move(&mut self, controller: &MatchController) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Builds the player selected on the command line.
pub fn build(kind: PlayerKind, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Random => Box::new(RandomPlayer::new("Random", seed)),
        PlayerKind::Heuristic => Box::new(HeuristicPlayer::new("Heuristic", seed)),
    }
}

fn rng_for(seed: Option<u64>) -> rand_chacha::ChaCha8Rng {
    use rand::SeedableRng;
    match seed {
        Some(seed) => rand_chacha::ChaCha8Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha8Rng::from_entropy(),
    }
}
