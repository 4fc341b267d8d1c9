//! Player that picks uniformly among empty cells.

use super::Player;
use anyhow::Result;
use infinite_tictactoe::{MatchController, Position};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Picks any empty cell.
pub struct RandomPlayer {
    name: String,
    rng: ChaCha8Rng,
}

impl RandomPlayer {
    /// Creates a random player; seeded when `seed` is given.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            name: name.into(),
            rng: super::rng_for(seed),
        }
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn get_move(&mut self, controller: &MatchController) -> Result<Position> {
        let available = controller.board().available();
        let position = available
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(player = %self.name, %position, "Random player chose position");
        Ok(position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinite_tictactoe::MatchConfig;

    #[tokio::test]
    async fn test_picks_empty_cell() {
        let mut controller =
            MatchController::new(MatchConfig::headless().with_seed(Some(1))).unwrap();
        controller.on_cell_activated(4).unwrap();
        controller.play_opponent_turn().unwrap();

        let mut player = RandomPlayer::new("r", Some(3));
        for _ in 0..20 {
            let position = player.get_move(&controller).await.unwrap();
            assert!(controller.board().is_empty(position));
        }
    }
}
