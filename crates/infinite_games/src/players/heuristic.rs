//! Player that runs the opponent's cascade on its own behalf.

use super::Player;
use anyhow::Result;
use infinite_tictactoe::{MatchController, Position, Side, select_move};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Plays the X side with the same priority cascade as the opponent.
pub struct HeuristicPlayer {
    name: String,
    rng: ChaCha8Rng,
}

impl HeuristicPlayer {
    /// Creates a heuristic player; seeded when `seed` is given.
    pub fn new(name: impl Into<String>, seed: Option<u64>) -> Self {
        Self {
            name: name.into(),
            rng: super::rng_for(seed),
        }
    }
}

#[async_trait::async_trait]
impl Player for HeuristicPlayer {
    async fn get_move(&mut self, controller: &MatchController) -> Result<Position> {
        let available = controller.board().available();
        let decision = select_move(controller.board(), Side::Player, &available, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(
            player = %self.name,
            position = %decision.position,
            strategy = %decision.strategy,
            "Heuristic player chose position"
        );
        Ok(decision.position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
