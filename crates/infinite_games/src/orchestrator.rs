//! Headless match orchestration between a scripted player and the opponent.

use crate::players::Player;
use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use infinite_tictactoe::{GameEvent, MatchController, Side};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument, warn};

/// Moves after which a match is abandoned without a winner.
pub const MAX_MOVES_PER_MATCH: u32 = 5_000;

/// Result of one orchestrated match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct MatchSummary {
    /// Match winner; `None` if abandoned at the move limit.
    winner: Option<Side>,
    /// Rounds won by the scripted player.
    player_score: u32,
    /// Rounds won by the opponent.
    opponent_score: u32,
    /// Moves applied by both sides.
    moves: u32,
}

/// Runs one match, forwarding every controller event to the channel.
pub struct Orchestrator {
    controller: MatchController,
    player: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    max_moves: u32,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        controller: MatchController,
        player: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            controller,
            player,
            event_tx,
            max_moves: MAX_MOVES_PER_MATCH,
        }
    }

    /// Overrides the move limit.
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// The controller being driven.
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Plays until a side reaches the win threshold or the move limit.
    #[instrument(skip(self), fields(player = %self.player.name()))]
    pub async fn run(&mut self) -> Result<MatchSummary> {
        info!("Starting match orchestration");
        let opponent_delay = Duration::from_millis(*self.controller.config().opponent_delay_ms());
        let round_pause = Duration::from_millis(*self.controller.config().round_pause_ms());
        let mut moves = 0;

        loop {
            self.forward_events()?;

            if self.controller.is_match_over() {
                break;
            }
            if moves >= self.max_moves {
                warn!(moves, "Move limit reached, abandoning match");
                break;
            }

            if self.controller.awaiting_round_reset() {
                sleep(round_pause).await;
                let starter = self.controller.reset_round()?;
                debug!(%starter, "Next round");
                continue;
            }

            if self.controller.opponent_pending() {
                sleep(opponent_delay).await;
                let (decision, _) = self.controller.play_opponent_turn()?;
                debug!(
                    position = %decision.position,
                    strategy = %decision.strategy,
                    "Opponent moved"
                );
            } else {
                let position = self.player.get_move(&self.controller).await?;
                debug!(player = %self.player.name(), %position, "Player moved");
                self.controller.on_cell_activated(position.to_index())?;
            }
            moves += 1;
        }

        let state = self.controller.match_state();
        let summary = MatchSummary::new(
            *state.winner(),
            *state.player_score(),
            *state.opponent_score(),
            moves,
        );
        info!(?summary, "Match finished");
        Ok(summary)
    }

    fn forward_events(&mut self) -> Result<()> {
        for event in self.controller.drain_events() {
            self.event_tx.send(event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::{HeuristicPlayer, RandomPlayer};
    use infinite_tictactoe::MatchConfig;

    fn controller(seed: u64) -> MatchController {
        MatchController::new(MatchConfig::headless().with_seed(Some(seed))).unwrap()
    }

    #[tokio::test]
    async fn test_random_player_match_finishes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let player = Box::new(RandomPlayer::new("Random", Some(2)));
        let mut orchestrator = Orchestrator::new(controller(1), player, tx);

        let summary = orchestrator.run().await.unwrap();
        drop(orchestrator);

        let mut events = Vec::new();
        while let Some(event) = rx.recv().await {
            events.push(event);
        }

        if let Some(winner) = summary.winner() {
            let score = match winner {
                Side::Player => summary.player_score(),
                Side::Opponent => summary.opponent_score(),
            };
            assert_eq!(*score, 3);
            assert_eq!(events.last(), Some(&GameEvent::MatchOver(*winner)));
        }
        assert!(*summary.moves() > 0);
        assert!(matches!(events.first(), Some(GameEvent::CellChanged { .. })));
    }

    #[tokio::test]
    async fn test_move_limit_abandons_match() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let player = Box::new(HeuristicPlayer::new("Heuristic", Some(4)));
        let mut orchestrator = Orchestrator::new(controller(4), player, tx).with_max_moves(2);

        let summary = orchestrator.run().await.unwrap();
        assert_eq!(*summary.moves(), 2);
        assert_eq!(*summary.winner(), None);
        assert!(!orchestrator.controller().is_match_over());
    }

    #[tokio::test]
    async fn test_closed_channel_is_an_error() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let player = Box::new(RandomPlayer::new("Random", Some(2)));
        let mut orchestrator = Orchestrator::new(controller(1), player, tx);
        assert!(orchestrator.run().await.is_err());
    }
}
