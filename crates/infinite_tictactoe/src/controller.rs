//! Match flow: turns, scores, round resets and the move gate.
//!
//! The controller owns the current [`RoundState`] and the [`MatchState`]
//! that outlives it. Presentation code feeds it input through
//! [`MatchController::on_cell_activated`], [`MatchController::play_opponent_turn`],
//! [`MatchController::reset_round`] and [`MatchController::new_match`], and
//! reads back [`GameEvent`]s with [`MatchController::drain_events`]. Pacing
//! (the pause before the opponent answers, the pause after a won round) is
//! left to the caller: the controller only says what is due next.

use super::action::RejectedMove;
use super::config::{ConfigError, MatchConfig};
use super::engine::{Outcome, RoundState};
use super::events::GameEvent;
use super::heuristic::{self, Decision};
use super::rules;
use super::{Board, Cell, Position, Side};
use derive_getters::Getters;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Scores and round bookkeeping that persist across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchState {
    /// Rounds won by the player.
    player_score: u32,
    /// Rounds won by the opponent.
    opponent_score: u32,
    /// Round resets since the match began.
    round_count: u32,
    /// Whether the player opened the most recent round.
    player_started_last_round: bool,
    /// Side that reached the win threshold.
    winner: Option<Side>,
}

impl MatchState {
    /// Fresh match: no scores, player opened last.
    pub fn new() -> Self {
        Self {
            player_score: 0,
            opponent_score: 0,
            round_count: 0,
            player_started_last_round: true,
            winner: None,
        }
    }

    /// Round wins of `side`.
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_score,
            Side::Opponent => self.opponent_score,
        }
    }

    /// Counts a round and returns who opens the next one.
    ///
    /// Odd rounds keep the previous opener, even rounds swap it. The result
    /// becomes the new "previous opener". Who won the last round plays no
    /// part.
    #[instrument(skip(self), fields(round_count = self.round_count))]
    pub fn advance_round(&mut self) -> Side {
        self.round_count += 1;
        let player_starts = if self.round_count % 2 == 0 {
            !self.player_started_last_round
        } else {
            self.player_started_last_round
        };
        self.player_started_last_round = player_starts;
        if player_starts { Side::Player } else { Side::Opponent }
    }

    /// Credits a round win; returns the new score.
    fn credit(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Player => &mut self.player_score,
            Side::Opponent => &mut self.opponent_score,
        };
        *score += 1;
        *score
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

/// Drives a best-of-N match between the player and the heuristic opponent.
#[derive(Debug, Clone)]
pub struct MatchController {
    config: MatchConfig,
    round: RoundState,
    score: MatchState,
    rng: ChaCha8Rng,
    move_in_progress: bool,
    events: Vec<GameEvent>,
}

impl MatchController {
    /// Creates a controller with the player to move.
    #[instrument]
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        info!(win_threshold = config.win_threshold(), "Starting match");
        Ok(Self {
            config,
            round: RoundState::new(Side::Player),
            score: MatchState::new(),
            rng,
            move_in_progress: false,
            events: Vec::new(),
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Inputs
    // ─────────────────────────────────────────────────────────────

    /// Human input on cell `index` (0-8).
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, index: usize) -> Result<Outcome, RejectedMove> {
        if self.is_match_over() {
            return Err(RejectedMove::MatchOver);
        }
        if self.move_in_progress {
            debug!("Ignoring input while a move is in progress");
            return Err(RejectedMove::MoveInProgress);
        }
        let position = Position::from_index(index).ok_or(RejectedMove::OutOfBounds(index))?;
        self.submit(Side::Player, position)
    }

    /// Lets the opponent answer. Only valid while [`Self::opponent_pending`].
    #[instrument(skip(self))]
    pub fn play_opponent_turn(&mut self) -> Result<(Decision, Outcome), RejectedMove> {
        if self.is_match_over() {
            return Err(RejectedMove::MatchOver);
        }
        if self.round.is_over() {
            return Err(RejectedMove::RoundOver);
        }
        if self.round.turn() != Side::Opponent {
            return Err(RejectedMove::WrongTurn(Side::Opponent));
        }

        let available = self.round.available();
        let decision = heuristic::select_move(
            self.round.board(),
            Side::Opponent,
            &available,
            &mut self.rng,
        )
        .ok_or_else(|| {
            RejectedMove::InvariantViolation("opponent has no available cell".to_string())
        })?;
        let outcome = self.submit(Side::Opponent, decision.position)?;
        Ok((decision, outcome))
    }

    /// Clears the board and starts the next round.
    ///
    /// Returns the side that opens it.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) -> Result<Side, RejectedMove> {
        if self.is_match_over() {
            return Err(RejectedMove::MatchOver);
        }
        let starter = self.score.advance_round();
        self.round.reset(starter);
        self.move_in_progress = starter == Side::Opponent;
        info!(round = self.score.round_count(), %starter, "Round reset");

        self.events.push(GameEvent::RoundReset);
        self.events.push(GameEvent::TurnChanged(starter));
        Ok(starter)
    }

    /// Starts over: scores, round count and board.
    #[instrument(skip(self))]
    pub fn new_match(&mut self) {
        self.score = MatchState::new();
        self.round.reset(Side::Player);
        self.move_in_progress = false;
        info!("New match");

        self.events.push(GameEvent::MatchReset);
        self.events.push(GameEvent::ScoreChanged {
            player: 0,
            opponent: 0,
        });
        self.events.push(GameEvent::TurnChanged(Side::Player));
    }

    fn submit(&mut self, side: Side, position: Position) -> Result<Outcome, RejectedMove> {
        let outcome = self.round.apply_move(side, position)?;

        if let Some(vacated) = outcome.vacated() {
            self.events.push(GameEvent::CellChanged {
                position: vacated,
                cell: Cell::Empty,
            });
        }
        self.events.push(GameEvent::CellChanged {
            position,
            cell: Cell::Occupied(side),
        });

        match outcome {
            Outcome::Continue { next, .. } => {
                self.move_in_progress = next == Side::Opponent;
                self.events.push(GameEvent::TurnChanged(next));
            }
            Outcome::RoundWon { side, line, .. } => {
                self.move_in_progress = true;
                let score = self.score.credit(side);
                self.events.push(GameEvent::RoundWon { side, line });
                self.events.push(GameEvent::ScoreChanged {
                    player: self.score.player_score,
                    opponent: self.score.opponent_score,
                });
                if score >= *self.config.win_threshold() {
                    info!(%side, score, "Match won");
                    self.score.winner = Some(side);
                    self.events.push(GameEvent::MatchOver(side));
                }
            }
            Outcome::Draw => {
                warn!("Draw reached on a capped board");
                self.move_in_progress = true;
            }
        }
        Ok(outcome)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Takes all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// The active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The current round.
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Scores and round bookkeeping.
    pub fn match_state(&self) -> &MatchState {
        &self.score
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        self.round.board()
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.round.turn()
    }

    /// Live pieces of `side`.
    pub fn pieces(&self, side: Side) -> usize {
        self.round.ledger().count(side)
    }

    /// Returns true once a side reached the win threshold.
    pub fn is_match_over(&self) -> bool {
        self.score.winner.is_some()
    }

    /// Returns true while human input is refused.
    pub fn move_in_progress(&self) -> bool {
        self.move_in_progress
    }

    /// Returns true when the opponent should move next.
    pub fn opponent_pending(&self) -> bool {
        !self.is_match_over() && !self.round.is_over() && self.round.turn() == Side::Opponent
    }

    /// Returns true when a finished round waits for [`Self::reset_round`].
    pub fn awaiting_round_reset(&self) -> bool {
        !self.is_match_over() && self.round.is_over()
    }

    /// The winning line of a finished round, if any.
    pub fn winning_line(&self) -> Option<rules::Line> {
        if !self.round.is_over() {
            return None;
        }
        rules::check_winner(self.round.board())
            .and_then(|side| rules::winning_line(self.round.board(), side))
    }

    /// One-line status for display.
    pub fn status_line(&self) -> &'static str {
        match (self.score.winner, self.round.is_over()) {
            (Some(Side::Player), _) => "You Win The Game!",
            (Some(Side::Opponent), _) => "AI Wins The Game!",
            (None, true) => match rules::check_winner(self.round.board()) {
                Some(Side::Player) => "You Win This Round!",
                Some(Side::Opponent) => "AI Wins This Round!",
                None => "Draw! Starting new round...",
            },
            (None, false) => match self.round.turn() {
                Side::Player => "Your Turn (X)",
                Side::Opponent => "AI Turn (O)",
            },
        }
    }
}
