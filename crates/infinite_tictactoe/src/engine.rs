//! The rule engine: the only place a round's board and ledger change.
//!
//! [`RoundState::apply_move`] validates a move completely before writing
//! anything, then performs either a direct placement or a displacement of
//! the side's oldest piece as a single transition, and only then looks for a
//! winner.

use super::action::{Move, RejectedMove};
use super::contracts::{Contract, MoveContract};
use super::ledger::{MoveLedger, MoveRecord};
use super::rules::{self, Line};
use super::{Board, Cell, PIECE_CAP, Position, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues with `next` to move.
    Continue {
        /// Side to move next.
        next: Side,
        /// Cell vacated by displacement, if any.
        vacated: Option<Position>,
    },
    /// The move completed a line.
    RoundWon {
        /// The winning side.
        side: Side,
        /// The completed line.
        line: Line,
        /// Cell vacated by displacement, if any.
        vacated: Option<Position>,
    },
    /// Full board with no line. Unreachable under the piece cap.
    Draw,
}

impl Outcome {
    /// Cell vacated by the move, if it was a displacement.
    pub fn vacated(&self) -> Option<Position> {
        match self {
            Outcome::Continue { vacated, .. } | Outcome::RoundWon { vacated, .. } => *vacated,
            Outcome::Draw => None,
        }
    }

    /// Returns true if the move ended the round.
    pub fn ends_round(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}

/// State of a single round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub(crate) board: Board,
    pub(crate) ledger: MoveLedger,
    pub(crate) turn: Side,
    pub(crate) game_over: bool,
}

impl RoundState {
    /// Creates an empty round with `starter` to move.
    #[instrument]
    pub fn new(starter: Side) -> Self {
        Self {
            board: Board::new(),
            ledger: MoveLedger::new(),
            turn: starter,
            game_over: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the ledger of live pieces.
    pub fn ledger(&self) -> &MoveLedger {
        &self.ledger
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Returns true once the round has been won.
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Empty cells.
    pub fn available(&self) -> Vec<Position> {
        self.board.available()
    }

    /// Full board with no winner; false on every reachable capped board.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// The cell `side` would lose if it placed now, if it is at the cap.
    pub fn displacement_source(&self, side: Side) -> Option<Position> {
        if self.ledger.count(side) >= PIECE_CAP {
            self.ledger.oldest(side).map(|r| r.position)
        } else {
            None
        }
    }

    /// Applies `side`'s placement at `target`.
    ///
    /// Rejected moves leave the state untouched.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, side: Side, target: Position) -> Result<Outcome, RejectedMove> {
        let action = Move::new(side, target);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut next = self.clone();
        let vacated = next.place(action);

        let outcome = if let Some(line) = rules::winning_line(&next.board, side) {
            next.game_over = true;
            info!(%side, ?line, "Round won");
            Outcome::RoundWon { side, line, vacated }
        } else if rules::is_draw(&next.board) {
            next.game_over = true;
            info!("Round drawn");
            Outcome::Draw
        } else {
            next.turn = side.opponent();
            Outcome::Continue {
                next: next.turn,
                vacated,
            }
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &next)?;

        *self = next;
        debug!(?outcome, board = %self.board.display(), "Move applied");
        Ok(outcome)
    }

    /// Places the piece, displacing the oldest one at the cap.
    ///
    /// Returns the vacated cell.
    fn place(&mut self, action: Move) -> Option<Position> {
        let vacated = if self.ledger.count(action.side) >= PIECE_CAP {
            self.ledger.remove_oldest(action.side).map(|old: MoveRecord| {
                self.board.set(old.position, Cell::Empty);
                debug!(from = %old.position, to = %action.position, "Displacing oldest piece");
                old.position
            })
        } else {
            None
        };

        self.board.set(action.position, Cell::Occupied(action.side));
        self.ledger.record(action.position, action.side);
        vacated
    }

    /// Clears board and ledger for a new round. The ledger keeps counting.
    #[instrument(skip(self))]
    pub(crate) fn reset(&mut self, starter: Side) {
        self.board = Board::new();
        self.ledger.clear();
        self.turn = starter;
        self.game_over = false;
    }
}
