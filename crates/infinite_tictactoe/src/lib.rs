//! Infinite tic-tac-toe - pure game logic
//!
//! Each side may hold at most three pieces. Placing a fourth moves that
//! side's oldest piece to the new cell, so the board never fills and a round
//! always ends in a win. A match is won by the first side to take a
//! configured number of rounds; one side is played by a rule-based
//! heuristic.
//!
//! # Architecture
//!
//! - **Board / Position**: the 3x3 grid and its named cells
//! - **MoveLedger**: placement order, used to find a side's oldest piece
//! - **RoundState**: the rule engine; the only place a round changes
//! - **heuristic**: the opponent's priority cascade
//! - **MatchController**: turns, scores, round resets and events
//!
//! # Example
//!
//! ```
//! use infinite_tictactoe::{MatchConfig, MatchController, Side};
//!
//! let mut controller = MatchController::new(MatchConfig::headless().with_seed(Some(7)))?;
//! controller.on_cell_activated(4)?;
//! assert!(controller.opponent_pending());
//! controller.play_opponent_turn()?;
//! assert_eq!(controller.turn(), Side::Player);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod controller;
mod engine;
mod events;
pub mod heuristic;
pub mod invariants;
mod ledger;
mod position;
pub mod rules;
mod types;

pub use action::{Move, RejectedMove};
pub use config::{ConfigError, MatchConfig};
pub use contracts::{CellIsEmpty, Contract, LegalMove, MoveContract, RoundInProgress, SidesTurn};
pub use controller::{MatchController, MatchState};
pub use engine::{Outcome, RoundState};
pub use events::GameEvent;
pub use heuristic::{Decision, Strategy, select_move};
pub use ledger::{MoveLedger, MoveRecord};
pub use position::Position;
pub use types::{Board, Cell, PIECE_CAP, Side};
