//! Contract-based validation for infinite tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, RejectedMove};
use super::engine::RoundState;
use super::invariants::{InvariantSet, RoundInvariants};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RejectedMove>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RejectedMove>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round must still be in play.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Rejects moves once the round is won.
    pub fn check(state: &RoundState) -> Result<(), RejectedMove> {
        if state.is_over() {
            Err(RejectedMove::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the moving side's turn.
pub struct SidesTurn;

impl SidesTurn {
    /// Rejects moves by the side not on turn.
    pub fn check(mov: &Move, state: &RoundState) -> Result<(), RejectedMove> {
        if mov.side != state.turn() {
            Err(RejectedMove::WrongTurn(mov.side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    pub fn check(mov: &Move, state: &RoundState) -> Result<(), RejectedMove> {
        if !state.board().is_empty(mov.position) {
            Err(RejectedMove::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: round in play, side on turn, target empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &RoundState) -> Result<(), RejectedMove> {
        RoundInProgress::check(state)?;
        SidesTurn::check(mov, state)?;
        CellIsEmpty::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - Ledger and board agree on every live piece
/// - Neither side exceeds the piece cap
/// - Sequence numbers strictly increase in ledger order
pub struct MoveContract;

impl Contract<RoundState, Move> for MoveContract {
    fn pre(state: &RoundState, action: &Move) -> Result<(), RejectedMove> {
        LegalMove::check(action, state).inspect_err(|e| {
            warn!(%action, error = %e, "Move rejected");
        })
    }

    fn post(_before: &RoundState, after: &RoundState) -> Result<(), RejectedMove> {
        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            RejectedMove::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
