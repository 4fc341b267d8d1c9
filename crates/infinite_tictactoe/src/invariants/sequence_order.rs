//! Sequence invariant: ledger records are in strictly increasing order.

use super::super::RoundState;
use super::Invariant;

/// Invariant: sequence numbers strictly increase along the ledger and stay
/// below the next sequence to be handed out.
pub struct SequenceOrderInvariant;

impl Invariant<RoundState> for SequenceOrderInvariant {
    fn holds(state: &RoundState) -> bool {
        let records = state.ledger().records();
        let increasing = records.windows(2).all(|w| w[0].sequence < w[1].sequence);
        let below_next = records
            .last()
            .is_none_or(|r| r.sequence < state.ledger().next_sequence());
        increasing && below_next
    }

    fn description() -> &'static str {
        "Ledger sequence numbers strictly increase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Side};

    #[test]
    fn test_holds_through_displacements() {
        use Position::*;
        let mut state = RoundState::new(Side::Opponent);
        for (side, pos) in [
            (Side::Opponent, Center),
            (Side::Player, TopLeft),
            (Side::Opponent, TopCenter),
            (Side::Player, BottomCenter),
            (Side::Opponent, MiddleLeft),
            (Side::Player, BottomRight),
            (Side::Opponent, TopRight),
            (Side::Player, Center),
        ] {
            state.apply_move(side, pos).unwrap();
            assert!(SequenceOrderInvariant::holds(&state));
        }
    }
}
