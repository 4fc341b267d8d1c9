//! Property tests over random play.

use infinite_tictactoe::invariants::{InvariantSet, RoundInvariants};
use infinite_tictactoe::{
    MatchConfig, MatchController, PIECE_CAP, Position, RoundState, Side, rules, select_move,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn pick(available: &[Position], choice: usize) -> Position {
    available[choice % available.len()]
}

proptest! {
    #[test]
    fn random_play_keeps_round_invariants(choices in prop::collection::vec(0usize..9, 1..60)) {
        let mut state = RoundState::new(Side::Player);
        for choice in choices {
            if state.is_over() {
                break;
            }
            let available = state.available();
            prop_assert!(!available.is_empty());
            let side = state.turn();
            let outcome = state.apply_move(side, pick(&available, choice)).unwrap();

            prop_assert!(RoundInvariants::check_all(&state).is_ok());
            prop_assert!(state.board().count(Side::Player) <= PIECE_CAP);
            prop_assert!(state.board().count(Side::Opponent) <= PIECE_CAP);
            prop_assert!(state.available().len() >= 9 - 2 * PIECE_CAP);
            prop_assert!(!state.is_draw());
            prop_assert_eq!(outcome.ends_round(), state.is_over());
        }
    }

    #[test]
    fn heuristic_always_picks_an_available_cell(
        choices in prop::collection::vec(0usize..9, 0..20),
        seed in any::<u64>(),
    ) {
        let mut state = RoundState::new(Side::Player);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for choice in choices {
            if state.is_over() {
                break;
            }
            let available = state.available();
            let side = state.turn();
            let before = state.board().clone();
            let decision = select_move(state.board(), side, &available, &mut rng).unwrap();
            prop_assert!(available.contains(&decision.position));
            prop_assert_eq!(state.board(), &before);

            // Alternate heuristic and random moves to reach varied boards.
            let target = if choice % 2 == 0 { decision.position } else { pick(&available, choice) };
            state.apply_move(side, target).unwrap();
        }
    }

    #[test]
    fn heuristic_takes_any_immediate_win(
        choices in prop::collection::vec(0usize..9, 0..20),
        seed in any::<u64>(),
    ) {
        let mut state = RoundState::new(Side::Player);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for choice in choices {
            if state.is_over() {
                break;
            }
            let available = state.available();
            state.apply_move(state.turn(), pick(&available, choice)).unwrap();
        }
        prop_assume!(!state.is_over());

        let side = state.turn();
        let available = state.available();
        let decision = select_move(state.board(), side, &available, &mut rng).unwrap();
        let mut scratch = state.board().clone();
        let can_win = available.iter().any(|&pos| {
            scratch.set(pos, infinite_tictactoe::Cell::Occupied(side));
            let wins = rules::winning_line(&scratch, side).is_some();
            scratch.set(pos, infinite_tictactoe::Cell::Empty);
            wins
        });
        if can_win {
            let mut after = state.board().clone();
            after.set(decision.position, infinite_tictactoe::Cell::Occupied(side));
            prop_assert!(rules::winning_line(&after, side).is_some());
        }
    }

    #[test]
    fn match_scores_never_pass_threshold(
        seed in any::<u64>(),
        human in prop::collection::vec(0usize..9, 200),
    ) {
        let config = MatchConfig::headless().with_seed(Some(seed));
        let mut controller = MatchController::new(config).unwrap();
        let mut moves = human.into_iter().cycle();
        let mut steps = 0;
        while !controller.is_match_over() && steps < 2_000 {
            steps += 1;
            if controller.awaiting_round_reset() {
                controller.reset_round().unwrap();
            } else if controller.opponent_pending() {
                controller.play_opponent_turn().unwrap();
            } else {
                let available = controller.board().available();
                let target = pick(&available, moves.next().unwrap_or(0));
                controller.on_cell_activated(target.to_index()).unwrap();
            }
        }
        let state = controller.match_state();
        prop_assert!(state.score(Side::Player) <= 3 && state.score(Side::Opponent) <= 3);
        if controller.is_match_over() {
            prop_assert_eq!(state.winner().map(|w| state.score(w)), Some(3));
        }
    }
}
