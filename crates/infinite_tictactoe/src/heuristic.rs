//! Rule-based move selection for the automated side.
//!
//! The heuristic is a fixed priority cascade evaluated in order, first match
//! wins: win, block, fork, anti-fork, center, strategic corner, random. It
//! looks exactly one ply ahead and never mutates the board it is given; fork
//! detection works on scratch copies.

use super::rules::{LINES, lines};
use super::{Board, Cell, Position, Side};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which step of the cascade produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Strategy {
    /// Completes one of our lines.
    Win,
    /// Fills the cell that would complete an opposing line.
    Block,
    /// Opens two or more lines at once.
    Fork,
    /// Takes the cell that would give the other side a fork.
    AntiFork,
    /// Takes the center.
    Center,
    /// Takes a corner, preferring one across from an opposing corner.
    Corner,
    /// Uniform random among available cells.
    Random,
    /// A cascade step produced an unusable cell; uniform random instead.
    Fallback,
}

/// A chosen cell and the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Target cell.
    pub position: Position,
    /// Cascade step that picked it.
    pub strategy: Strategy,
}

impl Decision {
    fn new(position: Position, strategy: Strategy) -> Self {
        Self { position, strategy }
    }
}

/// Picks a cell for `side` among `available`.
///
/// Returns `None` only when `available` is empty. Random tie-breaks draw from
/// `rng`, so a seeded generator makes the choice reproducible.
#[instrument(skip(board, rng), fields(board = %board.display()))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    available: &[Position],
    rng: &mut R,
) -> Option<Decision> {
    if available.is_empty() {
        warn!(%side, "No available cells to choose from");
        return None;
    }

    match cascade(board, side, available, rng) {
        Some(decision)
            if available.contains(&decision.position) && board.is_empty(decision.position) =>
        {
            debug!(
                position = %decision.position,
                strategy = %decision.strategy,
                "Heuristic chose move"
            );
            Some(decision)
        }
        other => {
            warn!(candidate = ?other, "Heuristic candidate unusable, falling back to random");
            random_cell(available, rng).map(|pos| Decision::new(pos, Strategy::Fallback))
        }
    }
}

fn cascade<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    available: &[Position],
    rng: &mut R,
) -> Option<Decision> {
    let rival = side.opponent();

    if let Some(pos) = find_winning_move(board, side, available) {
        return Some(Decision::new(pos, Strategy::Win));
    }
    if let Some(pos) = find_winning_move(board, rival, available) {
        return Some(Decision::new(pos, Strategy::Block));
    }
    if let Some(pos) = find_forking_move(board, side, available) {
        return Some(Decision::new(pos, Strategy::Fork));
    }
    if let Some(pos) = find_forking_move(board, rival, available) {
        return Some(Decision::new(pos, Strategy::AntiFork));
    }
    if available.contains(&Position::Center) {
        return Some(Decision::new(Position::Center, Strategy::Center));
    }

    let corners = strategic_corners(board, side, available);
    if let Some(pos) = random_cell(&corners, rng) {
        return Some(Decision::new(pos, Strategy::Corner));
    }

    random_cell(available, rng).map(|pos| Decision::new(pos, Strategy::Random))
}

/// First cell in `available` that completes a line of `side`, scanning lines
/// in order.
pub fn find_winning_move(board: &Board, side: Side, available: &[Position]) -> Option<Position> {
    LINES
        .iter()
        .filter_map(|line| lines::completing_cell(board, line, side))
        .find(|pos| available.contains(pos))
}

/// First cell in `available` order that leaves `side` with two or more
/// lines one piece from completion.
pub fn find_forking_move(board: &Board, side: Side, available: &[Position]) -> Option<Position> {
    available.iter().copied().find(|&pos| {
        if !board.is_empty(pos) {
            return false;
        }
        let mut scratch = board.clone();
        scratch.set(pos, Cell::Occupied(side));
        lines::threat_count(&scratch, side) >= 2
    })
}

/// Available corners across from a corner held by the other side, or every
/// available corner if none qualify.
pub fn strategic_corners(board: &Board, side: Side, available: &[Position]) -> Vec<Position> {
    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| available.contains(pos))
        .collect();

    let rival = Cell::Occupied(side.opponent());
    let opposed: Vec<Position> = corners
        .iter()
        .copied()
        .filter(|pos| pos.opposite_corner().is_some_and(|o| board.get(o) == rival))
        .collect();

    if opposed.is_empty() { corners } else { opposed }
}

fn random_cell<R: Rng + ?Sized>(cells: &[Position], rng: &mut R) -> Option<Position> {
    cells.choose(rng).copied()
}
