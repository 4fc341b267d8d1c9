//! Game rules for infinite tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Board storage stays
//! separate so the engine, the heuristic and the invariants share one
//! definition of "line", "win" and "draw".

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LINES, Line};
pub use win::{check_winner, winning_line};
