//! Application state and logic.
//!
//! `App` owns the controller and the two presentation timers: the pause
//! before the opponent answers and the pause after a finished round. Time
//! is passed in, so the state machine runs the same under test as in the
//! terminal.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use infinite_tictactoe::{Cell, GameEvent, MatchController, Position, RejectedMove};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    controller: MatchController,
    cursor: Position,
    opponent_due: Option<Instant>,
    reset_due: Option<Instant>,
    last_vacated: Option<Position>,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(controller: MatchController) -> Self {
        Self {
            controller,
            cursor: Position::Center,
            opponent_due: None,
            reset_due: None,
            last_vacated: None,
            message: None,
        }
    }

    /// The match being played.
    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Cell most recently emptied by displacement.
    pub fn last_vacated(&self) -> Option<Position> {
        self.last_vacated
    }

    /// Secondary line under the status: last opponent move or rejection.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor.to_index()),
            KeyCode::Char('r') => self.reset_round(),
            KeyCode::Char('n') => self.new_match(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(index) = digit_cell(other) {
                    self.place(index);
                }
            }
        }
        self.schedule(now);
        AppAction::Continue
    }

    /// Runs whatever timer has expired by `now`.
    pub fn tick(&mut self, now: Instant) {
        if self.opponent_due.is_some_and(|due| due <= now) {
            self.opponent_due = None;
            match self.controller.play_opponent_turn() {
                Ok((decision, _)) => {
                    self.message = Some(format!(
                        "AI played {} ({})",
                        decision.position, decision.strategy
                    ));
                }
                Err(e) => warn!(error = %e, "Scheduled opponent move failed"),
            }
        }

        if self.reset_due.is_some_and(|due| due <= now) {
            self.reset_due = None;
            if self.controller.awaiting_round_reset() {
                self.reset_round();
            }
        }

        self.schedule(now);
        self.absorb_events();
    }

    fn place(&mut self, index: usize) {
        match self.controller.on_cell_activated(index) {
            Ok(_) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                self.message = None;
            }
            Err(RejectedMove::MoveInProgress) => {}
            Err(e) => self.message = Some(e.to_string()),
        }
        self.absorb_events();
    }

    fn reset_round(&mut self) {
        self.clear_timers();
        if let Err(e) = self.controller.reset_round() {
            self.message = Some(e.to_string());
        } else {
            self.message = None;
        }
        self.absorb_events();
    }

    fn new_match(&mut self) {
        self.clear_timers();
        self.controller.new_match();
        self.message = None;
        self.absorb_events();
    }

    fn clear_timers(&mut self) {
        self.opponent_due = None;
        self.reset_due = None;
    }

    /// Starts the timer for whatever the controller is waiting on.
    fn schedule(&mut self, now: Instant) {
        let config = self.controller.config();
        if self.controller.opponent_pending() && self.opponent_due.is_none() {
            self.opponent_due = Some(now + Duration::from_millis(*config.opponent_delay_ms()));
        }
        if self.controller.awaiting_round_reset() && self.reset_due.is_none() {
            self.reset_due = Some(now + Duration::from_millis(*config.round_pause_ms()));
        }
    }

    fn absorb_events(&mut self) {
        for event in self.controller.drain_events() {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::CellChanged {
                    position,
                    cell: Cell::Empty,
                } => self.last_vacated = Some(position),
                GameEvent::RoundReset | GameEvent::MatchReset => self.last_vacated = None,
                GameEvent::MatchOver(side) => info!(%side, "Match over"),
                _ => {}
            }
        }
    }
}
