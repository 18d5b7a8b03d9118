//! Keyboard input collection and mapping
//!
//! Keys are drained non-blocking once per frame and mapped to actions based
//! on the current phase; movement only registers mid-session.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::sim::GamePhase;

/// What a key press means to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Move the player one step; components are -1, 0, or 1 on (x, z)
    Move(i8, i8),
    /// Rotate the camera one step left (-1) or right (1)
    RotateCamera(i8),
    /// Start a session from the menu
    Start,
    /// Restart after game over
    Restart,
    /// Leave the game
    Quit,
}

/// Drain all pending key presses without blocking longer than `budget`
pub fn collect_keys(budget: Duration) -> Result<Vec<KeyCode>> {
    let mut out = Vec::new();
    let timeout = budget.min(Duration::from_millis(1));
    while event::poll(timeout)? {
        if let Event::Key(k) = event::read()? {
            if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                out.push(k.code);
                if out.len() >= 32 {
                    break;
                }
            }
        }
    }
    Ok(out)
}

/// Map a key press to an action for the current phase
pub fn map_key(phase: GamePhase, key: KeyCode) -> Option<AppAction> {
    // Global
    match key {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Some(AppAction::Quit),
        KeyCode::Left => return Some(AppAction::RotateCamera(-1)),
        KeyCode::Right => return Some(AppAction::RotateCamera(1)),
        _ => {}
    }

    match phase {
        GamePhase::Menu => match key {
            KeyCode::Enter => Some(AppAction::Start),
            _ => None,
        },
        GamePhase::GameOver => match key {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(AppAction::Restart),
            _ => None,
        },
        GamePhase::Playing => match key {
            KeyCode::Char('w') | KeyCode::Char('W') => Some(AppAction::Move(0, -1)),
            KeyCode::Char('s') | KeyCode::Char('S') => Some(AppAction::Move(0, 1)),
            KeyCode::Char('a') | KeyCode::Char('A') => Some(AppAction::Move(-1, 0)),
            KeyCode::Char('d') | KeyCode::Char('D') => Some(AppAction::Move(1, 0)),
            _ => None,
        },
    }
}
