//! Key mapping from terminal events to game input.

use crate::types::GameAction;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the runner should do with one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Quit,
    Resize(u16, u16),
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Down => Some(GameAction::Drop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map any terminal event.
///
/// Only key presses count: auto-repeat and release events would otherwise turn
/// a held space bar into a burst of drops.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if should_quit(*key) {
                Some(InputEvent::Quit)
            } else {
                handle_key_event(*key).map(InputEvent::Action)
            }
        }
        Event::Resize(w, h) => Some(InputEvent::Resize(*w, *h)),
        _ => None,
    }
}
