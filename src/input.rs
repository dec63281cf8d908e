use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::game::Mode;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Abstract input events consumed by [`crate::game::GameState::apply_input`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Intent {
    Start,
    Quit,
    TogglePause,
    Move(Direction),
}

/// What a key press asks the runtime to do.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyAction {
    Intent(Intent),
    /// Leave immediately regardless of mode (Ctrl+C in raw mode).
    ForceQuit,
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Maps a raw key event to an action for the given mode.
///
/// Escape and Space are overloaded: Escape pauses or resumes a game in
/// progress and quits from the menu or game-over screen, while Space only
/// starts a game from those two screens.
#[must_use]
pub fn intent_for_key(key: KeyEvent, mode: Mode) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::ForceQuit);
    }

    let in_game = matches!(mode, Mode::Running | Mode::Paused);
    let intent = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Intent::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Intent::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Intent::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Intent::Move(Direction::Right),
        KeyCode::Esc if in_game => Intent::TogglePause,
        KeyCode::Esc => Intent::Quit,
        KeyCode::Char(' ') | KeyCode::Enter if !in_game => Intent::Start,
        KeyCode::Char('p' | 'P') => Intent::TogglePause,
        KeyCode::Char('q' | 'Q') => Intent::Quit,
        _ => return None,
    };

    Some(KeyAction::Intent(intent))
}

/// Polls crossterm for keyboard input.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one key press and maps it for `mode`.
    ///
    /// Returns `Ok(None)` on timeout, for non-key events and for unmapped keys.
    pub fn poll(&mut self, timeout: Duration, mode: Mode) -> io::Result<Option<KeyAction>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(intent_for_key(key, mode)),
            _ => Ok(None),
        }
    }
}
