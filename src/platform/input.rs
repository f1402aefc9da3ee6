//! Keyboard mapping
//!
//! Arrow keys are held signals with last-known-value semantics; Space is an
//! edge-triggered start command that only fires while no run is active.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    Space,
    Other,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            " " | "Space" => Key::Space,
            _ => Key::Other,
        }
    }
}

/// Discrete commands produced by key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
}

/// Held key state between ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: TickInput,
}

impl InputState {
    /// Record a key press. `running` gates the start command.
    pub fn key_down(&mut self, key: Key, running: bool) -> Option<Command> {
        match key {
            Key::ArrowLeft => self.held.left = true,
            Key::ArrowRight => self.held.right = true,
            Key::ArrowUp => self.held.jump = true,
            Key::Space if !running => return Some(Command::Start),
            Key::Space | Key::Other => {}
        }
        None
    }

    /// Record a key release
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.held.left = false,
            Key::ArrowRight => self.held.right = false,
            Key::ArrowUp => self.held.jump = false,
            Key::Space | Key::Other => {}
        }
    }

    /// Inputs to sample for the next tick
    pub fn tick_input(&self) -> TickInput {
        self.held
    }
}
