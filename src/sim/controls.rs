//! Keyboard mapping
//!
//! DOM key names are mapped to [`Key`]s; [`Controls`] tracks held arrows and
//! queues one-shot commands until the next tick consumes them.

use super::tick::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Jump,
    Start,
    Restart,
    Pause,
}

impl Key {
    /// Map a `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Jump),
            "Enter" => Some(Key::Start),
            "r" | "R" => Some(Key::Restart),
            "Escape" => Some(Key::Pause),
            _ => None,
        }
    }
}

/// Held-key state plus pending one-shot commands
#[derive(Debug, Clone, Default)]
pub struct Controls {
    left: bool,
    right: bool,
    jump: bool,
    start: bool,
    restart: bool,
    pause: bool,
}

impl Controls {
    /// Record a key press. Returns true when the browser default (page
    /// scroll on Space) should be suppressed.
    pub fn key_down(&mut self, key: Key, running: bool) -> bool {
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Jump => {
                self.jump = true;
                return running;
            }
            Key::Start => self.start = true,
            Key::Restart => self.restart = true,
            Key::Pause => self.pause = true,
        }
        false
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            _ => {}
        }
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    /// Sample the input for one tick, clearing one-shot commands
    pub fn sample(&mut self, now_ms: f64) -> TickInput {
        let input = TickInput {
            left: self.left,
            right: self.right,
            jump: self.jump,
            start: self.start,
            restart: self.restart,
            pause: self.pause,
            now_ms,
        };
        self.jump = false;
        self.start = false;
        self.restart = false;
        self.pause = false;
        input
    }
}
