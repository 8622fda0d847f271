//! Per-frame input snapshot
//!
//! Platform backends translate physical keys into `LogicalKey`s; the
//! simulation only ever sees the snapshot.

use serde::{Deserialize, Serialize};

use super::state::Side;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogicalKey {
    Escape,
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl LogicalKey {
    pub const COUNT: usize = 5;

    pub const ALL: [LogicalKey; Self::COUNT] = [
        LogicalKey::Escape,
        LogicalKey::LeftUp,
        LogicalKey::LeftDown,
        LogicalKey::RightUp,
        LogicalKey::RightDown,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Pressed/released state of every logical key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pressed: [bool; LogicalKey::COUNT],
}

impl KeyboardState {
    pub fn is_pressed(&self, key: LogicalKey) -> bool {
        self.pressed[key.index()]
    }

    pub fn set(&mut self, key: LogicalKey, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    /// Builder-style press, handy for scripted input
    pub fn with(mut self, key: LogicalKey) -> Self {
        self.set(key, true);
        self
    }

    pub fn release_all(&mut self) {
        self.pressed = [false; LogicalKey::COUNT];
    }
}

/// Everything the simulation reads from the outside world in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Window close (or equivalent) since the previous frame
    pub quit_requested: bool,
    pub keys: KeyboardState,
}

impl InputSnapshot {
    pub fn new(quit_requested: bool, keys: KeyboardState) -> Self {
        Self {
            quit_requested,
            keys,
        }
    }

    /// Quit event or Escape held
    pub fn wants_stop(&self) -> bool {
        self.quit_requested || self.keys.is_pressed(LogicalKey::Escape)
    }

    /// -1 for up, +1 for down, 0 for neither or both
    pub fn paddle_direction(&self, side: Side) -> i8 {
        let (up, down) = match side {
            Side::Left => (LogicalKey::LeftUp, LogicalKey::LeftDown),
            Side::Right => (LogicalKey::RightUp, LogicalKey::RightDown),
        };
        let mut direction = 0;
        if self.keys.is_pressed(up) {
            direction -= 1;
        }
        if self.keys.is_pressed(down) {
            direction += 1;
        }
        direction
    }
}
