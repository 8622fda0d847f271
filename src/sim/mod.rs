//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time only enters through the `dt` argument
//! - Stable iteration order (balls by index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod step;

pub use collision::{HorizontalHit, resolve_horizontal, resolve_walls};
pub use input::{InputSnapshot, KeyboardState, LogicalKey};
pub use state::{Ball, GameEvent, GameState, Paddle, Side, Wall};
pub use step::{Signal, step};
