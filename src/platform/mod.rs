//! Platform abstraction layer
//!
//! Handles the outside world for the loop driver:
//! - Input events and keyboard state (`InputSource`)
//! - Window and framebuffer lifetime (`window`)

pub mod window;

use thiserror::Error;

use crate::sim::KeyboardState;

/// Startup failures of the windowing substrate
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create framebuffer: {0}")]
    Surface(#[from] pixels::Error),
}

/// Input capability sampled once per frame
pub trait InputSource {
    /// Drain pending events; true if a quit was requested since the last poll
    fn poll_events(&mut self) -> bool;
    /// Currently held logical keys
    fn keyboard_state(&self) -> KeyboardState;
}
