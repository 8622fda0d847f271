//! Pong Loop - classic two-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, balls, bounces, termination)
//! - `pacer`: Frame pacing and delta-time clamping
//! - `renderer`: Rectangle scene and software framebuffer
//! - `platform`: Input capability and the native winit/pixels backend
//! - `game`: Loop driver tying pacer, input, simulation and rendering together
//! - `settings`: Presentation and spawn settings loaded from `pong.json`

pub mod game;
pub mod pacer;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopState};
pub use settings::Settings;

/// World and timing constants
pub mod consts {
    /// Screen width in pixels
    pub const SCREEN_WIDTH: f32 = 1024.0;
    /// Screen height in pixels
    pub const SCREEN_HEIGHT: f32 = 768.0;
    /// Wall thickness, paddle width and ball size
    pub const THICKNESS: f32 = 15.0;
    /// Paddle height
    pub const PADDLE_H: f32 = 100.0;
    /// Paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 300.0;
    /// Horizontal gap between a paddle and its screen edge
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Left paddle hit band (ball center x)
    pub const LEFT_HIT_MIN_X: f32 = 20.0;
    pub const LEFT_HIT_MAX_X: f32 = 25.0;
    /// Right paddle hit threshold (ball center x)
    pub const RIGHT_HIT_MIN_X: f32 = SCREEN_WIDTH - 25.0;

    /// Starting ball velocity
    pub const BALL_START_VEL_X: f32 = 200.0;
    pub const BALL_START_VEL_Y: f32 = 235.0;
    /// Upper bound on simultaneous balls
    pub const MAX_BALLS: usize = 8;

    /// Minimum frame period in milliseconds (~62.5 Hz)
    pub const MIN_FRAME_MS: u64 = 16;
    /// Maximum delta time in seconds
    pub const MAX_DELTA: f32 = 0.05;

    /// Lowest allowed paddle center
    pub const PADDLE_MIN_Y: f32 = PADDLE_H / 2.0 + THICKNESS;
    /// Highest allowed paddle center
    pub const PADDLE_MAX_Y: f32 = SCREEN_HEIGHT - PADDLE_H / 2.0 - THICKNESS;
}
