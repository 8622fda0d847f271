//! Game state and core simulation types
//!
//! Everything the simulation step reads or writes lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Horizontal walls the ball can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// Something that happened during a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Window close or Escape
    QuitRequested,
    /// Ball (by index) reflected off a paddle
    PaddleBounce { ball: usize, side: Side },
    /// Ball (by index) reflected off a wall
    WallBounce { ball: usize, wall: Wall },
    /// Ball (by index) left the field
    BallExited { ball: usize },
}

/// A player paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge x, vertical center y
    pub pos: Vec2,
    /// Movement intent for the current frame: -1 up, 0 idle, +1 down
    pub direction: i8,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => SCREEN_WIDTH - PADDLE_MARGIN - THICKNESS,
        };
        Self {
            pos: Vec2::new(x, SCREEN_HEIGHT / 2.0),
            direction: 0,
        }
    }

    /// Move by the current direction, then clamp into the field
    pub fn integrate(&mut self, dt: f32) {
        if self.direction == 0 {
            return;
        }
        self.pos.y += f32::from(self.direction) * PADDLE_SPEED * dt;
        self.pos.y = self.pos.y.clamp(PADDLE_MIN_Y, PADDLE_MAX_Y);
    }

    /// Whether the ball's center is vertically within the paddle span
    pub fn spans(&self, ball: &Ball) -> bool {
        (self.pos.y - ball.pos.y).abs() <= PADDLE_H / 2.0
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// The reference serve: field center, heading down-right
    pub fn serve() -> Self {
        Self::new(
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y),
        )
    }

    /// Per-axis Euler step
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    /// Active balls (index is the ball's identity)
    pub balls: Vec<Ball>,
    /// Events recorded by the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Reference layout: both paddles centered, one ball served from the middle
    pub fn new() -> Self {
        Self {
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            balls: vec![Ball::serve()],
            events: Vec::new(),
        }
    }

    /// Layout with `ball_count` balls. The first ball is always the reference
    /// serve; the rest get seeded per-axis speed jitter and random signs.
    pub fn with_balls(ball_count: usize, seed: u64) -> Self {
        let count = ball_count.clamp(1, MAX_BALLS);
        let mut state = Self::new();
        let mut rng = Pcg32::seed_from_u64(seed);

        for _ in 1..count {
            let mut vel = Vec2::new(
                BALL_START_VEL_X * rng.random_range(0.85f32..=1.15),
                BALL_START_VEL_Y * rng.random_range(0.85f32..=1.15),
            );
            if rng.random_bool(0.5) {
                vel.x = -vel.x;
            }
            if rng.random_bool(0.5) {
                vel.y = -vel.y;
            }
            let center = Ball::serve().pos;
            state.balls.push(Ball::new(center, vel));
        }

        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
