//! Collision detection and response for the axis-aligned field
//!
//! Bounces only ever flip the sign of one velocity component. Speed per
//! axis is conserved.

use super::state::{Ball, Paddle, Side, Wall};
use crate::consts::*;

/// Outcome of the horizontal (paddle/exit) check for one ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalHit {
    Paddle(Side),
    Exited,
}

/// Resolve paddle hits and field exit for one ball.
///
/// Checked in fixed priority (left paddle, right paddle, exit) so at most
/// one fires per call. A paddle hit negates `vel.x`; an exit leaves the ball
/// untouched.
pub fn resolve_horizontal(ball: &mut Ball, left: &Paddle, right: &Paddle) -> Option<HorizontalHit> {
    let x = ball.pos.x;

    if left.spans(ball) && (LEFT_HIT_MIN_X..=LEFT_HIT_MAX_X).contains(&x) && ball.vel.x < 0.0 {
        ball.vel.x = -ball.vel.x;
        Some(HorizontalHit::Paddle(Side::Left))
    } else if right.spans(ball) && x >= RIGHT_HIT_MIN_X && ball.vel.x > 0.0 {
        ball.vel.x = -ball.vel.x;
        Some(HorizontalHit::Paddle(Side::Right))
    } else if x <= 0.0 || x >= SCREEN_WIDTH {
        Some(HorizontalHit::Exited)
    } else {
        None
    }
}

/// Resolve top/bottom wall bounces for one ball.
///
/// Only bounces when moving into the wall, so a ball still inside the band
/// after reflecting is not flipped back.
pub fn resolve_walls(ball: &mut Ball) -> Option<Wall> {
    if ball.pos.y <= THICKNESS && ball.vel.y < 0.0 {
        ball.vel.y = -ball.vel.y;
        Some(Wall::Top)
    } else if ball.pos.y >= SCREEN_HEIGHT - THICKNESS && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        Some(Wall::Bottom)
    } else {
        None
    }
}
