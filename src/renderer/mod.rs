//! Rendering stage
//!
//! The game draws nothing but filled axis-aligned rectangles. `scene` turns a
//! `GameState` into the ordered rectangle list; any `Canvas` can present it.

pub mod framebuffer;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::Palette;
use crate::sim::{GameState, Paddle, Side};

pub use framebuffer::Framebuffer;

/// RGBA8 color, laid out to match a framebuffer pixel
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
}

/// Integer screen rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// One entry of the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilledRect {
    pub rect: Rect,
    pub color: Color,
}

/// Presentation capability
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn present(&mut self);
}

fn paddle_rect(paddle: &Paddle) -> Rect {
    Rect::new(
        paddle.pos.x as i32,
        (paddle.pos.y - PADDLE_H / 2.0) as i32,
        THICKNESS as i32,
        PADDLE_H as i32,
    )
}

/// Rectangles for one frame: walls, paddles, then balls
pub fn scene(state: &GameState, palette: &Palette) -> Vec<FilledRect> {
    let thickness = THICKNESS as i32;
    let width = SCREEN_WIDTH as i32;
    let height = SCREEN_HEIGHT as i32;
    let half = thickness / 2;
    let fg = palette.foreground;

    let mut rects = Vec::with_capacity(4 + state.balls.len());
    rects.push(FilledRect {
        rect: Rect::new(0, 0, width, thickness),
        color: fg,
    });
    rects.push(FilledRect {
        rect: Rect::new(0, height - thickness, width, thickness),
        color: fg,
    });

    for side in [Side::Left, Side::Right] {
        rects.push(FilledRect {
            rect: paddle_rect(state.paddle(side)),
            color: fg,
        });
    }

    for ball in &state.balls {
        rects.push(FilledRect {
            rect: Rect::new(
                (ball.pos.x - half as f32) as i32,
                (ball.pos.y - half as f32) as i32,
                thickness,
                thickness,
            ),
            color: fg,
        });
    }

    rects
}

/// Clear, fill the scene in order, present
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, palette: &Palette) {
    canvas.clear(palette.background);
    for FilledRect { rect, color } in scene(state, palette) {
        canvas.fill_rect(rect, color);
    }
    canvas.present();
}
