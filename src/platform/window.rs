//! Native backend: a winit window presenting a pixels framebuffer
//!
//! The winit event loop owns control flow; the loop driver runs one frame
//! per `MainEventsCleared`.

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use super::{InputSource, PlatformError};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::{Game, LoopState};
use crate::renderer::{Canvas, Color, Framebuffer, Rect};
use crate::settings::Settings;
use crate::sim::{KeyboardState, LogicalKey};

/// Key bindings: W/S left paddle, I/K right paddle, Escape quits
pub fn logical_key(code: VirtualKeyCode) -> Option<LogicalKey> {
    match code {
        VirtualKeyCode::Escape => Some(LogicalKey::Escape),
        VirtualKeyCode::W => Some(LogicalKey::LeftUp),
        VirtualKeyCode::S => Some(LogicalKey::LeftDown),
        VirtualKeyCode::I => Some(LogicalKey::RightUp),
        VirtualKeyCode::K => Some(LogicalKey::RightDown),
        _ => None,
    }
}

/// Keyboard and quit state accumulated from window events
#[derive(Debug, Default)]
pub struct WindowInput {
    quit_requested: bool,
    keys: KeyboardState,
}

impl WindowInput {
    pub fn apply_key(&mut self, code: VirtualKeyCode, state: ElementState) {
        if let Some(key) = logical_key(code) {
            self.keys.set(key, state == ElementState::Pressed);
        }
    }

    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) {
        match event {
            WindowEvent::CloseRequested => self.request_quit(),
            // Releases are not delivered while unfocused
            WindowEvent::Focused(false) => self.keys.release_all(),
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(code),
                        ..
                    },
                ..
            } => self.apply_key(*code, *state),
            _ => {}
        }
    }
}

impl InputSource for WindowInput {
    fn poll_events(&mut self) -> bool {
        std::mem::take(&mut self.quit_requested)
    }

    fn keyboard_state(&self) -> KeyboardState {
        self.keys
    }
}

/// `Canvas` over the pixels frame buffer
pub struct PixelsCanvas {
    pixels: Pixels,
    width: u32,
    height: u32,
}

impl PixelsCanvas {
    pub fn new(pixels: Pixels, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    fn framebuffer(&mut self) -> Option<Framebuffer<'_>> {
        let framebuffer = Framebuffer::new(self.pixels.frame_mut(), self.width, self.height);
        if framebuffer.is_none() {
            log::warn!("Frame buffer does not match {}x{}", self.width, self.height);
        }
        framebuffer
    }
}

impl Canvas for PixelsCanvas {
    fn clear(&mut self, color: Color) {
        if let Some(mut fb) = self.framebuffer() {
            fb.clear(color);
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(mut fb) = self.framebuffer() {
            fb.fill_rect(rect, color);
        }
    }

    fn present(&mut self) {
        if let Err(e) = self.pixels.render() {
            log::warn!("Render error: {:?}", e);
        }
    }
}

/// Open the window and run the game until it stops.
///
/// Only returns on startup failure; the event loop exits the process.
pub fn run(settings: Settings) -> Result<(), PlatformError> {
    let width = SCREEN_WIDTH as u32;
    let height = SCREEN_HEIGHT as u32;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(settings.window_title.as_str())
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    let surface_size = window.inner_size();
    let surface = SurfaceTexture::new(surface_size.width, surface_size.height, &window);
    let pixels = Pixels::new(width, height, surface)?;
    log::info!(
        "Window ready: {}x{} (surface {}x{})",
        width,
        height,
        surface_size.width,
        surface_size.height
    );

    let mut canvas = PixelsCanvas::new(pixels, width, height);
    let mut input = WindowInput::default();
    let mut game = Game::new(&settings);

    event_loop.run(move |event, _, control_flow| {
        // The surface must not outlive the window
        let _ = &window;
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => input.handle_window_event(&event),
            Event::MainEventsCleared => {
                if game.frame(&mut input, &mut canvas) == LoopState::Stopped {
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::LoopDestroyed => log::info!("Shutting down"),
            _ => {}
        }
    })
}
