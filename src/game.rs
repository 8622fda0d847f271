//! Loop driver
//!
//! Each frame: sample input, wait for the pacer, step the simulation,
//! render. `Stopped` is terminal.

use crate::pacer::{Clock, Pacer, SystemClock};
use crate::platform::InputSource;
use crate::renderer::{Canvas, draw_frame};
use crate::settings::{Palette, Settings};
use crate::sim::{GameEvent, GameState, InputSnapshot, Signal, step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Owns everything the loop mutates
pub struct Game<C: Clock = SystemClock> {
    state: GameState,
    pacer: Pacer<C>,
    palette: Palette,
    loop_state: LoopState,
    frames: u64,
}

impl Game<SystemClock> {
    pub fn new(settings: &Settings) -> Self {
        Self::with_clock(settings, SystemClock::new())
    }
}

impl<C: Clock> Game<C> {
    pub fn with_clock(settings: &Settings, clock: C) -> Self {
        let state = GameState::with_balls(settings.ball_count, settings.seed);
        log::info!(
            "New game: {} ball(s), seed {}",
            state.balls.len(),
            settings.seed
        );
        Self {
            state,
            pacer: Pacer::new(clock),
            palette: settings.palette.clone(),
            loop_state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn pacer(&self) -> &Pacer<C> {
        &self.pacer
    }

    /// Run one iteration. Does nothing once stopped.
    pub fn frame<I, K>(&mut self, input: &mut I, canvas: &mut K) -> LoopState
    where
        I: InputSource + ?Sized,
        K: Canvas + ?Sized,
    {
        if self.loop_state == LoopState::Stopped {
            return LoopState::Stopped;
        }

        let quit_requested = input.poll_events();
        let snapshot = InputSnapshot::new(quit_requested, input.keyboard_state());

        let dt = self.pacer.next_frame();
        log::trace!("frame {} dt={:.4}", self.frames, dt);

        let signal = step(&mut self.state, &snapshot, dt);
        for event in &self.state.events {
            log::debug!("frame {}: {:?}", self.frames, event);
        }

        draw_frame(canvas, &self.state, &self.palette);
        self.frames += 1;

        if signal == Signal::Stop {
            self.stop();
        }
        self.loop_state
    }

    /// Call `frame` until the game stops
    pub fn run<I, K>(&mut self, input: &mut I, canvas: &mut K)
    where
        I: InputSource + ?Sized,
        K: Canvas + ?Sized,
    {
        while self.frame(input, canvas) == LoopState::Running {}
    }

    fn stop(&mut self) {
        self.loop_state = LoopState::Stopped;

        let reason = self.state.events.iter().find_map(|event| match event {
            GameEvent::QuitRequested => Some("quit requested".to_string()),
            GameEvent::BallExited { ball } => Some(format!("ball {} left the field", ball)),
            _ => None,
        });
        log::info!(
            "Game over after {} frames: {}",
            self.frames,
            reason.as_deref().unwrap_or("stopped")
        );

        match serde_json::to_string(&self.state) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
    }
}
