//! Frame pacing
//!
//! Converts a millisecond tick counter into a bounded delta time and keeps
//! frames from running faster than `MIN_FRAME_MS`.

use std::time::{Duration, Instant};

use crate::consts::{MAX_DELTA, MIN_FRAME_MS};

/// Monotonic millisecond tick source
pub trait Clock {
    /// Milliseconds since the clock was created
    fn ticks_ms(&self) -> u64;
    /// Block for roughly `ms` milliseconds
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall clock backed by `Instant`, sleeping with `spin_sleep`
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        spin_sleep::sleep(Duration::from_millis(ms));
    }
}

/// Enforces the minimum frame period and clamps delta time
#[derive(Debug)]
pub struct Pacer<C: Clock> {
    clock: C,
    last_ticks: u64,
}

impl<C: Clock> Pacer<C> {
    pub fn new(clock: C) -> Self {
        let last_ticks = clock.ticks_ms();
        Self { clock, last_ticks }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Tick count recorded by the most recent `next_frame`
    pub fn last_ticks(&self) -> u64 {
        self.last_ticks
    }

    /// Wait until at least `MIN_FRAME_MS` has passed since `previous_ticks`,
    /// then return `(delta_seconds, now_ticks)`.
    pub fn advance(&mut self, previous_ticks: u64) -> (f32, u64) {
        let deadline = previous_ticks + MIN_FRAME_MS;
        loop {
            let now = self.clock.ticks_ms();
            if now >= deadline {
                break;
            }
            self.clock.sleep_ms(deadline - now);
        }

        let now = self.clock.ticks_ms();
        let elapsed_ms = now.saturating_sub(previous_ticks);
        let dt = (elapsed_ms as f32 / 1000.0).min(MAX_DELTA);
        (dt, now)
    }

    /// `advance` from the previous frame's tick count
    pub fn next_frame(&mut self) -> f32 {
        let (dt, now) = self.advance(self.last_ticks);
        self.last_ticks = now;
        dt
    }
}
