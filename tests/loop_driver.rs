//! Loop driver against scripted input and a recording canvas

use std::collections::VecDeque;

use pong_loop::pacer::Clock;
use pong_loop::platform::InputSource;
use pong_loop::renderer::{Canvas, Color, Rect};
use pong_loop::sim::{GameEvent, KeyboardState, LogicalKey};
use pong_loop::{Game, LoopState, Settings};

/// Clock advanced only by the pacer's sleeps
#[derive(Default)]
struct StepClock {
    now: u64,
}

impl Clock for StepClock {
    fn ticks_ms(&self) -> u64 {
        self.now
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.now += ms;
    }
}

/// Plays back one keyboard state per frame, then holds the last one
struct ScriptedInput {
    frames: VecDeque<(bool, KeyboardState)>,
    current: KeyboardState,
    polls: usize,
}

impl ScriptedInput {
    fn new(frames: Vec<(bool, KeyboardState)>) -> Self {
        Self {
            frames: frames.into(),
            current: KeyboardState::default(),
            polls: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> bool {
        self.polls += 1;
        match self.frames.pop_front() {
            Some((quit, keys)) => {
                self.current = keys;
                quit
            }
            None => false,
        }
    }

    fn keyboard_state(&self) -> KeyboardState {
        self.current
    }
}

#[derive(Debug, PartialEq)]
enum Call {
    Clear(Color),
    Fill(Rect),
    Present,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Canvas for Recorder {
    fn clear(&mut self, color: Color) {
        self.calls.push(Call::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        self.calls.push(Call::Fill(rect));
    }

    fn present(&mut self) {
        self.calls.push(Call::Present);
    }
}

fn game(settings: &Settings) -> Game<StepClock> {
    Game::with_clock(settings, StepClock::default())
}

#[test]
fn escape_on_third_frame_stops_after_three_frames() {
    let up = KeyboardState::default().with(LogicalKey::RightUp);
    let escape = KeyboardState::default().with(LogicalKey::Escape);
    let mut input = ScriptedInput::new(vec![(false, up), (false, up), (false, escape)]);
    let mut canvas = Recorder::default();
    let mut game = game(&Settings::default());

    game.run(&mut input, &mut canvas);

    assert_eq!(game.loop_state(), LoopState::Stopped);
    assert_eq!(game.frames(), 3);
    assert_eq!(input.polls, 3);
    assert_eq!(game.state().events, vec![GameEvent::QuitRequested]);

    // Two frames of upward motion at 16 ms each
    assert!((game.state().right.pos.y - (384.0 - 2.0 * 300.0 * 0.016)).abs() < 1e-3);

    let per_frame = 1 + 5 + 1;
    assert_eq!(canvas.calls.len(), 3 * per_frame);
    for frame in canvas.calls.chunks(per_frame) {
        assert_eq!(frame[0], Call::Clear(Color::BLUE));
        assert!(frame[1..6].iter().all(|c| matches!(c, Call::Fill(_))));
        assert_eq!(frame[6], Call::Present);
    }
}

#[test]
fn quit_event_stops_immediately() {
    let mut input = ScriptedInput::new(vec![(true, KeyboardState::default())]);
    let mut canvas = Recorder::default();
    let mut game = game(&Settings::default());
    let start = game.state().balls.clone();

    assert_eq!(game.frame(&mut input, &mut canvas), LoopState::Stopped);
    assert_eq!(game.state().balls, start);
    assert_eq!(game.frame(&mut input, &mut canvas), LoopState::Stopped);
    assert_eq!(input.polls, 1);
}

#[test]
fn unattended_rally_ends_with_ball_exit() {
    let mut input = ScriptedInput::new(Vec::new());
    let mut canvas = Recorder::default();
    let mut game = game(&Settings::default());

    game.run(&mut input, &mut canvas);

    assert!(game
        .state()
        .events
        .contains(&GameEvent::BallExited { ball: 0 }));
    // The ball crosses the field in well under ten seconds of 16 ms frames
    assert!(game.frames() < 625);
    assert_eq!(game.pacer().last_ticks(), game.frames() * 16);
}

#[test]
fn settings_drive_ball_count_and_palette() {
    let mut settings = Settings::default();
    settings.ball_count = 3;
    settings.seed = 11;
    settings.palette.background = Color::rgba(10, 20, 30, 255);

    let mut input = ScriptedInput::new(Vec::new());
    let mut canvas = Recorder::default();
    let mut game = game(&settings);
    assert_eq!(game.state().balls.len(), 3);

    game.frame(&mut input, &mut canvas);
    assert_eq!(canvas.calls[0], Call::Clear(Color::rgba(10, 20, 30, 255)));
    assert_eq!(canvas.calls.len(), 1 + 4 + 3 + 1);
}
