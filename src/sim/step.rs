//! Variable-timestep simulation step
//!
//! One call per frame. Effects are order-significant: collision checks read
//! positions written earlier in the same step.

use super::collision::{HorizontalHit, resolve_horizontal, resolve_walls};
use super::input::InputSnapshot;
use super::state::{GameEvent, GameState, Side};

/// Whether the loop should keep going after this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

/// Advance the game state by `dt` seconds
pub fn step(state: &mut GameState, input: &InputSnapshot, dt: f32) -> Signal {
    state.events.clear();

    // Quit wins over motion: the final frame is left as it was
    if input.wants_stop() {
        state.events.push(GameEvent::QuitRequested);
        return Signal::Stop;
    }

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle_mut(side);
        paddle.direction = input.paddle_direction(side);
        paddle.integrate(dt);
    }

    let mut signal = Signal::Continue;

    for (index, ball) in state.balls.iter_mut().enumerate() {
        ball.integrate(dt);

        match resolve_horizontal(ball, &state.left, &state.right) {
            Some(HorizontalHit::Paddle(side)) => {
                state.events.push(GameEvent::PaddleBounce { ball: index, side });
            }
            Some(HorizontalHit::Exited) => {
                state.events.push(GameEvent::BallExited { ball: index });
                signal = Signal::Stop;
            }
            None => {}
        }

        if let Some(wall) = resolve_walls(ball) {
            state.events.push(GameEvent::WallBounce { ball: index, wall });
        }
    }

    signal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::input::{KeyboardState, LogicalKey};
    use crate::sim::state::{Ball, Wall};
    use glam::Vec2;

    fn keys(pressed: &[LogicalKey]) -> InputSnapshot {
        let keys = pressed
            .iter()
            .fold(KeyboardState::default(), |state, &key| state.with(key));
        InputSnapshot::new(false, keys)
    }

    fn single_ball(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new();
        state.balls = vec![Ball::new(pos, vel)];
        state
    }

    #[test]
    fn test_step_left_paddle_return() {
        let y0 = 300.0;
        let mut state = single_ball(Vec2::new(22.0, y0), Vec2::new(-200.0, 0.0));
        state.left.pos.y = y0;

        // 1 px of travel keeps the ball inside the hit band
        let signal = step(&mut state, &InputSnapshot::default(), 0.005);
        assert_eq!(signal, Signal::Continue);
        assert_eq!(state.balls[0].vel.x, 200.0);
        assert_eq!(
            state.events,
            vec![GameEvent::PaddleBounce { ball: 0, side: Side::Left }]
        );
    }

    #[test]
    fn test_step_ball_exit_stops() {
        let mut state = single_ball(Vec2::new(-1.0, 400.0), Vec2::new(-200.0, 0.0));
        let signal = step(&mut state, &InputSnapshot::default(), 0.0);
        assert_eq!(signal, Signal::Stop);
        assert_eq!(state.events, vec![GameEvent::BallExited { ball: 0 }]);
    }

    #[test]
    fn test_step_wall_bounces() {
        let mut state = single_ball(Vec2::new(500.0, THICKNESS - 1.0), Vec2::new(0.0, -50.0));
        step(&mut state, &InputSnapshot::default(), 0.0);
        assert_eq!(state.balls[0].vel.y, 50.0);

        let mut state = single_ball(
            Vec2::new(500.0, SCREEN_HEIGHT - THICKNESS + 1.0),
            Vec2::new(0.0, 50.0),
        );
        step(&mut state, &InputSnapshot::default(), 0.0);
        assert_eq!(state.balls[0].vel.y, -50.0);
        assert_eq!(
            state.events,
            vec![GameEvent::WallBounce { ball: 0, wall: Wall::Bottom }]
        );
    }

    #[test]
    fn test_step_paddle_moves_down() {
        let mut state = GameState::new();
        step(&mut state, &keys(&[LogicalKey::LeftDown]), 0.1);
        assert!((state.left.pos.y - 414.0).abs() < 1e-3);
        assert_eq!(state.left.direction, 1);
        assert_eq!(state.right.pos.y, 384.0);
    }

    #[test]
    fn test_step_both_keys_no_motion() {
        let mut state = GameState::new();
        step(&mut state, &keys(&[LogicalKey::RightUp, LogicalKey::RightDown]), 0.05);
        assert_eq!(state.right.direction, 0);
        assert_eq!(state.right.pos.y, 384.0);
    }

    #[test]
    fn test_step_direction_resets_each_frame() {
        let mut state = GameState::new();
        step(&mut state, &keys(&[LogicalKey::LeftUp]), 0.05);
        let y = state.left.pos.y;
        assert_eq!(state.left.direction, -1);

        step(&mut state, &InputSnapshot::default(), 0.05);
        assert_eq!(state.left.direction, 0);
        assert_eq!(state.left.pos.y, y);
    }

    #[test]
    fn test_step_escape_stops_without_motion() {
        let mut state = GameState::new();
        let before = state.clone();

        let signal = step(
            &mut state,
            &keys(&[LogicalKey::Escape, LogicalKey::LeftDown]),
            0.05,
        );
        assert_eq!(signal, Signal::Stop);
        assert_eq!(state.events, vec![GameEvent::QuitRequested]);
        assert_eq!(state.left.pos, before.left.pos);
        assert_eq!(state.balls, before.balls);
    }

    #[test]
    fn test_step_quit_event_stops() {
        let mut state = GameState::new();
        let input = InputSnapshot::new(true, KeyboardState::default());
        assert_eq!(step(&mut state, &input, 0.016), Signal::Stop);
    }

    #[test]
    fn test_step_ball_integration() {
        let mut state = GameState::new();
        assert_eq!(step(&mut state, &InputSnapshot::default(), 0.05), Signal::Continue);
        let ball = &state.balls[0];
        assert!((ball.pos.x - 522.0).abs() < 1e-3);
        assert!((ball.pos.y - 395.75).abs() < 1e-3);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_step_resolves_every_ball_when_one_exits() {
        let mut state = GameState::new();
        state.balls = vec![
            Ball::new(Vec2::new(-5.0, 400.0), Vec2::new(-200.0, 0.0)),
            Ball::new(Vec2::new(500.0, 5.0), Vec2::new(100.0, -80.0)),
        ];

        assert_eq!(step(&mut state, &InputSnapshot::default(), 0.0), Signal::Stop);
        assert_eq!(state.balls[1].vel.y, 80.0);
        assert_eq!(
            state.events,
            vec![
                GameEvent::BallExited { ball: 0 },
                GameEvent::WallBounce { ball: 1, wall: Wall::Top },
            ]
        );
    }

    #[test]
    fn test_step_clears_previous_events() {
        let mut state = single_ball(Vec2::new(500.0, 5.0), Vec2::new(0.0, -50.0));
        step(&mut state, &InputSnapshot::default(), 0.0);
        assert_eq!(state.events.len(), 1);

        step(&mut state, &InputSnapshot::default(), 0.0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_rally_is_deterministic() {
        let mut a = GameState::with_balls(3, 42);
        let mut b = GameState::with_balls(3, 42);
        let input = keys(&[LogicalKey::LeftUp, LogicalKey::RightDown]);

        for _ in 0..200 {
            let sa = step(&mut a, &input, 0.016);
            let sb = step(&mut b, &input, 0.016);
            assert_eq!(sa, sb);
            assert_eq!(a.balls, b.balls);
            assert_eq!(a.events, b.events);
            if sa == Signal::Stop {
                break;
            }
        }
    }
}
