//! Per-frame match controller
//!
//! Advances one frame of the match: paddle input, ball integration,
//! paddle collision response, and the scoring reset. The caller samples
//! the key table into a `TickInput` once per frame and supplies the
//! elapsed time; nothing here polls or sleeps.

use glam::Vec2;

use super::ball::Ball;
use super::body::Body;
use super::collision::circle_box_contact;
use super::state::MatchState;
use crate::consts::*;

/// Input commands for a single frame, level-triggered
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Release a stuck ball into play
    pub launch: bool,
}

/// Advance the match by one frame
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    apply_input(state, input, dt);

    state.ball.advance(dt, state.field.x, state.field.y);

    paddle_bounce(&mut state.ball, &state.left_paddle, state.field.x);
    paddle_bounce(&mut state.ball, &state.right_paddle, state.field.x);

    check_scoring(state);
}

/// Move the paddles and drag a stuck ball along with its side's paddle.
///
/// The bounds test runs before the move, so a paddle overshoots the
/// edge by at most one frame's step and then stops; it is never clamped
/// back.
fn apply_input(state: &mut MatchState, input: &TickInput, dt: f32) {
    let midline = state.field.x / 2.0;

    let step = state.left_paddle.velocity.y * dt;
    if input.left_up && state.left_paddle.position.y >= 0.0 {
        state.left_paddle.position.y -= step;
        if state.ball.stuck && state.ball.body.position.x <= midline {
            state.ball.body.position.y -= step;
        }
    }
    if input.left_down && state.left_paddle.position.y <= state.field.y - state.left_paddle.size.y
    {
        state.left_paddle.position.y += step;
        if state.ball.stuck && state.ball.body.position.x <= midline {
            state.ball.body.position.y += step;
        }
    }

    let step = state.right_paddle.velocity.y * dt;
    if input.right_up && state.right_paddle.position.y >= 0.0 {
        state.right_paddle.position.y -= step;
        if state.ball.stuck && state.ball.body.position.x >= midline {
            state.ball.body.position.y -= step;
        }
    }
    if input.right_down
        && state.right_paddle.position.y <= state.field.y - state.right_paddle.size.y
    {
        state.right_paddle.position.y += step;
        if state.ball.stuck && state.ball.body.position.x >= midline {
            state.ball.body.position.y += step;
        }
    }

    // Serve -> rally: releasing the ball is the whole transition
    if input.launch {
        state.ball.stuck = false;
    }
}

/// Redirect the ball off a paddle it overlaps.
///
/// The vertical component is set from how far off-center the impact
/// landed, then the whole vector is rescaled to the pre-hit speed so a
/// rally never gains or loses pace. The horizontal sign is forced
/// toward the opposing side afterwards, which stops the ball grinding
/// along the same paddle on near-tangential hits. The contact's face
/// classification is not consulted on this path.
fn paddle_bounce(ball: &mut Ball, paddle: &Body, field_width: f32) {
    if ball.stuck || circle_box_contact(ball, paddle).is_none() {
        return;
    }

    let paddle_center_y = paddle.position.y + paddle.size.y / 2.0;
    let distance = ball.center().y - paddle_center_y;
    let percentage = distance / (paddle.size.y / 2.0);

    let old_velocity = ball.body.velocity;
    ball.body.velocity.y = BALL_SERVE_VELOCITY.y * percentage * BOUNCE_STRENGTH;
    ball.body.velocity = ball.body.velocity.normalize_or_zero() * old_velocity.length();

    if ball.body.position.x < field_width / 2.0 {
        ball.body.velocity.x = ball.body.velocity.x.abs();
    } else {
        ball.body.velocity.x = -ball.body.velocity.x.abs();
    }
}

/// Score a point once the ball clears a field edge, then re-serve from
/// the surviving paddle. The edge tests are asymmetric: left against
/// the box corner, right against corner plus radius.
fn check_scoring(state: &mut MatchState) {
    if state.ball.body.position.x <= 0.0 {
        // Past the left paddle: right side scores, left receives serve
        // from the right paddle.
        state.score.right += 1;
        state.reset_paddles();
        let serve = state.right_paddle.position
            + Vec2::new(-BALL_RADIUS * 2.0, PADDLE_SIZE.y / 2.0 - BALL_RADIUS);
        state.ball.reset(serve, BALL_SERVE_VELOCITY);
    }
    if state.ball.body.position.x + state.ball.radius >= state.field.x {
        state.score.left += 1;
        state.reset_paddles();
        let serve = state.left_paddle.position
            + Vec2::new(PADDLE_SIZE.x, PADDLE_SIZE.y / 2.0 - BALL_RADIUS);
        state.ball.reset(serve, BALL_SERVE_VELOCITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::{Direction, circle_box_contact};

    const DT: f32 = 1.0 / 60.0;

    fn state_800x600() -> MatchState {
        MatchState::new(800.0, 600.0)
    }

    #[test]
    fn test_launch_releases_ball() {
        let mut state = state_800x600();
        assert!(state.ball.stuck);

        tick(&mut state, &TickInput::default(), DT);
        assert!(state.ball.stuck, "no launch input, still serving");

        let input = TickInput {
            launch: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert!(!state.ball.stuck);
    }

    #[test]
    fn test_stuck_ball_follows_left_paddle() {
        let mut state = state_800x600();
        let input = TickInput {
            left_up: true,
            ..Default::default()
        };

        let paddle_before = state.left_paddle.position.y;
        let ball_before = state.ball.body.position.y;
        tick(&mut state, &input, DT);

        let step = PADDLE_SPEED * DT;
        assert_eq!(state.left_paddle.position.y, paddle_before - step);
        assert_eq!(state.ball.body.position.y, ball_before - step);
    }

    #[test]
    fn test_right_paddle_does_not_drag_left_side_ball() {
        let mut state = state_800x600();
        let input = TickInput {
            right_down: true,
            ..Default::default()
        };

        let ball_before = state.ball.body.position.y;
        tick(&mut state, &input, DT);

        assert_eq!(state.ball.body.position.y, ball_before);
        assert_ne!(state.right_paddle.position.y, 250.0);
    }

    #[test]
    fn test_paddle_blocked_past_boundary() {
        let mut state = state_800x600();
        state.left_paddle.position.y = -1.0;

        let input = TickInput {
            left_up: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.left_paddle.position.y, -1.0, "out of bounds, not moved");

        state.right_paddle.position.y = state.field.y - state.right_paddle.size.y + 1.0;
        let input = TickInput {
            right_down: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(
            state.right_paddle.position.y,
            state.field.y - state.right_paddle.size.y + 1.0
        );
    }

    #[test]
    fn test_leftward_ball_bounces_off_left_paddle() {
        // Ball at (50,294) drifting left at (-100,0) into a paddle at
        // (30,250) of size (20,100), dt 0.1.
        let mut state = state_800x600();
        state.left_paddle.position = Vec2::new(30.0, 250.0);
        state.ball.body.position = Vec2::new(50.0, 294.0);
        state.ball.body.velocity = Vec2::new(-100.0, 0.0);
        state.ball.stuck = false;

        tick(&mut state, &TickInput::default(), 0.1);

        // One integration step lands the ball on the paddle face
        assert_eq!(state.ball.body.position, Vec2::new(40.0, 294.0));
        // The probe agrees with the derived geometry: penetration points
        // at the left compass axis
        let contact =
            circle_box_contact(&state.ball, &state.left_paddle).expect("ball overlaps paddle");
        assert_eq!(contact.face, Direction::Left);

        // Response: x-sign forced away from the paddle, speed preserved
        assert!(state.ball.body.velocity.x > 0.0);
        assert!(state.ball.body.velocity.y < 0.0, "hit below center deflects up");
        let speed = state.ball.body.velocity.length();
        assert!((speed - 100.0).abs() / 100.0 < 1e-4);
    }

    #[test]
    fn test_bounce_preserves_speed_on_right_paddle() {
        let mut state = state_800x600();
        state.ball.body.position = Vec2::new(760.0, 294.0);
        state.ball.body.velocity = Vec2::new(100.0, 0.0);
        state.ball.stuck = false;

        tick(&mut state, &TickInput::default(), 0.01);

        assert!(state.ball.body.velocity.x < 0.0, "sent back toward the left");
        let speed = state.ball.body.velocity.length();
        assert!((speed - 100.0).abs() / 100.0 < 1e-4);
    }

    #[test]
    fn test_stuck_ball_never_bounces() {
        let mut state = state_800x600();
        // Stuck ball sits flush against the left paddle already
        let velocity_before = state.ball.body.velocity;
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.ball.body.velocity, velocity_before);
    }

    #[test]
    fn test_point_past_left_paddle() {
        let mut state = state_800x600();
        state.left_paddle.position.y = 100.0;
        state.right_paddle.position.y = 400.0;
        state.ball.body.position = Vec2::new(-5.0, 300.0);
        state.ball.body.velocity = Vec2::ZERO;
        state.ball.stuck = false;

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.score.right, 1);
        assert_eq!(state.score.left, 0);
        // Paddles back to the initial layout
        assert_eq!(state.left_paddle.position, Vec2::new(0.0, 250.0));
        assert_eq!(state.right_paddle.position, Vec2::new(780.0, 250.0));
        // Serve re-sticks the ball just outside the surviving paddle
        assert!(state.ball.stuck);
        assert_eq!(state.ball.body.position, Vec2::new(755.0, 287.5));
        assert_eq!(state.ball.body.velocity, BALL_SERVE_VELOCITY);
    }

    #[test]
    fn test_point_past_right_paddle() {
        let mut state = state_800x600();
        state.ball.body.position = Vec2::new(790.0, 300.0);
        state.ball.body.velocity = Vec2::ZERO;
        state.ball.stuck = false;

        tick(&mut state, &TickInput::default(), DT);

        assert_eq!(state.score.left, 1);
        assert!(state.ball.stuck);
        assert_eq!(state.ball.body.position, Vec2::new(20.0, 287.5));
    }
}
