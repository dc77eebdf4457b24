//! Match state aggregate
//!
//! One owned value holds everything the controller mutates: both
//! paddles, the ball, and the running score. Created once per session
//! and threaded explicitly through the tick; entities are repositioned
//! on resets, never rebuilt.

use glam::Vec2;

use super::ball::Ball;
use super::body::Body;
use crate::consts::*;

/// Points won per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Play-field extent, immutable for the session
    pub field: Vec2,
    pub left_paddle: Body,
    pub right_paddle: Body,
    pub ball: Ball,
    pub score: Score,
}

impl MatchState {
    /// Create a fresh match: paddles centered on their edges, ball stuck
    /// to the left paddle's inner face, ready to serve.
    pub fn new(width: f32, height: f32) -> Self {
        let left_paddle = Body::with_velocity(
            Vec2::new(0.0, height / 2.0 - PADDLE_SIZE.y / 2.0),
            PADDLE_SIZE,
            Vec2::new(0.0, PADDLE_SPEED),
        );
        let right_paddle = Body::with_velocity(
            Vec2::new(width - PADDLE_SIZE.x, height / 2.0 - PADDLE_SIZE.y / 2.0),
            PADDLE_SIZE,
            Vec2::new(0.0, PADDLE_SPEED),
        );

        let serve_pos =
            left_paddle.position + Vec2::new(PADDLE_SIZE.x, PADDLE_SIZE.y / 2.0 - BALL_RADIUS);
        let ball = Ball::new(serve_pos, BALL_RADIUS, BALL_SERVE_VELOCITY);

        Self {
            field: Vec2::new(width, height),
            left_paddle,
            right_paddle,
            ball,
            score: Score::default(),
        }
    }

    /// Put both paddles back at their fixed initial size and position.
    /// Runs on every point scored; velocity is untouched because input
    /// is the only thing that moves paddles.
    pub fn reset_paddles(&mut self) {
        self.left_paddle.size = PADDLE_SIZE;
        self.left_paddle.position = Vec2::new(0.0, self.field.y / 2.0 - PADDLE_SIZE.y / 2.0);

        self.right_paddle.size = PADDLE_SIZE;
        self.right_paddle.position = Vec2::new(
            self.field.x - PADDLE_SIZE.x,
            self.field.y / 2.0 - PADDLE_SIZE.y / 2.0,
        );
    }
}
