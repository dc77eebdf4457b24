//! Ball dynamics: Euler integration, wall reflection, stuck launch state

use glam::Vec2;

use super::body::Body;

/// The ball: a circular body tracked by its bounding box. `position` is
/// the box's top-left corner; the circle center is `position + radius`
/// on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub body: Body,
    pub radius: f32,
    /// Attached to a paddle, waiting for launch. While set, integration
    /// is suppressed and the controller moves the ball with its paddle.
    pub stuck: bool,
}

impl Ball {
    /// Create a stuck ball. The bounding box is derived from the radius
    /// and stays `(2r, 2r)` for the ball's lifetime.
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            body: Body::with_velocity(position, Vec2::splat(radius * 2.0), velocity),
            radius,
            stuck: true,
        }
    }

    /// Circle center
    pub fn center(&self) -> Vec2 {
        self.body.position + self.radius
    }

    /// Advance one tick and return the updated position.
    ///
    /// Reflects off the top and bottom field edges, clamping back into
    /// bounds. There is no horizontal handling: crossing the left or
    /// right edge is the scoring condition and belongs to the match
    /// controller, which is why `_field_width` goes unused here.
    pub fn advance(&mut self, dt: f32, _field_width: f32, field_height: f32) -> Vec2 {
        if self.stuck {
            return self.body.position;
        }

        self.body.position += self.body.velocity * dt;
        if self.body.position.y <= 0.0 {
            self.body.velocity.y = -self.body.velocity.y;
            self.body.position.y = 0.0;
        } else if self.body.position.y + self.body.size.y >= field_height {
            self.body.velocity.y = -self.body.velocity.y;
            self.body.position.y = field_height - self.body.size.y;
        }
        self.body.position
    }

    /// Re-stick the ball at a serve position. Used at session start and
    /// after every point.
    pub fn reset(&mut self, position: Vec2, velocity: Vec2) {
        self.body.position = position;
        self.body.velocity = velocity;
        self.stuck = true;
    }
}
