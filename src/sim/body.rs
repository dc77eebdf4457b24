//! Axis-aligned moving body shared by the paddles and the ball

use glam::Vec2;

/// A rectangular entity: top-left corner position, extent, velocity in
/// units/second. Paddles are plain bodies; the ball embeds one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
}

impl Body {
    /// Create a body at rest. `size` components must be positive.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self::with_velocity(position, size, Vec2::ZERO)
    }

    pub fn with_velocity(position: Vec2, size: Vec2, velocity: Vec2) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0);
        Self {
            position,
            size,
            velocity,
        }
    }

    /// Geometric center of the rectangle
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Bottom-right corner (`position + size`)
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_max() {
        let body = Body::new(Vec2::new(30.0, 250.0), Vec2::new(20.0, 100.0));
        assert_eq!(body.center(), Vec2::new(40.0, 300.0));
        assert_eq!(body.max(), Vec2::new(50.0, 350.0));
        assert_eq!(body.velocity, Vec2::ZERO);
    }
}
