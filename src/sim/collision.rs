//! Collision detection for axis-aligned play
//!
//! Two stateless tests: rectangle overlap for generic bodies, and the
//! closest-point circle-vs-rectangle probe the ball path uses, which
//! also classifies which face of the rectangle took the hit.

use glam::Vec2;

use super::ball::Ball;
use super::body::Body;

/// Which face of a rectangle a circular impact struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

/// A confirmed circle-vs-box hit. Only produced when the overlap test
/// passes, so both fields are always meaningful.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub face: Direction,
    /// Vector from the circle center to the closest point on the box
    pub penetration: Vec2,
}

/// Axis-aligned overlap test between two bodies. Edge contact counts:
/// rectangles that merely touch are reported as colliding.
pub fn bodies_overlap(a: &Body, b: &Body) -> bool {
    let overlap_x = a.max().x >= b.position.x && b.max().x >= a.position.x;
    let overlap_y = a.max().y >= b.position.y && b.max().y >= a.position.y;
    overlap_x && overlap_y
}

/// Closest-point test between the ball's circle and a body's rectangle.
///
/// Clamps the center-to-center difference to the box half-extents to
/// find the boundary point nearest the circle, then compares that
/// distance against the radius (boundary inclusive, so a tangent ball
/// collides). Returns `None` on a miss; a `Contact` carries the face
/// classification and penetration vector otherwise.
pub fn circle_box_contact(ball: &Ball, target: &Body) -> Option<Contact> {
    let center = ball.center();
    let half_extents = target.size * 0.5;
    let box_center = target.position + half_extents;

    let difference = center - box_center;
    let clamped = difference.clamp(-half_extents, half_extents);
    let closest = box_center + clamped;
    let penetration = closest - center;

    if penetration.length() <= ball.radius {
        Some(Contact {
            face: classify_face(penetration),
            penetration,
        })
    } else {
        None
    }
}

/// Compass directions in classification order. `Up` is checked first
/// and therefore wins exact ties.
const COMPASS: [(Direction, Vec2); 4] = [
    (Direction::Up, Vec2::new(0.0, 1.0)),
    (Direction::Right, Vec2::new(1.0, 0.0)),
    (Direction::Down, Vec2::new(0.0, -1.0)),
    (Direction::Left, Vec2::new(-1.0, 0.0)),
];

/// Match a penetration vector to the nearest compass face.
///
/// The comparison is strictly-greater over the fixed compass order, so
/// diagonal ties resolve to the earlier entry. A zero-length vector
/// (circle center exactly on the box boundary) normalizes to zero and
/// falls through to `Up`, keeping the result deterministic in a case
/// that has no meaningful nearest face.
fn classify_face(penetration: Vec2) -> Direction {
    let normalized = penetration.normalize_or_zero();
    let mut best = Direction::Up;
    let mut max_dot = 0.0;
    for (face, axis) in COMPASS {
        let dot = normalized.dot(axis);
        if dot > max_dot {
            max_dot = dot;
            best = face;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn body(x: f32, y: f32, w: f32, h: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn free_ball(x: f32, y: f32, radius: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), radius, Vec2::ZERO);
        ball.stuck = false;
        ball
    }

    #[test]
    fn test_overlap_and_separation() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        let b = body(5.0, 5.0, 10.0, 10.0);
        let c = body(20.0, 20.0, 4.0, 4.0);

        assert!(bodies_overlap(&a, &b));
        assert!(!bodies_overlap(&a, &c));
    }

    #[test]
    fn test_edge_touching_counts_as_overlap() {
        let a = body(0.0, 0.0, 10.0, 10.0);
        let b = body(10.0, 0.0, 10.0, 10.0);
        assert!(bodies_overlap(&a, &b));
        assert!(bodies_overlap(&b, &a));
    }

    #[test]
    fn test_circle_miss_returns_none() {
        // Ball center (112.5, 112.5), box no closer than x=200
        let ball = free_ball(100.0, 100.0, 12.5);
        let target = body(200.0, 100.0, 20.0, 100.0);
        assert!(circle_box_contact(&ball, &target).is_none());
    }

    #[test]
    fn test_tangent_circle_collides() {
        // Center (50, 50), box left edge at x=60: distance exactly 10
        let ball = free_ball(40.0, 40.0, 10.0);
        let target = body(60.0, 0.0, 20.0, 100.0);
        let contact = circle_box_contact(&ball, &target);
        assert!(contact.is_some());
    }

    #[test]
    fn test_contact_penetration_vector() {
        // Center (52.5, 306.5) overlapping a paddle's right face
        let ball = free_ball(40.0, 294.0, 12.5);
        let paddle = body(30.0, 250.0, 20.0, 100.0);

        let contact = circle_box_contact(&ball, &paddle).expect("overlapping");
        // Closest point is on the right face at x=50
        assert_eq!(contact.penetration, Vec2::new(-2.5, 0.0));
        assert_eq!(contact.face, Direction::Left);
    }

    #[test]
    fn test_classify_cardinals() {
        assert_eq!(classify_face(Vec2::new(0.0, 1.0)), Direction::Up);
        assert_eq!(classify_face(Vec2::new(4.0, 0.0)), Direction::Right);
        assert_eq!(classify_face(Vec2::new(0.0, -0.5)), Direction::Down);
        assert_eq!(classify_face(Vec2::new(-3.0, 0.0)), Direction::Left);
    }

    #[test]
    fn test_classify_tie_prefers_first_compass_entry() {
        // Exactly diagonal: equal dot against Up and Right
        assert_eq!(classify_face(Vec2::new(1.0, 1.0)), Direction::Up);
        // Down/Left diagonal ties resolve to Down (checked before Left)
        assert_eq!(classify_face(Vec2::new(-1.0, -1.0)), Direction::Down);
    }

    #[test]
    fn test_classify_zero_vector_falls_back_to_up() {
        assert_eq!(classify_face(Vec2::ZERO), Direction::Up);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..300.0, ah in 0.1f32..300.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..300.0, bh in 0.1f32..300.0,
        ) {
            let a = body(ax, ay, aw, ah);
            let b = body(bx, by, bw, bh);
            prop_assert_eq!(bodies_overlap(&a, &b), bodies_overlap(&b, &a));
        }

        #[test]
        fn prop_distant_circle_never_collides(
            y in -500.0f32..500.0,
            radius in 0.1f32..50.0,
            gap in 0.001f32..200.0,
            bh in 0.1f32..300.0,
        ) {
            // Box strictly right of the circle's reach along x
            let ball = free_ball(0.0, y, radius);
            let box_x = ball.center().x + radius + gap;
            let target = body(box_x, y, 20.0, bh);
            prop_assert!(circle_box_contact(&ball, &target).is_none());
        }
    }
}
