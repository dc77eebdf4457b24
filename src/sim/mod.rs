//! Deterministic match simulation
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Position/velocity integration driven only by the caller's dt
//! - No rendering, input, or platform dependencies
//! - Collision tests are stateless functions over in-memory state

pub mod ball;
pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use body::Body;
pub use collision::{Contact, Direction, bodies_overlap, circle_box_contact};
pub use state::{MatchState, Score};
pub use tick::{TickInput, tick};
