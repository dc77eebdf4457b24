//! Duel Pong - a two-player paddle duel
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (physics, collisions, scoring)
//! - `renderer`: WebGPU sprite rendering pipeline
//! - `assets`: Named shader/texture cache with opaque handles
//! - `input`: Level-triggered keyboard state table

pub mod assets;
pub mod input;
pub mod renderer;
pub mod sim;

pub use input::KeyTable;
pub use sim::{MatchState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Logical play-field dimensions (world units, mapped to the canvas)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_SIZE: Vec2 = Vec2::new(20.0, 100.0);
    /// Vertical paddle speed (units/second)
    pub const PADDLE_SPEED: f32 = 1000.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.5;
    /// Serve velocity; the y component also scales the bounce deflection
    pub const BALL_SERVE_VELOCITY: Vec2 = Vec2::new(1500.0, -150.0);

    /// Vertical deflection multiplier for off-center paddle hits
    pub const BOUNCE_STRENGTH: f32 = 2.0;
}
