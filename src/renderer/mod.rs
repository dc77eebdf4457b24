//! WebGPU sprite rendering
//!
//! CPU-assembled textured quads over a single pipeline. The sim never
//! touches this module; the platform glue composes a `SpriteFrame` from
//! match state each frame and hands it to `RenderState::render`.

pub mod pipeline;
pub mod sprite;

pub use pipeline::RenderState;
pub use sprite::{SpriteFrame, SpriteVertex, WHITE};
