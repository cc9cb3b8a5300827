//! Software rendering for orbitsim
//!
//! Draws the world onto an RGBA framebuffer the way a 2D canvas would:
//! a translucent background wash each frame (leaving motion trails) and one
//! filled circle per body.

pub mod canvas;
pub mod color;
pub mod debug;
pub mod error;
pub mod renderer;

pub use canvas::Canvas;
pub use color::Rgba;
pub use debug::DebugTable;
pub use error::RenderError;
pub use renderer::{FrameReport, Renderer};
