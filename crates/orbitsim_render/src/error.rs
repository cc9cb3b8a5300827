//! Render error types

use std::fmt;
use std::io;

use orbitsim_physics::PhysicsError;

/// Error type for rendering and frame output
#[derive(Debug)]
pub enum RenderError {
    /// The physics step for this frame failed
    Physics(PhysicsError),
    /// PNG encoding failed
    Image(image::ImageError),
    /// Writing a snapshot failed
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Physics(e) => write!(f, "Physics error: {}", e),
            RenderError::Image(e) => write!(f, "Image error: {}", e),
            RenderError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Physics(e) => Some(e),
            RenderError::Image(e) => Some(e),
            RenderError::Io(e) => Some(e),
        }
    }
}

impl From<PhysicsError> for RenderError {
    fn from(e: PhysicsError) -> Self {
        RenderError::Physics(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        RenderError::Io(e)
    }
}
