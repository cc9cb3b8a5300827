//! Application error type

use std::fmt;

use orbitsim_core::SceneError;
use orbitsim_render::RenderError;

use crate::config::ConfigError;

/// Fatal error from the application layer
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid
    Config(ConfigError),
    /// Scene could not be resolved or instantiated
    Scene(SceneError),
    /// A frame failed to render or a snapshot failed to write
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Scene(e) => write!(f, "{}", e),
            AppError::Render(e) => write!(f, "Render failed: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Scene(e) => Some(e),
            AppError::Render(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<SceneError> for AppError {
    fn from(e: SceneError) -> Self {
        AppError::Scene(e)
    }
}

impl From<RenderError> for AppError {
    fn from(e: RenderError) -> Self {
        AppError::Render(e)
    }
}
