//! Orbitsim - headless two-body gravity animation
//!
//! Exposes the application layers so integration tests can drive them.

pub mod app;
pub mod config;
pub mod error;
pub mod systems;

pub use app::{App, RunSummary};
pub use error::AppError;
