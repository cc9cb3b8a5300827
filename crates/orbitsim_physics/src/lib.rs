//! Newtonian gravity simulation for orbitsim
//!
//! This crate provides the physics core of the simulation:
//! - Point-mass bodies with real masses and canvas-space positions
//! - Pairwise O(N²) gravitational force accumulation
//! - Explicit Euler velocity/position integration
//! - A frame clock that turns animation timestamps into variable time steps

pub mod body;
pub mod clock;
pub mod error;
pub mod gravity;
pub mod system;

// Re-export commonly used types
pub use body::{Body, BodyKey};
pub use clock::{FrameClock, DEFAULT_INITIAL_DT, DEFAULT_TIME_SCALE};
pub use error::PhysicsError;
pub use gravity::{gravitational_force, inverse_square, G};
pub use system::{GravityConfig, GravitySystem, StepStats};
