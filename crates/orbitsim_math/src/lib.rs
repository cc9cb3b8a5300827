//! 2D Mathematics Library
//!
//! This crate provides the vector type used by the orbitsim gravity simulation.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector with x, y components in double precision

mod vec2;

pub use vec2::Vec2;
