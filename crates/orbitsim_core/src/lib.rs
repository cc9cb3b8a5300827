//! Core types for the orbitsim simulation
//!
//! This crate provides the types that tie physics bodies to something drawable:
//!
//! - [`Material`] - Visual properties of an entity
//! - [`Entity`] - A named, colored body in the world
//! - [`World`] - Container for entities and the gravity system
//! - [`EntityHandle`] - Handle to an entity in the world
//! - [`BodyTemplate`] - Serializable body description
//! - [`Scene`] - Loadable/saveable scene containing body templates

mod entity;
mod world;
mod scene;

pub use entity::{Material, Entity};
pub use world::{World, EntityHandle};
pub use scene::{Scene, BodyTemplate, SceneError, SceneLoadError, SceneSaveError};

// Re-export commonly used types from orbitsim_math for convenience
pub use orbitsim_math::Vec2;

// Re-export physics types for convenient access through orbitsim_core
pub use orbitsim_physics::{Body, BodyKey, GravityConfig, GravitySystem, PhysicsError, StepStats};
