//! Application systems
//!
//! The frame loop is split into simulation (physics + drawing) and output
//! (PNG snapshots) so each can be tested without the other.

mod output;
mod simulation;

pub use output::OutputSystem;
pub use simulation::{resolve_scene, SimulationSystem};
