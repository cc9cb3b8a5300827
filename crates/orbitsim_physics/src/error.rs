//! Physics error types

use std::fmt;

/// Error type for gravity system operations
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Body mass must be finite and positive
    InvalidMass(f64),
    /// Time step must be finite and non-negative
    InvalidTimeStep(f64),
    /// Scale (metres per canvas unit) must be finite and positive
    InvalidScale(f64),
    /// Gravitational constant must be finite and non-negative
    InvalidGravitationalConstant(f64),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidMass(m) => write!(f, "Invalid body mass: {}", m),
            PhysicsError::InvalidTimeStep(dt) => write!(f, "Invalid time step: {}", dt),
            PhysicsError::InvalidScale(s) => write!(f, "Invalid scale: {}", s),
            PhysicsError::InvalidGravitationalConstant(g) => {
                write!(f, "Invalid gravitational constant: {}", g)
            }
        }
    }
}

impl std::error::Error for PhysicsError {}
