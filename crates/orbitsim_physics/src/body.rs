//! Point-mass body type

use orbitsim_math::Vec2;
use slotmap::new_key_type;

new_key_type! {
    /// Key to a body in the gravity system
    ///
    /// Generational: once a body is removed, its old key returns None even
    /// if the slot is reused.
    pub struct BodyKey;
}

/// A point mass in the simulation
///
/// Mixed units: mass and velocity are real (kg, m/s) while position and
/// radius live in canvas units. The system's scale converts between them.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Mass in kilograms
    pub mass: f64,
    /// Position in canvas units
    pub position: Vec2,
    /// Velocity in metres per second
    pub velocity: Vec2,
    /// Drawing radius in canvas units
    pub radius: f64,
    /// Fixed bodies attract others but are never moved
    pub fixed: bool,
}

impl Body {
    /// Create a body with a radius given in canvas units
    pub fn new(mass: f64, position: Vec2, velocity: Vec2, radius: f64) -> Self {
        Self {
            mass,
            position,
            velocity,
            radius,
            fixed: false,
        }
    }

    /// Create a body from a real radius in metres
    ///
    /// The drawing radius becomes `real_radius / scale`.
    pub fn from_real(mass: f64, position: Vec2, velocity: Vec2, real_radius: f64, scale: f64) -> Self {
        Self::new(mass, position, velocity, real_radius / scale)
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Pin this body in place
    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    /// Speed in metres per second
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Linear momentum in kg·m/s
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}
