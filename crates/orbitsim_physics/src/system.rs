//! Gravity system and simulation step

use crate::body::{Body, BodyKey};
use crate::error::PhysicsError;
use crate::gravity::{inverse_square, G};
use orbitsim_math::Vec2;
use slotmap::SlotMap;

/// Configuration for the gravity simulation
#[derive(Clone, Debug, PartialEq)]
pub struct GravityConfig {
    /// Gravitational constant in N·m²/kg²
    pub gravitational_constant: f64,
    /// Metres per canvas unit
    pub scale: f64,
    /// Softening length in metres added to every pair distance (0 = pure Newtonian)
    pub softening: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G,
            scale: 1_100_000.0,
            softening: 0.0,
        }
    }
}

impl GravityConfig {
    /// Create a config with the real gravitational constant and the given scale
    pub fn new(scale: f64) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Override the gravitational constant
    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    /// Set the softening length in metres
    pub fn with_softening(mut self, softening: f64) -> Self {
        self.softening = softening;
        self
    }

    fn validate(&self) -> Result<(), PhysicsError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(PhysicsError::InvalidScale(self.scale));
        }
        let g = self.gravitational_constant;
        if !g.is_finite() || g < 0.0 {
            return Err(PhysicsError::InvalidGravitationalConstant(g));
        }
        Ok(())
    }
}

/// Summary of one simulation step
///
/// `separation` and `force` describe the last pair visited, the same values
/// the debug table shows. Both are `None` when that pair is coincident.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    /// Number of body pairs evaluated
    pub pairs: usize,
    /// Distance between the last pair, in metres
    pub separation: Option<f64>,
    /// Force magnitude between the last pair, in newtons
    pub force: Option<f64>,
}

/// The gravity system containing all bodies
pub struct GravitySystem {
    /// All bodies (using generational keys)
    bodies: SlotMap<BodyKey, Body>,
    /// Insertion order, which is also pair-iteration order
    order: Vec<BodyKey>,
    /// Net force per body from the last step, parallel to `order`
    forces: Vec<Vec2>,
    /// Simulation configuration
    config: GravityConfig,
}

impl GravitySystem {
    /// Create a new system with default configuration
    pub fn new() -> Self {
        Self {
            bodies: SlotMap::with_key(),
            order: Vec::new(),
            forces: Vec::new(),
            config: GravityConfig::default(),
        }
    }

    /// Create a new system with custom configuration
    pub fn with_config(config: GravityConfig) -> Result<Self, PhysicsError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Current configuration
    pub fn config(&self) -> &GravityConfig {
        &self.config
    }

    /// Add a body and return its key
    pub fn add_body(&mut self, body: Body) -> Result<BodyKey, PhysicsError> {
        if !body.mass.is_finite() || body.mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(body.mass));
        }
        let key = self.bodies.insert(body);
        self.order.push(key);
        log::debug!("Added body {:?} ({} total)", key, self.order.len());
        Ok(key)
    }

    /// Remove a body and return it
    pub fn remove_body(&mut self, key: BodyKey) -> Option<Body> {
        let body = self.bodies.remove(key)?;
        self.order.retain(|k| *k != key);
        self.forces.clear();
        Some(body)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&Body> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut Body> {
        self.bodies.get_mut(key)
    }

    /// Number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.order.len()
    }

    /// Iterate over bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyKey, &Body)> + '_ {
        self.order.iter().map(move |k| (*k, &self.bodies[*k]))
    }

    /// Net force on every body from the last step, in insertion order
    pub fn forces(&self) -> &[Vec2] {
        &self.forces
    }

    /// Net force on a body from the last step, in newtons
    pub fn force_on(&self, key: BodyKey) -> Option<Vec2> {
        let index = self.order.iter().position(|k| *k == key)?;
        self.forces.get(index).copied()
    }

    /// Total linear momentum in kg·m/s
    pub fn momentum(&self) -> Vec2 {
        self.bodies
            .values()
            .fold(Vec2::ZERO, |acc, b| acc + b.momentum())
    }

    /// Step the simulation forward by `dt` simulated seconds
    ///
    /// This performs:
    /// 1. Pairwise force accumulation over every unordered pair
    /// 2. Velocity update from acceleration (`v += F/m · dt`)
    /// 3. Position update from the new velocity (`p += v · dt / scale`)
    pub fn step(&mut self, dt: f64) -> Result<StepStats, PhysicsError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(PhysicsError::InvalidTimeStep(dt));
        }
        // Masses can be edited through get_body_mut after insertion
        let invalid = self
            .bodies
            .values()
            .find(|b| !(b.mass.is_finite() && b.mass > 0.0));
        if let Some(body) = invalid {
            return Err(PhysicsError::InvalidMass(body.mass));
        }

        let count = self.order.len();
        let scale = self.config.scale;
        let g = self.config.gravitational_constant;
        let softening_sq = self.config.softening * self.config.softening;

        self.forces.clear();
        self.forces.resize(count, Vec2::ZERO);

        let mut stats = StepStats::default();

        // Phase 1: accumulate pairwise forces
        for i in 0..count.saturating_sub(1) {
            for j in (i + 1)..count {
                let a = &self.bodies[self.order[i]];
                let b = &self.bodies[self.order[j]];

                // Separation in metres, pointing from a toward b
                let delta = (b.position - a.position) * scale;
                let r2 = delta.length_squared() + softening_sq;
                stats.pairs += 1;

                // Coincident bodies exert nothing on each other
                if r2 <= 0.0 {
                    stats.separation = None;
                    stats.force = None;
                    continue;
                }

                let r = r2.sqrt();
                let force = inverse_square(g, a.mass, b.mass, r2);
                let pull = delta * (force / r);

                self.forces[i] += pull;
                self.forces[j] -= pull;

                stats.separation = Some(r);
                stats.force = Some(force);
            }
        }

        // Phase 2: integrate
        for (i, key) in self.order.iter().enumerate() {
            let body = &mut self.bodies[*key];
            if body.fixed {
                continue;
            }

            let acceleration = self.forces[i] / body.mass;
            body.velocity += acceleration * dt;
            body.position += body.velocity * (dt / scale);
        }

        log::trace!("Stepped {} bodies by {:.3}s", count, dt);
        Ok(stats)
    }
}

impl Default for GravitySystem {
    fn default() -> Self {
        Self::new()
    }
}
