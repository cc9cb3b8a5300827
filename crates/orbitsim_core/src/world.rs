//! World container for entities
//!
//! The World owns the gravity system and the entities drawn from it.

use crate::{Entity, Material};
use orbitsim_physics::{Body, GravityConfig, GravitySystem, PhysicsError, StepStats};

/// A handle to an entity in the world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityHandle(usize);

impl EntityHandle {
    /// Get the raw index of this handle
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The simulated world
///
/// Every entity maps to exactly one body in the gravity system.
pub struct World {
    entities: Vec<Entity>,
    physics: GravitySystem,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world with the default gravity configuration
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            physics: GravitySystem::new(),
        }
    }

    /// Create a new empty world with a custom gravity configuration
    pub fn with_config(config: GravityConfig) -> Result<Self, PhysicsError> {
        Ok(Self {
            entities: Vec::new(),
            physics: GravitySystem::with_config(config)?,
        })
    }

    /// Get the gravity system
    pub fn physics(&self) -> &GravitySystem {
        &self.physics
    }

    /// Get the gravity system mutably
    pub fn physics_mut(&mut self) -> &mut GravitySystem {
        &mut self.physics
    }

    /// Add a body to physics and a matching entity, returning the entity's handle
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        body: Body,
        material: Material,
    ) -> Result<EntityHandle, PhysicsError> {
        let key = self.physics.add_body(body)?;
        let handle = EntityHandle(self.entities.len());
        self.entities.push(Entity::new(name, key).with_material(material));
        Ok(handle)
    }

    /// Get a reference to an entity by handle
    pub fn get_entity(&self, handle: EntityHandle) -> Option<&Entity> {
        self.entities.get(handle.0)
    }

    /// Get the first entity with the given name
    pub fn get_by_name(&self, name: &str) -> Option<(EntityHandle, &Entity)> {
        self.iter_with_handles().find(|(_, e)| e.name == name)
    }

    /// Get the physics body behind an entity
    pub fn body(&self, entity: &Entity) -> Option<&Body> {
        self.physics.get_body(entity.body)
    }

    /// Get the physics body of the named entity
    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.get_by_name(name).and_then(|(_, e)| self.body(e))
    }

    /// Get all entities as a slice
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Get the number of entities
    #[inline]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Check if the world is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Advance the gravity simulation by `dt` simulated seconds
    pub fn update(&mut self, dt: f64) -> Result<StepStats, PhysicsError> {
        self.physics.step(dt)
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Iterate over entities paired with their bodies
    pub fn iter_bodies(&self) -> impl Iterator<Item = (&Entity, &Body)> + '_ {
        self.entities
            .iter()
            .filter_map(move |e| self.physics.get_body(e.body).map(|b| (e, b)))
    }

    /// Iterate over handles and entities
    pub fn iter_with_handles(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityHandle(i), e))
    }
}
