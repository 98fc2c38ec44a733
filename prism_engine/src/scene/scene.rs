/// Scene - explicit state of everything that gets drawn.
///
/// Holds the camera, the lights, the clear color and the entities.
/// Entities are addressed by stable `EntityKey`s (slotmap) and iterated
/// in insertion order, which is also the draw order.

use glam::Vec4;
use slotmap::{new_key_type, SlotMap};
use crate::camera::Camera;
use crate::error::Result;
use crate::engine_debug;
use crate::lighting::Lighting;
use crate::resource::ResourceManager;
use super::aabb::AABB;
use super::entity::Entity;

new_key_type! {
    /// Stable handle to an entity in a Scene
    pub struct EntityKey;
}

pub struct Scene {
    camera: Camera,
    lighting: Lighting,
    clear_color: Vec4,
    /// Entities in insertion order
    entities: Vec<(EntityKey, Entity)>,
    /// Key -> index into `entities`
    slots: SlotMap<EntityKey, usize>,
}

impl Scene {
    /// Empty scene viewed through `camera`, cleared to opaque black.
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lighting: Lighting::new(),
            clear_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            entities: Vec::new(),
            slots: SlotMap::with_key(),
        }
    }

    // ===== CAMERA / LIGHTING / CLEAR COLOR =====

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    pub fn lighting_mut(&mut self) -> &mut Lighting {
        &mut self.lighting
    }

    pub fn clear_color(&self) -> Vec4 {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Vec4) {
        self.clear_color = color;
    }

    // ===== ENTITIES =====

    /// Add an entity at the end of the draw order.
    pub fn spawn(&mut self, entity: Entity) -> EntityKey {
        let key = self.slots.insert(self.entities.len());
        engine_debug!("prism::Scene", "Entity {:?} spawned (mesh '{}', material '{}')",
            key, entity.mesh().name(), entity.material().name());
        self.entities.push((key, entity));
        key
    }

    /// Look up mesh and material by name and spawn an entity using them.
    pub fn spawn_from(
        &mut self,
        resources: &ResourceManager,
        mesh: &str,
        material: &str,
    ) -> Result<EntityKey> {
        let mesh = resources.require_mesh(mesh)?;
        let material = resources.require_material(material)?;
        Ok(self.spawn(Entity::new(mesh, material)))
    }

    /// Remove an entity. Later entities keep their relative order.
    pub fn remove(&mut self, key: EntityKey) -> Option<Entity> {
        let index = self.slots.remove(key)?;
        let (_, entity) = self.entities.remove(index);
        for (later, _) in &self.entities[index..] {
            if let Some(slot) = self.slots.get_mut(*later) {
                *slot -= 1;
            }
        }
        Some(entity)
    }

    pub fn contains(&self, key: EntityKey) -> bool {
        self.slots.contains_key(key)
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        let index = *self.slots.get(key)?;
        self.entities.get(index).map(|(_, e)| e)
    }

    pub fn entity_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        let index = *self.slots.get(key)?;
        self.entities.get_mut(index).map(|(_, e)| e)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities.iter().map(|(k, e)| (*k, e))
    }

    /// Entities in insertion order, mutable
    pub fn entities_mut(&mut self) -> impl Iterator<Item = (EntityKey, &mut Entity)> {
        self.entities.iter_mut().map(|(k, e)| (*k, e))
    }

    /// Box enclosing every entity's world bounds. `None` when empty.
    pub fn bounds(&self) -> Option<AABB> {
        self.entities
            .iter()
            .map(|(_, e)| e.world_bounds())
            .reduce(|acc, b| acc.union(&b))
    }

    /// Remove every entity. Keys handed out before become stale.
    pub fn clear_entities(&mut self) {
        self.entities.clear();
        self.slots.clear();
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
