/// Entity - one drawable object in the scene.
///
/// Owns its Transform exclusively. Mesh and material are shared `Arc`s:
/// many entities may draw the same geometry with independent placement,
/// and dropping an entity never frees them.

use std::sync::Arc;
use crate::frame::FrameTime;
use crate::resource::{Material, Mesh};
use super::aabb::AABB;
use super::motion::Motion;
use super::transform::Transform;

#[derive(Debug, Clone)]
pub struct Entity {
    transform: Transform,
    mesh: Arc<Mesh>,
    material: Arc<Material>,
    motion: Motion,
}

impl Entity {
    /// New entity at the origin with an identity transform and no motion.
    pub fn new(mesh: Arc<Mesh>, material: Arc<Material>) -> Self {
        Self {
            transform: Transform::new(),
            mesh,
            material,
            motion: Motion::Static,
        }
    }

    pub fn with_motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn mesh(&self) -> &Arc<Mesh> {
        &self.mesh
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    pub fn set_material(&mut self, material: Arc<Material>) {
        self.material = material;
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn set_motion(&mut self, motion: Motion) {
        self.motion = motion;
    }

    /// Mesh bounds under the last computed world matrix.
    pub fn world_bounds(&self) -> AABB {
        self.mesh.bounds().transformed(self.transform.world_matrix())
    }

    /// Run the motion rule, then refresh the world matrix.
    pub fn update(&mut self, time: FrameTime) {
        self.motion.apply(&mut self.transform, time);
        self.transform.create_world_matrix();
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
