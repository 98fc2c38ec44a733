/// Transform - placement of one object in world space.
///
/// Mutations (move, rotate, scale) only touch position/rotation/scale.
/// The world matrix is a cache refreshed explicitly by
/// `create_world_matrix()`, typically once per object per frame right
/// before rendering.

use std::f32::consts::{PI, TAU};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Wrap an angle in radians into (-π, π].
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Position, Euler rotation and scale of one object, plus its cached world matrix.
///
/// Rotation is stored as (pitch, yaw, roll) around (X, Y, Z) in radians and
/// applied roll first, then pitch, then yaw. Coordinates are left-handed:
/// +X right, +Y up, +Z forward.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
    world_matrix: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform: origin, no rotation, unit scale.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            world_matrix: Mat4::IDENTITY,
        }
    }

    // ===== MUTATION =====

    /// Add an offset to the position, in world space.
    pub fn move_absolute(&mut self, dx: f32, dy: f32, dz: f32) {
        self.position += Vec3::new(dx, dy, dz);
    }

    /// Add an offset expressed in the object's local axes.
    pub fn move_relative(&mut self, dx: f32, dy: f32, dz: f32) {
        self.position += self.orientation() * Vec3::new(dx, dy, dz);
    }

    /// Add Euler-angle deltas (radians). Each component stays in (-π, π].
    pub fn rotate(&mut self, rx: f32, ry: f32, rz: f32) {
        self.rotation = Vec3::new(
            wrap_angle(self.rotation.x + rx),
            wrap_angle(self.rotation.y + ry),
            wrap_angle(self.rotation.z + rz),
        );
    }

    /// Multiply the current scale component-wise.
    pub fn scale_by(&mut self, sx: f32, sy: f32, sz: f32) {
        self.scale *= Vec3::new(sx, sy, sz);
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the Euler rotation (radians), wrapped into (-π, π].
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = Vec3::new(
            wrap_angle(rotation.x),
            wrap_angle(rotation.y),
            wrap_angle(rotation.z),
        );
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler rotation (pitch, yaw, roll) in radians.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Last matrix computed by `create_world_matrix()`.
    ///
    /// Not refreshed by mutations.
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Orientation as a quaternion (roll, then pitch, then yaw).
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.rotation.y, self.rotation.x, self.rotation.z)
    }

    /// Local +Z in world space.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    /// Local +X in world space.
    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Local +Y in world space.
    pub fn up(&self) -> Vec3 {
        self.orientation() * Vec3::Y
    }

    // ===== COMPOSITION =====

    /// Recompute and cache the world matrix: scale, then rotate, then translate.
    pub fn create_world_matrix(&mut self) -> Mat4 {
        self.world_matrix = Mat4::from_scale_rotation_translation(
            self.scale,
            self.orientation(),
            self.position,
        );
        self.world_matrix
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
