/// Camera - the viewer.
///
/// Owns a Transform (position + orientation; scale is unused) and derives
/// the view matrix from it and the projection matrix from its config and
/// the current viewport aspect ratio.
///
/// Conventions: left-handed, the camera looks along its local +Z, and the
/// projection maps the near plane to depth 0 and the far plane to depth 1.

use std::f32::consts::FRAC_PI_2;
use glam::{Mat4, Vec3};
use crate::error::Result;
use crate::{engine_bail, engine_debug};
use crate::input::{InputSource, Keys};
use crate::scene::{wrap_angle, Transform};
use super::camera_config::CameraConfig;

/// Pitch is kept strictly inside ±90° so the view never flips.
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Perspective camera driven by a polled input snapshot.
#[derive(Debug, Clone)]
pub struct Camera {
    transform: Transform,
    config: CameraConfig,
    aspect_ratio: f32,
    look_sensitivity: f32,
    view_matrix: Mat4,
    projection_matrix: Mat4,
}

fn validate_aspect_ratio(aspect_ratio: f32) -> Result<()> {
    if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        engine_bail!(InvalidConfiguration, "prism::Camera",
            "Aspect ratio must be > 0, got {}", aspect_ratio);
    }
    Ok(())
}

impl Camera {
    /// Create a camera at `position` with the default configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if the aspect ratio is not positive or the
    /// sensitivity is negative.
    pub fn new(position: Vec3, aspect_ratio: f32, look_sensitivity: f32) -> Result<Self> {
        Self::with_config(position, aspect_ratio, look_sensitivity, CameraConfig::default())
    }

    /// Create a camera with explicit projection/movement parameters.
    pub fn with_config(
        position: Vec3,
        aspect_ratio: f32,
        look_sensitivity: f32,
        config: CameraConfig,
    ) -> Result<Self> {
        config.validate()?;
        validate_aspect_ratio(aspect_ratio)?;
        if !look_sensitivity.is_finite() || look_sensitivity < 0.0 {
            engine_bail!(InvalidConfiguration, "prism::Camera",
                "Look sensitivity must be >= 0, got {}", look_sensitivity);
        }

        let mut transform = Transform::new();
        transform.set_position(position);

        let mut camera = Self {
            transform,
            config,
            aspect_ratio,
            look_sensitivity,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Self::perspective(&config, aspect_ratio),
        };
        camera.update_view_matrix();

        engine_debug!("prism::Camera",
            "Camera created at {:?} (aspect {:.3}, fov {:.3} rad)",
            position, aspect_ratio, config.fov_y);

        Ok(camera)
    }

    fn perspective(config: &CameraConfig, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_lh(config.fov_y, aspect_ratio, config.near, config.far)
    }

    // ===== PER-FRAME UPDATE =====

    /// Apply this frame's movement and look input, then refresh the view.
    ///
    /// Movement is scaled by `delta_time`; look rotation by
    /// `look_sensitivity * delta_time`. Without input only the view is
    /// recomputed.
    pub fn update(&mut self, delta_time: f32, input: &dyn InputSource) {
        let dt = if delta_time.is_finite() { delta_time.max(0.0) } else { 0.0 };

        let mut speed = self.config.move_speed * dt;
        if input.is_key_down(Keys::FAST) {
            speed *= self.config.fast_multiplier;
        }
        if input.is_key_down(Keys::SLOW) {
            speed *= self.config.slow_multiplier;
        }

        let mut local = Vec3::ZERO;
        if input.is_key_down(Keys::FORWARD) { local.z += 1.0; }
        if input.is_key_down(Keys::BACKWARD) { local.z -= 1.0; }
        if input.is_key_down(Keys::RIGHT) { local.x += 1.0; }
        if input.is_key_down(Keys::LEFT) { local.x -= 1.0; }
        if local != Vec3::ZERO {
            let step = local * speed;
            self.transform.move_relative(step.x, step.y, step.z);
        }

        // Vertical movement stays on the world axis
        if input.is_key_down(Keys::UP) {
            self.transform.move_absolute(0.0, speed, 0.0);
        }
        if input.is_key_down(Keys::DOWN) {
            self.transform.move_absolute(0.0, -speed, 0.0);
        }

        if input.is_look_active() {
            let delta = input.mouse_delta() * (self.look_sensitivity * dt);
            if delta.x != 0.0 || delta.y != 0.0 {
                self.look(delta.x, delta.y);
            }
        }

        self.update_view_matrix();
    }

    /// Pitch is clamped before any wrapping so a large step cannot cross
    /// a pole; only yaw wraps.
    fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        let mut rotation = self.transform.rotation();
        rotation.x = (rotation.x + pitch_delta).clamp(-MAX_PITCH, MAX_PITCH);
        rotation.y = wrap_angle(rotation.y + yaw_delta);
        self.transform.set_rotation(rotation);
    }

    /// Recompute the view matrix as the inverse of the camera's world
    /// transform (orientation + position).
    pub fn update_view_matrix(&mut self) {
        let world = Mat4::from_rotation_translation(
            self.transform.orientation(),
            self.transform.position(),
        );
        self.view_matrix = world.inverse();
    }

    /// Rebuild the projection for a new viewport aspect ratio.
    ///
    /// Field of view and clip planes are kept. On error the previous
    /// projection stays in place.
    pub fn update_projection_matrix(&mut self, aspect_ratio: f32) -> Result<()> {
        validate_aspect_ratio(aspect_ratio)?;
        self.aspect_ratio = aspect_ratio;
        self.projection_matrix = Self::perspective(&self.config, aspect_ratio);
        engine_debug!("prism::Camera", "Projection updated (aspect {:.3})", aspect_ratio);
        Ok(())
    }

    // ===== GETTERS =====

    /// Most recently computed view matrix.
    pub fn view(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Most recently computed projection matrix.
    pub fn projection(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position()
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Direct access for scripted camera moves.
    ///
    /// Call `update_view_matrix()` afterwards for the view to follow.
    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn look_sensitivity(&self) -> f32 {
        self.look_sensitivity
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
