/// Camera configuration - projection parameters and movement tuning.

use std::f32::consts::{FRAC_PI_4, PI};
use crate::error::Result;
use crate::engine_bail;

/// Projection and movement parameters for a `Camera`.
///
/// Only the aspect ratio changes after construction; field of view and
/// clip planes are fixed for the camera's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in radians, in (0, π)
    pub fov_y: f32,
    /// Near clip plane distance (> 0)
    pub near: f32,
    /// Far clip plane distance (> near)
    pub far: f32,
    /// Movement speed in units per second
    pub move_speed: f32,
    /// Speed multiplier while the FAST key is held
    pub fast_multiplier: f32,
    /// Speed multiplier while the SLOW key is held
    pub slow_multiplier: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y: FRAC_PI_4,
            near: 0.01,
            far: 100.0,
            move_speed: 3.0,
            fast_multiplier: 5.0,
            slow_multiplier: 0.1,
        }
    }
}

impl CameraConfig {
    /// Check every parameter; the first violation is returned as
    /// `Error::InvalidConfiguration`.
    pub fn validate(&self) -> Result<()> {
        if !self.fov_y.is_finite() || self.fov_y <= 0.0 || self.fov_y >= PI {
            engine_bail!(InvalidConfiguration, "prism::CameraConfig",
                "Field of view must be in (0, PI), got {}", self.fov_y);
        }
        if !self.near.is_finite() || self.near <= 0.0 {
            engine_bail!(InvalidConfiguration, "prism::CameraConfig",
                "Near plane must be > 0, got {}", self.near);
        }
        if !self.far.is_finite() || self.near >= self.far {
            engine_bail!(InvalidConfiguration, "prism::CameraConfig",
                "Near plane ({}) must be closer than far plane ({})", self.near, self.far);
        }
        for (name, value) in [
            ("move_speed", self.move_speed),
            ("fast_multiplier", self.fast_multiplier),
            ("slow_multiplier", self.slow_multiplier),
        ] {
            if !value.is_finite() || value < 0.0 {
                engine_bail!(InvalidConfiguration, "prism::CameraConfig",
                    "{} must be >= 0, got {}", name, value);
            }
        }
        Ok(())
    }
}
