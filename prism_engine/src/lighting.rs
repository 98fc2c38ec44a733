//! Scene lighting.
//!
//! A fixed-capacity set of directional and point lights. The capacities
//! match the light arrays of the per-frame constants handed to the renderer
//! (`FrameConstants`), so a light that would not fit there is rejected here.

use glam::Vec3;
use crate::error::Result;
use crate::{engine_bail, engine_debug};

/// Maximum number of directional lights per scene
pub const MAX_DIRECTIONAL_LIGHTS: usize = 3;

/// Maximum number of point lights per scene
pub const MAX_POINT_LIGHTS: usize = 4;

/// Light coming from infinitely far away along `direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub ambient_color: Vec3,
    pub diffuse_color: Vec3,
    /// Direction the light travels (normalized when added to `Lighting`)
    pub direction: Vec3,
}

impl DirectionalLight {
    pub fn new(ambient_color: Vec3, diffuse_color: Vec3, direction: Vec3) -> Self {
        Self { ambient_color, diffuse_color, direction }
    }
}

/// Omnidirectional light with linear falloff over `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub position: Vec3,
    pub range: f32,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(color: Vec3, position: Vec3, range: f32, intensity: f32) -> Self {
        Self { color, position, range, intensity }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Lighting {
    directional: Vec<DirectionalLight>,
    point: Vec<PointLight>,
}

impl Lighting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directional light, returning its index.
    pub fn add_directional(&mut self, light: DirectionalLight) -> Result<usize> {
        if self.directional.len() >= MAX_DIRECTIONAL_LIGHTS {
            engine_bail!(InvalidConfiguration, "prism::Lighting",
                "Too many directional lights (max {})", MAX_DIRECTIONAL_LIGHTS);
        }
        if !light.ambient_color.is_finite() || !light.diffuse_color.is_finite() {
            engine_bail!(InvalidConfiguration, "prism::Lighting",
                "Directional light colors must be finite");
        }
        let direction = match light.direction.try_normalize() {
            Some(d) => d,
            None => engine_bail!(InvalidConfiguration, "prism::Lighting",
                "Directional light direction {:?} cannot be normalized", light.direction),
        };

        self.directional.push(DirectionalLight { direction, ..light });
        engine_debug!("prism::Lighting", "Directional light {} added (direction {:?})",
            self.directional.len() - 1, direction);
        Ok(self.directional.len() - 1)
    }

    /// Add a point light, returning its index.
    pub fn add_point(&mut self, light: PointLight) -> Result<usize> {
        if self.point.len() >= MAX_POINT_LIGHTS {
            engine_bail!(InvalidConfiguration, "prism::Lighting",
                "Too many point lights (max {})", MAX_POINT_LIGHTS);
        }
        if !light.color.is_finite() || !light.position.is_finite() {
            engine_bail!(InvalidConfiguration, "prism::Lighting",
                "Point light color and position must be finite");
        }
        if !(light.range > 0.0) || !light.range.is_finite() {
            engine_bail!(InvalidConfiguration, "prism::Lighting",
                "Point light range must be > 0 (got {})", light.range);
        }
        if !(light.intensity >= 0.0) || !light.intensity.is_finite() {
            engine_bail!(InvalidConfiguration, "prism::Lighting",
                "Point light intensity must be >= 0 (got {})", light.intensity);
        }

        self.point.push(light);
        Ok(self.point.len() - 1)
    }

    pub fn directional_lights(&self) -> &[DirectionalLight] {
        &self.directional
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point
    }

    pub fn directional_light_mut(&mut self, index: usize) -> Option<&mut DirectionalLight> {
        self.directional.get_mut(index)
    }

    pub fn point_light_mut(&mut self, index: usize) -> Option<&mut PointLight> {
        self.point.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.directional.clear();
        self.point.clear();
    }
}

#[cfg(test)]
#[path = "lighting_tests.rs"]
mod tests;
