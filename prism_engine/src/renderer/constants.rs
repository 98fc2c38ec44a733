/// GPU-ready constant blocks.
///
/// Plain `#[repr(C)]` structs that a backend can upload as-is with
/// `bytemuck::bytes_of`. Vec3 fields are padded to 16 bytes where a
/// shader constant buffer expects it.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use crate::camera::Camera;
use crate::lighting::{
    DirectionalLight, Lighting, PointLight, MAX_DIRECTIONAL_LIGHTS, MAX_POINT_LIGHTS,
};

// ============================================================================
// LIGHT DATA
// ============================================================================

/// Packed directional light (48 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DirectionalLightData {
    pub ambient_color: Vec3,
    pub _pad0: f32,
    pub diffuse_color: Vec3,
    pub _pad1: f32,
    pub direction: Vec3,
    pub _pad2: f32,
}

impl From<&DirectionalLight> for DirectionalLightData {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            ambient_color: light.ambient_color,
            _pad0: 0.0,
            diffuse_color: light.diffuse_color,
            _pad1: 0.0,
            direction: light.direction,
            _pad2: 0.0,
        }
    }
}

/// Packed point light (32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointLightData {
    pub color: Vec3,
    pub range: f32,
    pub position: Vec3,
    pub intensity: f32,
}

impl From<&PointLight> for PointLightData {
    fn from(light: &PointLight) -> Self {
        Self {
            color: light.color,
            range: light.range,
            position: light.position,
            intensity: light.intensity,
        }
    }
}

// ============================================================================
// FRAME CONSTANTS
// ============================================================================

/// Per-frame constants: camera matrices and scene lights (432 bytes).
///
/// Shared by every draw of the frame. Unused light slots are zeroed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameConstants {
    pub view: Mat4,
    pub projection: Mat4,
    pub camera_position: Vec3,
    pub directional_light_count: u32,
    pub directional_lights: [DirectionalLightData; MAX_DIRECTIONAL_LIGHTS],
    pub point_lights: [PointLightData; MAX_POINT_LIGHTS],
    pub point_light_count: u32,
    pub _padding: [u32; 3],
}

impl FrameConstants {
    pub fn new(camera: &Camera, lighting: &Lighting) -> Self {
        let mut constants = Self::zeroed();
        constants.view = *camera.view();
        constants.projection = *camera.projection();
        constants.camera_position = camera.position();

        // zip stops at the array capacity
        for (slot, light) in constants.directional_lights.iter_mut().zip(lighting.directional_lights()) {
            *slot = light.into();
        }
        for (slot, light) in constants.point_lights.iter_mut().zip(lighting.point_lights()) {
            *slot = light.into();
        }
        constants.directional_light_count =
            lighting.directional_lights().len().min(MAX_DIRECTIONAL_LIGHTS) as u32;
        constants.point_light_count =
            lighting.point_lights().len().min(MAX_POINT_LIGHTS) as u32;

        constants
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

// ============================================================================
// DRAW CONSTANTS
// ============================================================================

/// Per-draw constants: matrices and material scalars (224 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DrawConstants {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub color_tint: Vec4,
    pub specular_intensity: f32,
    pub _padding: [f32; 3],
}

impl DrawConstants {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::lighting::{DirectionalLight, PointLight};

    #[test]
    fn test_layout_sizes() {
        assert_eq!(std::mem::size_of::<DirectionalLightData>(), 48);
        assert_eq!(std::mem::size_of::<PointLightData>(), 32);
        assert_eq!(std::mem::size_of::<FrameConstants>(), 432);
        assert_eq!(std::mem::size_of::<DrawConstants>(), 224);
    }

    #[test]
    fn test_frame_constants_from_camera_and_lighting() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, -5.0), 16.0 / 9.0, 1.0).unwrap();
        let mut lighting = Lighting::new();
        lighting.add_directional(DirectionalLight::new(
            Vec3::splat(0.1), Vec3::new(1.0, 1.0, 0.0), Vec3::new(0.0, -2.0, 0.0),
        )).unwrap();
        lighting.add_point(PointLight::new(Vec3::ONE, Vec3::Y, 5.0, 2.0)).unwrap();

        let constants = FrameConstants::new(&camera, &lighting);

        assert_eq!(constants.view, *camera.view());
        assert_eq!(constants.projection, *camera.projection());
        assert_eq!(constants.camera_position, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(constants.directional_light_count, 1);
        assert_eq!(constants.directional_lights[0].direction, Vec3::NEG_Y);
        assert_eq!(constants.directional_lights[0].diffuse_color, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(constants.directional_lights[1], DirectionalLightData::zeroed());
        assert_eq!(constants.point_light_count, 1);
        assert_eq!(constants.point_lights[0].range, 5.0);
        assert_eq!(constants.point_lights[0].intensity, 2.0);
        assert_eq!(constants.as_bytes().len(), 432);
    }

    #[test]
    fn test_frame_constants_without_lights() {
        let camera = Camera::new(Vec3::ZERO, 1.0, 1.0).unwrap();
        let constants = FrameConstants::new(&camera, &Lighting::new());
        assert_eq!(constants.directional_light_count, 0);
        assert_eq!(constants.point_light_count, 0);
    }
}
