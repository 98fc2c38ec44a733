/// Renderer trait - the seam to the rendering collaborator.
///
/// The frame driver calls, once per frame and in this order:
/// `begin_frame`, `draw` for every entity in scene order, `end_frame`.
/// `end_frame` presents. `resize` is forwarded from window notifications.
///
/// Buffer creation, shader resolution, texture upload and submission are
/// the implementor's business.

use std::sync::Arc;
use glam::{Mat4, Vec4};
use crate::error::Result;
use crate::resource::{Material, Mesh, Texture};
use crate::scene::AABB;
use super::constants::{DrawConstants, FrameConstants};

pub trait Renderer {
    /// Start a frame. `frame` carries camera matrices and scene lights.
    fn begin_frame(&mut self, frame: &FrameConstants, clear_color: Vec4) -> Result<()>;

    /// Record one indexed draw
    fn draw(&mut self, request: &DrawRequest<'_>) -> Result<()>;

    /// Finish and present the frame
    fn end_frame(&mut self) -> Result<()>;

    /// Output surface changed size (never called with a zero dimension)
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;
}

// ============================================================================
// DRAW REQUEST
// ============================================================================

/// Everything needed to draw one entity.
#[derive(Debug, Clone, Copy)]
pub struct DrawRequest<'a> {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub mesh: &'a Arc<Mesh>,
    pub material: &'a Arc<Material>,
}

impl<'a> DrawRequest<'a> {
    pub fn color_tint(&self) -> Vec4 {
        self.material.color_tint()
    }

    pub fn specular_intensity(&self) -> f32 {
        self.material.specular_intensity()
    }

    pub fn diffuse_texture(&self) -> Option<&'a Arc<Texture>> {
        self.material.diffuse_texture()
    }

    pub fn normal_map(&self) -> Option<&'a Arc<Texture>> {
        self.material.normal_map()
    }

    /// Number of indices to submit
    pub fn index_count(&self) -> u32 {
        self.mesh.index_count()
    }

    /// Mesh bounds in world space
    pub fn world_bounds(&self) -> AABB {
        self.mesh.bounds().transformed(&self.world)
    }

    /// Pack the per-draw constant block
    pub fn constants(&self) -> DrawConstants {
        DrawConstants {
            world: self.world,
            view: self.view,
            projection: self.projection,
            color_tint: self.color_tint(),
            specular_intensity: self.specular_intensity(),
            _padding: [0.0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use crate::resource::{MaterialDesc, ResourceManager, ShaderRef};

    #[test]
    fn test_draw_request_derives_material_values() {
        let mut rm = ResourceManager::new();
        let mesh = rm.create_mesh(Mesh::quad("quad", 1.0, 1.0)).unwrap();
        let texture = rm.create_texture(Texture::solid_color("t", 1, 1, [255; 4])).unwrap();
        let mut desc = MaterialDesc::tinted(
            "m", ShaderRef::new("VertexShader", "PixelShader"), Vec4::new(0.0, 1.0, 0.0, 1.0),
        );
        desc.specular_intensity = 64.0;
        desc.normal_map = Some(texture.clone());
        let material = rm.create_material(desc).unwrap();

        let world = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let request = DrawRequest {
            world,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            mesh: &mesh,
            material: &material,
        };

        assert_eq!(request.index_count(), 6);
        assert!(request.diffuse_texture().is_none());
        assert!(Arc::ptr_eq(request.normal_map().unwrap(), &texture));

        let constants = request.constants();
        assert_eq!(constants.world, world);
        assert_eq!(constants.color_tint, Vec4::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(constants.specular_intensity, 64.0);
        assert_eq!(constants.as_bytes().len(), 224);

        let bounds = request.world_bounds();
        assert!(bounds.min.abs_diff_eq(Vec3::new(0.5, 1.5, 3.0), 1e-5));
        assert!(bounds.max.abs_diff_eq(Vec3::new(1.5, 2.5, 3.0), 1e-5));
    }
}
