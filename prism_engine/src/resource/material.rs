/// Resource-level material type.
///
/// A Material describes how a surface looks: which shader pair draws it,
/// a color tint, a specular intensity and optional diffuse / normal-map
/// textures. Shader names are opaque here and resolved by the renderer.
///
/// Materials are shared between entities through `Arc<Material>`.

use std::sync::Arc;
use glam::Vec4;
use crate::error::Result;
use crate::engine_bail;
use crate::resource::texture::Texture;

// ===== SHADER REFERENCE =====

/// Vertex + pixel shader pair, by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderRef {
    pub vertex: String,
    pub pixel: String,
}

impl ShaderRef {
    pub fn new(vertex: &str, pixel: &str) -> Self {
        Self {
            vertex: vertex.to_string(),
            pixel: pixel.to_string(),
        }
    }
}

// ===== MATERIAL DESC =====

/// Material creation descriptor
pub struct MaterialDesc {
    pub name: String,
    pub shaders: ShaderRef,
    pub color_tint: Vec4,
    pub specular_intensity: f32,
    pub diffuse_texture: Option<Arc<Texture>>,
    pub normal_map: Option<Arc<Texture>>,
}

impl MaterialDesc {
    /// Untextured material with the given tint and no specular highlight.
    pub fn tinted(name: &str, shaders: ShaderRef, color_tint: Vec4) -> Self {
        Self {
            name: name.to_string(),
            shaders,
            color_tint,
            specular_intensity: 0.0,
            diffuse_texture: None,
            normal_map: None,
        }
    }
}

// ===== MATERIAL =====

#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    shaders: ShaderRef,
    color_tint: Vec4,
    specular_intensity: f32,
    diffuse_texture: Option<Arc<Texture>>,
    normal_map: Option<Arc<Texture>>,
}

impl Material {
    /// Create material from descriptor (internal use by ResourceManager)
    pub(crate) fn from_desc(desc: MaterialDesc) -> Result<Self> {
        if desc.shaders.vertex.is_empty() || desc.shaders.pixel.is_empty() {
            engine_bail!(InvalidResource, "prism::Material",
                "Material '{}': shader names must not be empty", desc.name);
        }
        if !desc.color_tint.is_finite() {
            engine_bail!(InvalidResource, "prism::Material",
                "Material '{}': color tint must be finite", desc.name);
        }
        if !(desc.specular_intensity >= 0.0) || !desc.specular_intensity.is_finite() {
            engine_bail!(InvalidResource, "prism::Material",
                "Material '{}': specular intensity must be >= 0 (got {})",
                desc.name, desc.specular_intensity);
        }

        Ok(Self {
            name: desc.name,
            shaders: desc.shaders,
            color_tint: desc.color_tint,
            specular_intensity: desc.specular_intensity,
            diffuse_texture: desc.diffuse_texture,
            normal_map: desc.normal_map,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn shaders(&self) -> &ShaderRef {
        &self.shaders
    }

    pub fn color_tint(&self) -> Vec4 {
        self.color_tint
    }

    /// Change the tint. Shared materials need `Arc::make_mut` or a clone first.
    pub fn set_color_tint(&mut self, color_tint: Vec4) {
        self.color_tint = color_tint;
    }

    pub fn specular_intensity(&self) -> f32 {
        self.specular_intensity
    }

    pub fn diffuse_texture(&self) -> Option<&Arc<Texture>> {
        self.diffuse_texture.as_ref()
    }

    pub fn normal_map(&self) -> Option<&Arc<Texture>> {
        self.normal_map.as_ref()
    }
}

#[cfg(test)]
#[path = "material_tests.rs"]
mod tests;
