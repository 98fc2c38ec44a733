/// Central resource registry.
///
/// Stores meshes, materials and textures by name as `Arc`s. Entities hold
/// their own clones of these `Arc`s, so removing a resource here only drops
/// the registry's reference.

use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::{engine_bail, engine_debug, engine_err};
use crate::resource::mesh::{Mesh, MeshDesc};
use crate::resource::material::{Material, MaterialDesc};
use crate::resource::texture::{Texture, TextureDesc};

pub struct ResourceManager {
    meshes: FxHashMap<String, Arc<Mesh>>,
    materials: FxHashMap<String, Arc<Material>>,
    textures: FxHashMap<String, Arc<Texture>>,
}

impl ResourceManager {
    /// Create a new empty resource manager
    pub fn new() -> Self {
        Self {
            meshes: FxHashMap::default(),
            materials: FxHashMap::default(),
            textures: FxHashMap::default(),
        }
    }

    // ===== MESHES =====

    /// Validate and register a mesh under its descriptor name
    pub fn create_mesh(&mut self, desc: MeshDesc) -> Result<Arc<Mesh>> {
        if self.meshes.contains_key(&desc.name) {
            engine_bail!(InvalidResource, "prism::ResourceManager",
                "Mesh '{}' already exists", desc.name);
        }
        let mesh = Arc::new(Mesh::from_desc(desc)?);
        engine_debug!("prism::ResourceManager", "Mesh '{}' created ({} vertices, {} triangles)",
            mesh.name(), mesh.vertex_count(), mesh.triangle_count());
        self.meshes.insert(mesh.name().to_string(), mesh.clone());
        Ok(mesh)
    }

    pub fn mesh(&self, name: &str) -> Option<&Arc<Mesh>> {
        self.meshes.get(name)
    }

    /// Lookup that fails with `MissingDependency` when the name is unknown
    pub fn require_mesh(&self, name: &str) -> Result<Arc<Mesh>> {
        self.meshes.get(name).cloned().ok_or_else(|| {
            engine_err!(MissingDependency, "prism::ResourceManager",
                "Mesh '{}' not found", name)
        })
    }

    pub fn remove_mesh(&mut self, name: &str) -> Option<Arc<Mesh>> {
        self.meshes.remove(name)
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // ===== MATERIALS =====

    pub fn create_material(&mut self, desc: MaterialDesc) -> Result<Arc<Material>> {
        if self.materials.contains_key(&desc.name) {
            engine_bail!(InvalidResource, "prism::ResourceManager",
                "Material '{}' already exists", desc.name);
        }
        let material = Arc::new(Material::from_desc(desc)?);
        engine_debug!("prism::ResourceManager", "Material '{}' created", material.name());
        self.materials.insert(material.name().to_string(), material.clone());
        Ok(material)
    }

    pub fn material(&self, name: &str) -> Option<&Arc<Material>> {
        self.materials.get(name)
    }

    pub fn require_material(&self, name: &str) -> Result<Arc<Material>> {
        self.materials.get(name).cloned().ok_or_else(|| {
            engine_err!(MissingDependency, "prism::ResourceManager",
                "Material '{}' not found", name)
        })
    }

    pub fn remove_material(&mut self, name: &str) -> Option<Arc<Material>> {
        self.materials.remove(name)
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    // ===== TEXTURES =====

    pub fn create_texture(&mut self, desc: TextureDesc) -> Result<Arc<Texture>> {
        if self.textures.contains_key(&desc.name) {
            engine_bail!(InvalidResource, "prism::ResourceManager",
                "Texture '{}' already exists", desc.name);
        }
        let texture = Arc::new(Texture::from_desc(desc)?);
        engine_debug!("prism::ResourceManager", "Texture '{}' created ({}x{})",
            texture.name(), texture.width(), texture.height());
        self.textures.insert(texture.name().to_string(), texture.clone());
        Ok(texture)
    }

    pub fn texture(&self, name: &str) -> Option<&Arc<Texture>> {
        self.textures.get(name)
    }

    pub fn require_texture(&self, name: &str) -> Result<Arc<Texture>> {
        self.textures.get(name).cloned().ok_or_else(|| {
            engine_err!(MissingDependency, "prism::ResourceManager",
                "Texture '{}' not found", name)
        })
    }

    pub fn remove_texture(&mut self, name: &str) -> Option<Arc<Texture>> {
        self.textures.remove(name)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Drop every registry reference
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.materials.clear();
        self.textures.clear();
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
