//! Resource-level mesh type.
//!
//! A `Mesh` is CPU-side geometry: an interleaved vertex array and a 32-bit
//! index list describing a triangle list. Creating GPU buffers from it is the
//! rendering collaborator's job; entities only hold a shared `Arc<Mesh>`.
//!
//! Loading meshes from files is out of scope. A few procedural shapes are
//! provided for demos and tests.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};
use crate::error::Result;
use crate::engine_bail;
use crate::scene::AABB;

// ============================================================================
// VERTEX
// ============================================================================

/// Interleaved vertex layout (44 bytes, no padding).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
    /// Tangent for normal mapping
    pub tangent: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2, tangent: Vec3) -> Self {
        Self { position, normal, uv, tangent }
    }
}

// ============================================================================
// MESH
// ============================================================================

/// Mesh creation descriptor
pub struct MeshDesc {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Indexed triangle-list geometry, shared between entities via `Arc`.
#[derive(Debug)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    bounds: AABB,
}

impl Mesh {
    /// Create mesh from descriptor (internal use by ResourceManager)
    pub(crate) fn from_desc(desc: MeshDesc) -> Result<Self> {
        if desc.vertices.is_empty() {
            engine_bail!(InvalidResource, "prism::Mesh",
                "Mesh '{}' has no vertices", desc.name);
        }
        if desc.indices.is_empty() {
            engine_bail!(InvalidResource, "prism::Mesh",
                "Mesh '{}' has no indices", desc.name);
        }
        if desc.indices.len() % 3 != 0 {
            engine_bail!(InvalidResource, "prism::Mesh",
                "Mesh '{}': index count {} is not a multiple of 3",
                desc.name, desc.indices.len());
        }
        let vertex_count = desc.vertices.len();
        if let Some(&bad) = desc.indices.iter().find(|&&i| i as usize >= vertex_count) {
            engine_bail!(InvalidResource, "prism::Mesh",
                "Mesh '{}': index {} out of range ({} vertices)",
                desc.name, bad, vertex_count);
        }

        let bounds = AABB::from_points(desc.vertices.iter().map(|v| v.position))
            .unwrap_or(AABB::new(Vec3::ZERO, Vec3::ZERO));

        Ok(Self {
            name: desc.name,
            vertices: desc.vertices,
            indices: desc.indices,
            bounds,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    pub fn triangle_count(&self) -> u32 {
        self.index_count() / 3
    }

    /// Local-space bounds of all vertex positions
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Vertex data as raw bytes, ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes (u32 indices)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    // ===== PROCEDURAL SHAPES =====

    /// Single triangle in the XY plane, facing -Z.
    pub fn triangle(name: &str, size: f32) -> MeshDesc {
        let h = size * 0.5;
        let n = Vec3::NEG_Z;
        let t = Vec3::X;
        MeshDesc {
            name: name.to_string(),
            vertices: vec![
                Vertex::new(Vec3::new(0.0, h, 0.0), n, Vec2::new(0.5, 0.0), t),
                Vertex::new(Vec3::new(h, -h, 0.0), n, Vec2::new(1.0, 1.0), t),
                Vertex::new(Vec3::new(-h, -h, 0.0), n, Vec2::new(0.0, 1.0), t),
            ],
            indices: vec![0, 1, 2],
        }
    }

    /// Axis-aligned quad in the XY plane, facing -Z.
    pub fn quad(name: &str, width: f32, height: f32) -> MeshDesc {
        let (vertices, indices) = face(Vec3::NEG_Z, Vec3::Y, Vec2::new(width, height), 0.0, 0);
        MeshDesc {
            name: name.to_string(),
            vertices,
            indices,
        }
    }

    /// Cube centered on the origin with 4 vertices per face.
    pub fn cube(name: &str, size: f32) -> MeshDesc {
        let faces = [
            (Vec3::NEG_Z, Vec3::Y),
            (Vec3::Z, Vec3::Y),
            (Vec3::X, Vec3::Y),
            (Vec3::NEG_X, Vec3::Y),
            (Vec3::Y, Vec3::Z),
            (Vec3::NEG_Y, Vec3::NEG_Z),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, up) in faces {
            let base = vertices.len() as u32;
            let (v, i) = face(normal, up, Vec2::splat(size), size * 0.5, base);
            vertices.extend(v);
            indices.extend(i);
        }

        MeshDesc {
            name: name.to_string(),
            vertices,
            indices,
        }
    }
}

/// One quad facing `normal`, pushed `offset` along it. Clockwise winding
/// when viewed from the front (left-handed).
fn face(normal: Vec3, up: Vec3, size: Vec2, offset: f32, base: u32) -> (Vec<Vertex>, Vec<u32>) {
    let right = normal.cross(up);
    let center = normal * offset;
    let rx = right * (size.x * 0.5);
    let uy = up * (size.y * 0.5);

    let vertices = vec![
        Vertex::new(center - rx + uy, normal, Vec2::new(0.0, 0.0), right),
        Vertex::new(center + rx + uy, normal, Vec2::new(1.0, 0.0), right),
        Vertex::new(center + rx - uy, normal, Vec2::new(1.0, 1.0), right),
        Vertex::new(center - rx - uy, normal, Vec2::new(0.0, 1.0), right),
    ];
    let indices = vec![base, base + 1, base + 2, base, base + 2, base + 3];
    (vertices, indices)
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
