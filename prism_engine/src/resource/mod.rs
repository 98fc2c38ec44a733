//! Resource module: CPU-side meshes, materials and textures, and the
//! name-keyed registry that shares them.

pub mod mesh;
pub mod material;
pub mod texture;
mod resource_manager;

pub use mesh::{Mesh, MeshDesc, Vertex};
pub use material::{Material, MaterialDesc, ShaderRef};
pub use texture::{Texture, TextureDesc};
pub use resource_manager::ResourceManager;
