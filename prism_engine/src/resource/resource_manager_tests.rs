/// Tests for ResourceManager

use glam::Vec4;
use super::*;
use crate::error::Error;
use crate::resource::material::ShaderRef;

fn material_desc(name: &str) -> MaterialDesc {
    MaterialDesc::tinted(name, ShaderRef::new("VertexShader", "PixelShader"), Vec4::ONE)
}

#[test]
fn test_new_manager_is_empty() {
    let rm = ResourceManager::new();
    assert_eq!(rm.mesh_count(), 0);
    assert_eq!(rm.material_count(), 0);
    assert_eq!(rm.texture_count(), 0);
}

#[test]
fn test_create_and_lookup_mesh() {
    let mut rm = ResourceManager::new();
    let mesh = rm.create_mesh(Mesh::triangle("tri", 1.0)).unwrap();

    assert_eq!(rm.mesh_count(), 1);
    assert!(Arc::ptr_eq(rm.mesh("tri").unwrap(), &mesh));
    assert!(Arc::ptr_eq(&rm.require_mesh("tri").unwrap(), &mesh));
}

#[test]
fn test_duplicate_mesh_rejected() {
    let mut rm = ResourceManager::new();
    rm.create_mesh(Mesh::triangle("tri", 1.0)).unwrap();
    let result = rm.create_mesh(Mesh::quad("tri", 1.0, 1.0));

    assert!(matches!(result, Err(Error::InvalidResource(_))));
    assert_eq!(rm.mesh("tri").unwrap().vertex_count(), 3);
}

#[test]
fn test_invalid_mesh_not_registered() {
    let mut rm = ResourceManager::new();
    let result = rm.create_mesh(MeshDesc {
        name: "broken".to_string(),
        vertices: vec![],
        indices: vec![0, 1, 2],
    });
    assert!(result.is_err());
    assert!(rm.mesh("broken").is_none());
}

#[test]
fn test_missing_lookups_report_missing_dependency() {
    let rm = ResourceManager::new();
    assert!(matches!(rm.require_mesh("nope"), Err(Error::MissingDependency(_))));
    assert!(matches!(rm.require_material("nope"), Err(Error::MissingDependency(_))));
    assert!(matches!(rm.require_texture("nope"), Err(Error::MissingDependency(_))));
}

#[test]
fn test_remove_keeps_outstanding_references_alive() {
    let mut rm = ResourceManager::new();
    let mesh = rm.create_mesh(Mesh::cube("cube", 1.0)).unwrap();
    assert_eq!(Arc::strong_count(&mesh), 2);

    let removed = rm.remove_mesh("cube").unwrap();
    drop(removed);

    assert_eq!(Arc::strong_count(&mesh), 1);
    assert_eq!(mesh.triangle_count(), 12);
    assert!(rm.mesh("cube").is_none());
}

#[test]
fn test_materials_and_textures() {
    let mut rm = ResourceManager::new();
    let texture = rm.create_texture(Texture::solid_color("white", 1, 1, [255; 4])).unwrap();
    let mut desc = material_desc("lit");
    desc.diffuse_texture = Some(texture.clone());
    let material = rm.create_material(desc).unwrap();

    assert!(Arc::ptr_eq(material.diffuse_texture().unwrap(), &texture));
    assert!(Arc::ptr_eq(&rm.require_material("lit").unwrap(), &material));
    assert!(matches!(rm.create_material(material_desc("lit")), Err(Error::InvalidResource(_))));
    assert!(matches!(
        rm.create_texture(Texture::solid_color("white", 1, 1, [0; 4])),
        Err(Error::InvalidResource(_))
    ));
}

#[test]
fn test_clear() {
    let mut rm = ResourceManager::new();
    rm.create_mesh(Mesh::triangle("tri", 1.0)).unwrap();
    rm.create_material(material_desc("m")).unwrap();
    rm.create_texture(Texture::solid_color("t", 1, 1, [0; 4])).unwrap();
    rm.clear();

    assert_eq!(rm.mesh_count(), 0);
    assert_eq!(rm.material_count(), 0);
    assert_eq!(rm.texture_count(), 0);
}
