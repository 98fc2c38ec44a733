use glam::{Mat4, Vec3, Vec4};
use super::*;
use crate::resource::{MaterialDesc, ResourceManager, ShaderRef};

fn resources() -> (Arc<Mesh>, Arc<Material>) {
    let mut rm = ResourceManager::new();
    let mesh = rm.create_mesh(Mesh::triangle("triangle", 1.0)).unwrap();
    let material = rm.create_material(MaterialDesc::tinted(
        "red", ShaderRef::new("VertexShader", "PixelShader"), Vec4::new(1.0, 0.0, 0.0, 0.0),
    )).unwrap();
    (mesh, material)
}

#[test]
fn test_new_entity_is_identity() {
    let (mesh, material) = resources();
    let entity = Entity::new(mesh.clone(), material.clone());

    assert_eq!(*entity.transform(), Transform::new());
    assert_eq!(*entity.motion(), Motion::Static);
    assert!(Arc::ptr_eq(entity.mesh(), &mesh));
    assert!(Arc::ptr_eq(entity.material(), &material));
}

#[test]
fn test_update_refreshes_world_matrix() {
    let (mesh, material) = resources();
    let mut entity = Entity::new(mesh, material);
    entity.transform_mut().move_absolute(1.0, 2.0, 3.0);
    assert_eq!(*entity.transform().world_matrix(), Mat4::IDENTITY);

    entity.update(FrameTime { delta: 0.016, total: 0.016 });
    assert_eq!(
        *entity.transform().world_matrix(),
        Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
    );
}

#[test]
fn test_update_applies_motion_before_matrix() {
    let (mesh, material) = resources();
    let mut entity = Entity::new(mesh, material).with_motion(Motion::spin(0.0, 0.0, 1.0));
    entity.update(FrameTime { delta: 0.5, total: 0.5 });

    assert!((entity.transform().rotation().z - 0.5).abs() < 1e-6);
    let expected = Mat4::from_rotation_z(0.5);
    assert!(entity.transform().world_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_drop_does_not_free_shared_resources() {
    let (mesh, material) = resources();
    let a = Entity::new(mesh.clone(), material.clone());
    let b = Entity::new(mesh.clone(), material.clone());
    assert_eq!(Arc::strong_count(&mesh), 3);
    drop(a);
    drop(b);
    assert_eq!(Arc::strong_count(&mesh), 1);
    assert_eq!(mesh.vertex_count(), 3);
}

#[test]
fn test_set_motion_and_material() {
    let (mesh, material) = resources();
    let mut entity = Entity::new(mesh, material.clone());
    entity.set_motion(Motion::spin(1.0, 0.0, 0.0));
    assert_eq!(*entity.motion(), Motion::spin(1.0, 0.0, 0.0));

    let mut other = (*material).clone();
    other.set_color_tint(Vec4::ONE);
    entity.set_material(Arc::new(other));
    assert_eq!(entity.material().color_tint(), Vec4::ONE);
    assert_eq!(material.color_tint(), Vec4::new(1.0, 0.0, 0.0, 0.0));
}

#[test]
fn test_world_bounds_follow_transform() {
    let (_, material) = resources();
    let mut rm = ResourceManager::new();
    let cube = rm.create_mesh(Mesh::cube("cube", 2.0)).unwrap();
    let mut entity = Entity::new(cube, material);

    // identity until the first update
    assert_eq!(entity.world_bounds(), *entity.mesh().bounds());

    entity.transform_mut().move_absolute(4.0, 0.0, -1.0);
    entity.transform_mut().set_scale(Vec3::new(2.0, 1.0, 0.5));
    entity.update(FrameTime { delta: 0.0, total: 0.0 });

    let bounds = entity.world_bounds();
    assert!(bounds.min.abs_diff_eq(Vec3::new(2.0, -1.0, -1.5), 1e-5));
    assert!(bounds.max.abs_diff_eq(Vec3::new(6.0, 1.0, -0.5), 1e-5));
}
