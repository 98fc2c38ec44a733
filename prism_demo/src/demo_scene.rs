//! The demo scene: a few flat shapes and a cube, all spinning around Z,
//! lit by three colored directional lights.

use glam::{Vec2, Vec3, Vec4};
use prism_engine::prism::Result;
use prism_engine::prism::camera::Camera;
use prism_engine::prism::lighting::DirectionalLight;
use prism_engine::prism::resource::{MaterialDesc, Mesh, MeshDesc, ResourceManager, ShaderRef, Vertex};
use prism_engine::prism::scene::{Motion, Scene};
use crate::config::DemoConfig;

/// Flat shape in the XY plane facing the camera, one index per vertex.
fn flat_shape(name: &str, points: &[[f32; 2]]) -> MeshDesc {
    let vertices = points
        .iter()
        .map(|p| Vertex::new(Vec3::new(p[0], p[1], 0.0), Vec3::NEG_Z, Vec2::ZERO, Vec3::X))
        .collect::<Vec<_>>();
    let indices = (0..vertices.len() as u32).collect();
    MeshDesc {
        name: name.to_string(),
        vertices,
        indices,
    }
}

fn create_meshes(resources: &mut ResourceManager) -> Result<()> {
    resources.create_mesh(flat_shape("arrow", &[
        [0.0, 0.4], [0.2, -0.1], [-0.2, -0.1],
        [-0.2, -0.1], [0.2, -0.1], [0.0, -0.6],
    ]))?;
    resources.create_mesh(flat_shape("rectangle", &[
        [-0.9, 0.9], [-0.4, 0.9], [-0.4, 0.0],
        [-0.4, 0.0], [-0.9, 0.0], [-0.9, 0.9],
    ]))?;
    resources.create_mesh(flat_shape("triforce", &[
        [0.4, 0.0], [0.5, 0.3], [0.6, 0.0],
        [0.6, 0.0], [0.7, 0.3], [0.8, 0.0],
        [0.5, 0.3], [0.6, 0.6], [0.7, 0.3],
    ]))?;
    resources.create_mesh(Mesh::cube("cube", 0.5))?;
    Ok(())
}

fn create_materials(resources: &mut ResourceManager) -> Result<()> {
    let shaders = ShaderRef::new("VertexShader", "PixelShader");
    for (name, tint) in [
        ("red", Vec4::new(1.0, 0.0, 0.0, 1.0)),
        ("green", Vec4::new(0.0, 1.0, 0.0, 1.0)),
        ("blue", Vec4::new(0.0, 0.0, 1.0, 1.0)),
        ("white", Vec4::new(1.0, 1.0, 1.0, 1.0)),
    ] {
        resources.create_material(MaterialDesc::tinted(name, shaders.clone(), tint))?;
    }
    Ok(())
}

/// Build resources and the scene that uses them.
pub fn build(config: &DemoConfig) -> Result<(ResourceManager, Scene)> {
    let mut resources = ResourceManager::new();
    create_meshes(&mut resources)?;
    create_materials(&mut resources)?;

    let camera = Camera::new(config.camera_position, config.aspect_ratio(), config.look_sensitivity)?;
    let mut scene = Scene::new(camera);
    scene.set_clear_color(config.clear_color);

    let ambient = Vec3::splat(0.1);
    let lighting = scene.lighting_mut();
    lighting.add_directional(DirectionalLight::new(ambient, Vec3::new(1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0)))?;
    lighting.add_directional(DirectionalLight::new(ambient, Vec3::new(0.0, 1.0, 1.0), Vec3::new(-1.0, -1.0, 0.0)))?;
    lighting.add_directional(DirectionalLight::new(ambient, Vec3::new(1.0, 0.0, 1.0), Vec3::new(1.0, 1.0, 0.0)))?;

    // the arrow mesh is drawn twice to exercise mesh sharing
    let spin = Motion::spin(0.0, 0.0, config.spin_speed);
    for (mesh, material) in [
        ("arrow", "red"),
        ("arrow", "red"),
        ("rectangle", "green"),
        ("triforce", "blue"),
        ("cube", "white"),
    ] {
        let key = scene.spawn_from(&resources, mesh, material)?;
        if let Some(entity) = scene.entity_mut(key) {
            entity.set_motion(spin);
        }
    }

    log::info!("Scene ready: {} entities, {} meshes, {} materials",
        scene.entity_count(), resources.mesh_count(), resources.material_count());
    Ok((resources, scene))
}
