/// Tests for Mesh resource
///
/// Validation of index/vertex data, counts, bounds and the procedural shapes.

use super::*;
use crate::error::Error;

// ============================================================================
// Helper Functions
// ============================================================================

fn vertex(x: f32, y: f32, z: f32) -> Vertex {
    Vertex::new(Vec3::new(x, y, z), Vec3::NEG_Z, Vec2::ZERO, Vec3::X)
}

fn desc(vertices: Vec<Vertex>, indices: Vec<u32>) -> MeshDesc {
    MeshDesc {
        name: "test".to_string(),
        vertices,
        indices,
    }
}

// ============================================================================
// Vertex layout
// ============================================================================

#[test]
fn test_vertex_size() {
    assert_eq!(std::mem::size_of::<Vertex>(), 44);
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_valid_mesh_counts() {
    let mesh = Mesh::from_desc(desc(
        vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0), vertex(0.0, 1.0, 0.0), vertex(1.0, 1.0, 0.0)],
        vec![0, 1, 2, 2, 1, 3],
    )).unwrap();

    assert_eq!(mesh.name(), "test");
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.index_count(), 6);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.vertex_bytes().len(), 4 * 44);
    assert_eq!(mesh.index_bytes().len(), 6 * 4);
}

#[test]
fn test_empty_vertices_rejected() {
    let result = Mesh::from_desc(desc(vec![], vec![0, 1, 2]));
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_empty_indices_rejected() {
    let result = Mesh::from_desc(desc(vec![vertex(0.0, 0.0, 0.0)], vec![]));
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_partial_triangle_rejected() {
    let result = Mesh::from_desc(desc(
        vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0), vertex(0.0, 1.0, 0.0)],
        vec![0, 1],
    ));
    assert!(matches!(result, Err(Error::InvalidResource(_))));
}

#[test]
fn test_out_of_range_index_rejected() {
    let result = Mesh::from_desc(desc(
        vec![vertex(0.0, 0.0, 0.0), vertex(1.0, 0.0, 0.0), vertex(0.0, 1.0, 0.0)],
        vec![0, 1, 3],
    ));
    match result {
        Err(Error::InvalidResource(msg)) => assert!(msg.contains("index 3")),
        other => panic!("expected InvalidResource, got {:?}", other),
    }
}

// ============================================================================
// Bounds
// ============================================================================

#[test]
fn test_bounds_enclose_positions() {
    let mesh = Mesh::from_desc(desc(
        vec![vertex(-1.0, 0.0, 2.0), vertex(3.0, -4.0, 0.0), vertex(0.0, 5.0, -6.0)],
        vec![0, 1, 2],
    )).unwrap();

    assert_eq!(mesh.bounds().min, Vec3::new(-1.0, -4.0, -6.0));
    assert_eq!(mesh.bounds().max, Vec3::new(3.0, 5.0, 2.0));
}

// ============================================================================
// Procedural shapes
// ============================================================================

#[test]
fn test_triangle_shape() {
    let mesh = Mesh::from_desc(Mesh::triangle("tri", 1.0)).unwrap();
    assert_eq!(mesh.name(), "tri");
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert_eq!(mesh.bounds().min, Vec3::new(-0.5, -0.5, 0.0));
    assert_eq!(mesh.bounds().max, Vec3::new(0.5, 0.5, 0.0));
}

#[test]
fn test_quad_shape() {
    let mesh = Mesh::from_desc(Mesh::quad("quad", 2.0, 1.0)).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert!((mesh.bounds().extents() - Vec3::new(2.0, 1.0, 0.0)).length() < 1e-6);
    assert!(mesh.vertices().iter().all(|v| v.normal == Vec3::NEG_Z));
}

#[test]
fn test_cube_shape() {
    let mesh = Mesh::from_desc(Mesh::cube("cube", 2.0)).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.index_count(), 36);
    assert_eq!(mesh.triangle_count(), 12);
    assert!((mesh.bounds().min - Vec3::splat(-1.0)).length() < 1e-6);
    assert!((mesh.bounds().max - Vec3::splat(1.0)).length() < 1e-6);
}

#[test]
fn test_cube_faces_point_outward() {
    let mesh = Mesh::from_desc(Mesh::cube("cube", 1.0)).unwrap();
    for v in mesh.vertices() {
        // every vertex sits on the face its normal points out of
        assert!((v.position.dot(v.normal) - 0.5).abs() < 1e-6);
    }
}
