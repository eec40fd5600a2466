// Host-side tests for mesh builders.

use ice_core::*;

fn unit(n: [f32; 3]) -> bool {
    ((n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt() - 1.0).abs() < 1e-4
}

#[test]
fn box_has_sharp_faces_and_outward_normals() {
    let mesh = box_mesh(2.0, 2.0, 2.0);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.index_count(), 36);
    for v in &mesh.vertices {
        assert!(unit(v.normal));
        for axis in 0..3 {
            assert!((v.position[axis].abs() - 1.0).abs() < 1e-6);
        }
        // the normal points the same way as the face's offset from the centre
        let d: f32 = (0..3).map(|a| v.position[a] * v.normal[a]).sum();
        assert!((d - 1.0).abs() < 1e-6);
    }
}

#[test]
fn box_triangles_wind_counter_clockwise_from_outside() {
    let mesh = box_mesh(1.8, 1.8, 1.8);
    for tri in mesh.indices.chunks(3) {
        let p = |i: u16| glam::Vec3::from(mesh.vertices[i as usize].position);
        let n = glam::Vec3::from(mesh.vertices[tri[0] as usize].normal);
        let face = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(face.dot(n) > 0.0);
    }
}

#[test]
fn sphere_vertex_layout() {
    let mesh = uv_sphere(DROP_RADIUS, DROP_WIDTH_SEGMENTS, DROP_HEIGHT_SEGMENTS);
    let (w, h) = (DROP_WIDTH_SEGMENTS as usize, DROP_HEIGHT_SEGMENTS as usize);
    assert_eq!(mesh.vertices.len(), (w + 1) * (h + 1));
    // poles contribute one triangle per segment, other rows two
    assert_eq!(mesh.indices.len(), w * (2 * h - 2) * 3);
    for v in &mesh.vertices {
        assert!(unit(v.normal));
        let r = glam::Vec3::from(v.position).length();
        assert!((r - DROP_RADIUS).abs() < 1e-6);
    }
    assert!(mesh
        .indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn plane_faces_up() {
    let mesh = plane(1.0);
    assert_eq!(mesh.vertices.len(), 4);
    for tri in mesh.indices.chunks(3) {
        let p = |i: u16| glam::Vec3::from(mesh.vertices[i as usize].position);
        let face = (p(tri[1]) - p(tri[0])).cross(p(tri[2]) - p(tri[0]));
        assert!(face.y > 0.0);
    }
}

#[test]
fn oversized_sphere_is_clamped_to_u16_range() {
    let mesh = uv_sphere(1.0, 1_000, 400);
    let row = MAX_SPHERE_SEGMENTS as usize + 1;
    assert_eq!(mesh.vertices.len(), row * row);
    let max_index = mesh.indices.iter().copied().max().unwrap();
    assert_eq!(max_index as usize, mesh.vertices.len() - 1);
}
