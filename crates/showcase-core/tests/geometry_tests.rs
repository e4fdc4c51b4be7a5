// Host-side tests for procedural meshes.

use glam::Vec3;
use showcase_core::geometry::{self, Mesh};

fn assert_well_formed(mesh: &Mesh) {
    assert_eq!(mesh.indices.len() % 3, 0);
    let n = mesh.vertices.len() as u32;
    assert!(mesh.indices.iter().all(|&i| i < n));
    for v in &mesh.vertices {
        assert!(v.position.iter().all(|c| c.is_finite()));
        let len = Vec3::from(v.normal).length();
        assert!((len - 1.0).abs() < 1e-3, "normal length {len}");
    }
}

#[test]
fn sphere_counts_and_radius() {
    let mesh = geometry::sphere(1.0, 16, 100);
    assert_eq!(mesh.vertices.len(), 17 * 101);
    // Pole rows contribute one triangle per segment, the rest two.
    assert_eq!(mesh.triangle_count(), 16 * 2 + 16 * 2 * 98);
    assert_well_formed(&mesh);
    for v in &mesh.vertices {
        assert!((Vec3::from(v.position).length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn crystal_has_flat_outward_faces() {
    let mesh = geometry::crystal(4.0, 10.0, 5.0, 4);
    assert_eq!(mesh.triangle_count(), 16);
    assert_eq!(mesh.vertices.len(), 48);
    assert_well_formed(&mesh);
    for tri in mesh.vertices.chunks(3) {
        assert_eq!(tri[0].normal, tri[1].normal);
        assert_eq!(tri[1].normal, tri[2].normal);
        let centroid = tri
            .iter()
            .fold(Vec3::ZERO, |acc, v| acc + Vec3::from(v.position))
            / 3.0;
        assert!(Vec3::from(tri[0].normal).dot(centroid) > 0.0);
    }
    let (min, max) = mesh.bounds();
    assert!((max.y - 10.0).abs() < 1e-5);
    assert!((min.y + 10.0).abs() < 1e-5);
    assert!(max.x <= 4.0 + 1e-5);
}

#[test]
fn torus_knot_counts() {
    let mesh = geometry::torus_knot(0.6, 0.25, 100, 64, 2, 3);
    assert_eq!(mesh.vertices.len(), 101 * 65);
    assert_eq!(mesh.triangle_count(), 100 * 64 * 2);
    assert_well_formed(&mesh);
    let (min, max) = mesh.bounds();
    assert!(max.x < 2.0 && min.x > -2.0);
}

#[test]
fn segment_counts_are_clamped() {
    let mesh = geometry::sphere(1.0, 0, 0);
    assert_eq!(mesh.vertices.len(), 4 * 3);
    assert_well_formed(&mesh);
}

#[test]
fn empty_mesh_bounds_are_zero() {
    assert_eq!(Mesh::default().bounds(), (Vec3::ZERO, Vec3::ZERO));
}
