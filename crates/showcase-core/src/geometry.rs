//! Procedural meshes for the three section objects.
//!
//! Vertex layout is interleaved position + normal, indices are `u32`. The
//! crystal is built unindexed-per-face so its normals stay flat.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`; zero for an empty mesh.
    pub fn bounds(&self) -> (Vec3, Vec3) {
        if self.vertices.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for v in &self.vertices {
            let p = Vec3::from(v.position);
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }

    fn push_flat_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let normal = (b - a).cross(c - a);
        let base = self.vertices.len() as u32;
        for p in [a, b, c] {
            self.vertices.push(Vertex::new(p, normal));
        }
        self.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
}

/// UV sphere centred on the origin.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(((ws + 1) * (hs + 1)) as usize),
        indices: Vec::with_capacity((ws * hs * 6) as usize),
    };

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let theta = v * PI;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let phi = u * TAU;
            let p = Vec3::new(
                -radius * phi.cos() * theta.sin(),
                radius * theta.cos(),
                radius * phi.sin() * theta.sin(),
            );
            mesh.vertices.push(Vertex::new(p, p));
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // Pole rows collapse to a point; skip their degenerate halves.
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Faceted crystal: a `sides`-gon prism with a pyramid on each end.
/// Total height is `body_height + 2 * cap_height`.
pub fn crystal(radius: f32, body_height: f32, cap_height: f32, sides: u32) -> Mesh {
    let sides = sides.max(3);
    let half = body_height / 2.0;
    let top_apex = Vec3::new(0.0, half + cap_height, 0.0);
    let bottom_apex = Vec3::new(0.0, -half - cap_height, 0.0);
    let ring = |i: u32, y: f32| {
        let theta = i as f32 / sides as f32 * TAU;
        Vec3::new(radius * theta.sin(), y, radius * theta.cos())
    };

    let mut mesh = Mesh::default();
    for i in 0..sides {
        let j = (i + 1) % sides;
        let (t0, t1) = (ring(i, half), ring(j, half));
        let (b0, b1) = (ring(i, -half), ring(j, -half));
        // body quad, counter-clockwise seen from outside
        mesh.push_flat_triangle(t0, b0, b1);
        mesh.push_flat_triangle(t0, b1, t1);
        mesh.push_flat_triangle(top_apex, t0, t1);
        mesh.push_flat_triangle(bottom_apex, b1, b0);
    }
    mesh
}

fn torus_knot_curve(u: f32, p: u32, q: u32, radius: f32) -> Vec3 {
    let cu = u.cos();
    let su = u.sin();
    let qu_over_p = q as f32 / p as f32 * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * cu,
        radius * (2.0 + cs) * su * 0.5,
        radius * qu_over_p.sin() * 0.5,
    )
}

/// (p, q) torus knot with a circular tube swept along the curve.
pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> Mesh {
    let ts = tubular_segments.max(3);
    let rs = radial_segments.max(3);
    let p = p.max(1);
    let mut mesh = Mesh {
        vertices: Vec::with_capacity(((ts + 1) * (rs + 1)) as usize),
        indices: Vec::with_capacity((ts * rs * 6) as usize),
    };

    for i in 0..=ts {
        let u = i as f32 / ts as f32 * p as f32 * TAU;
        let p1 = torus_knot_curve(u, p, q, radius);
        let p2 = torus_knot_curve(u + 0.01, p, q, radius);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();
        for j in 0..=rs {
            let v = j as f32 / rs as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.vertices.push(Vertex::new(pos, pos - p1));
        }
    }

    let row = rs + 1;
    for j in 1..=ts {
        for i in 1..=rs {
            let a = row * (j - 1) + (i - 1);
            let b = row * j + (i - 1);
            let c = row * j + i;
            let d = row * (j - 1) + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}
