//! Static arrangement of the showcase: section objects and the particle field.

use glam::Vec3;
use rand::prelude::*;

use crate::config::{MotionParams, ParticleParams};
use crate::constants::*;
use crate::geometry::{self, Mesh};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Sphere,
    Crystal,
    TorusKnot,
}

impl ObjectKind {
    pub const SECTION_ORDER: [ObjectKind; 3] =
        [ObjectKind::Sphere, ObjectKind::Crystal, ObjectKind::TorusKnot];

    pub fn build_mesh(self) -> Mesh {
        match self {
            ObjectKind::Sphere => geometry::sphere(1.0, 16, 100),
            ObjectKind::Crystal => geometry::crystal(4.0, 10.0, 5.0, 4),
            ObjectKind::TorusKnot => geometry::torus_knot(0.6, 0.25, 100, 64, 2, 3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Glossy metal with a fake environment reflection.
    Reflective {
        color: [f32; 3],
        metalness: f32,
        roughness: f32,
    },
    /// Flat view-space normal coloring.
    Normal,
}

impl Material {
    /// Numeric tag consumed by the scene shader.
    #[inline]
    pub fn shader_mode(&self) -> f32 {
        match self {
            Material::Reflective { .. } => 0.0,
            Material::Normal => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub kind: ObjectKind,
    pub position: Vec3,
    pub scale: f32,
    pub material: Material,
}

/// Where section `index` lives: stacked downward, alternating sides.
#[inline]
pub fn section_position(index: usize, object_spacing: f32) -> Vec3 {
    let x = if index % 2 == 0 {
        OBJECT_OFFSET_X
    } else {
        -OBJECT_OFFSET_X
    };
    Vec3::new(x, -object_spacing * index as f32, 0.0)
}

#[derive(Clone, Debug)]
pub struct SceneLayout {
    pub objects: Vec<SceneObject>,
}

impl SceneLayout {
    pub fn new(motion: &MotionParams) -> Self {
        let objects = ObjectKind::SECTION_ORDER
            .iter()
            .enumerate()
            .map(|(i, kind)| {
                let (scale, material) = match kind {
                    ObjectKind::Sphere => (
                        1.0,
                        Material::Reflective {
                            color: SPHERE_COLOR,
                            metalness: METALNESS,
                            roughness: ROUGHNESS,
                        },
                    ),
                    ObjectKind::Crystal => (CRYSTAL_SCALE, Material::Normal),
                    ObjectKind::TorusKnot => (
                        1.0,
                        Material::Reflective {
                            color: TORUS_KNOT_COLOR,
                            metalness: METALNESS,
                            roughness: ROUGHNESS,
                        },
                    ),
                };
                SceneObject {
                    kind: *kind,
                    position: section_position(i, motion.object_spacing),
                    scale,
                    material,
                }
            })
            .collect();
        Self { objects }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Random particle positions in a box that spans every section plus half a
/// spacing above the first. Same seed, same field.
pub fn particle_positions(
    params: &ParticleParams,
    object_spacing: f32,
    section_count: usize,
) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let depth = object_spacing * section_count as f32;
    (0..params.count)
        .map(|_| {
            let x = (rng.gen::<f32>() - 0.5) * params.spread;
            let y = object_spacing * 0.5 - rng.gen::<f32>() * depth;
            let z = (rng.gen::<f32>() - 0.5) * params.spread;
            Vec3::new(x, y, z)
        })
        .collect()
}
