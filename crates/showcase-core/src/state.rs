//! Per-frame output handed to the renderer and the page.
//!
//! These types intentionally avoid referencing platform-specific APIs and are
//! suitable for use on both native and web targets.

use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

use crate::config::CameraParams;
use crate::section::SectionChange;
use crate::tween::HeadingStyle;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `distance` on +Z inside a rig offset by `rig`, raised or
    /// lowered by `camera_y`, looking down -Z.
    pub fn from_rig(params: &CameraParams, rig: Vec2, camera_y: f32, aspect: f32) -> Self {
        let eye = Vec3::new(rig.x, rig.y + camera_y, params.distance);
        Self {
            eye,
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect,
            fovy_radians: params.fovy_degrees.to_radians(),
            znear: params.znear,
            zfar: params.zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn point_world_size(&self, point_size: f32) -> f32 {
        point_world_size(point_size, self.fovy_radians)
    }
}

/// World-space width of a size-attenuated point sprite.
///
/// Attenuated points cover `point_size * (buffer_height / 2) / depth` pixels.
/// A billboard of width `w` at the same depth covers
/// `w * (buffer_height / 2) / (depth * tan(fovy / 2))`, so the two match when
/// `w = point_size * tan(fovy / 2)`.
#[inline]
pub fn point_world_size(point_size: f32, fovy_radians: f32) -> f32 {
    point_size * (fovy_radians * 0.5).tan()
}

/// World placement of one section object this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
}

impl ObjectTransform {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Everything the front-ends need after one tick.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub camera: Camera,
    pub objects: SmallVec<[ObjectTransform; 4]>,
    /// Heading styles that changed this frame, by heading index.
    pub headings: SmallVec<[(usize, HeadingStyle); 4]>,
    pub section_changes: SmallVec<[SectionChange; 2]>,
    /// Delta applied this frame; `None` when the frame was skipped.
    pub delta: Option<f32>,
}
