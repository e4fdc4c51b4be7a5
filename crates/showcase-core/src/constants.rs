use glam::Vec3;

// Shared visual/motion tuning constants used by both web and native frontends.

// Scene layout
pub const OBJECT_SPACING: f32 = 4.0; // vertical distance between showcased objects
pub const OBJECT_OFFSET_X: f32 = 2.0; // objects alternate between +x and -x
pub const CRYSTAL_SCALE: f32 = 0.1;

// Camera motion
pub const PARALLAX_AMPLITUDE: f32 = 0.5; // cursor range [-0.5, 0.5] maps to +-0.25 world units
pub const PARALLAX_SMOOTHING_RATE: f32 = 5.0; // per second
pub const OBJECT_SPIN_RATE: f32 = 0.12; // radians per second around Y

// Camera projection
pub const CAMERA_FOVY_DEGREES: f32 = 35.0;
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Particles
pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent of the particle box
pub const PARTICLE_SIZE: f32 = 0.03;
pub const PARTICLE_COLOR_HEX: &str = "#ffeded";
pub const PARTICLE_SEED: u64 = 42;

// Section transitions
pub const SECTION_SPIN_RADIANS: f32 = 3.0;
pub const SECTION_SPIN_DURATION_SEC: f32 = 1.5;
pub const HEADING_DURATION_SEC: f32 = 1.0;
pub const HEADING_FROM_SCALE: f32 = 3.0;
pub const HEADING_FROM_OPACITY: f32 = 2.0;

// Lighting and tone mapping
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 0.0];
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const TONE_MAPPING_EXPOSURE: f32 = 1.25;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Material palette for the three section objects
pub const SPHERE_COLOR: [f32; 3] = [1.0, 0.0, 1.0]; // #ff00ff
pub const TORUS_KNOT_COLOR: [f32; 3] = [1.0, 0.0, 0.0]; // #ff0000
pub const METALNESS: f32 = 0.9;
pub const ROUGHNESS: f32 = 0.5;

// Native virtual scroll
pub const WHEEL_LINE_PIXELS: f32 = 40.0;

#[inline]
pub fn light_direction() -> Vec3 {
    Vec3::from(LIGHT_POSITION).normalize()
}
