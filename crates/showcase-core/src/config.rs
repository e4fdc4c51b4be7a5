//! Tunable parameters for the showcase.
//!
//! Defaults mirror the constants in [`crate::constants`]. Front-ends may tweak
//! individual fields (the web build reads a couple of URL overrides) and must
//! call [`ShowcaseConfig::validate`] before handing the config to
//! [`crate::Showcase::new`].

use crate::color::parse_hex_color;
use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct MotionParams {
    pub object_spacing: f32,
    pub parallax_amplitude: f32,
    pub smoothing_rate: f32,
    pub spin_rate: f32,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            object_spacing: OBJECT_SPACING,
            parallax_amplitude: PARALLAX_AMPLITUDE,
            smoothing_rate: PARALLAX_SMOOTHING_RATE,
            spin_rate: OBJECT_SPIN_RATE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub fovy_degrees: f32,
    pub distance: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fovy_degrees: CAMERA_FOVY_DEGREES,
            distance: CAMERA_Z,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    pub spread: f32,
    pub size: f32,
    pub color_hex: String,
    pub seed: u64,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            spread: PARTICLE_SPREAD,
            size: PARTICLE_SIZE,
            color_hex: PARTICLE_COLOR_HEX.to_string(),
            seed: PARTICLE_SEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransitionParams {
    pub spin_radians: f32,
    pub spin_duration_sec: f32,
    pub heading_duration_sec: f32,
}

impl Default for TransitionParams {
    fn default() -> Self {
        Self {
            spin_radians: SECTION_SPIN_RADIANS,
            spin_duration_sec: SECTION_SPIN_DURATION_SEC,
            heading_duration_sec: HEADING_DURATION_SEC,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShowcaseConfig {
    pub motion: MotionParams,
    pub camera: CameraParams,
    pub particles: ParticleParams,
    pub transitions: TransitionParams,
}

impl ShowcaseConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("object_spacing", self.motion.object_spacing)?;
        finite("parallax_amplitude", self.motion.parallax_amplitude)?;
        positive("smoothing_rate", self.motion.smoothing_rate)?;
        finite("spin_rate", self.motion.spin_rate)?;

        positive("fovy_degrees", self.camera.fovy_degrees)?;
        finite("camera distance", self.camera.distance)?;
        positive("znear", self.camera.znear)?;
        positive("zfar", self.camera.zfar)?;
        if self.camera.znear >= self.camera.zfar {
            return Err(ConfigError::ClipPlanes {
                near: self.camera.znear,
                far: self.camera.zfar,
            });
        }

        positive("particle spread", self.particles.spread)?;
        positive("particle size", self.particles.size)?;
        parse_hex_color(&self.particles.color_hex)?;

        finite("spin_radians", self.transitions.spin_radians)?;
        positive("spin_duration_sec", self.transitions.spin_duration_sec)?;
        positive("heading_duration_sec", self.transitions.heading_duration_sec)?;
        Ok(())
    }

    /// Particle color as RGB, falling back to the default palette when the
    /// configured string does not parse.
    pub fn particle_rgb(&self) -> [f32; 3] {
        parse_hex_color(&self.particles.color_hex)
            .or_else(|_| parse_hex_color(PARTICLE_COLOR_HEX))
            .unwrap_or([1.0, 1.0, 1.0])
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn finite(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}
