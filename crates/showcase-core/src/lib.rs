pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod scene;
pub mod section;
pub mod showcase;
pub mod state;
pub mod tween;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use clock::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use input::*;
pub use scene::*;
pub use section::*;
pub use showcase::*;
pub use state::*;
pub use tween::*;
