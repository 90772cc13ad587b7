//! Platform-neutral core of the starfield: configuration, particle layers,
//! camera smoothing, input signals and the frame scheduler.
//!
//! Nothing in here touches the DOM or the GPU, so the whole animation model
//! can be stepped frame by frame on the host.

pub mod camera;
pub mod config;
pub mod engine;
pub mod error;
pub mod glow;
pub mod layer;
pub mod layers;
pub mod scheduler;
pub mod signals;

pub use camera::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use glow::*;
pub use layer::*;
pub use layers::*;
pub use scheduler::*;
pub use signals::*;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
