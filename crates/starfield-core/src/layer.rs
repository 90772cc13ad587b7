use crate::config::LayerSpec;
use crate::error::ConfigError;
use glam::{Mat4, Quat, Vec3};
use rand::Rng;

/// Half the edge length of the cube particles are scattered in.
pub const FIELD_HALF_EXTENT: f32 = 1000.0;

/// An independently rotating cloud of points sharing size, alpha and depth.
///
/// Positions are fixed at creation; only `rotation` changes afterwards.
#[derive(Clone, Debug)]
pub struct ParticleLayer {
    positions: Vec<Vec3>,
    pub point_size: f32,
    pub alpha: f32,
    pub depth_offset: f32,
    /// Relative rotation speed; larger for nearer layers.
    pub depth_weight: f32,
    /// Euler angles (x, y, z) in radians. Never normalized.
    pub rotation: Vec3,
}

impl ParticleLayer {
    /// Scatter `spec.count` points uniformly in the cube
    /// `[-E, E] x [-E, E] x [-E + offset, E + offset]`.
    pub fn generate<R: Rng>(
        spec: &LayerSpec,
        depth_weight: f32,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        spec.validate(0)?;
        let e = FIELD_HALF_EXTENT;
        let z_lo = -e + spec.depth_offset;
        let z_hi = e + spec.depth_offset;
        let positions = (0..spec.count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-e..=e),
                    rng.gen_range(-e..=e),
                    rng.gen_range(z_lo..=z_hi),
                )
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[layer] generated {} particles size={} alpha={} z_offset={}",
            positions.len(),
            spec.point_size,
            spec.alpha,
            spec.depth_offset
        );
        Ok(Self {
            positions,
            point_size: spec.point_size,
            alpha: spec.alpha,
            depth_offset: spec.depth_offset,
            depth_weight,
            rotation: Vec3::ZERO,
        })
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Model matrix for the current rotation (XYZ order).
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        ))
    }
}
