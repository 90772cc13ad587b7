use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::layer::ParticleLayer;
use crate::signals::ScrollDirection;
use glam::Vec3;
use rand::Rng;

/// Ordered back-to-front collection of particle layers.
///
/// Layer `i` rotates with weight `i + 1`, so nearer layers spin faster and
/// the field reads as parallax.
#[derive(Clone, Debug)]
pub struct LayerSet {
    layers: Vec<ParticleLayer>,
    rotation_step: Vec3,
    scroll_sensitivity: f32,
    scroll_axes: Vec3,
}

impl LayerSet {
    pub fn build<R: Rng>(config: &EngineConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;
        let layers = config
            .layers
            .iter()
            .enumerate()
            .map(|(i, spec)| ParticleLayer::generate(spec, depth_weight(i), &mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            layers,
            rotation_step: Vec3::from_array(config.rotation_step),
            scroll_sensitivity: config.scroll_sensitivity,
            scroll_axes: Vec3::from_array(config.scroll_axes),
        })
    }

    pub fn layers(&self) -> &[ParticleLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn particle_count(&self) -> usize {
        self.layers.iter().map(ParticleLayer::len).sum()
    }

    /// Per-frame self-rotation.
    pub fn advance(&mut self) {
        for layer in &mut self.layers {
            layer.rotation += self.rotation_step * layer.depth_weight;
        }
    }

    /// Rotation kick for a scroll event at offset `scroll_y`.
    pub fn scroll_delta(&self, scroll_y: f32, direction: ScrollDirection) -> f32 {
        scroll_y * direction.sign() * self.scroll_sensitivity
    }

    /// Add `amount` to every layer along the configured scroll axes.
    pub fn apply_scroll_rotation(&mut self, amount: f32) {
        if amount == 0.0 {
            return;
        }
        let delta = self.scroll_axes * amount;
        for layer in &mut self.layers {
            layer.rotation += delta;
        }
    }
}

#[inline]
pub fn depth_weight(index: usize) -> f32 {
    (index + 1) as f32
}
