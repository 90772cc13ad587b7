//! Tuning knobs for the starfield.
//!
//! Every constant the animation depends on lives here so a host page can
//! override any subset of them with a JSON object. Missing fields fall back
//! to the defaults below.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// One particle layer: how many points, how big and bright, and how far it
/// is pushed along z.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub count: usize,
    pub point_size: f32,
    pub alpha: f32,
    pub depth_offset: f32,
}

impl LayerSpec {
    pub fn new(count: usize, point_size: f32, alpha: f32, depth_offset: f32) -> Self {
        Self {
            count,
            point_size,
            alpha,
            depth_offset,
        }
    }

    /// Check a single layer in isolation. `layer` only labels the error.
    pub fn validate(&self, layer: usize) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::EmptyLayer { layer });
        }
        if !(self.point_size.is_finite() && self.point_size > 0.0) {
            return Err(ConfigError::InvalidPointSize {
                layer,
                size: self.point_size,
            });
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::InvalidAlpha {
                layer,
                alpha: self.alpha,
            });
        }
        if !self.depth_offset.is_finite() {
            return Err(ConfigError::InvalidDepthOffset {
                layer,
                offset: self.depth_offset,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub initial_z: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 1.0,
            far: 3000.0,
            initial_z: 1000.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// `k` in `exp(-r * k)`; larger is a tighter core.
    pub falloff: f32,
    pub tint: [f32; 3],
    pub hue_variation: f32,
    /// Spatial frequency of the hue wobble, in world units.
    pub hue_frequency: f32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self {
            falloff: 22.0,
            tint: [0.65, 0.8, 1.0],
            hue_variation: 0.15,
            hue_frequency: 0.005,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Back to front. Depth offsets must be strictly increasing.
    pub layers: Vec<LayerSpec>,
    pub camera: CameraConfig,
    /// Fraction of the remaining camera distance closed per frame.
    pub damping: f32,
    /// Pointer pixels to world units, per axis.
    pub pointer_sensitivity: [f32; 2],
    /// Per-frame self-rotation in radians for a layer of depth weight 1.
    /// Positive on every axis so rotation only ever grows.
    pub rotation_step: [f32; 3],
    pub scroll_sensitivity: f32,
    /// Which rotation axes a scroll kick is applied to.
    pub scroll_axes: [f32; 3],
    pub glow: GlowConfig,
    /// Fixed seed for particle placement; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layers: vec![
                LayerSpec::new(600, 2.0, 0.55, -500.0),
                LayerSpec::new(200, 3.5, 0.75, 0.0),
                LayerSpec::new(150, 5.0, 0.95, 400.0),
            ],
            camera: CameraConfig::default(),
            damping: 0.05,
            pointer_sensitivity: [0.5, 0.5],
            rotation_step: [0.0001, 0.0002, 0.00005],
            scroll_sensitivity: 0.000002,
            scroll_axes: [1.0, 1.0, 0.0],
            glow: GlowConfig::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers.is_empty() {
            return Err(ConfigError::NoLayers);
        }
        let mut previous: Option<f32> = None;
        for (i, spec) in self.layers.iter().enumerate() {
            spec.validate(i)?;
            if let Some(prev) = previous {
                if spec.depth_offset <= prev {
                    return Err(ConfigError::LayersOutOfOrder {
                        layer: i,
                        offset: spec.depth_offset,
                        previous: prev,
                    });
                }
            }
            previous = Some(spec.depth_offset);
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        let cam = &self.camera;
        if !(cam.fov_degrees > 0.0 && cam.fov_degrees < 180.0) {
            return Err(ConfigError::InvalidFieldOfView(cam.fov_degrees));
        }
        if !(cam.near > 0.0 && cam.far > cam.near) {
            return Err(ConfigError::InvalidClipPlanes {
                near: cam.near,
                far: cam.far,
            });
        }
        if !(cam.initial_z.is_finite() && cam.initial_z != 0.0) {
            return Err(ConfigError::InvalidCameraDistance(cam.initial_z));
        }
        if !self.rotation_step.iter().all(|s| s.is_finite() && *s > 0.0) {
            return Err(ConfigError::InvalidRotationStep(self.rotation_step));
        }
        if !self.pointer_sensitivity.iter().all(|s| s.is_finite()) {
            return Err(ConfigError::InvalidPointerSensitivity(
                self.pointer_sensitivity,
            ));
        }
        if !self.scroll_sensitivity.is_finite() {
            return Err(ConfigError::InvalidScrollSensitivity(
                self.scroll_sensitivity,
            ));
        }
        if !self.scroll_axes.iter().all(|a| a.is_finite()) {
            return Err(ConfigError::InvalidScrollAxes(self.scroll_axes));
        }
        if !(self.glow.falloff > 0.0) {
            return Err(ConfigError::InvalidFalloff(self.glow.falloff));
        }
        Ok(())
    }
}
