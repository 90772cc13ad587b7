//! Glow shading model shared by every layer.
//!
//! The GPU path lives in `shaders/particles.wgsl`; the functions here are the
//! same math on the CPU and are what the tests pin down. The uniform structs
//! match the WGSL layouts byte for byte.

use crate::config::GlowConfig;
use glam::{Mat4, Vec2, Vec3};

/// Radial distance of a sprite-space coordinate from the sprite centre.
/// `uv` spans `[0, 1]^2`, so the edge midpoints sit at `0.5`.
#[inline]
pub fn sprite_radius(uv: Vec2) -> f32 {
    (uv - Vec2::splat(0.5)).length()
}

/// `exp(-r * k) * layer_alpha`.
#[inline]
pub fn glow_alpha(r: f32, falloff: f32, layer_alpha: f32) -> f32 {
    (-r * falloff).exp() * layer_alpha
}

/// Base colour with a slow sine hue wobble over world x/y.
pub fn base_tint(world_xy: Vec2, glow: &GlowConfig) -> Vec3 {
    let f = glow.hue_frequency;
    let wobble = Vec3::new(
        (world_xy.x * f).sin(),
        (world_xy.y * f).sin(),
        ((world_xy.x + world_xy.y) * f).sin(),
    );
    (Vec3::from_array(glow.tint) + wobble * glow.hue_variation).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Additive blend: contributions sum, nothing is overwritten.
#[inline]
pub fn additive_blend(dst: Vec3, src: Vec3, src_alpha: f32) -> Vec3 {
    dst + src * src_alpha
}

/// Shade one sprite pixel: returns premultiplied colour contribution.
pub fn shade(uv: Vec2, world_xy: Vec2, layer_alpha: f32, glow: &GlowConfig) -> (Vec3, f32) {
    let a = glow_alpha(sprite_radius(uv), glow.falloff, layer_alpha);
    (base_tint(world_xy, glow), a)
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub resolution: [f32; 2],
    pub falloff: f32,
    pub hue_variation: f32,
    pub tint: [f32; 3],
    pub hue_frequency: f32,
}

impl FrameUniforms {
    pub fn new(view_proj: Mat4, resolution: [f32; 2], glow: &GlowConfig) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            resolution,
            falloff: glow.falloff,
            hue_variation: glow.hue_variation,
            tint: glow.tint,
            hue_frequency: glow.hue_frequency,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LayerUniforms {
    pub model: [[f32; 4]; 4],
    pub point_size: f32,
    pub alpha: f32,
    pub _pad: [f32; 2],
}

impl LayerUniforms {
    pub fn new(model: Mat4, point_size: f32, alpha: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            point_size,
            alpha,
            _pad: [0.0; 2],
        }
    }
}
