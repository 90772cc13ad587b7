use glam::{Mat4, Vec2, Vec3};
use starfield_core::*;

#[test]
fn glow_peaks_at_centre_and_decays_outward() {
    let k = GlowConfig::default().falloff;
    assert!((glow_alpha(0.0, k, 0.8) - 0.8).abs() < 1e-6);
    let mut prev = glow_alpha(0.0, k, 1.0);
    for i in 1..=10 {
        let a = glow_alpha(i as f32 * 0.05, k, 1.0);
        assert!(a < prev, "alpha not decreasing at step {i}");
        prev = a;
    }
    // At the sprite edge the glow is essentially gone.
    assert!(glow_alpha(0.5, k, 1.0) < 1e-4);
}

#[test]
fn larger_falloff_is_tighter() {
    assert!(glow_alpha(0.1, 25.0, 1.0) < glow_alpha(0.1, 20.0, 1.0));
}

#[test]
fn sprite_radius_is_distance_from_centre() {
    assert_eq!(sprite_radius(Vec2::splat(0.5)), 0.0);
    assert!((sprite_radius(Vec2::new(1.0, 0.5)) - 0.5).abs() < 1e-6);
    assert!((sprite_radius(Vec2::ZERO) - 0.5_f32.sqrt()).abs() < 1e-6);
}

#[test]
fn tint_varies_slightly_and_stays_in_gamut() {
    let glow = GlowConfig::default();
    let base = Vec3::from_array(glow.tint);
    let origin = base_tint(Vec2::ZERO, &glow);
    assert!(origin.abs_diff_eq(base, 1e-6));
    for (x, y) in [(250.0, -90.0), (-1000.0, 1000.0), (313.0, 777.0)] {
        let c = base_tint(Vec2::new(x, y), &glow);
        assert!(c.cmpge(Vec3::ZERO).all() && c.cmple(Vec3::ONE).all());
        assert!((c - base).abs().max_element() <= glow.hue_variation + 1e-6);
    }
    assert_ne!(base_tint(Vec2::new(250.0, -90.0), &glow), origin);
}

#[test]
fn additive_blend_sums_contributions_in_any_order() {
    let bg = Vec3::new(0.02, 0.02, 0.05);
    let a = (Vec3::new(0.6, 0.8, 1.0), 0.3);
    let b = (Vec3::new(0.7, 0.7, 0.9), 0.5);
    let ab = additive_blend(additive_blend(bg, a.0, a.1), b.0, b.1);
    let ba = additive_blend(additive_blend(bg, b.0, b.1), a.0, a.1);
    assert!(ab.abs_diff_eq(ba, 1e-6));
    assert!(ab.cmpgt(bg).all());
}

#[test]
fn shade_combines_tint_and_layer_alpha() {
    let glow = GlowConfig::default();
    let (color, alpha) = shade(Vec2::splat(0.5), Vec2::ZERO, 0.4, &glow);
    assert!(color.abs_diff_eq(Vec3::from_array(glow.tint), 1e-6));
    assert!((alpha - 0.4).abs() < 1e-6);
}

#[test]
fn uniform_layouts_match_shader() {
    assert_eq!(std::mem::size_of::<FrameUniforms>(), 96);
    assert_eq!(std::mem::size_of::<LayerUniforms>(), 80);
    assert!(PARTICLES_WGSL.contains("fn vs_main"));
    assert!(PARTICLES_WGSL.contains("fn fs_main"));
}

#[test]
fn frame_uniform_fields_sit_at_wgsl_offsets() {
    // WGSL aligns `tint: vec3<f32>` to 16 bytes and packs `hue_frequency`
    // into its trailing slot.
    let u = FrameUniforms::new(Mat4::IDENTITY, [800.0, 600.0], &GlowConfig::default());
    let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&u));
    assert_eq!(&floats[16..18], &[800.0, 600.0]);
    assert_eq!(floats[18], 22.0);
    assert_eq!(floats[19], 0.15);
    assert_eq!(&floats[20..23], &[0.65, 0.8, 1.0]);
    assert_eq!(floats[23], 0.005);
}
