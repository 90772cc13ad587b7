use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::*;

#[test]
fn layer_has_requested_count_and_z_band() {
    let mut rng = StdRng::seed_from_u64(7);
    for (count, offset) in [(600usize, -500.0f32), (200, 0.0), (150, 400.0), (1, 1234.5)] {
        let layer = ParticleLayer::generate(&LayerSpec::new(count, 3.0, 0.8, offset), 1.0, &mut rng)
            .expect("valid layer");
        assert_eq!(layer.len(), count);
        for p in layer.positions() {
            assert!(p.x >= -FIELD_HALF_EXTENT && p.x <= FIELD_HALF_EXTENT);
            assert!(p.y >= -FIELD_HALF_EXTENT && p.y <= FIELD_HALF_EXTENT);
            assert!(
                p.z >= -FIELD_HALF_EXTENT + offset && p.z <= FIELD_HALF_EXTENT + offset,
                "z={} outside band for offset {}",
                p.z,
                offset
            );
        }
    }
}

#[test]
fn new_layer_starts_unrotated_with_given_size_and_alpha() {
    let mut rng = StdRng::seed_from_u64(1);
    let layer = ParticleLayer::generate(&LayerSpec::new(10, 4.0, 0.5, 0.0), 3.0, &mut rng).unwrap();
    assert_eq!(layer.rotation, glam::Vec3::ZERO);
    assert_eq!(layer.point_size, 4.0);
    assert_eq!(layer.alpha, 0.5);
    assert_eq!(layer.depth_weight, 3.0);
}

#[test]
fn layers_do_not_share_positions() {
    let mut rng = StdRng::seed_from_u64(99);
    let spec = LayerSpec::new(50, 2.0, 1.0, 0.0);
    let a = ParticleLayer::generate(&spec, 1.0, &mut rng).unwrap();
    let b = ParticleLayer::generate(&spec, 1.0, &mut rng).unwrap();
    assert_ne!(a.positions(), b.positions());
    assert_ne!(a.positions().as_ptr(), b.positions().as_ptr());
}

#[test]
fn same_seed_places_particles_identically() {
    let spec = LayerSpec::new(32, 2.0, 1.0, 100.0);
    let a = ParticleLayer::generate(&spec, 1.0, &mut StdRng::seed_from_u64(5)).unwrap();
    let b = ParticleLayer::generate(&spec, 1.0, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(a.positions(), b.positions());
}

#[test]
fn invalid_layers_are_rejected_not_clamped() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        ParticleLayer::generate(&LayerSpec::new(0, 2.0, 1.0, 0.0), 1.0, &mut rng),
        Err(ConfigError::EmptyLayer { .. })
    ));
    assert!(matches!(
        ParticleLayer::generate(&LayerSpec::new(10, 0.0, 1.0, 0.0), 1.0, &mut rng),
        Err(ConfigError::InvalidPointSize { .. })
    ));
    assert!(matches!(
        ParticleLayer::generate(&LayerSpec::new(10, -1.0, 1.0, 0.0), 1.0, &mut rng),
        Err(ConfigError::InvalidPointSize { .. })
    ));
    assert!(matches!(
        ParticleLayer::generate(&LayerSpec::new(10, 2.0, 1.5, 0.0), 1.0, &mut rng),
        Err(ConfigError::InvalidAlpha { .. })
    ));
    assert!(matches!(
        ParticleLayer::generate(&LayerSpec::new(10, 2.0, 1.0, f32::NAN), 1.0, &mut rng),
        Err(ConfigError::InvalidDepthOffset { .. })
    ));
}

#[test]
fn model_matrix_is_identity_before_rotation() {
    let mut rng = StdRng::seed_from_u64(2);
    let layer = ParticleLayer::generate(&LayerSpec::new(4, 2.0, 1.0, 0.0), 1.0, &mut rng).unwrap();
    assert!(layer.model_matrix().abs_diff_eq(glam::Mat4::IDENTITY, 1e-6));
}

#[test]
fn scroll_kick_scales_with_offset_direction_and_axes() {
    let config = EngineConfig {
        seed: Some(5),
        scroll_sensitivity: 0.001,
        scroll_axes: [1.0, 0.5, 0.0],
        ..EngineConfig::default()
    };
    let mut set = LayerSet::build(&config, &mut StdRng::seed_from_u64(5)).unwrap();

    let forward = set.scroll_delta(300.0, ScrollDirection::Forward);
    let backward = set.scroll_delta(300.0, ScrollDirection::Backward);
    assert!((forward - 0.3).abs() < 1e-6);
    assert_eq!(backward, -forward);

    set.apply_scroll_rotation(forward);
    for layer in set.layers() {
        // Same kick for every layer, regardless of depth weight.
        assert!((layer.rotation.x - 0.3).abs() < 1e-6);
        assert!((layer.rotation.y - 0.15).abs() < 1e-6);
        assert_eq!(layer.rotation.z, 0.0);
    }
    set.apply_scroll_rotation(backward);
    for layer in set.layers() {
        assert!(layer.rotation.abs_diff_eq(glam::Vec3::ZERO, 1e-6));
    }
}
