use crate::camera::CameraController;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::layers::LayerSet;
use crate::signals::{InputSignals, ScrollDirection, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Owns every piece of mutable starfield state.
///
/// Input handlers only record signals; `tick` is the single place where
/// layer rotation and camera position advance.
pub struct StarfieldEngine {
    config: EngineConfig,
    camera: CameraController,
    layers: LayerSet,
    signals: InputSignals,
    viewport: Viewport,
    frame_count: u64,
    elapsed: Duration,
    disposed: bool,
}

impl StarfieldEngine {
    pub fn new(config: EngineConfig, viewport: Viewport) -> Result<Self, EngineError> {
        config.validate()?;
        if viewport.width == 0 || viewport.height == 0 {
            return Err(EngineError::EmptyViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let layers = LayerSet::build(&config, &mut rng)?;
        let camera = CameraController::new(&config.camera, config.damping, viewport.aspect());
        log::info!(
            "[engine] layers={} particles={} viewport={}x{} camera_z={}",
            layers.len(),
            layers.particle_count(),
            viewport.width,
            viewport.height,
            config.camera.initial_z
        );
        Ok(Self {
            config,
            camera,
            layers,
            signals: InputSignals::default(),
            viewport,
            frame_count: 0,
            elapsed: Duration::ZERO,
            disposed: false,
        })
    }

    /// Advance one frame: queued scroll kick, self-rotation, camera easing,
    /// re-aim at the origin.
    ///
    /// Steps are per frame rather than per second; `dt` only feeds the
    /// elapsed clock.
    pub fn tick(&mut self, dt: Duration) -> Result<(), EngineError> {
        if self.disposed {
            return Err(EngineError::Disposed);
        }
        let kick = self.signals.take_scroll_rotation();
        self.layers.apply_scroll_rotation(kick);
        self.layers.advance();
        self.camera.update(self.signals.target);
        self.frame_count += 1;
        self.elapsed += dt;
        Ok(())
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        if self.disposed {
            return;
        }
        let sensitivity = Vec2::from_array(self.config.pointer_sensitivity);
        self.signals
            .pointer_moved(Vec2::new(client_x, client_y), self.viewport, sensitivity);
    }

    /// Record a scroll to `scroll_y`. The rotation kick lands on the next tick.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<ScrollDirection> {
        if self.disposed {
            return None;
        }
        let dir = self.signals.scrolled(scroll_y);
        let kick = self.layers.scroll_delta(scroll_y, dir);
        self.signals.queue_scroll_rotation(kick);
        Some(dir)
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        if self.disposed {
            return;
        }
        if self.camera.set_viewport(width, height) {
            self.viewport = Viewport::new(width, height);
            log::debug!("[engine] resize {}x{}", width, height);
        } else {
            log::warn!("[engine] ignoring zero-sized resize {}x{}", width, height);
        }
    }

    /// Stop accepting ticks and input. Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            log::warn!("[engine] dispose called twice");
            return;
        }
        self.disposed = true;
        log::info!("[engine] disposed after {} frames", self.frame_count);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    pub fn signals(&self) -> &InputSignals {
        &self.signals
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}
