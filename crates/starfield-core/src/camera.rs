//! Perspective camera that eases toward a pointer-driven target.
//!
//! The eye slides in x/y only; z stays where scene setup put it. After every
//! step the camera is re-aimed at the focus point so it keeps looking at the
//! scene origin while it translates.

use crate::config::CameraConfig;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[derive(Clone, Debug)]
pub struct CameraController {
    camera: Camera,
    damping: f32,
    view: Mat4,
}

impl CameraController {
    pub fn new(config: &CameraConfig, damping: f32, aspect: f32) -> Self {
        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, config.initial_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: config.fov_degrees.to_radians(),
            znear: config.near,
            zfar: config.far,
        };
        let view = camera.view_matrix();
        Self {
            camera,
            damping,
            view,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn position(&self) -> Vec3 {
        self.camera.eye
    }

    pub fn aspect(&self) -> f32 {
        self.camera.aspect
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    /// One smoothing step toward `(target.x, -target.y)`, then re-aim.
    ///
    /// Screen y grows downward while world y grows upward, hence the flip.
    pub fn update(&mut self, target: Vec2) {
        let goal = Vec2::new(target.x, -target.y);
        let eye = &mut self.camera.eye;
        eye.x += (goal.x - eye.x) * self.damping;
        eye.y += (goal.y - eye.y) * self.damping;
        self.look_at(Vec3::ZERO);
    }

    /// Point the camera at `focus`, rebuilding the view matrix.
    pub fn look_at(&mut self, focus: Vec3) {
        self.camera.target = focus;
        self.view = self.camera.view_matrix();
    }

    /// Zero-sized viewports are ignored so the projection never degenerates.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.camera.aspect = width as f32 / height as f32;
        true
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.camera.projection_matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view
    }
}
