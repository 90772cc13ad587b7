//! Input adapters: raw pointer/scroll/resize values in, normalized signals out.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

impl ScrollDirection {
    /// Plain `>` comparison: an unchanged offset counts as backward.
    pub fn between(last: f32, current: f32) -> Self {
        if current > last {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            ScrollDirection::Forward => 1.0,
            ScrollDirection::Backward => -1.0,
        }
    }
}

#[inline]
pub fn pointer_target(client: Vec2, viewport: Viewport, sensitivity: Vec2) -> Vec2 {
    (client - viewport.center()) * sensitivity
}

/// Signal state written by the event adapters and drained by `tick`.
#[derive(Clone, Debug)]
pub struct InputSignals {
    pub target: Vec2,
    pub last_scroll_y: f32,
    pub scroll_direction: ScrollDirection,
    pending_scroll_rotation: f32,
}

impl Default for InputSignals {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            last_scroll_y: 0.0,
            scroll_direction: ScrollDirection::Backward,
            pending_scroll_rotation: 0.0,
        }
    }
}

impl InputSignals {
    pub fn pointer_moved(&mut self, client: Vec2, viewport: Viewport, sensitivity: Vec2) {
        self.target = pointer_target(client, viewport, sensitivity);
    }

    /// Record a scroll to `scroll_y`, returning the direction of travel.
    pub fn scrolled(&mut self, scroll_y: f32) -> ScrollDirection {
        let dir = ScrollDirection::between(self.last_scroll_y, scroll_y);
        self.scroll_direction = dir;
        self.last_scroll_y = scroll_y;
        dir
    }

    pub fn queue_scroll_rotation(&mut self, rotation: f32) {
        self.pending_scroll_rotation += rotation;
    }

    pub fn pending_scroll_rotation(&self) -> f32 {
        self.pending_scroll_rotation
    }

    pub fn take_scroll_rotation(&mut self) -> f32 {
        std::mem::take(&mut self.pending_scroll_rotation)
    }
}
