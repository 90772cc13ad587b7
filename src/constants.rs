/// Web front-end tuning constants.
///
/// Engine-side knobs (layers, camera, damping, glow) live in
/// `starfield_core::EngineConfig`; these only concern the browser surface.

// Element id used when the host page does not name a canvas.
pub const DEFAULT_CANVAS_ID: &str = "starfield";

// Backing store resolution is capped to keep fill rate sane on dense displays.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Near-black with a hint of blue behind the additive glow
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.02, 1.0];

// Two triangles forming a unit sprite centred on the particle.
pub const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

// Longest frame delta fed to the engine clock (e.g. after a backgrounded tab).
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
