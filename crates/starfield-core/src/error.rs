use thiserror::Error;

/// Rejected configuration. Values are never clamped into range; construction
/// fails instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("at least one particle layer is required")]
    NoLayers,
    #[error("layer {layer}: particle count must be positive")]
    EmptyLayer { layer: usize },
    #[error("layer {layer}: point size must be a positive finite number, got {size}")]
    InvalidPointSize { layer: usize, size: f32 },
    #[error("layer {layer}: alpha must lie in [0, 1], got {alpha}")]
    InvalidAlpha { layer: usize, alpha: f32 },
    #[error("layer {layer}: depth offset must be finite, got {offset}")]
    InvalidDepthOffset { layer: usize, offset: f32 },
    #[error("layer {layer}: depth offset {offset} must be greater than the previous layer's {previous}")]
    LayersOutOfOrder {
        layer: usize,
        offset: f32,
        previous: f32,
    },
    #[error("damping factor must lie in (0, 1], got {0}")]
    InvalidDamping(f32),
    #[error("camera field of view must lie in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f32),
    #[error("camera clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },
    #[error("camera initial z must be finite and non-zero, got {0}")]
    InvalidCameraDistance(f32),
    #[error("rotation step must be finite and positive on every axis, got {0:?}")]
    InvalidRotationStep([f32; 3]),
    #[error("pointer sensitivity must be finite, got {0:?}")]
    InvalidPointerSensitivity([f32; 2]),
    #[error("scroll sensitivity must be finite, got {0}")]
    InvalidScrollSensitivity(f32),
    #[error("scroll axes must be finite, got {0:?}")]
    InvalidScrollAxes([f32; 3]),
    #[error("glow falloff must be positive, got {0}")]
    InvalidFalloff(f32),
    #[error("config is not valid JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("viewport must have a non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("engine has been disposed")]
    Disposed,
}
