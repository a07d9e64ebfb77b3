use bevy::math::Vec2;

#[derive(Debug, thiserror::Error)]
pub enum BackdropError {
    #[error("Depth progression is empty; at least one background image is required")]
    EmptyProgression,

    #[error("Depth {index} has an invalid image size {width}x{height}")]
    InvalidImageSize { index: usize, width: f32, height: f32 },

    #[error("Scroll speed must be finite, got {0}")]
    InvalidSpeed(f32),

    #[error("Viewport half extents must be positive and finite, got {0}")]
    DegenerateViewport(Vec2),

    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}
