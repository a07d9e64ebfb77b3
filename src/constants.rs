/// -------- backdrop recycling --------
/// fraction of a row's half height that a recycled row overlaps its neighbour
pub const SEAM_NUDGE: f32 = 0.01;

/// -------- config defaults --------
pub const DEFAULT_SPEED: f32 = 0.25;
pub const DEFAULT_DEPTH_SIZE: f32 = 512.0;
pub const DEFAULT_CONFIG_PATH: &str = "assets/backdrop.ron";

/// -------- demo window & camera --------
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;
pub const PAN_SPEED: f32 = 400.0;
pub const SPEED_STEP: f32 = 20.0;

/// camera sway
pub const SWAY_FREQUENCY: f64 = 0.15;
pub const SWAY_AMPLITUDE: f32 = 180.0;
