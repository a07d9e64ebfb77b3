//! RON configuration for the backdrop
//!
//! ```ron
//! (
//!     speed: 60.0,
//!     order_in_layer: -10,
//!     check_horizontal: true,
//!     check_vertical: true,
//!     depths: [
//!         (image: Some("backdrop/clouds.png"), width: 1024.0, height: 512.0),
//!         (width: 1024.0, height: 384.0, color: (0.2, 0.3, 0.6)),
//!     ],
//! )
//! ```

use std::{fs, path::Path};

use bevy::math::Vec2;
use bevy::prelude::Resource;
use serde::Deserialize;

use crate::constants::{DEFAULT_DEPTH_SIZE, DEFAULT_SPEED};
use crate::errors::BackdropError;

/// one entry of the depth progression (outer → inner)
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DepthConfig {
    /// asset path; a flat `color` rectangle is drawn when absent
    pub image: Option<String>,
    pub width: f32,
    pub height: f32,
    pub color: (f32, f32, f32),
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            image: None,
            width: DEFAULT_DEPTH_SIZE,
            height: DEFAULT_DEPTH_SIZE,
            color: (1.0, 1.0, 1.0),
        }
    }
}

impl DepthConfig {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct BackdropConfig {
    /// positive values move the layers down
    pub speed: f32,
    /// render‑order hint, used as the sprites' z
    pub order_in_layer: i32,
    /// leave off only if the camera never moves along x
    pub check_horizontal: bool,
    /// leave off only if the camera never moves along y
    pub check_vertical: bool,
    pub depths: Vec<DepthConfig>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            order_in_layer: 0,
            check_horizontal: true,
            check_vertical: true,
            depths: Vec::new(),
        }
    }
}

impl BackdropConfig {
    pub fn from_ron(text: &str, origin: &str) -> Result<Self, BackdropError> {
        ron::from_str(text).map_err(|source| BackdropError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, BackdropError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| BackdropError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron(&data, &path.display().to_string())
    }

    /// defaults plus the reason they were used, if loading failed
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e.to_string())),
        }
    }

    /// everything the scroller refuses to start with
    pub fn validate(&self) -> Result<(), BackdropError> {
        if !self.speed.is_finite() {
            return Err(BackdropError::InvalidSpeed(self.speed));
        }
        if self.depths.is_empty() {
            return Err(BackdropError::EmptyProgression);
        }
        for (index, depth) in self.depths.iter().enumerate() {
            let ok = |v: f32| v.is_finite() && v > 0.0;
            if !ok(depth.width) || !ok(depth.height) {
                return Err(BackdropError::InvalidImageSize {
                    index,
                    width: depth.width,
                    height: depth.height,
                });
            }
        }
        Ok(())
    }
}
