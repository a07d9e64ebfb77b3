use bevy::prelude::*;
use noise::{NoiseFn, Perlin};

use crate::components::BackdropTile;
use crate::constants::*;
use crate::geometry::Viewport;

/// backdrop seams sit on whole world units; a camera parked between two
/// pixels would blur every one of them while the sway is running
#[inline]
fn pixel_align(v: f32) -> f32 {
    v.round()
}

/// world‑space rectangle the 2‑D camera sees
///
/// Assumes the default `ScalingMode::WindowSize`: one world unit per logical
/// pixel, times the projection scale.
pub fn camera_viewport(
    cam_tf: &Transform,
    projection: &OrthographicProjection,
    window: &Window,
) -> Viewport {
    let half = Vec2::new(window.width(), window.height()) * 0.5 * projection.scale;
    Viewport::new(cam_tf.translation.truncate(), half)
}

/* ===========================================================
   demo camera: keyboard pan + Perlin sway
   =========================================================== */
#[derive(Resource)]
pub struct CameraSway {
    noise: Perlin,
    t: f64,
    anchor: Vec2,
    pub enabled: bool,
}

impl CameraSway {
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            t: 0.0,
            anchor: Vec2::ZERO,
            enabled: true,
        }
    }

    fn offset(&self) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        self.noise.get([self.t * SWAY_FREQUENCY, 0.0]) as f32 * SWAY_AMPLITUDE
    }
}

/// WASD / arrows pan, N toggles the horizontal sway
pub fn camera_pan_system(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut sway: ResMut<CameraSway>,
    mut cam_q: Query<&mut Transform, (With<Camera2d>, Without<BackdropTile>)>,
) {
    let Ok(mut cam_tf) = cam_q.get_single_mut() else { return };
    let dt = time.delta_secs();

    let mut dir = Vec2::ZERO;
    if keys.pressed(KeyCode::KeyA) || keys.pressed(KeyCode::ArrowLeft) {
        dir.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) || keys.pressed(KeyCode::ArrowRight) {
        dir.x += 1.0;
    }
    if keys.pressed(KeyCode::KeyW) || keys.pressed(KeyCode::ArrowUp) {
        dir.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) || keys.pressed(KeyCode::ArrowDown) {
        dir.y -= 1.0;
    }
    if keys.just_pressed(KeyCode::KeyN) {
        sway.enabled = !sway.enabled;
    }

    sway.anchor += dir * PAN_SPEED * dt;
    sway.t += dt as f64;

    let target = sway.anchor + Vec2::new(sway.offset(), 0.0);
    cam_tf.translation.x = pixel_align(target.x);
    cam_tf.translation.y = pixel_align(target.y);
}
