//! Bevy glue: the plugin, the sprite host and the per‑frame scroll system
//!
//! The engine itself (`Scroller`) knows nothing about entities; this module
//! hands it a `TileHost` that spawns, moves and hides `Sprite`s.

use std::path::PathBuf;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::transform::TransformSystem;
use bevy::window::PrimaryWindow;

use crate::camera::camera_viewport;
use crate::components::*;
use crate::config::BackdropConfig;
use crate::constants::DEFAULT_CONFIG_PATH;
use crate::host::TileHost;
use crate::scroller::Scroller;

/* ===========================================================
   plugin
   =========================================================== */
pub enum BackdropSource {
    File(PathBuf),
    Inline(BackdropConfig),
}

pub struct BackdropPlugin {
    pub source: BackdropSource,
}

impl Default for BackdropPlugin {
    fn default() -> Self {
        Self {
            source: BackdropSource::File(DEFAULT_CONFIG_PATH.into()),
        }
    }
}

impl BackdropPlugin {
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            source: BackdropSource::File(path.into()),
        }
    }

    pub fn from_config(config: BackdropConfig) -> Self {
        Self {
            source: BackdropSource::Inline(config),
        }
    }
}

impl Plugin for BackdropPlugin {
    fn build(&self, app: &mut App) {
        let config = match &self.source {
            BackdropSource::Inline(cfg) => cfg.clone(),
            BackdropSource::File(path) => {
                let (cfg, problem) = BackdropConfig::load_or_default(path);
                if let Some(problem) = problem {
                    warn!("{problem}; using default backdrop config");
                }
                cfg
            }
        };

        app.insert_resource(config)
            .init_resource::<DepthLooks>()
            .init_resource::<BackdropStatus>()
            .add_systems(Startup, load_depth_looks_system)
            .add_systems(
                PostUpdate,
                scroll_backdrop_system.before(TransformSystem::TransformPropagate),
            );
    }
}

/* ===========================================================
   sprite host
   =========================================================== */
#[derive(SystemParam)]
pub struct TileSprites<'w, 's> {
    commands: Commands<'w, 's>,
    tiles: Query<'w, 's, (&'static mut Transform, &'static mut Visibility), With<BackdropTile>>,
    looks: Res<'w, DepthLooks>,
}

impl TileHost for TileSprites<'_, '_> {
    type Handle = Entity;

    fn create_tile(&mut self, depth: usize) -> Entity {
        self.commands
            .spawn((
                self.looks.sprite(depth),
                Transform::from_xyz(0.0, 0.0, self.looks.z),
                Visibility::Visible,
                BackdropTile { depth },
            ))
            .id()
    }

    fn set_position(&mut self, handle: Entity, position: Vec2) {
        let translation = position.extend(self.looks.z);
        match self.tiles.get_mut(handle) {
            Ok((mut tf, _)) => tf.translation = translation,
            // spawned this frame, not queryable until the commands flush
            Err(_) => {
                self.commands
                    .entity(handle)
                    .insert(Transform::from_translation(translation));
            }
        }
    }

    fn set_active(&mut self, handle: Entity, active: bool) {
        let visibility = if active {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        match self.tiles.get_mut(handle) {
            Ok((_, mut vis)) => *vis = visibility,
            Err(_) => {
                self.commands.entity(handle).insert(visibility);
            }
        }
    }
}

/* ===========================================================
   startup – resolve images & colours per depth
   =========================================================== */
pub fn load_depth_looks_system(
    asset_server: Res<AssetServer>,
    config: Res<BackdropConfig>,
    mut looks: ResMut<DepthLooks>,
) {
    looks.z = config.order_in_layer as f32;
    looks.looks = config
        .depths
        .iter()
        .map(|depth| {
            let (r, g, b) = depth.color;
            DepthLook {
                image: depth.image.as_ref().map(|path| asset_server.load(path.clone())),
                color: Color::srgb(r, g, b),
                size: depth.size(),
            }
        })
        .collect();
}

/* ===========================================================
   scroll_backdrop_system – build once, then advance every frame
   =========================================================== */
pub fn scroll_backdrop_system(
    time: Res<Time>,
    config: Res<BackdropConfig>,
    mut status: ResMut<BackdropStatus>,
    backdrop: Option<ResMut<ActiveBackdrop>>,
    cam_q: Query<(&Transform, &OrthographicProjection), (With<Camera2d>, Without<BackdropTile>)>,
    window_q: Query<&Window, With<PrimaryWindow>>,
    mut sprites: TileSprites,
) {
    let Ok((cam_tf, projection)) = cam_q.get_single() else { return };
    let Ok(window) = window_q.get_single() else { return };

    // minimised windows report a zero size
    let viewport = camera_viewport(cam_tf, projection, window);
    if !viewport.is_valid() {
        return;
    }

    if let Some(mut backdrop) = backdrop {
        backdrop.advance(time.delta_secs(), viewport, &mut sprites);
        return;
    }
    if *status != BackdropStatus::Pending {
        return;
    }

    match Scroller::new(&config, viewport, &mut sprites) {
        Ok(scroller) => {
            sprites.commands.insert_resource(ActiveBackdrop(scroller));
            *status = BackdropStatus::Running;
        }
        Err(e) => {
            error!("backdrop disabled: {e}");
            *status = BackdropStatus::Disabled;
        }
    }
}
