//! demo: a panning camera over an endlessly scrolling backdrop
//!
//! WASD / arrows pan, N toggles the camera sway, +/‑ change the scroll speed,
//! F11 toggles borderless fullscreen. Works with **Bevy 0.15**.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin,
};
use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};
use rand::Rng;

use vertical_backdrop::camera::{camera_pan_system, CameraSway};
use vertical_backdrop::constants::*;
use vertical_backdrop::{ActiveBackdrop, BackdropPlugin};

/* ---- camera ---------------------------------------------------------- */
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.insert_resource(CameraSway::new(rand::thread_rng().gen()));
}

/* ---- F11: try the backdrop at the monitor's full height --------------- */
fn fullscreen_key_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut window_q: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keys.just_pressed(KeyCode::F11) {
        return;
    }
    let Ok(mut window) = window_q.get_single_mut() else { return };
    let fullscreen = matches!(window.mode, WindowMode::Windowed);
    window.mode = if fullscreen {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };
    info!("fullscreen: {fullscreen}");
}

/* ---- +/‑ scroll speed -------------------------------------------------- */
fn speed_keys_system(
    keys: Res<ButtonInput<KeyCode>>,
    backdrop: Option<ResMut<ActiveBackdrop>>,
) {
    let Some(mut backdrop) = backdrop else { return };
    let step = match (
        keys.just_pressed(KeyCode::Equal),
        keys.just_pressed(KeyCode::Minus),
    ) {
        (true, false) => SPEED_STEP,
        (false, true) => -SPEED_STEP,
        _ => return,
    };
    let speed = backdrop.speed() + step;
    backdrop.set_speed(speed);
    info!("backdrop speed → {speed}");
}

fn main() {
    App::new()
        /* diagnostics ----------------------------------------------------- */
        .add_plugins((
            LogDiagnosticsPlugin::default(),
            FrameTimeDiagnosticsPlugin::default(),
            EntityCountDiagnosticsPlugin::default(),
        ))

        /* bevy core ------------------------------------------------------- */
        .insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.1)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "vertical backdrop".into(),
                resolution: (WINDOW_WIDTH, WINDOW_HEIGHT).into(),
                mode: WindowMode::Windowed,
                ..default()
            }),
            ..default()
        }))

        /* backdrop -------------------------------------------------------- */
        .add_plugins(BackdropPlugin::default())

        /* startup systems ------------------------------------------------- */
        .add_systems(Startup, setup_camera)

        /* frame‑update systems ------------------------------------------- */
        .add_systems(
            Update,
            (
                camera_pan_system,  // WASD + sway
                speed_keys_system,  // +/‑
                fullscreen_key_system, // F11
            ),
        )
        .run();
}
