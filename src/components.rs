use bevy::prelude::*;

use crate::scroller::Scroller;

/* ===========================================================
   backdrop tiles
   =========================================================== */
/// tag on every sprite spawned for the backdrop
#[derive(Component)]
pub struct BackdropTile {
    pub depth: usize,
}

/* ===========================================================
   backdrop resources
   =========================================================== */
/// the running engine; inserted once the camera has a usable viewport
#[derive(Resource, Deref, DerefMut)]
pub struct ActiveBackdrop(pub Scroller<Entity>);

#[derive(Resource, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BackdropStatus {
    #[default]
    Pending,
    Running,
    /// construction failed; nothing is retried
    Disabled,
}

/// how one depth is drawn
#[derive(Clone, Debug)]
pub struct DepthLook {
    pub image: Option<Handle<Image>>,
    pub color: Color,
    pub size: Vec2,
}

/// per‑depth looks, resolved once at startup
#[derive(Resource, Default)]
pub struct DepthLooks {
    pub looks: Vec<DepthLook>,
    pub z: f32,
}

impl DepthLooks {
    pub fn sprite(&self, depth: usize) -> Sprite {
        let Some(look) = self.looks.get(depth) else {
            return Sprite::default();
        };
        Sprite {
            image: look.image.clone().unwrap_or_default(),
            color: look.color,
            custom_size: Some(look.size),
            ..default()
        }
    }
}
