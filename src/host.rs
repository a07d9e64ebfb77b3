//! boundary between the layout engine and whatever draws the tiles

use bevy::math::Vec2;

/// Drawable allocator/mutator the scroller talks to.
///
/// Handles are opaque to the engine; it only ever moves them and toggles
/// whether they are shown. Freshly created tiles are expected to be visible.
pub trait TileHost {
    type Handle: Copy;

    /// allocate a drawable bound to the image of `depth`
    fn create_tile(&mut self, depth: usize) -> Self::Handle;

    fn set_position(&mut self, handle: Self::Handle, position: Vec2);

    fn set_active(&mut self, handle: Self::Handle, active: bool);
}

/* ===========================================================
   in‑memory host for unit tests
   =========================================================== */
