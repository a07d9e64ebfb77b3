//! one horizontal strip of a single depth image
//!
//! A row owns every tile it ever allocated. Active tiles sit in `strip`
//! (leftmost..rightmost, spaced exactly one width apart); idle ones wait in
//! `pool` until the strip needs to grow again. Nothing is ever destroyed.

use std::collections::VecDeque;

use bevy::log::warn;
use bevy::math::Vec2;

use crate::geometry::{Span, Viewport};
use crate::host::TileHost;

#[derive(Clone, Copy, Debug)]
pub struct Tile<H> {
    pub handle: H,
    pub x: f32,
    pub active: bool,
}

/// what a `rearrange` pass had to do
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rearranged {
    pub recycled: usize,
    pub created: usize,
}

#[derive(Debug)]
pub struct Row<H> {
    depth: usize,
    width: f32,
    extent: f32,
    y: f32,
    origin_x: f32,
    tiles: Vec<Tile<H>>,
    strip: VecDeque<usize>,
    pool: Vec<usize>,
    dirty: bool,
}

impl<H: Copy> Row<H> {
    pub fn new(depth: usize, image_size: Vec2, origin_x: f32, y: f32) -> Self {
        Self {
            depth,
            width: image_size.x,
            extent: image_size.y * 0.5,
            y,
            origin_x,
            tiles: Vec::new(),
            strip: VecDeque::new(),
            pool: Vec::new(),
            dirty: true,
        }
    }

    /* ---------- accessors ---------- */

    pub fn depth(&self) -> usize {
        self.depth
    }
    pub fn width(&self) -> f32 {
        self.width
    }
    /// half height of the row's image
    pub fn extent(&self) -> f32 {
        self.extent
    }
    pub fn y(&self) -> f32 {
        self.y
    }
    pub fn top(&self) -> f32 {
        self.y + self.extent
    }
    pub fn bottom(&self) -> f32 {
        self.y - self.extent
    }
    pub fn vertical(&self) -> Span {
        Span {
            min: self.bottom(),
            max: self.top(),
        }
    }

    /// combined span of the active strip, `None` before the first populate
    pub fn horizontal(&self) -> Option<Span> {
        let (&first, &last) = (self.strip.front()?, self.strip.back()?);
        Some(Span {
            min: self.tiles[first].x - self.width * 0.5,
            max: self.tiles[last].x + self.width * 0.5,
        })
    }

    /// active tiles, left to right
    pub fn active_tiles(&self) -> impl Iterator<Item = &Tile<H>> + '_ {
        self.strip.iter().map(move |&i| &self.tiles[i])
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
    pub fn active_count(&self) -> usize {
        self.strip.len()
    }
    pub fn pooled_count(&self) -> usize {
        self.pool.len()
    }

    pub(crate) fn set_y(&mut self, y: f32) {
        self.y = y;
        self.dirty = true;
    }

    pub(crate) fn translate_y(&mut self, dy: f32) {
        if dy != 0.0 {
            self.set_y(self.y + dy);
        }
    }

    /* ---------- strip helpers ---------- */

    #[inline]
    fn tile_span(&self, idx: usize) -> Span {
        Span::centered(self.tiles[idx].x, self.width)
    }

    fn left_edge(&self) -> f32 {
        self.strip
            .front()
            .map_or(f32::INFINITY, |&i| self.tile_span(i).min)
    }

    fn right_edge(&self) -> f32 {
        self.strip
            .back()
            .map_or(f32::NEG_INFINITY, |&i| self.tile_span(i).max)
    }

    fn leftmost_off_camera(&self, view: &Viewport) -> bool {
        self.strip
            .front()
            .is_some_and(|&i| self.tile_span(i).is_left_of(view.left()))
    }

    fn rightmost_off_camera(&self, view: &Viewport) -> bool {
        self.strip
            .back()
            .is_some_and(|&i| self.tile_span(i).is_right_of(view.right()))
    }

    /// strip width that lets the camera sit anywhere between two tile seams
    #[inline]
    fn covering_width(&self, view: &Viewport) -> f32 {
        view.width() + self.width
    }

    /// pooled tile if there is one, otherwise a fresh one from the host
    fn acquire(&mut self, x: f32, host: &mut impl TileHost<Handle = H>) -> (usize, bool) {
        let (idx, created) = match self.pool.pop() {
            Some(idx) => {
                host.set_active(self.tiles[idx].handle, true);
                (idx, false)
            }
            None => {
                let handle = host.create_tile(self.depth);
                self.tiles.push(Tile {
                    handle,
                    x,
                    active: true,
                });
                (self.tiles.len() - 1, true)
            }
        };
        let tile = &mut self.tiles[idx];
        tile.x = x;
        tile.active = true;
        self.dirty = true;
        (idx, created)
    }

    fn release(&mut self, idx: usize, host: &mut impl TileHost<Handle = H>) {
        self.tiles[idx].active = false;
        host.set_active(self.tiles[idx].handle, false);
        self.pool.push(idx);
    }

    /// centre of the slot just left of the strip
    fn left_slot(&self) -> f32 {
        self.strip
            .front()
            .map_or(self.origin_x, |&i| self.tiles[i].x - self.width)
    }

    /// centre of the slot just right of the strip
    fn right_slot(&self) -> f32 {
        self.strip
            .back()
            .map_or(self.origin_x, |&i| self.tiles[i].x + self.width)
    }

    /// `x ± width` stopped moving in f32 this far from the origin
    fn stalled(&self) -> bool {
        let (Some(&first), Some(&last)) = (self.strip.front(), self.strip.back()) else {
            return false;
        };
        let stuck =
            self.left_slot() >= self.tiles[first].x || self.right_slot() <= self.tiles[last].x;
        if stuck {
            warn!(
                "backdrop row {}: tiles {} wide no longer separate near x = {}",
                self.depth, self.width, self.tiles[last].x
            );
        }
        stuck
    }

    fn grow_left(&mut self, host: &mut impl TileHost<Handle = H>) -> bool {
        let (idx, created) = self.acquire(self.left_slot(), host);
        self.strip.push_front(idx);
        created
    }

    fn grow_right(&mut self, host: &mut impl TileHost<Handle = H>) -> bool {
        let (idx, created) = self.acquire(self.right_slot(), host);
        self.strip.push_back(idx);
        created
    }

    /* ---------- operations ---------- */

    /// Seed the strip and widen it symmetrically until it spans the camera
    /// plus one tile. Returns how many tiles had to be created.
    pub fn populate(&mut self, view: &Viewport, host: &mut impl TileHost<Handle = H>) -> usize {
        let mut created = 0;
        if self.strip.is_empty() {
            created += self.grow_right(host) as usize;
        }

        let target = self.covering_width(view);
        while (self.strip.len() as f32) * self.width < target {
            created += self.grow_left(host) as usize;
            created += self.grow_right(host) as usize;
        }
        created
    }

    /// Shift tiles across so the strip covers `[view.left, view.right]`.
    ///
    /// An uncovered edge is filled by moving the opposite end tile over when
    /// it is fully off‑camera, and by growing the strip otherwise. Both edges
    /// loop until covered, so any camera jump is absorbed in one call.
    pub fn rearrange(
        &mut self,
        view: &Viewport,
        host: &mut impl TileHost<Handle = H>,
    ) -> Rearranged {
        let mut out = Rearranged::default();
        if self.strip.is_empty() {
            out.created += self.populate(view, host);
        }

        /* right edge uncovered → left end goes right ---------------------- */
        while self.right_edge() < view.right() {
            if self.stalled() {
                return out;
            }
            if self.leftmost_off_camera(view) {
                let x = self.right_slot();
                if let Some(idx) = self.strip.pop_front() {
                    self.tiles[idx].x = x;
                    self.strip.push_back(idx);
                    out.recycled += 1;
                }
            } else {
                out.created += self.grow_right(host) as usize;
            }
            self.dirty = true;
        }

        /* left edge uncovered → right end goes left ----------------------- */
        while self.left_edge() > view.left() {
            if self.stalled() {
                return out;
            }
            if self.rightmost_off_camera(view) {
                let x = self.left_slot();
                if let Some(idx) = self.strip.pop_back() {
                    self.tiles[idx].x = x;
                    self.strip.push_front(idx);
                    out.recycled += 1;
                }
            } else {
                out.created += self.grow_left(host) as usize;
            }
            self.dirty = true;
        }

        out
    }

    /// After the camera shrinks: park off‑camera edge tiles the strip no
    /// longer needs. Returns how many went to the pool.
    pub fn reclaim(&mut self, view: &Viewport, host: &mut impl TileHost<Handle = H>) -> usize {
        let target = self.covering_width(view);
        let mut released = 0;

        while self.strip.len() > 1 && (self.strip.len() - 1) as f32 * self.width >= target {
            let idle = if self.leftmost_off_camera(view) {
                self.strip.pop_front()
            } else if self.rightmost_off_camera(view) {
                self.strip.pop_back()
            } else {
                None
            };
            let Some(idx) = idle else { break };
            self.release(idx, host);
            released += 1;
        }
        released
    }

    /// push positions of active tiles to the host, only if something moved
    pub fn sync(&mut self, host: &mut impl TileHost<Handle = H>) {
        if !self.dirty {
            return;
        }
        for &idx in &self.strip {
            let tile = &self.tiles[idx];
            host.set_position(tile.handle, Vec2::new(tile.x, self.y));
        }
        self.dirty = false;
    }
}
