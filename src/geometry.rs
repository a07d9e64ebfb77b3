//! viewport & span helpers shared by rows and the scroller

use bevy::math::Vec2;

/* ===========================================================
   1‑D span
   =========================================================== */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    /// span of something `size` wide centred on `center`
    #[inline]
    pub fn centered(center: f32, size: f32) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn contains(&self, other: Span) -> bool {
        self.min <= other.min && other.max <= self.max
    }

    /// fully left of `edge` (touching does not count)
    #[inline]
    pub fn is_left_of(&self, edge: f32) -> bool {
        self.max < edge
    }

    /// fully right of `edge` (touching does not count)
    #[inline]
    pub fn is_right_of(&self, edge: f32) -> bool {
        self.min > edge
    }
}

/* ===========================================================
   camera viewport (world units)
   =========================================================== */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Viewport {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half_extents.x
    }
    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half_extents.x
    }
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y - self.half_extents.y
    }
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.half_extents.y
    }
    #[inline]
    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }
    #[inline]
    pub fn height(&self) -> f32 {
        self.half_extents.y * 2.0
    }

    pub fn horizontal(&self) -> Span {
        Span {
            min: self.left(),
            max: self.right(),
        }
    }

    pub fn vertical(&self) -> Span {
        Span {
            min: self.bottom(),
            max: self.top(),
        }
    }

    /// usable for layout: positive, finite half extents
    pub fn is_valid(&self) -> bool {
        self.center.is_finite()
            && self.half_extents.is_finite()
            && self.half_extents.x > 0.0
            && self.half_extents.y > 0.0
    }
}
