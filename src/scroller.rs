//! vertical ring of rows – the backdrop engine proper
//!
//! Rows form a ring: `previous(i)` always sits directly above row `i`, the
//! head is the bottom‑most row and `next(head)` is the top‑most one.
//! Recycling only ever moves one row to the far end of the stack and hands
//! the head marker to a ring neighbour. A taller camera splices whole
//! progression cycles in between the head and the top row.

use bevy::log::{debug, info};
use bevy::math::Vec2;

use crate::config::BackdropConfig;
use crate::constants::SEAM_NUDGE;
use crate::errors::BackdropError;
use crate::geometry::Viewport;
use crate::host::TileHost;
use crate::row::Row;

/// what one `advance` call did
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub rows_recycled: usize,
    pub tiles_recycled: usize,
    pub tiles_created: usize,
    pub rows_added: usize,
    pub resized: bool,
}

#[derive(Debug)]
pub struct Scroller<H> {
    speed: f32,
    order_in_layer: i32,
    check_horizontal: bool,
    check_vertical: bool,
    depth_sizes: Vec<Vec2>,
    rows: Vec<Row<H>>,
    head: usize,
    last_half_extents: Vec2,
}

impl<H: Copy> Scroller<H> {
    /// Build the ring for `viewport` and lay it out bottom‑up from the
    /// camera's bottom edge.
    pub fn new(
        config: &BackdropConfig,
        viewport: Viewport,
        host: &mut impl TileHost<Handle = H>,
    ) -> Result<Self, BackdropError> {
        config.validate()?;
        if !viewport.is_valid() {
            return Err(BackdropError::DegenerateViewport(viewport.half_extents));
        }

        let depth_sizes: Vec<Vec2> = config.depths.iter().map(|d| d.size()).collect();
        let cycles = ring_cycles(&depth_sizes, &viewport);

        let count = cycles * depth_sizes.len();
        let mut rows: Vec<Row<H>> = (0..count)
            .map(|i| {
                let depth = i % depth_sizes.len();
                Row::new(depth, depth_sizes[depth], viewport.center.x, 0.0)
            })
            .collect();

        /* ---- head on the camera's bottom edge, the rest stacked upward ---- */
        let mut below = 0;
        let y = viewport.bottom() + rows[0].extent();
        rows[0].set_y(y);
        for step in 1..count {
            let i = count - step;
            let y = rows[below].top() + rows[i].extent();
            rows[i].set_y(y);
            below = i;
        }

        let mut scroller = Self {
            speed: config.speed,
            order_in_layer: config.order_in_layer,
            check_horizontal: config.check_horizontal,
            check_vertical: config.check_vertical,
            depth_sizes,
            rows,
            head: 0,
            last_half_extents: viewport.half_extents,
        };

        for row in &mut scroller.rows {
            row.populate(&viewport, host);
            row.rearrange(&viewport, host);
            row.sync(host);
        }

        info!(
            "backdrop: {} rows ({} depths × {} cycles), {} tiles",
            count,
            config.depths.len(),
            cycles,
            scroller.tile_count()
        );
        Ok(scroller)
    }

    /* ---------- ring ---------- */

    #[inline]
    pub fn previous(&self, i: usize) -> usize {
        (i + self.rows.len() - 1) % self.rows.len()
    }

    #[inline]
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.rows.len()
    }

    pub fn head(&self) -> usize {
        self.head
    }

    pub fn is_head(&self, i: usize) -> bool {
        i == self.head
    }

    pub fn rows(&self) -> &[Row<H>] {
        &self.rows
    }

    /* ---------- settings ---------- */

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// non‑finite values are ignored
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.speed = speed;
        }
    }

    pub fn order_in_layer(&self) -> i32 {
        self.order_in_layer
    }

    /// every tile ever allocated, active or pooled
    pub fn tile_count(&self) -> usize {
        self.rows.iter().map(Row::tile_count).sum()
    }

    /* ---------- per tick ---------- */

    /// Move every row by `speed × elapsed`, recycle rows that left the
    /// camera vertically, then re‑tile horizontally where needed.
    pub fn advance(
        &mut self,
        elapsed: f32,
        viewport: Viewport,
        host: &mut impl TileHost<Handle = H>,
    ) -> TickReport {
        let mut report = TickReport::default();
        if !viewport.is_valid() {
            return report;
        }

        /* ---- scroll ---- */
        let dy = -self.speed * elapsed;
        for row in &mut self.rows {
            row.translate_y(dy);
        }

        /* ---- vertical ring ---- */
        if self.speed > 0.0 || self.check_vertical {
            while self.rows[self.head].top() < viewport.bottom() {
                self.head_to_tail();
                report.rows_recycled += 1;
            }
        }
        if self.speed < 0.0 || self.check_vertical {
            while viewport.bottom() < self.rows[self.head].bottom() {
                self.tail_to_head();
                report.rows_recycled += 1;
            }
        }

        /* ---- camera resized ---- */
        report.resized = viewport.half_extents != self.last_half_extents;
        if report.resized {
            self.last_half_extents = viewport.half_extents;
            report.rows_added = self.grow_ring(&viewport);
            for row in &mut self.rows {
                row.reclaim(&viewport, host);
                report.tiles_created += row.populate(&viewport, host);
            }
        }

        /* ---- horizontal ---- */
        if self.check_horizontal || report.resized {
            for row in &mut self.rows {
                let done = row.rearrange(&viewport, host);
                report.tiles_recycled += done.recycled;
                report.tiles_created += done.created;
            }
        }

        for row in &mut self.rows {
            row.sync(host);
        }

        if report.rows_added > 0 {
            info!(
                "backdrop: camera grew, ring now {} rows (+{})",
                self.rows.len(),
                report.rows_added
            );
        }
        if report.rows_recycled > 0 || report.tiles_created > 0 || report.resized {
            debug!("backdrop tick: {report:?}, head = {}", self.head);
        }
        report
    }

    /// Splice whole progression cycles above the top row until the ring is
    /// tall enough for `viewport` again. New rows carry no tiles yet.
    fn grow_ring(&mut self, viewport: &Viewport) -> usize {
        let depths = self.depth_sizes.len();
        let have = self.rows.len() / depths;
        let want = ring_cycles(&self.depth_sizes, viewport);
        if want <= have {
            return 0;
        }

        let added = (want - have) * depths;
        let top = self.next(self.head);
        let top_depth = self.rows[top].depth();

        // built bottom‑up; each row continues the progression of the one below
        let mut fresh: Vec<Row<H>> = Vec::with_capacity(added);
        let mut below_top = self.rows[top].top();
        for k in 0..added {
            let depth = (top_depth + depths - 1 - k % depths) % depths;
            let size = self.depth_sizes[depth];
            let extent = size.y * 0.5;
            let y = below_top + extent - extent * SEAM_NUDGE;
            below_top = y + extent;
            fresh.push(Row::new(depth, size, viewport.center.x, y));
        }

        // ring order runs downward, so the highest new row follows the head
        fresh.reverse();
        let upper = self.rows.split_off(self.head + 1);
        self.rows.extend(fresh);
        self.rows.extend(upper);
        added
    }

    /// bottom row fell below the camera → put it on top of the stack
    fn head_to_tail(&mut self) {
        let row = self.head;
        let top = self.next(row);

        let extent = self.rows[row].extent();
        let y = self.rows[top].y() + self.rows[top].extent() + extent - extent * SEAM_NUDGE;
        self.rows[row].set_y(y);
        self.head = self.previous(row);
    }

    /// camera dropped below the bottom row → bring the top row underneath
    fn tail_to_head(&mut self) {
        let head = self.head;
        let row = self.next(head);

        let extent = self.rows[row].extent();
        let y = self.rows[head].y() - self.rows[head].extent() - extent + extent * SEAM_NUDGE;
        self.rows[row].set_y(y);
        self.head = row;
    }
}

/// progression cycles needed to cover the camera plus the tallest row
fn ring_cycles(depth_sizes: &[Vec2], viewport: &Viewport) -> usize {
    let cycle_height: f32 = depth_sizes.iter().map(|s| s.y).sum();
    let tallest = depth_sizes.iter().map(|s| s.y).fold(0.0_f32, f32::max);
    // every recycled row may overlap its neighbour by `extent * SEAM_NUDGE`
    let usable = cycle_height * (1.0 - SEAM_NUDGE * 0.5);
    let needed = viewport.height() + tallest;
    (needed / usable).ceil().max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DepthConfig;
    use crate::geometry::Span;
    use crate::host::testing::MemoryHost;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const EPS: f32 = 1e-2;

    fn config(sizes: &[(f32, f32)], speed: f32) -> BackdropConfig {
        BackdropConfig {
            speed,
            depths: sizes
                .iter()
                .map(|&(width, height)| DepthConfig {
                    width,
                    height,
                    ..DepthConfig::default()
                })
                .collect(),
            ..BackdropConfig::default()
        }
    }

    fn viewport(cx: f32, cy: f32, hw: f32, hh: f32) -> Viewport {
        Viewport::new(Vec2::new(cx, cy), Vec2::new(hw, hh))
    }

    fn assert_horizontal_coverage(s: &Scroller<usize>, v: &Viewport) {
        for (i, row) in s.rows().iter().enumerate() {
            let xs: Vec<f32> = row.active_tiles().map(|t| t.x).collect();
            for pair in xs.windows(2) {
                assert!(
                    (pair[1] - pair[0] - row.width()).abs() < EPS,
                    "row {i}: seam between {} and {}",
                    pair[0],
                    pair[1]
                );
            }
            let span = row.horizontal().expect("row populated");
            assert!(span.contains(v.horizontal()), "row {i}: {span:?} vs {v:?}");
        }
    }

    fn assert_vertical_coverage(s: &Scroller<usize>, v: &Viewport) {
        let mut spans: Vec<Span> = s.rows().iter().map(Row::vertical).collect();
        spans.sort_by(|a, b| a.min.total_cmp(&b.min));

        let mut covered_to = f32::NEG_INFINITY;
        for span in spans {
            if span.min > v.top() {
                break;
            }
            if covered_to >= v.bottom() {
                assert!(span.min <= covered_to + EPS, "gap at {covered_to}");
            }
            if span.max >= v.bottom() && covered_to < v.bottom() {
                assert!(span.min <= v.bottom(), "bottom uncovered: {span:?}");
            }
            covered_to = covered_to.max(span.max);
        }
        assert!(covered_to >= v.top(), "top uncovered at {covered_to}");
    }

    /// previous(i) sits on top of i (flush or nudged) and carries the
    /// depth before i's in the progression
    fn assert_ring_order(s: &Scroller<usize>, depths: usize) {
        let top = s.next(s.head());
        for (i, row) in s.rows().iter().enumerate() {
            let above = &s.rows()[s.previous(i)];
            assert_eq!(above.depth(), (row.depth() + depths - 1) % depths, "row {i}");
            if i == top {
                continue;
            }
            let overlap = row.top() - above.bottom();
            let nudge = row.extent().max(above.extent()) * SEAM_NUDGE;
            assert!(
                overlap > -EPS && overlap < nudge + EPS,
                "row {i}: overlap {overlap} with the row above"
            );
        }
    }

    #[test]
    fn empty_progression_fails_fast() {
        let mut host = MemoryHost::default();
        let err = Scroller::new(&config(&[], 1.0), viewport(0.0, 0.0, 10.0, 5.0), &mut host)
            .unwrap_err();
        assert!(matches!(err, BackdropError::EmptyProgression));
        assert!(host.sprites.is_empty());
    }

    #[test]
    fn degenerate_viewport_fails_fast() {
        let mut host = MemoryHost::default();
        let err = Scroller::new(
            &config(&[(10.0, 10.0)], 1.0),
            viewport(0.0, 0.0, 0.0, 5.0),
            &mut host,
        )
        .unwrap_err();
        assert!(matches!(err, BackdropError::DegenerateViewport(_)));
    }

    #[test]
    fn ring_covers_camera_plus_one_row() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let s = Scroller::new(&config(&[(100.0, 10.0)], 1.0), v, &mut host).unwrap();

        assert_eq!(s.rows().len(), 3);
        assert_eq!(s.head(), 0);
        assert_eq!(s.rows()[0].bottom(), v.bottom());
        // previous(i) sits directly above i
        assert_eq!(s.rows()[2].bottom(), s.rows()[0].top());
        assert_eq!(s.rows()[1].bottom(), s.rows()[2].top());
        assert_vertical_coverage(&s, &v);
        assert_horizontal_coverage(&s, &v);
        assert_eq!(host.active_count(), s.tile_count());
    }

    #[test]
    fn progression_is_cycled_whole() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 50.0, 40.0);
        let s = Scroller::new(&config(&[(20.0, 10.0), (20.0, 30.0)], 0.0), v, &mut host).unwrap();

        assert_eq!(s.rows().len() % 2, 0);
        for (i, row) in s.rows().iter().enumerate() {
            assert_eq!(row.depth(), i % 2);
            for tile in row.active_tiles() {
                assert_eq!(host.sprites[tile.handle].depth, row.depth());
            }
        }
        assert_vertical_coverage(&s, &v);
    }

    #[test]
    fn steady_scroll_moves_head_once_per_row_height() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let mut s = Scroller::new(&config(&[(100.0, 10.0)], 1.0), v, &mut host).unwrap();

        for _ in 0..10 {
            let report = s.advance(1.0, v, &mut host);
            assert_eq!(report.rows_recycled, 0);
            assert_eq!(s.head(), 0);
        }

        let report = s.advance(1.0, v, &mut host);
        assert_eq!(report.rows_recycled, 1);
        assert_eq!(s.head(), s.previous(0));
        assert_vertical_coverage(&s, &v);

        for _ in 11..20 {
            assert_eq!(s.advance(1.0, v, &mut host).rows_recycled, 0);
        }
        assert_eq!(s.head(), s.previous(0));
    }

    #[test]
    fn recycled_row_overlaps_its_neighbour_by_the_seam_nudge() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let mut s = Scroller::new(&config(&[(100.0, 10.0)], 1.0), v, &mut host).unwrap();

        s.advance(11.0, v, &mut host);
        let moved = &s.rows()[0];
        let below = &s.rows()[s.next(0)];
        assert!((below.top() - moved.bottom() - 5.0 * SEAM_NUDGE).abs() < EPS);
    }

    #[test]
    fn negative_speed_brings_tail_under_head() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let mut s = Scroller::new(&config(&[(100.0, 10.0)], -1.0), v, &mut host).unwrap();
        let top = s.next(0);

        let report = s.advance(0.5, v, &mut host);
        assert_eq!(report.rows_recycled, 1);
        assert_eq!(s.head(), top);
        assert!(s.rows()[top].bottom() <= v.bottom());
        assert_vertical_coverage(&s, &v);
    }

    #[test]
    fn huge_jump_is_absorbed_in_one_tick() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let mut s = Scroller::new(&config(&[(30.0, 10.0), (30.0, 7.0)], 1.0), v, &mut host).unwrap();
        let tiles = s.tile_count();

        let report = s.advance(1234.5, v, &mut host);
        assert!(report.rows_recycled > s.rows().len());
        assert_vertical_coverage(&s, &v);
        assert_eq!(s.tile_count(), tiles);
    }

    #[test]
    fn without_vertical_checks_only_the_scroll_direction_recycles() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let cfg = BackdropConfig {
            check_vertical: false,
            ..config(&[(100.0, 10.0)], 1.0)
        };
        let mut s = Scroller::new(&cfg, v, &mut host).unwrap();

        // camera sinks below the head, but speed > 0 never checks that way
        let lowered = viewport(0.0, -3.0, 10.0, 5.625);
        assert_eq!(s.advance(0.0, lowered, &mut host).rows_recycled, 0);
        assert_eq!(s.head(), 0);
    }

    #[test]
    fn aspect_widen_is_covered_on_the_same_tick() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let mut s = Scroller::new(&config(&[(10.0, 10.0)], 1.0), v, &mut host).unwrap();
        s.advance(1.0, v, &mut host);

        let wide = viewport(0.0, 0.0, 20.0, 5.625);
        let report = s.advance(1.0, wide, &mut host);
        assert!(report.resized);
        assert!(report.tiles_created > 0);
        assert_horizontal_coverage(&s, &wide);
        assert_vertical_coverage(&s, &wide);

        let again = s.advance(1.0, wide, &mut host);
        assert!(!again.resized);
        assert_eq!(again.tiles_created, 0);
    }

    #[test]
    fn taller_camera_adds_rows_on_the_same_tick() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let mut s = Scroller::new(&config(&[(100.0, 10.0)], 1.0), v, &mut host).unwrap();
        assert_eq!(s.rows().len(), 3);

        let tall = viewport(0.0, 0.0, 20.0, 20.0);
        let report = s.advance(0.1, tall, &mut host);
        assert!(report.resized);
        assert_eq!(report.rows_added, 3);
        assert_eq!(s.rows().len(), 6);
        assert_vertical_coverage(&s, &tall);
        assert_horizontal_coverage(&s, &tall);
        assert_ring_order(&s, 1);
        assert_eq!(host.sprites.len(), s.tile_count());

        // shrinking back keeps the ring as it is
        let report = s.advance(0.1, v, &mut host);
        assert_eq!(report.rows_added, 0);
        assert_eq!(s.rows().len(), 6);
        assert_vertical_coverage(&s, &v);
    }

    #[test]
    fn grown_ring_keeps_the_progression_in_order() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 50.0, 20.0);
        let mut s = Scroller::new(&config(&[(20.0, 10.0), (20.0, 30.0)], 7.0), v, &mut host).unwrap();

        // move the head off row 0 before growing
        for _ in 0..9 {
            s.advance(1.0, v, &mut host);
        }
        assert_ne!(s.head(), 0);

        let tall = viewport(0.0, 0.0, 50.0, 90.0);
        let report = s.advance(1.0, tall, &mut host);
        assert!(report.rows_added > 0);
        assert_eq!(s.rows().len() % 2, 0);
        assert_ring_order(&s, 2);
        assert_vertical_coverage(&s, &tall);
        for row in s.rows() {
            for tile in row.active_tiles() {
                assert_eq!(host.sprites[tile.handle].depth, row.depth());
            }
        }
    }

    #[test]
    fn shrink_parks_tiles_and_restore_drains_the_pool() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.0);
        let mut s = Scroller::new(&config(&[(10.0, 10.0)], 0.0), v, &mut host).unwrap();
        let pooled = |s: &Scroller<usize>| s.rows().iter().map(Row::pooled_count).sum::<usize>();

        let shrunk = viewport(0.0, 0.0, 4.0, 2.5);
        let report = s.advance(0.0, shrunk, &mut host);
        assert!(report.resized);
        assert_eq!(report.tiles_created, 0);
        assert_eq!(pooled(&s), s.rows().len());
        assert_horizontal_coverage(&s, &shrunk);

        s.advance(0.0, v, &mut host);
        assert_eq!(pooled(&s), 0);
        assert_horizontal_coverage(&s, &v);

        let tiles = s.tile_count();
        for step in 1..=8 {
            let moved = viewport(step as f32 * -3.0, 0.0, 10.0, 5.0);
            assert_eq!(s.advance(0.0, moved, &mut host).tiles_created, 0);
        }
        assert_eq!(s.tile_count(), tiles);
    }

    #[test]
    fn zero_speed_drift_recycles_three_tiles_per_row() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let mut s = Scroller::new(&config(&[(10.0, 10.0)], 0.0), v, &mut host).unwrap();
        let tiles = s.tile_count();

        let mut recycled = 0;
        for step in 1..=6 {
            let moved = viewport(step as f32 * 5.0, 0.0, 10.0, 5.625);
            let report = s.advance(1.0, moved, &mut host);
            assert_eq!(report.rows_recycled, 0);
            recycled += report.tiles_recycled;
            assert_horizontal_coverage(&s, &moved);
        }
        assert_eq!(recycled, 3 * s.rows().len());
        assert_eq!(s.tile_count(), tiles);
    }

    #[test]
    fn horizontal_checks_off_leaves_tiles_alone() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.625);
        let cfg = BackdropConfig {
            check_horizontal: false,
            ..config(&[(10.0, 10.0)], 0.0)
        };
        let mut s = Scroller::new(&cfg, v, &mut host).unwrap();

        let report = s.advance(1.0, viewport(100.0, 0.0, 10.0, 5.625), &mut host);
        assert_eq!(report.tiles_recycled, 0);
        assert_eq!(report.tiles_created, 0);
    }

    #[test]
    fn set_speed_ignores_non_finite_values() {
        let mut host = MemoryHost::default();
        let v = viewport(0.0, 0.0, 10.0, 5.0);
        let mut s = Scroller::new(&config(&[(10.0, 10.0)], 1.0), v, &mut host).unwrap();

        s.set_speed(-3.0);
        assert_eq!(s.speed(), -3.0);
        s.set_speed(f32::INFINITY);
        assert_eq!(s.speed(), -3.0);
    }

    #[test]
    fn random_walk_keeps_every_invariant() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut host = MemoryHost::default();
        let mut v = viewport(0.0, 0.0, 16.0, 9.0);
        let mut s = Scroller::new(
            &config(&[(12.0, 6.0), (7.0, 11.0), (25.0, 4.0)], 3.0),
            v,
            &mut host,
        )
        .unwrap();
        let settled = s.tile_count();

        for _ in 0..2_000 {
            v.center += Vec2::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0));
            s.advance(rng.gen_range(0.0..0.5), v, &mut host);

            assert!(s.head() < s.rows().len());
            assert_vertical_coverage(&s, &v);
            assert_horizontal_coverage(&s, &v);
            assert_eq!(s.tile_count(), settled);
            assert_eq!(host.sprites.len(), settled);
        }
    }

    #[test]
    fn random_walk_survives_a_taller_camera() {
        let mut rng = StdRng::seed_from_u64(0xa11);
        let mut host = MemoryHost::default();
        let mut v = viewport(0.0, 0.0, 16.0, 9.0);
        let mut s = Scroller::new(
            &config(&[(12.0, 6.0), (7.0, 11.0), (25.0, 4.0)], -2.0),
            v,
            &mut host,
        )
        .unwrap();

        for _ in 0..300 {
            v.center += Vec2::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0));
            s.advance(rng.gen_range(0.0..0.5), v, &mut host);
        }

        let rows = s.rows().len();
        v.half_extents = Vec2::new(16.0, 48.0);
        let report = s.advance(0.2, v, &mut host);
        assert!(report.rows_added > 0);
        assert_eq!(s.rows().len(), rows + report.rows_added);
        assert_vertical_coverage(&s, &v);
        assert_horizontal_coverage(&s, &v);
        assert_ring_order(&s, 3);

        let settled = s.tile_count();
        for _ in 0..1_000 {
            v.center += Vec2::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0));
            let report = s.advance(rng.gen_range(0.0..0.5), v, &mut host);

            assert_eq!(report.rows_added, 0);
            assert_vertical_coverage(&s, &v);
            assert_horizontal_coverage(&s, &v);
            assert_eq!(s.tile_count(), settled);
        }
        assert_ring_order(&s, 3);
    }
}
