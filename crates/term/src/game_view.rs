//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//! World units are scaled down to terminal cells; each cell covers
//! `px_per_col` x `px_per_row` world units.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, ClipRect, FrameBuffer, Rgb};
use crate::types::{
    Attempt, BLOCK_HEIGHT, BLOCK_WIDTH, CRANE_WIDTH, MISS_THRESHOLD, PLATFORM_CENTER_X,
    PLATFORM_HEIGHT, PLATFORM_WIDTH, PLATFORM_X, PLATFORM_Y, WIN_HEIGHT, WORLD_HEIGHT, WORLD_WIDTH,
};

const SKY: Rgb = Rgb::new(139, 233, 253);
const PLATFORM: Rgb = Rgb::new(80, 250, 123);
const BLOCK_A: Rgb = Rgb::new(40, 42, 54);
const BLOCK_B: Rgb = Rgb::new(68, 71, 90);
const HELD_BLOCK: Rgb = Rgb::new(0, 0, 0);
const COMBO_OUTLINE: Rgb = Rgb::new(255, 184, 108);
const COMBO_FILL: Rgb = Rgb::new(241, 250, 140);

/// Crane arm thickness in world units
const CRANE_ARM_WIDTH: i32 = 25;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the tower game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// World units per terminal column.
    px_per_col: i32,
    /// World units per terminal row.
    px_per_row: i32,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 10x25 gives an 80x24 play area; terminal glyphs are about 2.5x taller than wide.
        Self {
            px_per_col: 10,
            px_per_row: 25,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(px_per_col: i32, px_per_row: i32) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_row: px_per_row.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    /// Pick the finest scale at which the playfield, its border and the status
    /// line fit in `viewport`.
    pub fn fit(viewport: Viewport) -> Self {
        let cols = (viewport.width as i32 - 2).max(1);
        let rows = (viewport.height as i32 - 3).max(1);
        let fitted = Self::new(div_ceil(WORLD_WIDTH, cols), div_ceil(WORLD_HEIGHT, rows));
        // Never zoom in past the default scale.
        let d = Self::default();
        Self::new(
            fitted.px_per_col.max(d.px_per_col),
            fitted.px_per_row.max(d.px_per_row),
        )
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Play area size in cells (without the border).
    pub fn play_area(&self) -> (u16, u16) {
        (
            div_ceil(WORLD_WIDTH, self.px_per_col) as u16,
            div_ceil(WORLD_HEIGHT, self.px_per_row) as u16,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (cols, rows) = self.play_area();
        let frame_w = cols + 2;
        let frame_h = rows + 2;
        let total_h = frame_h + 1;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        let clip = ClipRect {
            x: start_x + 1,
            y: start_y + 1,
            w: cols,
            h: rows,
        };

        let border = CellStyle::default();
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let sky = CellStyle::new(SKY, SKY);
        fb.fill_rect(clip.x, clip.y, clip.w, clip.h, ' ', sky);

        // Platform.
        self.fill_world(
            fb,
            clip,
            PLATFORM_X,
            PLATFORM_Y,
            PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
            CellStyle::new(PLATFORM, SKY),
        );

        // Tower, alternating shades so neighbouring floors stay distinct.
        for block in &snap.blocks {
            let fg = if block.id % 2 == 0 { BLOCK_A } else { BLOCK_B };
            self.fill_world(
                fb,
                clip,
                block.x,
                block.y,
                BLOCK_WIDTH,
                BLOCK_HEIGHT,
                CellStyle::new(fg, SKY),
            );
        }

        // Crane arm, tinted by how close the tower is to a reset.
        self.fill_world(
            fb,
            clip,
            snap.crane_x,
            0,
            CRANE_ARM_WIDTH,
            CRANE_WIDTH,
            CellStyle::new(crane_color(snap.miss_count), SKY),
        );
        if !snap.won {
            self.fill_world(
                fb,
                clip,
                snap.held_block_x,
                CRANE_WIDTH,
                BLOCK_WIDTH,
                BLOCK_HEIGHT,
                CellStyle::new(HELD_BLOCK, SKY),
            );
        }

        if snap.combo_multiplier > 1 {
            self.draw_combo_bar(fb, clip, snap.combo_multiplier);
        }

        self.draw_status(fb, snap, start_x, start_y + frame_h, viewport);

        if snap.won {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "YOU WON!");
            self.draw_overlay_text(
                fb,
                start_x,
                start_y + 1,
                frame_w,
                frame_h,
                "r: restart  q: quit",
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Map a world rectangle to framebuffer cells (origin at the clip corner).
    ///
    /// Edges round to the nearest cell; anything with area covers at least one cell.
    pub fn world_to_cells(&self, clip: ClipRect, x: i32, y: i32, w: i32, h: i32) -> (i32, i32, i32, i32) {
        let (c0, c1) = span(x, w, self.px_per_col);
        let (r0, r1) = span(y, h, self.px_per_row);
        (clip.x as i32 + c0, clip.y as i32 + r0, c1 - c0, r1 - r0)
    }

    fn fill_world(
        &self,
        fb: &mut FrameBuffer,
        clip: ClipRect,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        style: CellStyle,
    ) {
        let (cx, cy, cw, ch) = self.world_to_cells(clip, x, y, w, h);
        fb.fill_rect_clipped(cx, cy, cw, ch, clip, '█', style);
    }

    fn draw_combo_bar(&self, fb: &mut FrameBuffer, clip: ClipRect, multiplier: u32) {
        let outline_x = PLATFORM_CENTER_X - 80;
        let (ox, oy, ow, _) = self.world_to_cells(clip, outline_x, 10, 200, 25);
        fb.fill_rect_clipped(ox, oy, ow, 1, clip, '░', CellStyle::new(COMBO_OUTLINE, SKY));

        let fill_w = (multiplier as i32).saturating_mul(10).min(190);
        let (fx, _, fw, _) = self.world_to_cells(clip, outline_x + 5, 15, fill_w, 15);
        fb.fill_rect_clipped(fx, oy, fw, 1, clip, '█', CellStyle::new(COMBO_FILL, SKY));

        // "xN" label just right of the bar.
        let label_x = ox + ow + 1;
        if label_x >= 0 && oy >= 0 && label_x < (clip.x + clip.w) as i32 {
            let style = CellStyle::new(Rgb::new(0, 0, 0), SKY).bold();
            let cx = fb.put_str(label_x as u16, oy as u16, "x", style);
            fb.put_u32(cx, oy as u16, multiplier, style);
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        x: u16,
        y: u16,
        viewport: Viewport,
    ) {
        if y >= viewport.height {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut cx = fb.put_str(x, y, "HEIGHT ", label);
        cx = fb.put_u32(cx, y, snap.blocks.len() as u32, value);
        cx = fb.put_str(cx, y, "/", value);
        cx = fb.put_u32(cx, y, WIN_HEIGHT as u32, value);

        cx = fb.put_str(cx, y, "  MISSES ", label);
        cx = fb.put_u32(cx, y, snap.miss_count, value);
        cx = fb.put_str(cx, y, "/", value);
        cx = fb.put_u32(cx, y, MISS_THRESHOLD, value);

        cx = fb.put_str(cx, y, "  COMBO x", label);
        cx = fb.put_u32(cx, y, snap.combo_multiplier, value);

        cx = fb.put_str(cx, y, "  POP ", label);
        cx = fb.put_u32(cx, y, snap.population(), value);

        if let Some(attempt) = snap.last_attempt {
            let (text, fg) = match attempt {
                Attempt::Perfect => ("  PERFECT", Rgb::new(80, 250, 123)),
                Attempt::Acceptable => ("  GOOD", Rgb::new(241, 250, 140)),
                Attempt::Miss => ("  MISS", Rgb::new(255, 85, 85)),
            };
            fb.put_str(cx, y, text, CellStyle::new(fg, Rgb::new(0, 0, 0)).bold());
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

pub fn crane_color(miss_count: u32) -> Rgb {
    match miss_count {
        0 => Rgb::new(98, 114, 164),
        1 => Rgb::new(255, 255, 0),
        _ => Rgb::new(255, 0, 0),
    }
}

/// Cell span `[start, end)` covering world span `[v, v + len)`.
fn span(v: i32, len: i32, scale: i32) -> (i32, i32) {
    let start = round_div(v, scale);
    let end = round_div(v + len, scale).max(start + 1);
    (start, end)
}

fn round_div(v: i32, scale: i32) -> i32 {
    (v + scale / 2).div_euclid(scale)
}

fn div_ceil(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIP: ClipRect = ClipRect {
        x: 1,
        y: 1,
        w: 80,
        h: 24,
    };

    #[test]
    fn world_mapping_rounds_to_nearest_cell() {
        let view = GameView::default();
        // Platform: x 300..500, y 500..550
        assert_eq!(view.world_to_cells(CLIP, 300, 500, 200, 50), (31, 21, 20, 2));
        // Block released at crane x = 400
        assert_eq!(view.world_to_cells(CLIP, 388, 450, 50, 50), (40, 19, 5, 2));
    }

    #[test]
    fn negative_world_coordinates_floor() {
        let view = GameView::default();
        let (_, y, _, h) = view.world_to_cells(CLIP, 0, -100, 50, 50);
        assert_eq!(y, 1 - 4);
        assert_eq!(h, 2);
    }

    #[test]
    fn fit_never_zooms_in() {
        assert_eq!(GameView::fit(Viewport::new(300, 100)), GameView::default());
    }

    #[test]
    fn fit_shrinks_to_small_terminals() {
        let view = GameView::fit(Viewport::new(80, 24));
        let (cols, rows) = view.play_area();
        assert!(cols + 2 <= 80);
        assert!(rows + 3 <= 24);
    }

    #[test]
    fn crane_color_tracks_misses() {
        assert_eq!(crane_color(0), Rgb::new(98, 114, 164));
        assert_eq!(crane_color(1), Rgb::new(255, 255, 0));
        assert_eq!(crane_color(2), Rgb::new(255, 0, 0));
    }
}
