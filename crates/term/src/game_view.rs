//! GameView: maps `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{format_u64, CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

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

/// State owned outside the session that the side panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudView<'a> {
    pub best_score: u64,
    /// One-line banner under the board (e.g. the goal notice)
    pub message: Option<&'a str>,
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    /// Spacing between tiles (columns, rows).
    gap_w: u16,
    gap_h: u16,
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

impl Default for GameView {
    fn default() -> Self {
        // 7x3 tiles read as roughly square with typical glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 3,
            gap_w: 1,
            gap_h: 1,
        }
    }
}

impl GameView {
    /// Outer frame size (including the border) in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        let inner_w = n * self.cell_w + (n + 1) * self.gap_w;
        let inner_h = n * self.cell_h + (n + 1) * self.gap_h;
        (inner_w + 2, inner_h + 2)
    }

    /// Render the current game state and the side panel into an existing
    /// framebuffer, centred in the viewport.
    ///
    /// This is the allocation-free hot path. Callers reuse one framebuffer
    /// across frames; it is resized only when the viewport changes.
    pub fn render_into_with_hud(
        &self,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::text(Rgb::new(200, 200, 200), Rgb::BLACK);

        // Board background (gaps show through between tiles).
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::solid(BOARD_BG),
        );

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = snap.grid[row][col];
                let spawned = snap
                    .last_spawn
                    .is_some_and(|p| p.row as usize == row && p.col as usize == col);
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value, spawned);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, start_x, start_y, frame_w);

        // Banner under the board.
        if let Some(message) = hud.and_then(|h| h.message) {
            let y = start_y.saturating_add(frame_h);
            let style = CellStyle::text(Rgb::new(237, 194, 46), Rgb::BLACK).bold();
            fb.put_str_centered(start_x, frame_w, y, message, style);
        }

        // Overlays.
        if snap.terminal {
            let style = CellStyle::text(Rgb::WHITE, Rgb::BLACK);
            let mid_y = start_y.saturating_add(frame_h / 2);
            fb.put_str_centered(start_x, frame_w, mid_y, " GAME OVER ", style.bold());
            fb.put_str_centered(start_x, frame_w, mid_y.saturating_add(1), " n: try again ", style);
        }
    }

    /// Top-left terminal cell of tile (row, col).
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let x = start_x + 1 + self.gap_w + col * (self.cell_w + self.gap_w);
        let y = start_y + 1 + self.gap_h + row * (self.cell_h + self.gap_h);
        (x, y)
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

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
        spawned: bool,
    ) {
        let (px, py) = self.tile_origin(start_x, start_y, row, col);

        if value == 0 {
            fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', CellStyle::solid(EMPTY_BG));
            return;
        }

        let (bg, fg) = tile_colors(value);
        let style = CellStyle::text(fg, bg).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        let mut label = [0u8; 20];
        let len = tile_label(value, self.cell_w, &mut label);
        let text_x = px + self.cell_w.saturating_sub(len as u16) / 2;
        let text_y = py + self.cell_h / 2;
        for (i, &b) in label[..len].iter().enumerate() {
            fb.put_char(text_x + i as u16, text_y, b as char, style);
        }

        if spawned {
            fb.put_char(px, py, '+', style.regular());
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        hud: Option<&HudView<'_>>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::text(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
        let value = CellStyle::text(Rgb::new(200, 200, 200), Rgb::BLACK);
        let hint = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        match hud {
            Some(h) => {
                fb.put_u64(panel_x, y, h.best_score.max(snap.score), value);
            }
            None => {
                fb.put_str(panel_x, y, "-", value);
            }
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves as u64, value);
        y = y.saturating_add(2);

        for line in ["arrows/hjkl: move", "drag: swipe", "n: new game", "q: quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

/// Background and text colour for a tile value.
pub fn tile_colors(value: u32) -> (Rgb, Rgb) {
    match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    }
}

/// Tile text that fits in `width` columns: the value, or `2^N` when too long.
pub fn tile_label(value: u32, width: u16, out: &mut [u8; 20]) -> usize {
    let len = format_u64(value as u64, out);
    if len as u16 <= width {
        return len;
    }
    let mut exp = [0u8; 20];
    let exp_len = format_u64(value.trailing_zeros() as u64, &mut exp);
    out[0] = b'2';
    out[1] = b'^';
    out[2..2 + exp_len].copy_from_slice(&exp[..exp_len]);
    2 + exp_len
}
