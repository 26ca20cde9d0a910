//=========================================================================
// Grid
//=========================================================================
//
// Rectangular grid of toggleable cells centred on its position.
//
// Layout (cols × rows cells of cell_w × cell_h, `gap` between cells):
// ```text
//   width  = cols * cell_w + (cols - 1) * gap
//   height = rows * cell_h + (rows - 1) * gap
//   top-left = position - (width, height) / 2
// ```
//
// A left click toggles the cell under the cursor; `R` clears the grid.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::{Entity, UpdateContext, Vector2};
use crate::core::audio::Loops;
use crate::core::graphics::{Color, Graphics, Rect};
use crate::core::input::{KeyCode, MouseButton};

//=== GridStyle ===========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub cell_off: Color,
    pub cell_on: Color,
    /// Sound played on toggle, resolved through the asset manager.
    pub toggle_sound: Option<String>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            cell_off: Color::rgb(40, 44, 52),
            cell_on: Color::rgb(97, 175, 239),
            toggle_sound: None,
        }
    }
}

//=== Grid ================================================================

pub struct Grid {
    cols: u32,
    rows: u32,
    cell_w: f32,
    cell_h: f32,
    gap: f32,
    position: Vector2,
    cells: Vec<bool>,
    style: GridStyle,
}

impl Grid {
    /// # Panics
    ///
    /// Panics if `cols` or `rows` is zero.
    pub fn new(cols: u32, rows: u32, cell_w: f32, cell_h: f32, gap: f32) -> Self {
        assert!(cols > 0 && rows > 0, "Grid must have at least one cell, got {}x{}", cols, rows);
        Self {
            cols,
            rows,
            cell_w,
            cell_h,
            gap,
            position: Vector2::ZERO,
            cells: vec![false; cols as usize * rows as usize],
            style: GridStyle::default(),
        }
    }

    pub fn with_style(mut self, style: GridStyle) -> Self {
        self.style = style;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.cols, self.rows)
    }

    /// Full extent in pixels, gaps included.
    pub fn size(&self) -> Vector2 {
        Vector2::new(
            self.cols as f32 * self.cell_w + (self.cols - 1) as f32 * self.gap,
            self.rows as f32 * self.cell_h + (self.rows - 1) as f32 * self.gap,
        )
    }

    pub fn top_left(&self) -> Vector2 {
        self.position - self.size() * 0.5
    }

    /// Screen rectangle of cell `(col, row)`.
    pub fn cell_rect(&self, col: u32, row: u32) -> Rect {
        let origin = self.top_left();
        Rect::new(
            origin.x + col as f32 * (self.cell_w + self.gap),
            origin.y + row as f32 * (self.cell_h + self.gap),
            self.cell_w,
            self.cell_h,
        )
    }

    /// Cell under a screen point; `None` outside the grid or in a gap.
    pub fn cell_at(&self, point: Vector2) -> Option<(u32, u32)> {
        let local = point - self.top_left();
        if local.x < 0.0 || local.y < 0.0 {
            return None;
        }

        let col = (local.x / (self.cell_w + self.gap)) as u32;
        let row = (local.y / (self.cell_h + self.gap)) as u32;
        if col >= self.cols || row >= self.rows {
            return None;
        }

        self.cell_rect(col, row)
            .contains(point.x, point.y)
            .then_some((col, row))
    }

    pub fn is_on(&self, col: u32, row: u32) -> bool {
        self.index(col, row).is_some_and(|index| self.cells[index])
    }

    pub fn toggle(&mut self, col: u32, row: u32) {
        if let Some(index) = self.index(col, row) {
            self.cells[index] = !self.cells[index];
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn active_cells(&self) -> usize {
        self.cells.iter().filter(|on| **on).count()
    }

    fn index(&self, col: u32, row: u32) -> Option<usize> {
        (col < self.cols && row < self.rows).then(|| (row * self.cols + col) as usize)
    }
}

impl Entity for Grid {
    fn position(&self) -> Vector2 {
        self.position
    }

    fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    fn update(&mut self, context: &mut UpdateContext<'_>) {
        if context.input.key_pressed(KeyCode::KeyR) {
            self.clear();
        }

        if !context.input.mouse_button_pressed(MouseButton::Left) {
            return;
        }

        let Some((col, row)) = self.cell_at(context.input.mouse_position().into()) else {
            return;
        };
        self.toggle(col, row);

        if let Some(sound) = &self.style.toggle_sound {
            if let Err(e) = context.audio.play_sfx(context.assets, sound, Loops::Times(0), None) {
                warn!(target: "scene", "Grid toggle sound unavailable: {}", e);
            }
        }
    }

    fn render(&self, graphics: &mut dyn Graphics) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let color = if self.is_on(col, row) {
                    self.style.cell_on
                } else {
                    self.style.cell_off
                };
                graphics.fill_rect(self.cell_rect(col, row), color);
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
