//=========================================================================
// Headless Graphics
//=========================================================================
//
// Graphics backend with no window and no native events. Renders into a
// `Canvas` that callers may inspect after each present.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{Canvas, Color, Graphics, Rect};

//=== HeadlessGraphics ====================================================

#[derive(Debug)]
pub struct HeadlessGraphics {
    canvas: Canvas,
}

impl HeadlessGraphics {
    pub fn new(width: u32, height: u32) -> Self {
        info!(target: "graphics", "Headless graphics initialized ({}x{})", width, height);
        Self {
            canvas: Canvas::new(width, height),
        }
    }

    /// Read access to the composed frames.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Graphics for HeadlessGraphics {
    fn initialized(&self) -> bool {
        true
    }

    fn screen_size(&self) -> (u32, u32) {
        self.canvas.size()
    }

    fn clear_back_buffer(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.canvas.fill_rect(rect, color);
    }

    fn render(&mut self) {
        self.canvas.present();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
