//=========================================================================
// Canvas
//=========================================================================
//
// Double-buffered CPU framebuffer (`0xAARRGGBB` pixels, row-major).
//
// Drawing goes to the back buffer. `present()` swaps it to the front,
// where it stays readable until the next present.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Color, Rect};

//=== Canvas ==============================================================

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    clear_color: Color,
    back: Vec<u32>,
    front: Vec<u32>,
    presented: u64,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            clear_color: Color::BLACK,
            back: vec![Color::BLACK.to_argb(); len],
            front: vec![Color::BLACK.to_argb(); len],
            presented: 0,
        }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    pub fn clear(&mut self) {
        self.back.fill(self.clear_color.to_argb());
    }

    /// Fills `rect`, clipped to the canvas. Pixel centres decide coverage.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let x0 = clamp_edge(rect.x, self.width);
        let y0 = clamp_edge(rect.y, self.height);
        let x1 = clamp_edge(rect.x + rect.w, self.width);
        let y1 = clamp_edge(rect.y + rect.h, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let argb = color.to_argb();
        let stride = self.width as usize;
        for row in y0..y1 {
            let start = row * stride;
            self.back[start + x0..start + x1].fill(argb);
        }
    }

    pub fn present(&mut self) {
        std::mem::swap(&mut self.back, &mut self.front);
        self.presented += 1;
    }

    /// Reads a pixel from the last presented frame.
    pub fn front_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel_in(&self.front, x, y)
    }

    /// Reads a pixel from the frame being drawn.
    pub fn back_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixel_in(&self.back, x, y)
    }

    /// Number of frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    fn pixel_in(&self, buffer: &[u32], x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let argb = buffer[y as usize * self.width as usize + x as usize];
        Some(Color {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        })
    }
}

/// Rounds a coordinate to the nearest pixel edge inside `[0, limit]`.
fn clamp_edge(value: f32, limit: u32) -> usize {
    value.round().clamp(0.0, limit as f32) as usize
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);

    #[test]
    fn fill_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_rect(Rect::new(-2.0, 2.0, 10.0, 10.0), RED);

        assert_eq!(canvas.back_pixel(0, 2), Some(RED));
        assert_eq!(canvas.back_pixel(3, 3), Some(RED));
        assert_eq!(canvas.back_pixel(0, 1), Some(Color::BLACK));
    }

    #[test]
    fn present_moves_back_to_front() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear();
        canvas.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), RED);
        assert_eq!(canvas.front_pixel(0, 0), Some(Color::BLACK));

        canvas.present();
        assert_eq!(canvas.front_pixel(0, 0), Some(RED));
        assert_eq!(canvas.presented_frames(), 1);
    }

    #[test]
    fn clear_uses_clear_color() {
        let mut canvas = Canvas::new(2, 2);
        canvas.set_clear_color(Color::WHITE);
        canvas.clear();
        assert_eq!(canvas.back_pixel(1, 1), Some(Color::WHITE));
    }

    #[test]
    fn out_of_bounds_pixel_is_none() {
        let canvas = Canvas::new(2, 2);
        assert_eq!(canvas.front_pixel(2, 0), None);
    }

    #[test]
    fn empty_rect_draws_nothing() {
        let mut canvas = Canvas::new(2, 2);
        canvas.fill_rect(Rect::new(1.0, 1.0, 0.0, 0.0), RED);
        assert_eq!(canvas.back_pixel(1, 1), Some(Color::BLACK));
    }
}
