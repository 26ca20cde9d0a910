//=========================================================================
// Graphics
//=========================================================================
//
// Rendering contract consumed by the orchestrator and scene entities.
//
// The graphics backend is the first subsystem built and owns the native
// event loop, so it also pumps native events into the orchestrator's
// queue.
//
// Frame bracket (Render phase):
// ```text
//   clear_back_buffer()
//   entity.render(graphics) ... fill_rect() ...
//   render()                    // present
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod canvas;
mod headless;

//=== Public API ==========================================================

pub use canvas::Canvas;
pub use headless::HeadlessGraphics;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::EventSink;

//=== Color ===============================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Packs the color as `0xAARRGGBB`.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

//=== Rect ================================================================

/// Axis-aligned rectangle in screen pixels, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns `true` if `(px, py)` lies inside (right/bottom edges excluded).
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }
}

//=== Graphics ============================================================

/// Rendering backend owned by the orchestrator.
pub trait Graphics {
    /// Whether backend initialization succeeded.
    ///
    /// Checked once, right after construction. `false` puts the
    /// orchestrator straight into its quit state.
    fn initialized(&self) -> bool;

    /// Drawable size in pixels.
    fn screen_size(&self) -> (u32, u32);

    /// Pushes pending native events into `sink` without blocking.
    ///
    /// Backends without a native event loop keep the default no-op.
    fn pump_events(&mut self, _sink: &EventSink) {}

    /// Clears the back buffer to the clear color.
    fn clear_back_buffer(&mut self);

    /// Fills `rect` on the back buffer.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Presents the back buffer.
    fn render(&mut self);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_packs_as_argb() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_argb(), 0xFF12_3456);
        assert_eq!(Color::BLACK.to_argb(), 0xFF00_0000);
    }

    #[test]
    fn rect_contains_excludes_far_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 5.0);
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(29.9, 14.9));
        assert!(!rect.contains(30.0, 12.0));
        assert!(!rect.contains(15.0, 15.0));
    }
}
