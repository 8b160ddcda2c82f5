//! Drawing seam between the scene and whatever window system shows it.

use crate::color::Rgb;
use glam::Vec2;

/// Typeface family for overlay text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    Monospace,
    Proportional,
}

/// A fixed-size canvas the scene paints one frame at a time.
///
/// Coordinates are canvas-relative with the origin in the top-left corner.
pub trait Surface {
    /// Fills the whole canvas.
    fn clear(&mut self, color: Rgb);
    fn circle_filled(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn line_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb);
    fn rect_stroke(&mut self, min: Vec2, max: Vec2, width: f32, color: Rgb);
    /// Draws `text` with its top-left corner at `pos`.
    fn text(&mut self, pos: Vec2, text: &str, font: Font, size: f32, color: Rgb);
    /// Marks the frame as complete.
    fn present(&mut self);
}
