//! The drawing surface page composition renders onto

use crate::layout::Rect;

/// Stable reference to a page surface owned by a [`PlannerDocument`].
///
/// [`PlannerDocument`]: super::PlannerDocument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceHandle(pub(crate) usize);

impl SurfaceHandle {
    /// Position of the page in the document, starting at 0
    pub fn index(self) -> usize {
        self.0
    }
}

/// A page that can be drawn on.
///
/// All coordinates are PDF coordinates: points, origin at the bottom-left
/// corner of the page.
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    fn set_line_width(&mut self, width: f32);
    /// Stroke gray level, 0.0 (black) to 1.0 (white)
    fn set_gray_stroke(&mut self, gray: f32);
    /// Dash pattern for subsequent strokes; an empty pattern is a solid line
    fn set_dash(&mut self, pattern: &[f32], phase: f32);

    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);

    /// Fill `rect` with a gray level without disturbing the current fill
    fn fill_rect(&mut self, rect: Rect, gray: f32);

    /// Draw `text` with its baseline starting at (x, y)
    fn show_text(&mut self, x: f32, y: f32, font_size: f32, text: &str);
    fn text_width(&self, text: &str, font_size: f32) -> f32;

    /// Make `rect` a clickable area that jumps to the `target` page
    fn link(&mut self, rect: Rect, target: SurfaceHandle);

    /// Stroke a single straight line
    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }
}
