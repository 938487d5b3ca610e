//! Page furniture shared by every kind of page
//!
//! Margin line, title band, navigation arrows, notes section, headings and
//! the ruled/dotted writing areas. Positions are computed in top-down layout
//! coordinates and flipped to PDF coordinates when drawn.

use crate::constants::*;
use crate::layout::{Region, centered_text_x};
use crate::tree::Geometry;

use super::{Surface, SurfaceHandle};

const LEFT_ARROW: &str = "<";
const RIGHT_ARROW: &str = ">";

/// Draw `text` with its baseline `baseline` points below the top of the page.
fn show_text_top_down(
    surface: &mut dyn Surface,
    x: f32,
    baseline: f32,
    size: f32,
    text: &str,
    page_height: f32,
) {
    surface.show_text(x, page_height - baseline, size, text);
}

/// Title baseline, measured from the top of the page
fn title_baseline() -> f32 {
    TITLE_FONT_SIZE + TITLE_BASELINE_GAP
}

/// Heading baseline just below the title band
fn heading_baseline() -> f32 {
    TITLE_BAND_HEIGHT + HEADING_FONT_SIZE + TITLE_BASELINE_GAP
}

/// Full-height margin line on the writing-hand side.
pub fn draw_margin(surface: &mut dyn Surface, geometry: &Geometry) {
    let x = geometry.margin_x();
    surface.set_gray_stroke(STROKE_BLACK);
    surface.set_line_width(LINE_WIDTH);
    surface.line(x, 0.0, x, geometry.page_height);
}

/// Draw the page title on a gray plate centered in the title band.
///
/// With `back_link`, the plate jumps to that page when clicked.
pub fn draw_title(
    surface: &mut dyn Surface,
    title: &str,
    geometry: &Geometry,
    back_link: Option<SurfaceHandle>,
) {
    let page_height = geometry.page_height;
    let x = centered_text_x(surface, title, TITLE_FONT_SIZE, 0.0, geometry.page_width);
    let length = surface.text_width(title, TITLE_FONT_SIZE);

    let plate = Region::new(
        x - TITLE_PLATE_PADDING,
        0.0,
        x + length + TITLE_PLATE_PADDING,
        TITLE_BAND_HEIGHT,
    )
    .to_pdf(page_height);
    surface.fill_rect(plate, FILL_TITLE);
    if let Some(parent) = back_link {
        surface.link(plate, parent);
    }

    show_text_top_down(surface, x, title_baseline(), TITLE_FONT_SIZE, title, page_height);
    draw_title_separator(surface, geometry);
}

/// Horizontal rule closing the title band.
pub fn draw_title_separator(surface: &mut dyn Surface, geometry: &Geometry) {
    let y = geometry.page_height - TITLE_BAND_HEIGHT;
    surface.set_gray_stroke(STROKE_BLACK);
    surface.set_line_width(THICK_LINE_WIDTH);
    surface.line(0.0, y, geometry.page_width, y);
}

/// Draw "<" and ">" beside the title linking to the previous and next page.
///
/// # Arguments
/// * `title` - The page title the arrows are placed around
/// * `left` - Page of the previous sibling, if any
/// * `right` - Page of the next sibling, if any
pub fn draw_navigation(
    surface: &mut dyn Surface,
    title: &str,
    geometry: &Geometry,
    left: Option<SurfaceHandle>,
    right: Option<SurfaceHandle>,
) {
    let title_x = centered_text_x(surface, title, TITLE_FONT_SIZE, 0.0, geometry.page_width);
    let title_length = surface.text_width(title, TITLE_FONT_SIZE);

    if let Some(target) = left {
        let x = title_x - NAVIGATION_OFFSET;
        draw_arrow(surface, LEFT_ARROW, x, geometry, target);
    }

    if let Some(target) = right {
        let length = surface.text_width(RIGHT_ARROW, TITLE_FONT_SIZE);
        let x = title_x + title_length + NAVIGATION_OFFSET - length;
        draw_arrow(surface, RIGHT_ARROW, x, geometry, target);
    }

    draw_title_separator(surface, geometry);
}

fn draw_arrow(
    surface: &mut dyn Surface,
    arrow: &str,
    x: f32,
    geometry: &Geometry,
    target: SurfaceHandle,
) {
    let length = surface.text_width(arrow, TITLE_FONT_SIZE);
    let plate = Region::new(
        x - TITLE_PLATE_PADDING,
        0.0,
        x + length + TITLE_PLATE_PADDING,
        TITLE_BAND_HEIGHT,
    )
    .to_pdf(geometry.page_height);
    surface.fill_rect(plate, FILL_TITLE);
    surface.link(plate, target);
    show_text_top_down(
        surface,
        x,
        title_baseline(),
        TITLE_FONT_SIZE,
        arrow,
        geometry.page_height,
    );
}

/// Notes section: divider, "Notes" heading and ruled lines.
pub fn draw_notes_section(surface: &mut dyn Surface, geometry: &Geometry) {
    let page_height = geometry.page_height;
    let notes = geometry.notes_region();

    // Divider sits on the content side of the notes area, heading is
    // centered between it and the margin line
    let (divider_x, heading_start, heading_stop) = if geometry.is_left_handed() {
        (notes.x_start, notes.x_start, geometry.margin_right)
    } else {
        (notes.x_stop, geometry.margin_left, notes.x_stop)
    };

    surface.set_gray_stroke(STROKE_BLACK);
    surface.set_line_width(THICK_LINE_WIDTH);
    surface.line(divider_x, 0.0, divider_x, page_height - notes.y_start);

    let label = "Notes";
    let x = centered_text_x(surface, label, HEADING_FONT_SIZE, heading_start, heading_stop);
    show_text_top_down(surface, x, heading_baseline(), HEADING_FONT_SIZE, label, page_height);

    let ruled = Region::new(
        notes.x_start,
        notes.y_start + 2.0 * HEADING_FONT_SIZE,
        notes.x_stop,
        notes.y_stop - BOTTOM_GUTTER,
    );
    fill_lines(surface, ruled, NOTE_LINE_SPACING, page_height);
}

/// Section heading centered between `x_start` and `x_stop`, just below the
/// title band.
pub fn draw_heading(
    surface: &mut dyn Surface,
    text: &str,
    x_start: f32,
    x_stop: f32,
    page_height: f32,
) {
    let x = centered_text_x(surface, text, HEADING_FONT_SIZE, x_start, x_stop);
    show_text_top_down(surface, x, heading_baseline(), HEADING_FONT_SIZE, text, page_height);
}

/// Horizontal ruled lines every `gap` points across `region`.
pub fn fill_lines(surface: &mut dyn Surface, region: Region, gap: f32, page_height: f32) {
    if gap <= 0.0 {
        return;
    }
    surface.set_line_width(THIN_LINE_WIDTH);
    surface.set_gray_stroke(STROKE_DARK);
    for y in row_offsets(region, gap) {
        surface.line(region.x_start, page_height - y, region.x_stop, page_height - y);
    }
    surface.set_gray_stroke(STROKE_BLACK);
}

/// Rows of dots `spacing` points apart across `region`.
///
/// Each row is one dashed line whose dashes are short enough to read as dots.
pub fn fill_dots(surface: &mut dyn Surface, region: Region, spacing: f32, page_height: f32) {
    if spacing <= 0.0 {
        return;
    }
    surface.set_line_width(THICK_LINE_WIDTH);
    surface.set_dash(&[THICK_LINE_WIDTH, spacing], 0.0);
    for y in row_offsets(region, spacing) {
        surface.line(region.x_start, page_height - y, region.x_stop, page_height - y);
    }
    surface.set_dash(&[], 0.0);
}

/// Top-down y of each row `gap` apart, starting at the top of `region`.
///
/// The row count is fixed up front so huge coordinates, where adding `gap`
/// no longer changes an `f32`, still end.
fn row_offsets(region: Region, gap: f32) -> impl Iterator<Item = f32> {
    let rows = ((region.y_stop - region.y_start) / gap).ceil();
    // Saturating cast: NaN and negatives give no rows
    let rows = if rows.is_finite() { rows as usize } else { 0 };
    (0..rows).map(move |row| region.y_start + row as f32 * gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PageCanvas;
    use crate::tree::KindTag;
    use crate::types::{Handedness, Orientation};

    fn geometry(handedness: Handedness) -> Geometry {
        Geometry::new(
            1000.0,
            800.0,
            100.0,
            handedness,
            Orientation::Landscape,
            KindTag::Day,
        )
    }

    #[test]
    fn test_margin_follows_handedness() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        draw_margin(&mut canvas, &geometry(Handedness::LeftHanded));
        assert!(canvas.content().contains("900 0 m\n900 800 l\n"));
    }

    #[test]
    fn test_title_links_to_parent() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        draw_title(
            &mut canvas,
            "2021",
            &geometry(Handedness::RightHanded),
            Some(SurfaceHandle(0)),
        );
        assert_eq!(canvas.links().len(), 1);
        let link = canvas.links()[0];
        assert_eq!(link.rect.y, 800.0 - TITLE_BAND_HEIGHT);
        assert_eq!(link.rect.height, TITLE_BAND_HEIGHT);
        assert!(canvas.content().contains("(2021) Tj"));
    }

    #[test]
    fn test_title_without_parent_has_no_link() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        draw_title(&mut canvas, "Planner", &geometry(Handedness::RightHanded), None);
        assert!(canvas.links().is_empty());
    }

    #[test]
    fn test_navigation_only_for_present_siblings() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        draw_navigation(
            &mut canvas,
            "Jan 2021",
            &geometry(Handedness::RightHanded),
            None,
            Some(SurfaceHandle(7)),
        );
        assert_eq!(canvas.links().len(), 1);
        assert_eq!(canvas.links()[0].target, SurfaceHandle(7));
        assert!(canvas.content().contains("(>) Tj"));
        assert!(!canvas.content().contains("(<) Tj"));
    }

    #[test]
    fn test_arrows_straddle_title() {
        let g = geometry(Handedness::RightHanded);
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        draw_navigation(
            &mut canvas,
            "Jan 2021",
            &g,
            Some(SurfaceHandle(1)),
            Some(SurfaceHandle(2)),
        );
        let title_x = centered_text_x(&canvas, "Jan 2021", TITLE_FONT_SIZE, 0.0, 1000.0);
        let left = canvas.links()[0].rect;
        let right = canvas.links()[1].rect;
        assert!(left.right() <= title_x);
        assert!(right.x > title_x);
    }

    #[test]
    fn test_fill_lines_count() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        fill_lines(&mut canvas, Region::new(0.0, 100.0, 10.0, 300.0), 40.0, 800.0);
        // 100, 140, 180, 220, 260
        assert_eq!(canvas.content().matches(" m\n").count(), 5);
    }

    #[test]
    fn test_fill_lines_ends_at_huge_offsets() {
        // At 2e9 an f32 steps by 128, so adding 40 would never move y
        let region = Region::new(0.0, 2.0e9, 10.0, 2.0e9 + 400.0);
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        fill_lines(&mut canvas, region, 40.0, 800.0);
        // 2e9 + 400 rounds to 2e9 + 384, which needs 10 rows
        assert_eq!(canvas.content().matches(" m\n").count(), 10);

        let mut canvas = PageCanvas::new(1000.0, 800.0);
        fill_dots(&mut canvas, region, 40.0, 800.0);
        assert_eq!(canvas.content().matches(" m\n").count(), 10);
    }

    #[test]
    fn test_fill_skips_empty_region() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        fill_lines(&mut canvas, Region::new(0.0, 300.0, 10.0, 100.0), 40.0, 800.0);
        assert_eq!(canvas.content().matches(" m\n").count(), 0);
    }

    #[test]
    fn test_fill_dots_resets_dash() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        fill_dots(&mut canvas, Region::new(0.0, 0.0, 10.0, 80.0), 40.0, 800.0);
        assert!(canvas.content().starts_with("2 w\n[2 40] 0 d\n"));
        assert!(canvas.content().ends_with("[] 0 d\n"));
    }

    #[test]
    fn test_notes_divider_position() {
        let mut canvas = PageCanvas::new(1000.0, 800.0);
        draw_notes_section(&mut canvas, &geometry(Handedness::RightHanded));
        // Day pages give half the width to notes
        assert!(canvas.content().contains("500 0 m\n500 710 l\n"));
        assert!(canvas.content().contains("(Notes) Tj"));
    }
}
