//! Shared constants for planner generation
//!
//! This module centralizes the magic numbers used when composing planner
//! pages. Sizes are in PDF points and tuned for tablet-sized pages.

// =============================================================================
// Fill Colors (gray levels, 0.0 = black, 1.0 = white)
// =============================================================================

/// Fill behind page titles and navigation arrows
pub const FILL_TITLE: f32 = 0.8;

/// Fill behind clickable grid cells
pub const FILL_LIGHT: f32 = 0.9;

/// Stroke color for ruled note lines
pub const STROKE_DARK: f32 = 0.5;

/// Default stroke color
pub const STROKE_BLACK: f32 = 0.0;

// =============================================================================
// Typography
// =============================================================================

/// Font size of page titles (points)
pub const TITLE_FONT_SIZE: f32 = 45.0;

/// Font size of section headings such as "Notes" (points)
pub const HEADING_FONT_SIZE: f32 = 35.0;

/// Font size of grid labels on full pages (points)
pub const GRID_LABEL_FONT_SIZE: f32 = 25.0;

/// Font size of grid labels inside thumbnails (points)
pub const THUMBNAIL_LABEL_FONT_SIZE: f32 = 14.0;

/// Gap between the top of the title band and the title baseline (points)
pub const TITLE_BASELINE_GAP: f32 = 10.0;

// =============================================================================
// Page Furniture
// =============================================================================

/// Height of the title band at the top of every page
pub const TITLE_BAND_HEIGHT: f32 = TITLE_FONT_SIZE * 2.0;

/// Horizontal padding around title plates and navigation arrows
pub const TITLE_PLATE_PADDING: f32 = 20.0;

/// Distance from the title to each navigation arrow
pub const NAVIGATION_OFFSET: f32 = 100.0;

/// Default margin line offset from the page edge
pub const DEFAULT_MARGIN_PT: f32 = 120.0;

/// Spacing of ruled lines in notes sections
pub const NOTE_LINE_SPACING: f32 = 40.0;

/// Spacing of dots in the day task area
pub const DOT_SPACING: f32 = 40.0;

/// Blank band kept at the bottom of ruled and dotted areas
pub const BOTTOM_GUTTER: f32 = 30.0;

// =============================================================================
// Grids
// =============================================================================

/// Padding between a grid cell edge and its content on full pages
pub const GRID_PADDING: f32 = 10.0;

/// Padding between a grid cell edge and its content in thumbnails
pub const THUMBNAIL_GRID_PADDING: f32 = 2.0;

/// Horizontal inset of the month day grid from its section edges
pub const MONTH_GRID_INSET: f32 = 30.0;

/// Blank band below the month day grid
pub const MONTH_GRID_BOTTOM_GUTTER: f32 = 105.0;

/// Horizontal inset of the main page's year grid
pub const YEAR_GRID_INSET: f32 = 20.0;

/// Horizontal inset of the year page's month grid
pub const MONTHS_GRID_INSET: f32 = 15.0;

/// Top edge of the year page's month grid
pub const MONTHS_GRID_TOP: f32 = 95.0;

/// Blank band below the year page's month grid
pub const MONTHS_GRID_BOTTOM_GUTTER: f32 = 45.0;

/// Height of the weekday header inside a month thumbnail
pub const THUMBNAIL_HEADER_HEIGHT: f32 = 50.0;

/// Left inset of the dotted task area on day pages
pub const TASK_AREA_INSET: f32 = 30.0;

/// Right inset of the dotted task area on day pages
pub const TASK_AREA_RIGHT_GUTTER: f32 = 10.0;

/// Line widths
pub const THIN_LINE_WIDTH: f32 = 0.5;
pub const LINE_WIDTH: f32 = 1.0;
pub const THICK_LINE_WIDTH: f32 = 2.0;

/// Rows and columns of a month's day grid (six weeks of seven days)
pub const MONTH_GRID_ROWS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;

/// Months per year
pub const MONTHS_PER_YEAR: usize = 12;

// =============================================================================
// Helvetica Metrics
// =============================================================================

/// Advance widths of the standard Helvetica font for ASCII 32..=126,
/// in thousandths of the font size.
pub const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Width used for characters outside the table
pub const HELVETICA_FALLBACK_WIDTH: u16 = 556;
