//! Layout data types for planner pages
//!
//! Layout code works in top-down page coordinates (y grows downward from the
//! top edge of the page), which is how page sections are reasoned about.
//! Drawing happens in PDF coordinates (y grows upward from the bottom edge).
//! [`Region`] is the former, [`Rect`] the latter.

use crate::calendar::Calendar;
use crate::constants::{GRID_LABEL_FONT_SIZE, GRID_PADDING};
use crate::render::SurfaceHandle;
use crate::tree::{NodeId, PageTree};

/// A rectangular area in PDF points (origin bottom-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// A rectangular area in top-down layout coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub x_start: f32,
    pub y_start: f32,
    pub x_stop: f32,
    pub y_stop: f32,
}

impl Region {
    pub fn new(x_start: f32, y_start: f32, x_stop: f32, y_stop: f32) -> Self {
        Self {
            x_start,
            y_start,
            x_stop,
            y_stop,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_stop - self.x_start
    }

    pub fn height(&self) -> f32 {
        self.y_stop - self.y_start
    }

    /// Shrink the region by `padding` on every side
    pub fn inset(&self, padding: f32) -> Region {
        Region::new(
            self.x_start + padding,
            self.y_start + padding,
            self.x_stop - padding,
            self.y_stop - padding,
        )
    }

    /// Keep only the top `height` points of the region
    pub fn top_strip(&self, height: f32) -> Region {
        Region::new(
            self.x_start,
            self.y_start,
            self.x_stop,
            (self.y_start + height).min(self.y_stop),
        )
    }

    /// Convert to PDF coordinates on a page of the given height
    pub fn to_pdf(&self, page_height: f32) -> Rect {
        Rect::new(
            self.x_start,
            page_height - self.y_stop,
            self.width(),
            self.height(),
        )
    }
}

/// Parameters of one grid invocation
#[derive(Debug, Clone, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    /// Leading cells left empty before the first entry
    pub skip: usize,
    /// Create a clickable link from each placed cell to its entry's page
    pub create_links: bool,
    /// Draw each entry's miniature content below its label
    pub thumbnails: bool,
    /// Padding between the cell edge and its content
    pub padding: f32,
    pub label_font_size: f32,
    /// Center labels vertically in the cell instead of hanging them from the top
    pub center_labels: bool,
    /// Height of the page the grid is drawn on
    pub page_height: f32,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize, page_height: f32) -> Self {
        Self {
            rows,
            cols,
            skip: 0,
            create_links: false,
            thumbnails: false,
            padding: GRID_PADDING,
            label_font_size: GRID_LABEL_FONT_SIZE,
            center_labels: false,
            page_height,
        }
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    pub fn with_links(mut self) -> Self {
        self.create_links = true;
        self
    }

    pub fn with_thumbnails(mut self) -> Self {
        self.thumbnails = true;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.label_font_size = size;
        self
    }

    pub fn with_centered_labels(mut self) -> Self {
        self.center_labels = true;
        self
    }

    /// Total number of cells in the grid, or `None` if it overflows `usize`
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

/// One thing to place in a grid cell
#[derive(Debug, Clone, PartialEq)]
pub enum GridEntry {
    /// A page of the planner: labelled with its grid label and linkable
    Node(NodeId),
    /// A plain label, such as a weekday name
    Label(String),
}

/// Placement of one entry in a grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    /// Row-major cell index, counting skipped cells
    pub index: usize,
    pub row: usize,
    pub col: usize,
    /// Cell area after padding
    pub area: Region,
    /// Index into the entries that were placed
    pub entry: usize,
}

/// Computed cell geometry for a grid, before anything is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    pub cell_width: f32,
    pub cell_height: f32,
    pub cells: Vec<GridCell>,
}

/// A link created by a grid: the clickable rectangle and its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLink {
    pub rect: Rect,
    pub target: SurfaceHandle,
}

/// What a grid invocation drew
#[derive(Debug, Clone, PartialEq)]
pub struct GridReport {
    pub plan: GridPlan,
    pub links: Vec<CellLink>,
}

/// Read-only view of the planner that page composition draws from
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    pub tree: &'a PageTree,
    pub calendar: &'a dyn Calendar,
}

impl<'a> LayoutContext<'a> {
    pub fn new(tree: &'a PageTree, calendar: &'a dyn Calendar) -> Self {
        Self { tree, calendar }
    }
}
