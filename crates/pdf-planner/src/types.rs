use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error(
        "Too many entries to fit in grid: rows {rows}, cols {cols}, skip {skip}, entries {count}"
    )]
    LayoutOverflow {
        rows: usize,
        cols: usize,
        skip: usize,
        count: usize,
    },
    #[error("Cannot link to {node}: its page has not been created yet")]
    NotSurfaced { node: String },
    #[error("Invalid build transition for {node}: {from:?} -> {to:?}")]
    InvalidTransition {
        node: String,
        from: crate::tree::BuildState,
        to: crate::tree::BuildState,
    },
}

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    Portrait,
    /// Landscape: width > height (default for tablet planners)
    #[default]
    Landscape,
}

/// Which side of the page the writing hand rests on.
///
/// Controls where the margin line and the notes section are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Handedness {
    /// Margin on the left, notes section on the left
    #[default]
    RightHanded,
    /// Margin on the right, notes section on the right
    LeftHanded,
}

impl Handedness {
    pub fn is_left_handed(self) -> bool {
        matches!(self, Handedness::LeftHanded)
    }
}

/// Page size presets
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    /// reMarkable 1/2 screen (1404 x 1872)
    #[default]
    Remarkable,
    /// reMarkable Paper Pro screen (1620 x 2160)
    RemarkablePro,
    Custom { width_pt: f32, height_pt: f32 },
}

impl PaperSize {
    /// Get base dimensions in points (portrait for the presets)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::Remarkable => (1404.0, 1872.0),
            PaperSize::RemarkablePro => (1620.0, 2160.0),
            PaperSize::Custom {
                width_pt,
                height_pt,
            } => (width_pt, height_pt),
        }
    }

    /// Get dimensions with orientation applied
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_pt();
        let (short, long) = if w <= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::Remarkable => "reMarkable",
            PaperSize::RemarkablePro => "reMarkable Paper Pro",
            PaperSize::Custom { .. } => "Custom",
        }
    }
}

/// Statistics about a planner before it is rendered
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerStatistics {
    /// Number of year pages
    pub years: usize,
    /// Number of month pages
    pub months: usize,
    /// Number of day pages
    pub days: usize,
    /// Total page count, including the main page
    pub total_pages: usize,
}
