//! Page node data model

use chrono::{NaiveDate, Weekday};

use crate::constants::TITLE_BAND_HEIGHT;
use crate::layout::Region;
use crate::render::SurfaceHandle;
use crate::types::{Handedness, Orientation};

/// Stable handle of a node in a [`PageTree`](super::PageTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a page is, with the data its behavior needs
#[derive(Debug, Clone, PartialEq)]
pub enum PageKind {
    /// The cover page linking to every year
    Main {
        start_year: i32,
        num_years: usize,
        first_day_of_week: Weekday,
    },
    Year {
        year: i32,
        first_day_of_week: Weekday,
    },
    Month {
        /// First day of the month
        first: NaiveDate,
        first_day_of_week: Weekday,
        /// Empty cells before day 1 in a grid whose first column is
        /// `first_day_of_week`
        leading_skip: usize,
    },
    /// A free-standing week page (no children)
    Week {
        /// First day of the week
        first: NaiveDate,
    },
    Day {
        date: NaiveDate,
    },
}

/// Kind of a node without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Main,
    Year,
    Month,
    Week,
    Day,
}

impl PageKind {
    pub fn tag(&self) -> KindTag {
        match self {
            PageKind::Main { .. } => KindTag::Main,
            PageKind::Year { .. } => KindTag::Year,
            PageKind::Month { .. } => KindTag::Month,
            PageKind::Week { .. } => KindTag::Week,
            PageKind::Day { .. } => KindTag::Day,
        }
    }
}

impl KindTag {
    /// Kind of the children this kind owns, if it has any
    pub fn child_kind(self) -> Option<KindTag> {
        match self {
            KindTag::Main => Some(KindTag::Year),
            KindTag::Year => Some(KindTag::Month),
            KindTag::Month => Some(KindTag::Day),
            KindTag::Week | KindTag::Day => None,
        }
    }

    /// Share of the page width given to the notes section
    pub fn notes_fraction(self, orientation: Orientation) -> f32 {
        match (self, orientation) {
            (KindTag::Month, Orientation::Portrait) => 0.085,
            (KindTag::Year | KindTag::Month, _) => 0.25,
            (KindTag::Main | KindTag::Week | KindTag::Day, _) => 0.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KindTag::Main => "Main",
            KindTag::Year => "Year",
            KindTag::Month => "Month",
            KindTag::Week => "Week",
            KindTag::Day => "Day",
        }
    }
}

/// Page geometry, inherited from the parent when a node is created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub page_width: f32,
    pub page_height: f32,
    /// X of the margin line for right-handed pages
    pub margin_left: f32,
    /// X of the margin line for left-handed pages
    pub margin_right: f32,
    pub notes_fraction: f32,
    pub handedness: Handedness,
    pub orientation: Orientation,
}

impl Geometry {
    pub fn new(
        page_width: f32,
        page_height: f32,
        margin: f32,
        handedness: Handedness,
        orientation: Orientation,
        kind: KindTag,
    ) -> Self {
        Self {
            page_width,
            page_height,
            margin_left: margin,
            margin_right: page_width - margin,
            notes_fraction: kind.notes_fraction(orientation),
            handedness,
            orientation,
        }
    }

    /// Geometry for a child of `kind` on a page with this geometry
    pub fn inherit(&self, kind: KindTag) -> Self {
        Self {
            notes_fraction: kind.notes_fraction(self.orientation),
            ..*self
        }
    }

    pub fn is_left_handed(&self) -> bool {
        self.handedness.is_left_handed()
    }

    /// X of the margin line on the writing-hand side
    pub fn margin_x(&self) -> f32 {
        if self.is_left_handed() {
            self.margin_right
        } else {
            self.margin_left
        }
    }

    pub fn notes_width(&self) -> f32 {
        self.page_width * self.notes_fraction
    }

    /// Area below the title band reserved for notes
    pub fn notes_region(&self) -> Region {
        let width = self.notes_width();
        if self.is_left_handed() {
            Region::new(
                self.page_width - width,
                TITLE_BAND_HEIGHT,
                self.page_width,
                self.page_height,
            )
        } else {
            Region::new(0.0, TITLE_BAND_HEIGHT, width, self.page_height)
        }
    }

    /// Area below the title band not taken by notes
    pub fn content_region(&self) -> Region {
        let width = self.notes_width();
        if self.is_left_handed() {
            Region::new(
                0.0,
                TITLE_BAND_HEIGHT,
                self.page_width - width,
                self.page_height,
            )
        } else {
            Region::new(width, TITLE_BAND_HEIGHT, self.page_width, self.page_height)
        }
    }
}

/// Lifecycle of a node during the build.
///
/// States only move forward, one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BuildState {
    /// Created by its parent, not yet threaded into its sibling chain
    Unbuilt,
    /// Sibling links set
    Linked,
    /// Own page exists and may be the target of links
    Surfaced,
    /// Every child is `ChildrenBuilt` as well
    ChildrenBuilt,
    /// Navigation and summary links drawn
    Annotated,
}

impl BuildState {
    /// The state that must come directly before this one
    pub fn predecessor(self) -> Option<BuildState> {
        match self {
            BuildState::Unbuilt => None,
            BuildState::Linked => Some(BuildState::Unbuilt),
            BuildState::Surfaced => Some(BuildState::Linked),
            BuildState::ChildrenBuilt => Some(BuildState::Surfaced),
            BuildState::Annotated => Some(BuildState::ChildrenBuilt),
        }
    }
}

/// One page of the planner
#[derive(Debug, Clone)]
pub struct PageNode {
    pub(crate) kind: PageKind,
    pub(crate) full_title: String,
    pub(crate) grid_label: String,
    pub(crate) geometry: Geometry,
    pub(crate) surface: Option<SurfaceHandle>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) state: BuildState,
}

impl PageNode {
    pub fn kind(&self) -> &PageKind {
        &self.kind
    }

    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    /// Heading of the node's own page
    pub fn full_title(&self) -> &str {
        &self.full_title
    }

    /// Short label shown when the node is a cell of its parent's grid
    pub fn grid_label(&self) -> &str {
        &self.grid_label
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn surface(&self) -> Option<SurfaceHandle> {
        self.surface
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Temporally previous node of the same kind
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Temporally next node of the same kind
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn state(&self) -> BuildState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(handedness: Handedness) -> Geometry {
        Geometry::new(
            1000.0,
            800.0,
            100.0,
            handedness,
            Orientation::Landscape,
            KindTag::Year,
        )
    }

    #[test]
    fn test_right_handed_regions() {
        let g = geometry(Handedness::RightHanded);
        assert_eq!(g.margin_x(), 100.0);
        assert_eq!(g.notes_region().x_stop, 250.0);
        assert_eq!(g.content_region().x_start, 250.0);
        assert_eq!(g.content_region().x_stop, 1000.0);
    }

    #[test]
    fn test_left_handed_regions() {
        let g = geometry(Handedness::LeftHanded);
        assert_eq!(g.margin_x(), 900.0);
        assert_eq!(g.notes_region().x_start, 750.0);
        assert_eq!(g.content_region().x_start, 0.0);
        assert_eq!(g.content_region().x_stop, 750.0);
    }

    #[test]
    fn test_inherit_keeps_page_and_changes_notes() {
        let year = geometry(Handedness::LeftHanded);
        let day = year.inherit(KindTag::Day);
        assert_eq!(day.page_width, year.page_width);
        assert_eq!(day.margin_right, year.margin_right);
        assert_eq!(day.handedness, Handedness::LeftHanded);
        assert_eq!(day.notes_fraction, 0.5);
    }

    #[test]
    fn test_portrait_month_notes_are_narrow() {
        assert_eq!(KindTag::Month.notes_fraction(Orientation::Portrait), 0.085);
        assert_eq!(KindTag::Month.notes_fraction(Orientation::Landscape), 0.25);
    }

    #[test]
    fn test_state_order() {
        assert!(BuildState::Surfaced > BuildState::Linked);
        assert_eq!(
            BuildState::Annotated.predecessor(),
            Some(BuildState::ChildrenBuilt)
        );
        assert_eq!(BuildState::Unbuilt.predecessor(), None);
    }
}
