//! Planner generation
//!
//! This module orchestrates the build:
//! 1. Create the main page from the options
//! 2. Depth-first, in sibling order: create each page, draw its own
//!    content, then create and build its children
//! 3. Top-down: draw navigation and child grids, which link to pages that
//!    now all exist
//! 4. Write the pages into a PDF document

mod io;
mod pages;

pub use io::{load_pdf, pdf_bytes, save_pdf};
pub use pages::{annotate_page, compose_page};

use crate::calendar::{Calendar, ChronoCalendar};
use crate::layout::LayoutContext;
use crate::options::PlannerOptions;
use crate::render::PlannerDocument;
use crate::tree::{BuildState, Geometry, KindTag, NodeId, PageKind, PageTree, build_children};
use crate::types::*;
use lopdf::Document;

/// A fully built planner: its page hierarchy and the rendered pages
#[derive(Debug)]
pub struct Planner {
    tree: PageTree,
    document: PlannerDocument,
    title: String,
}

impl Planner {
    pub fn tree(&self) -> &PageTree {
        &self.tree
    }

    pub fn document(&self) -> &PlannerDocument {
        &self.document
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Write the pages into a PDF document
    pub fn into_pdf(self) -> Document {
        self.document.finish(&self.title)
    }
}

/// Main planner generation function
pub async fn generate_planner(options: &PlannerOptions) -> Result<Document> {
    options.validate()?;

    let options = options.clone();

    tokio::task::spawn_blocking(move || {
        build_planner(&options, &ChronoCalendar).map(Planner::into_pdf)
    })
    .await?
}

/// Build every page of a planner.
///
/// # Errors
/// `Config` for invalid options. `NotSurfaced` and `InvalidTransition` mean
/// a page was linked or advanced out of order and abort the build.
pub fn build_planner(options: &PlannerOptions, calendar: &dyn Calendar) -> Result<Planner> {
    options.validate()?;

    let (width, height) = options.page_dimensions();
    log::info!(
        "Building planner '{}': {} year(s) from {}, {} x {} pt",
        options.title,
        options.num_years,
        options.start_year,
        width,
        height
    );

    let geometry = Geometry::new(
        width,
        height,
        options.margin_pt,
        options.handedness,
        options.orientation,
        KindTag::Main,
    );

    let mut tree = PageTree::new();
    let root = tree.add_root(
        PageKind::Main {
            start_year: options.start_year,
            num_years: options.num_years,
            first_day_of_week: options.first_day_of_week,
        },
        options.title.clone(),
        options.title.clone(),
        geometry,
    );
    tree.advance(root, BuildState::Linked)?;

    let mut document = PlannerDocument::new();
    surface_pass(&mut tree, &mut document, calendar, root)?;
    annotate_pass(&mut tree, &mut document, calendar, root)?;

    log::info!(
        "Built {} pages with {} links",
        document.page_count(),
        document.link_count()
    );

    Ok(Planner {
        tree,
        document,
        title: options.title.clone(),
    })
}

/// Linked -> Surfaced -> ChildrenBuilt, depth-first in sibling order.
fn surface_pass(
    tree: &mut PageTree,
    document: &mut PlannerDocument,
    calendar: &dyn Calendar,
    id: NodeId,
) -> Result<()> {
    let geometry = *tree.node(id).geometry();
    let handle = document.allocate_surface(geometry.page_width, geometry.page_height);
    tree.mark_surfaced(id, handle)?;
    compose_page(
        document.surface_mut(handle),
        LayoutContext::new(tree, calendar),
        id,
    )?;
    log::debug!("Surfaced {} as page {}", tree.describe(id), handle.index() + 1);

    for child in build_children(tree, id, calendar)? {
        surface_pass(tree, document, calendar, child)?;
    }

    tree.advance(id, BuildState::ChildrenBuilt)
}

/// ChildrenBuilt -> Annotated, parents before children.
fn annotate_pass(
    tree: &mut PageTree,
    document: &mut PlannerDocument,
    calendar: &dyn Calendar,
    id: NodeId,
) -> Result<()> {
    let handle = tree.surface_of(id)?;
    annotate_page(
        document.surface_mut(handle),
        LayoutContext::new(tree, calendar),
        id,
    )?;
    tree.advance(id, BuildState::Annotated)?;
    log::debug!("Annotated {}", tree.describe(id));

    let children = tree.node(id).children().to_vec();
    for child in children {
        annotate_pass(tree, document, calendar, child)?;
    }
    Ok(())
}
