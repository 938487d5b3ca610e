//! Kind-specific page content
//!
//! [`compose_page`] draws what a page shows on its own once its surface
//! exists. [`annotate_page`] adds everything that links to other pages and
//! therefore has to wait until those pages exist too.

use crate::constants::*;
use crate::layout::{GridEntry, GridSpec, LayoutContext, Region, draw_grid};
use crate::render::{
    MonthGridStyle, Surface, draw_heading, draw_margin, draw_month_grids, draw_navigation,
    draw_notes_section, draw_title, fill_dots,
};
use crate::tree::{NodeId, PageKind, PageTree};
use crate::types::{Orientation, PlannerError, Result};

/// Draw the margin, title and the kind's own sections.
///
/// # Errors
/// `NotSurfaced` if the parent page does not exist yet.
pub fn compose_page(surface: &mut dyn Surface, ctx: LayoutContext<'_>, id: NodeId) -> Result<()> {
    let tree = ctx.tree;
    let node = tree.node(id);
    let geometry = node.geometry();
    let page_height = geometry.page_height;
    let content = geometry.content_region();

    let back_link = node.parent().map(|parent| tree.surface_of(parent)).transpose()?;

    draw_margin(surface, geometry);
    draw_title(surface, node.full_title(), geometry, back_link);

    match node.kind() {
        PageKind::Main { .. } => {
            draw_notes_section(surface, geometry);
            draw_heading(surface, "Years", content.x_start, content.x_stop, page_height);
        }
        PageKind::Year { .. } | PageKind::Week { .. } => {
            draw_notes_section(surface, geometry);
        }
        PageKind::Month { .. } => {
            // Portrait months need the width for the day grid
            if geometry.orientation != Orientation::Portrait {
                draw_notes_section(surface, geometry);
            }
        }
        PageKind::Day { .. } => {
            draw_notes_section(surface, geometry);
            draw_heading(surface, "Tasks", content.x_start, content.x_stop, page_height);
            let tasks = Region::new(
                content.x_start + TASK_AREA_INSET,
                TITLE_BAND_HEIGHT + 2.0 * HEADING_FONT_SIZE,
                content.x_stop - TASK_AREA_RIGHT_GUTTER,
                page_height - BOTTOM_GUTTER,
            );
            fill_dots(surface, tasks, DOT_SPACING, page_height);
        }
    }

    Ok(())
}

/// Draw navigation arrows and the grid linking the page to its children.
///
/// A grid that does not fit is logged and skipped.
///
/// # Errors
/// `NotSurfaced` if a sibling or child page does not exist yet.
pub fn annotate_page(surface: &mut dyn Surface, ctx: LayoutContext<'_>, id: NodeId) -> Result<()> {
    let tree = ctx.tree;
    let node = tree.node(id);
    let geometry = node.geometry();
    let page_height = geometry.page_height;
    let content = geometry.content_region();

    let left = node.left().map(|left| tree.surface_of(left)).transpose()?;
    let right = node.right().map(|right| tree.surface_of(right)).transpose()?;
    draw_navigation(surface, node.full_title(), geometry, left, right);

    let children: Vec<GridEntry> = node.children().iter().copied().map(GridEntry::Node).collect();

    match *node.kind() {
        PageKind::Main { num_years, .. } => {
            let region = Region::new(
                content.x_start + YEAR_GRID_INSET,
                TITLE_BAND_HEIGHT + HEADING_FONT_SIZE + YEAR_GRID_INSET,
                content.x_stop - YEAR_GRID_INSET,
                page_height,
            );
            let spec = GridSpec::new(num_years, 1, page_height)
                .with_links()
                .with_centered_labels();
            skip_overflow(draw_grid(surface, ctx, region, &spec, &children), tree, id)?;
        }
        PageKind::Year { .. } => {
            let (rows, cols) = match geometry.orientation {
                Orientation::Landscape => (3, 4),
                Orientation::Portrait => (4, 3),
            };
            let region = Region::new(
                content.x_start + MONTHS_GRID_INSET,
                MONTHS_GRID_TOP,
                content.x_stop - MONTHS_GRID_INSET,
                page_height - MONTHS_GRID_BOTTOM_GUTTER,
            );
            let spec = GridSpec::new(rows, cols, page_height)
                .with_links()
                .with_thumbnails();
            skip_overflow(draw_grid(surface, ctx, region, &spec, &children), tree, id)?;
        }
        PageKind::Month { .. } => {
            let header_stop = TITLE_BAND_HEIGHT + 2.0 * HEADING_FONT_SIZE;
            let header = Region::new(
                content.x_start + MONTH_GRID_INSET,
                TITLE_BAND_HEIGHT,
                content.x_stop - MONTH_GRID_INSET,
                header_stop,
            );
            let days = Region::new(
                content.x_start + MONTH_GRID_INSET,
                header_stop,
                content.x_stop - MONTH_GRID_INSET,
                page_height - MONTH_GRID_BOTTOM_GUTTER,
            );
            let drawn = draw_month_grids(
                surface,
                ctx,
                id,
                header,
                days,
                MonthGridStyle::page(),
                page_height,
            );
            skip_overflow(drawn, tree, id)?;
        }
        PageKind::Week { .. } | PageKind::Day { .. } => {}
    }

    Ok(())
}

/// Turn a grid overflow into a logged warning; pass every other error on.
fn skip_overflow<T>(result: Result<T>, tree: &PageTree, id: NodeId) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e @ PlannerError::LayoutOverflow { .. }) => {
            log::warn!("Skipping grid on {}: {}", tree.describe(id), e);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
