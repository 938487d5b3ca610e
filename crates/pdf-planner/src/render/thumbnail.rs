//! Miniature renderings of pages inside their parent's grid

use crate::calendar::week_columns;
use crate::constants::*;
use crate::layout::{GridEntry, GridSpec, LayoutContext, Region, draw_grid};
use crate::tree::{NodeId, PageKind};
use crate::types::Result;

use super::Surface;

/// Sizing of a month's weekday header and day grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthGridStyle {
    pub padding: f32,
    pub label_font_size: f32,
    /// Show "M" instead of "Mon" in the header
    pub initial_only: bool,
}

impl MonthGridStyle {
    /// Style of the grids on the month's own page
    pub fn page() -> Self {
        Self {
            padding: GRID_PADDING,
            label_font_size: GRID_LABEL_FONT_SIZE,
            initial_only: false,
        }
    }

    /// Style of the grids in a month thumbnail
    pub fn thumbnail() -> Self {
        Self {
            padding: THUMBNAIL_GRID_PADDING,
            label_font_size: THUMBNAIL_LABEL_FONT_SIZE,
            initial_only: true,
        }
    }
}

/// Draw a month's weekday header into `header` and its linked day grid into
/// `days`.
///
/// Does nothing for nodes that are not months.
pub fn draw_month_grids(
    surface: &mut dyn Surface,
    ctx: LayoutContext<'_>,
    month: NodeId,
    header: Region,
    days: Region,
    style: MonthGridStyle,
    page_height: f32,
) -> Result<()> {
    let node = ctx.tree.node(month);
    let PageKind::Month {
        first_day_of_week,
        leading_skip,
        ..
    } = *node.kind()
    else {
        return Ok(());
    };

    let weekdays: Vec<GridEntry> = week_columns(first_day_of_week)
        .map(|day| GridEntry::Label(ctx.calendar.weekday_name(day, style.initial_only)))
        .collect();
    let header_spec = GridSpec::new(1, DAYS_PER_WEEK, page_height)
        .with_padding(style.padding)
        .with_label_font_size(style.label_font_size)
        .with_centered_labels();
    draw_grid(surface, ctx, header, &header_spec, &weekdays)?;

    let day_entries: Vec<GridEntry> = node.children().iter().copied().map(GridEntry::Node).collect();
    let days_spec = GridSpec::new(MONTH_GRID_ROWS, DAYS_PER_WEEK, page_height)
        .with_skip(leading_skip)
        .with_links()
        .with_padding(style.padding)
        .with_label_font_size(style.label_font_size)
        .with_centered_labels();
    draw_grid(surface, ctx, days, &days_spec, &day_entries)?;

    Ok(())
}

/// Draw a miniature of `node` into `region`.
///
/// Only months have a miniature; every other kind draws nothing. Failures
/// are logged rather than returned so a broken thumbnail never stops the
/// enclosing grid.
pub fn draw_thumbnail(
    surface: &mut dyn Surface,
    ctx: LayoutContext<'_>,
    region: Region,
    node: NodeId,
    page_height: f32,
) {
    match ctx.tree.node(node).kind() {
        PageKind::Month { .. } => {
            let split = (region.y_start + THUMBNAIL_HEADER_HEIGHT).min(region.y_stop);
            let header = Region::new(region.x_start, region.y_start, region.x_stop, split);
            let days = Region::new(region.x_start, split, region.x_stop, region.y_stop);
            let style = MonthGridStyle::thumbnail();
            if let Err(e) = draw_month_grids(surface, ctx, node, header, days, style, page_height)
            {
                log::warn!(
                    "Skipping thumbnail of {}: {}",
                    ctx.tree.describe(node),
                    e
                );
            }
        }
        PageKind::Main { .. }
        | PageKind::Year { .. }
        | PageKind::Week { .. }
        | PageKind::Day { .. } => {}
    }
}
