//! Grid layout
//!
//! This module partitions a region into `rows x cols` cells, places a
//! sequence of entries into them in row-major order, and wires each placed
//! cell to the page of its entry.

use crate::constants::{FILL_LIGHT, STROKE_BLACK};
use crate::render::{Surface, SurfaceHandle, draw_thumbnail};
use crate::tree::PageTree;
use crate::types::{PlannerError, Result};

use super::{
    CellLink, GridCell, GridEntry, GridPlan, GridReport, GridSpec, LayoutContext, Region,
    centered_baseline_y, centered_text_x,
};

/// Line width of the separators between rows
const ROW_SEPARATOR_WIDTH: f32 = 2.0;

/// Line width of the separators between columns
const COLUMN_SEPARATOR_WIDTH: f32 = 1.0;

/// Distance from the top of a cell to a hanging label's baseline, as a
/// multiple of the label font size
const LABEL_BASELINE_RATIO: f32 = 1.2;

// =============================================================================
// Planning
// =============================================================================

/// Compute where each of `entry_count` entries lands in the grid.
///
/// Cells are walked row-major (top row first, left cell first). The first
/// `spec.skip` cells stay empty; placement stops once every entry is placed.
///
/// # Errors
/// `LayoutOverflow` when `skip + entry_count` exceeds the number of cells.
pub fn plan_grid(region: Region, spec: &GridSpec, entry_count: usize) -> Result<GridPlan> {
    // Sizes too large to count cannot fit either
    let fits = match (spec.skip.checked_add(entry_count), spec.cell_count()) {
        (Some(needed), Some(cells)) => needed <= cells,
        _ => false,
    };
    if !fits {
        return Err(PlannerError::LayoutOverflow {
            rows: spec.rows,
            cols: spec.cols,
            skip: spec.skip,
            count: entry_count,
        });
    }

    let (cell_width, cell_height) = if spec.rows == 0 || spec.cols == 0 {
        (0.0, 0.0)
    } else {
        (
            region.width() / spec.cols as f32,
            region.height() / spec.rows as f32,
        )
    };

    let mut cells = Vec::with_capacity(entry_count);
    let mut skip = spec.skip;

    // Integer row/col bounds keep float step accumulation from adding a cell
    'rows: for row in 0..spec.rows {
        for col in 0..spec.cols {
            if cells.len() == entry_count {
                break 'rows;
            }
            if skip > 0 {
                skip -= 1;
                continue;
            }

            let x = region.x_start + col as f32 * cell_width;
            let y = region.y_start + row as f32 * cell_height;
            let area = Region::new(x, y, x + cell_width, y + cell_height).inset(spec.padding);

            cells.push(GridCell {
                index: row * spec.cols + col,
                row,
                col,
                area,
                entry: cells.len(),
            });
        }
    }

    Ok(GridPlan {
        cell_width,
        cell_height,
        cells,
    })
}

// =============================================================================
// Drawing
// =============================================================================

/// Draw a grid of entries onto `surface`.
///
/// Every placed entry gets its label centered horizontally in its cell. With
/// `spec.create_links`, node entries also get a shaded clickable area that
/// jumps to the node's page; with `spec.thumbnails` that area shrinks to a
/// strip holding the label, and the node's miniature is drawn below it.
///
/// Nothing is drawn when the grid overflows or when a link target has no
/// page yet: both are checked before the first surface call.
pub fn draw_grid(
    surface: &mut dyn Surface,
    ctx: LayoutContext<'_>,
    region: Region,
    spec: &GridSpec,
    entries: &[GridEntry],
) -> Result<GridReport> {
    let plan = plan_grid(region, spec, entries.len())?;

    let targets = entries
        .iter()
        .map(|entry| match entry {
            GridEntry::Node(id) if spec.create_links => ctx.tree.surface_of(*id).map(Some),
            _ => Ok(None),
        })
        .collect::<Result<Vec<Option<SurfaceHandle>>>>()?;

    let size = spec.label_font_size;
    let mut links = Vec::new();

    for cell in &plan.cells {
        let entry = &entries[cell.entry];
        let label = entry_label(ctx.tree, entry);

        let label_area = if spec.thumbnails {
            cell.area.top_strip(size * 2.0)
        } else {
            cell.area
        };

        if let Some(target) = targets[cell.entry] {
            let rect = label_area.to_pdf(spec.page_height);
            surface.fill_rect(rect, FILL_LIGHT);
            surface.link(rect, target);
            links.push(CellLink { rect, target });
        }

        let x = centered_text_x(surface, label, size, label_area.x_start, label_area.x_stop);
        let baseline = if spec.center_labels {
            centered_baseline_y(size, label_area.y_start, label_area.y_stop)
        } else {
            label_area.y_start + size * LABEL_BASELINE_RATIO
        };
        surface.show_text(x, spec.page_height - baseline, size, label);

        if spec.thumbnails {
            if let GridEntry::Node(id) = entry {
                let below_label = Region::new(
                    cell.area.x_start,
                    label_area.y_stop,
                    cell.area.x_stop,
                    cell.area.y_stop,
                );
                draw_thumbnail(surface, ctx, below_label, *id, spec.page_height);
            }
        }
    }

    draw_separators(surface, region, spec, &plan);

    Ok(GridReport { plan, links })
}

fn entry_label<'a>(tree: &'a PageTree, entry: &'a GridEntry) -> &'a str {
    match entry {
        GridEntry::Node(id) => tree.node(*id).grid_label(),
        GridEntry::Label(text) => text,
    }
}

/// Draw one line per row boundary and one per interior column boundary.
fn draw_separators(surface: &mut dyn Surface, region: Region, spec: &GridSpec, plan: &GridPlan) {
    let page_height = spec.page_height;
    surface.set_gray_stroke(STROKE_BLACK);

    surface.set_line_width(ROW_SEPARATOR_WIDTH);
    for row in 0..spec.rows {
        let y = page_height - (region.y_start + row as f32 * plan.cell_height);
        surface.line(region.x_start, y, region.x_stop, y);
    }

    surface.set_line_width(COLUMN_SEPARATOR_WIDTH);
    for col in 1..spec.cols {
        let x = region.x_start + col as f32 * plan.cell_width;
        surface.line(
            x,
            page_height - region.y_start,
            x,
            page_height - region.y_stop,
        );
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region::new(0.0, 0.0, 700.0, 600.0)
    }

    #[test]
    fn test_month_grid_exactly_filled() {
        // January 2021 starts on a Friday; Sunday-first grid skips 5 cells
        let spec = GridSpec::new(6, 7, 1000.0).with_skip(5);
        let plan = plan_grid(region(), &spec, 31).unwrap();

        assert_eq!(plan.cells.len(), 31);
        assert_eq!(plan.cells[0].index, 5);
        assert_eq!((plan.cells[0].row, plan.cells[0].col), (0, 5));
        assert_eq!(plan.cells[1].index, 6);
        assert_eq!(plan.cells[29].index, 34);
        assert_eq!(plan.cells[30].index, 35);
        assert_eq!((plan.cells[30].row, plan.cells[30].col), (5, 0));
    }

    #[test]
    fn test_year_grid_fills_all_cells() {
        let spec = GridSpec::new(3, 4, 1000.0);
        let plan = plan_grid(region(), &spec, 12).unwrap();

        assert_eq!(plan.cells.len(), 12);
        let indices: Vec<usize> = plan.cells.iter().map(|c| c.index).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
        assert_eq!(plan.cell_width, 175.0);
        assert_eq!(plan.cell_height, 200.0);
    }

    #[test]
    fn test_trailing_cells_left_blank() {
        let spec = GridSpec::new(6, 7, 1000.0).with_skip(6);
        let plan = plan_grid(region(), &spec, 31).unwrap();

        assert_eq!(plan.cells.len(), 31);
        assert_eq!(plan.cells.first().unwrap().index, 6);
        // 42 cells, 6 skipped, 31 placed: the last 5 stay empty
        assert_eq!(plan.cells.last().unwrap().index, 36);
    }

    #[test]
    fn test_overflow_reports_counts() {
        let spec = GridSpec::new(5, 7, 1000.0).with_skip(5);
        match plan_grid(region(), &spec, 31) {
            Err(PlannerError::LayoutOverflow {
                rows,
                cols,
                skip,
                count,
            }) => {
                assert_eq!((rows, cols, skip, count), (5, 7, 5, 31));
            }
            other => panic!("Expected LayoutOverflow, got {:?}", other),
        }
    }

    #[test]
    fn test_padding_applied_to_cells() {
        let spec = GridSpec::new(1, 2, 1000.0).with_padding(10.0);
        let plan = plan_grid(Region::new(100.0, 50.0, 300.0, 150.0), &spec, 2).unwrap();

        assert_eq!(plan.cells[0].area, Region::new(110.0, 60.0, 190.0, 140.0));
        assert_eq!(plan.cells[1].area, Region::new(210.0, 60.0, 290.0, 140.0));
    }

    #[test]
    fn test_empty_grid_is_valid() {
        let spec = GridSpec::new(0, 1, 1000.0);
        let plan = plan_grid(region(), &spec, 0).unwrap();
        assert!(plan.cells.is_empty());
    }

    #[test]
    fn test_plan_is_deterministic() {
        let spec = GridSpec::new(6, 7, 1000.0).with_skip(3);
        let first = plan_grid(region(), &spec, 30).unwrap();
        let second = plan_grid(region(), &spec, 30).unwrap();
        assert_eq!(first, second);
    }
}
