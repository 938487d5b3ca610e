//! Child construction and sibling linking
//!
//! A node's children are created in temporal order and threaded into the
//! sibling chain of their kind. The chain crosses parent boundaries: the
//! first month of a year follows the last month of the previous year.

use chrono::Datelike;

use crate::calendar::{Calendar, DateFormat, leading_skip, ymd};
use crate::constants::MONTHS_PER_YEAR;
use crate::types::Result;

use super::{BuildState, NodeId, PageKind, PageTree};

/// A child about to be created
#[derive(Debug, Clone, PartialEq)]
pub struct ChildSpec {
    pub kind: PageKind,
    pub full_title: String,
    pub grid_label: String,
}

/// Describe the children a node of `kind` owns, in temporal order.
pub fn child_specs(kind: &PageKind, calendar: &dyn Calendar) -> Result<Vec<ChildSpec>> {
    match *kind {
        PageKind::Main {
            start_year,
            num_years,
            first_day_of_week,
        } => (0..num_years)
            .map(|offset| {
                let year = start_year + offset as i32;
                let label = calendar.format(ymd(year, 1, 1)?, DateFormat::Year);
                Ok(ChildSpec {
                    kind: PageKind::Year {
                        year,
                        first_day_of_week,
                    },
                    full_title: label.clone(),
                    grid_label: label,
                })
            })
            .collect(),
        PageKind::Year {
            year,
            first_day_of_week,
        } => (1..=MONTHS_PER_YEAR as u32)
            .map(|month| {
                let first = ymd(year, month, 1)?;
                Ok(ChildSpec {
                    kind: PageKind::Month {
                        first,
                        first_day_of_week,
                        leading_skip: leading_skip(calendar, first, first_day_of_week),
                    },
                    full_title: calendar.format(first, DateFormat::MonthTitle),
                    grid_label: calendar.format(first, DateFormat::MonthLabel),
                })
            })
            .collect(),
        PageKind::Month { first, .. } => Ok(calendar
            .days_of_month(first.year(), first.month())?
            .into_iter()
            .map(|date| ChildSpec {
                kind: PageKind::Day { date },
                full_title: calendar.format(date, DateFormat::DayTitle),
                grid_label: calendar.format(date, DateFormat::DayLabel),
            })
            .collect()),
        PageKind::Week { .. } | PageKind::Day { .. } => Ok(Vec::new()),
    }
}

/// Create the children of `parent`, link them into their sibling chain and
/// move each of them to `Linked`.
///
/// The first child's predecessor is the last child of the nearest node to
/// the left of `parent` that has children, so a chain never breaks at a
/// parent boundary.
pub fn build_children(
    tree: &mut PageTree,
    parent: NodeId,
    calendar: &dyn Calendar,
) -> Result<Vec<NodeId>> {
    let specs = child_specs(tree.node(parent).kind(), calendar)?;
    let mut previous = last_child_to_the_left(tree, parent);
    let mut created = Vec::with_capacity(specs.len());

    for spec in specs {
        let id = tree.add_child(parent, spec.kind, spec.full_title, spec.grid_label);
        if let Some(left) = previous {
            tree.link_siblings(left, id);
        }
        tree.advance(id, BuildState::Linked)?;
        previous = Some(id);
        created.push(id);
    }

    log::debug!(
        "Built {} children for {}",
        created.len(),
        tree.describe(parent)
    );
    Ok(created)
}

fn last_child_to_the_left(tree: &PageTree, node: NodeId) -> Option<NodeId> {
    let mut current = tree.node(node).left();
    while let Some(id) = current {
        if let Some(&last) = tree.node(id).children().last() {
            return Some(last);
        }
        current = tree.node(id).left();
    }
    None
}
