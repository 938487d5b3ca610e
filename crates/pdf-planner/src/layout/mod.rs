//! Layout calculation modules for planner pages
//!
//! This module handles the geometric side of page composition:
//! - Grid layout (cell partitioning, entry placement, cell links)
//! - Text measurement and centering

mod grid;
mod text;
mod types;

pub use grid::*;
pub use text::*;
pub use types::*;
