pub mod calendar;
pub mod constants;
pub mod layout;
mod options;
pub mod planner;
pub mod render;
mod stats;
pub mod tree;
mod types;

pub use calendar::{Calendar, ChronoCalendar, DateFormat};
pub use options::*;
pub use planner::{
    Planner, build_planner, generate_planner, load_pdf, pdf_bytes, save_pdf,
};
pub use render::{PlannerDocument, Surface, SurfaceHandle};
pub use stats::calculate_statistics;
pub use tree::{BuildState, KindTag, NodeId, PageKind, PageTree};
pub use types::*;
