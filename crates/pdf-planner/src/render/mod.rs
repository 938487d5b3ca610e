//! PDF rendering modules for planner pages
//!
//! This module handles everything that ends up on a page:
//! - The drawing surface trait and its content-stream implementation
//! - The document container that owns every page and writes the PDF
//! - Shared page furniture (titles, navigation, notes)
//! - Thumbnails drawn inside parent grids

mod canvas;
mod document;
mod sections;
mod surface;
mod thumbnail;

pub use canvas::{PageCanvas, PageLink};
pub use document::PlannerDocument;
pub use sections::*;
pub use surface::{Surface, SurfaceHandle};
pub use thumbnail::*;
