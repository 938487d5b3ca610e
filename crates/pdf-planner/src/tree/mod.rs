//! The page hierarchy
//!
//! This module holds the planner's structure:
//! - Page nodes, their kinds and build lifecycle
//! - The arena that owns them
//! - Child construction and sibling chain linking

mod arena;
mod builder;
mod node;

pub use arena::*;
pub use builder::*;
pub use node::*;
