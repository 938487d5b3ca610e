//! Arena owning every page node
//!
//! Ownership of the page hierarchy lives in one `Vec`; parent, child and
//! sibling references are [`NodeId`] handles into it. The arena is dropped
//! as a unit.

use crate::render::SurfaceHandle;
use crate::types::{PlannerError, Result};

use super::{BuildState, Geometry, KindTag, NodeId, PageKind, PageNode};

/// The page hierarchy of a planner
#[derive(Debug, Clone, Default)]
pub struct PageTree {
    nodes: Vec<PageNode>,
    root: Option<NodeId>,
}

impl PageTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the root node. A tree has at most one root; calling this again
    /// replaces which node is reported as the root.
    pub fn add_root(
        &mut self,
        kind: PageKind,
        full_title: impl Into<String>,
        grid_label: impl Into<String>,
        geometry: Geometry,
    ) -> NodeId {
        let id = self.push(kind, full_title.into(), grid_label.into(), geometry, None);
        self.root = Some(id);
        id
    }

    /// Create a node owned by `parent`, appended after its existing children.
    ///
    /// The child inherits the parent's geometry and starts `Unbuilt`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        kind: PageKind,
        full_title: impl Into<String>,
        grid_label: impl Into<String>,
    ) -> NodeId {
        let geometry = self.node(parent).geometry.inherit(kind.tag());
        let id = self.push(
            kind,
            full_title.into(),
            grid_label.into(),
            geometry,
            Some(parent),
        );
        self.nodes[parent.0].children.push(id);
        id
    }

    fn push(
        &mut self,
        kind: PageKind,
        full_title: String,
        grid_label: String,
        geometry: Geometry,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(PageNode {
            kind,
            full_title,
            grid_label,
            geometry,
            surface: None,
            parent,
            left: None,
            right: None,
            children: Vec::new(),
            state: BuildState::Unbuilt,
        });
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Access a node by id.
    ///
    /// # Panics
    /// If `id` was issued by another tree.
    pub fn node(&self, id: NodeId) -> &PageNode {
        &self.nodes[id.0]
    }

    pub fn get(&self, id: NodeId) -> Option<&PageNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in creation order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// All node ids of one kind, in creation order
    pub fn ids_of_kind(&self, tag: KindTag) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(move |&id| self.node(id).tag() == tag)
    }

    /// Thread `left` and `right` into the same sibling chain.
    pub fn link_siblings(&mut self, left: NodeId, right: NodeId) {
        self.nodes[left.0].right = Some(right);
        self.nodes[right.0].left = Some(left);
    }

    /// Walk a sibling chain rightwards starting at `first`.
    pub fn chain(&self, first: NodeId) -> SiblingChain<'_> {
        SiblingChain {
            tree: self,
            next: Some(first),
            remaining: self.nodes.len(),
        }
    }

    /// Human readable name of a node for diagnostics
    pub fn describe(&self, id: NodeId) -> String {
        let node = self.node(id);
        format!("{} page '{}'", node.tag().name(), node.full_title)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Move a node one step forward in its lifecycle.
    ///
    /// `Surfaced` is reached through [`PageTree::mark_surfaced`] instead.
    pub fn advance(&mut self, id: NodeId, to: BuildState) -> Result<()> {
        if to == BuildState::Surfaced {
            return Err(self.invalid_transition(id, to));
        }
        self.step(id, to)
    }

    /// Record the node's page and move it to `Surfaced`.
    pub fn mark_surfaced(&mut self, id: NodeId, surface: SurfaceHandle) -> Result<()> {
        if self.node(id).surface.is_some() {
            return Err(self.invalid_transition(id, BuildState::Surfaced));
        }
        self.step(id, BuildState::Surfaced)?;
        self.nodes[id.0].surface = Some(surface);
        Ok(())
    }

    fn step(&mut self, id: NodeId, to: BuildState) -> Result<()> {
        if to.predecessor() != Some(self.node(id).state) {
            return Err(self.invalid_transition(id, to));
        }
        self.nodes[id.0].state = to;
        Ok(())
    }

    fn invalid_transition(&self, id: NodeId, to: BuildState) -> PlannerError {
        PlannerError::InvalidTransition {
            node: self.describe(id),
            from: self.node(id).state,
            to,
        }
    }

    /// The node's page, which must exist before anything may link to it.
    ///
    /// # Errors
    /// `NotSurfaced` when the node has not reached `Surfaced` yet.
    pub fn surface_of(&self, id: NodeId) -> Result<SurfaceHandle> {
        self.node(id)
            .surface
            .ok_or_else(|| PlannerError::NotSurfaced {
                node: self.describe(id),
            })
    }
}

/// Iterator over a sibling chain, see [`PageTree::chain`]
pub struct SiblingChain<'a> {
    tree: &'a PageTree,
    next: Option<NodeId>,
    // Bounds the walk even if links were threaded into a cycle
    remaining: usize,
}

impl Iterator for SiblingChain<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.tree.node(current).right;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Handedness, Orientation};
    use chrono::{NaiveDate, Weekday};

    fn tree_with_year() -> (PageTree, NodeId, NodeId) {
        let mut tree = PageTree::new();
        let geometry = Geometry::new(
            1872.0,
            1404.0,
            120.0,
            Handedness::RightHanded,
            Orientation::Landscape,
            KindTag::Main,
        );
        let root = tree.add_root(
            PageKind::Main {
                start_year: 2021,
                num_years: 1,
                first_day_of_week: Weekday::Sun,
            },
            "Planner",
            "Planner",
            geometry,
        );
        let year = tree.add_child(
            root,
            PageKind::Year {
                year: 2021,
                first_day_of_week: Weekday::Sun,
            },
            "2021",
            "2021",
        );
        (tree, root, year)
    }

    #[test]
    fn test_add_child_inherits_geometry() {
        let (tree, root, year) = tree_with_year();
        assert_eq!(tree.node(root).children(), &[year]);
        assert_eq!(tree.node(year).parent(), Some(root));
        assert_eq!(tree.node(year).geometry().notes_fraction, 0.25);
        assert_eq!(tree.node(year).geometry().page_width, 1872.0);
        assert_eq!(tree.node(year).state(), BuildState::Unbuilt);
    }

    #[test]
    fn test_lifecycle_moves_one_step_at_a_time() {
        let (mut tree, root, _) = tree_with_year();
        assert!(tree.advance(root, BuildState::ChildrenBuilt).is_err());
        tree.advance(root, BuildState::Linked).unwrap();
        assert!(tree.advance(root, BuildState::Surfaced).is_err());
        tree.mark_surfaced(root, SurfaceHandle(0)).unwrap();
        tree.advance(root, BuildState::ChildrenBuilt).unwrap();
        tree.advance(root, BuildState::Annotated).unwrap();
        assert_eq!(tree.node(root).state(), BuildState::Annotated);
    }

    #[test]
    fn test_surface_set_exactly_once() {
        let (mut tree, root, _) = tree_with_year();
        tree.advance(root, BuildState::Linked).unwrap();
        tree.mark_surfaced(root, SurfaceHandle(0)).unwrap();
        let err = tree.mark_surfaced(root, SurfaceHandle(1)).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidTransition { .. }));
        assert_eq!(tree.surface_of(root).unwrap(), SurfaceHandle(0));
    }

    #[test]
    fn test_surface_of_unbuilt_node_fails() {
        let (tree, _, year) = tree_with_year();
        match tree.surface_of(year) {
            Err(PlannerError::NotSurfaced { node }) => assert!(node.contains("2021")),
            other => panic!("Expected NotSurfaced, got {:?}", other),
        }
    }

    #[test]
    fn test_chain_walks_right() {
        let (mut tree, root, year) = tree_with_year();
        let next = tree.add_child(
            root,
            PageKind::Day {
                date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            },
            "a",
            "a",
        );
        tree.link_siblings(year, next);
        let chain: Vec<NodeId> = tree.chain(year).collect();
        assert_eq!(chain, vec![year, next]);
    }

    #[test]
    fn test_chain_stops_on_cycle() {
        let (mut tree, root, year) = tree_with_year();
        tree.link_siblings(root, year);
        tree.link_siblings(year, root);
        assert_eq!(tree.chain(root).count(), tree.len());
    }
}
