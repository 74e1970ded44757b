//! Node module for route tree representation.

use crate::model::route::RouteIndex;
use crate::model::tree::NodeIndex;

// =#========================================================================#=
// ROUTE TREE NODE
// =#========================================================================#=
/// Represents a node in a route tree.
///
/// A node can be either:
/// - **Group**: One segment of a group path, with label and ordered children
/// - **Leaf**: References one input route by its position in the route list
///
/// # Invariants
/// - `index` is the node's position in the tree arena
/// - `parent` is `None` exactly for forest roots; otherwise it is set once at
///   creation and always smaller than `index`
/// - `children` only grow by appending, in first-occurrence order
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum RouteTreeNode {
    /// Group heading for one path segment
    Group {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Segment name
        label: String,
        /// Index of the enclosing group, `None` at the forest root
        parent: Option<NodeIndex>,
        /// Indices of child groups and leaves, in first-occurrence order
        children: Vec<NodeIndex>,
    },
    /// Navigation item referencing a route
    Leaf {
        /// Index of this node in the tree arena
        index: NodeIndex,
        /// Index of the route in the input route list
        route_index: RouteIndex,
        /// Index of the enclosing group, `None` at the forest root
        parent: Option<NodeIndex>,
    },
}

impl RouteTreeNode {
    /// Creates a new group node without children.
    pub(crate) fn new_group(index: NodeIndex, label: String, parent: Option<NodeIndex>) -> Self {
        RouteTreeNode::Group {
            index,
            label,
            parent,
            children: Vec::new(),
        }
    }

    /// Creates a new leaf node for route `route_index`.
    pub(crate) fn new_leaf(index: NodeIndex, route_index: RouteIndex, parent: Option<NodeIndex>) -> Self {
        RouteTreeNode::Leaf {
            index,
            route_index,
            parent,
        }
    }

    /// Appends a child to this group.
    ///
    /// # Panics
    /// Panics if called on a leaf, which indicates a builder defect.
    pub(crate) fn push_child(&mut self, child: NodeIndex) {
        match self {
            RouteTreeNode::Group { children, .. } => children.push(child),
            RouteTreeNode::Leaf { index, .. } => panic!("leaf {index} can not have children"),
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        match self {
            RouteTreeNode::Group { index, .. } => *index,
            RouteTreeNode::Leaf { index, .. } => *index,
        }
    }

    /// Returns the index of the parent group, or `None` for forest roots.
    pub fn parent(&self) -> Option<NodeIndex> {
        match self {
            RouteTreeNode::Group { parent, .. } => *parent,
            RouteTreeNode::Leaf { parent, .. } => *parent,
        }
    }

    /// Returns the children of a group; empty for leaves.
    pub fn children(&self) -> &[NodeIndex] {
        match self {
            RouteTreeNode::Group { children, .. } => children.as_slice(),
            RouteTreeNode::Leaf { .. } => &[],
        }
    }

    /// Returns the label of a group, or `None` for leaves.
    pub fn label(&self) -> Option<&str> {
        match self {
            RouteTreeNode::Group { label, .. } => Some(label.as_str()),
            RouteTreeNode::Leaf { .. } => None,
        }
    }

    /// Returns the referenced route of a leaf, or `None` for groups.
    pub fn route_index(&self) -> Option<RouteIndex> {
        match self {
            RouteTreeNode::Group { .. } => None,
            RouteTreeNode::Leaf { route_index, .. } => Some(*route_index),
        }
    }

    /// Returns whether this node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, RouteTreeNode::Group { .. })
    }

    /// Returns whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, RouteTreeNode::Leaf { .. })
    }

    /// Returns whether this node is a forest root.
    pub fn is_root(&self) -> bool {
        self.parent().is_none()
    }
}
