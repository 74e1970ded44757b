//! Provides the route tree representation.
//!
//! * [RouteTree] - Forest of groups and leaves using the arena pattern
//! * [NodeIndex] as type used to index nodes in the tree
//! * [PreOrderIter] for depth-first traversal in display order

use crate::model::item::RouteTreeItem;
use crate::model::node::RouteTreeNode;
use crate::model::route::{Route, RouteIndex};
use std::collections::HashSet;
use std::fmt::Write;

/// Index of a node in a route tree (arena).
pub type NodeIndex = usize;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A forest of route groups and leaves represented using the arena pattern
/// on [RouteTreeNode].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// Groups own an append-only list of child indices, so no node is shared
/// and no reference counting is needed.
///
/// # Structure
/// - All nodes (groups and leaves) are stored in the arena, in creation order.
///   A parent is therefore always stored before its children.
/// - Forest roots are kept in first-occurrence order.
/// - Leaves reference routes by [RouteIndex]; the tree never copies a route.
///
/// # Construction
/// Trees are produced by a [RouteTreeBuilder](crate::model::RouteTreeBuilder)
/// and are immutable afterwards. Test validity with [`RouteTree::is_valid()`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTree {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<RouteTreeNode>,

    /// Indices of the forest roots, in first-occurrence order
    roots: Vec<NodeIndex>,
}

// ============================================================================
// Construction (crate)
// ============================================================================
impl RouteTree {
    /// Creates an empty tree with capacity for `num_routes` leaves.
    pub(crate) fn with_capacity(num_routes: usize) -> Self {
        RouteTree {
            nodes: Vec::with_capacity(num_routes),
            roots: Vec::new(),
        }
    }

    /// Adds a group labeled `label` as last child of `parent`, or as last
    /// forest root if `parent` is `None`.
    ///
    /// # Returns
    /// The index of the newly created group.
    pub(crate) fn add_group(&mut self, label: &str, parent: Option<NodeIndex>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes
            .push(RouteTreeNode::new_group(index, label.to_string(), parent));
        self.attach(index, parent);
        index
    }

    /// Adds a leaf for route `route_index` as last child of `parent`, or as
    /// last forest root if `parent` is `None`.
    ///
    /// # Returns
    /// The index of the newly created leaf.
    pub(crate) fn add_leaf(&mut self, route_index: RouteIndex, parent: Option<NodeIndex>) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes
            .push(RouteTreeNode::new_leaf(index, route_index, parent));
        self.attach(index, parent);
        index
    }

    fn attach(&mut self, index: NodeIndex, parent: Option<NodeIndex>) {
        match parent {
            Some(parent) => self.nodes[parent].push_child(index),
            None => self.roots.push(index),
        }
    }
}

// ============================================================================
// Getters / Accessors, etc. (pub)
// ============================================================================
impl RouteTree {
    /// Returns the indices of the forest roots, in first-occurrence order.
    pub fn roots(&self) -> &[NodeIndex] {
        &self.roots
    }

    /// Returns an iterator over the forest root nodes.
    pub fn root_nodes(&self) -> impl Iterator<Item = &RouteTreeNode> {
        self.roots.iter().map(|&index| &self.nodes[index])
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &RouteTreeNode {
        &self[index]
    }

    /// Returns a reference to the node at the given index,
    /// or `None` if `index` is out of bounds.
    pub fn get(&self, index: NodeIndex) -> Option<&RouteTreeNode> {
        self.nodes.get(index)
    }

    /// Returns an iterator over the children of the node at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn children_of(&self, index: NodeIndex) -> impl Iterator<Item = &RouteTreeNode> {
        self[index].children().iter().map(|&child| &self.nodes[child])
    }

    /// Returns the route a leaf references, or `None` for groups and
    /// leaves whose route index is outside `routes`.
    pub fn route_of<'r>(&self, index: NodeIndex, routes: &'r [Route]) -> Option<&'r Route> {
        self.get(index)?.route_index().and_then(|r| routes.get(r))
    }

    /// Returns whether the tree has no nodes, i.e. was built from no routes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of leaves in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_leaf()).count()
    }

    /// Returns the number of groups in this tree.
    pub fn num_groups(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_group()).count()
    }

    /// Returns the depth of the node at `index`; forest roots have depth 0.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn depth_of(&self, index: NodeIndex) -> usize {
        self.ancestors(index).count()
    }

    /// Returns the labels of the groups enclosing the node at `index`,
    /// from outermost to innermost. For a group, its own label is included.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn group_labels_of(&self, index: NodeIndex) -> Vec<&str> {
        let mut labels: Vec<&str> = self[index].label().into_iter().collect();
        labels.extend(self.ancestors(index).filter_map(|n| n.label()));
        labels.reverse();
        labels
    }

    /// Returns the route indices of all leaves in display order (pre-order).
    pub fn leaf_indices(&self) -> Vec<RouteIndex> {
        self.pre_order_iter()
            .filter_map(|n| n.route_index())
            .collect()
    }

    /// Converts this tree into nested [RouteTreeItem]s, the shape consumed
    /// by renderers and used for serialization.
    pub fn to_items(&self) -> Vec<RouteTreeItem> {
        // Children are stored after their parent, so building in reverse
        // creation order completes every child before its parent.
        let mut built: Vec<Option<RouteTreeItem>> = std::iter::repeat_with(|| None)
            .take(self.nodes.len())
            .collect();

        for node in self.nodes.iter().rev() {
            let item = match node {
                RouteTreeNode::Group { label, children, .. } => RouteTreeItem::Group {
                    label: label.clone(),
                    children: children
                        .iter()
                        .filter_map(|&child| built[child].take())
                        .collect(),
                },
                RouteTreeNode::Leaf { route_index, .. } => RouteTreeItem::Route {
                    index: *route_index,
                },
            };
            built[node.index()] = Some(item);
        }

        self.roots
            .iter()
            .filter_map(|&root| built[root].take())
            .collect()
    }

    fn ancestors(&self, index: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self[index].parent(),
        }
    }
}

// ============================================================================
// Validation (pub)
// ============================================================================
impl RouteTree {
    /// Validates the tree structure for a route list of length `num_routes`.
    ///
    /// Checks:
    /// - All node indices match their position in the arena
    /// - Forest roots have no parent and appear once in the root list
    /// - Every other node has a parent stored before it, listing it exactly once
    /// - Group labels are non-empty and unique among siblings
    /// - Leaves cover each route index in `0..num_routes` exactly once
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self, num_routes: usize) -> bool {
        let mut seen_routes = vec![false; num_routes];
        let mut seen_roots = HashSet::with_capacity(self.roots.len());

        for &root in &self.roots {
            if root >= self.nodes.len() || !self.nodes[root].is_root() || !seen_roots.insert(root) {
                return false;
            }
        }

        for (index, node) in self.nodes.iter().enumerate() {
            // Check node index matches its arena position
            if node.index() != index {
                return false;
            }

            // Check parent reference, which also rules out cycles
            match node.parent() {
                None => {
                    if !seen_roots.contains(&index) {
                        return false;
                    }
                }
                Some(parent) => {
                    if parent >= index || !self.nodes[parent].is_group() {
                        return false;
                    }
                    let occurrences = self.nodes[parent]
                        .children()
                        .iter()
                        .filter(|&&child| child == index)
                        .count();
                    if occurrences != 1 {
                        return false;
                    }
                }
            }

            match node {
                RouteTreeNode::Group { label, children, .. } => {
                    if label.is_empty() {
                        return false;
                    }
                    let mut sibling_labels = HashSet::new();
                    for &child in children {
                        let Some(child_node) = self.nodes.get(child) else {
                            return false;
                        };
                        if child_node.parent() != Some(index) {
                            return false;
                        }
                        if let Some(child_label) = child_node.label() {
                            if !sibling_labels.insert(child_label) {
                                return false;
                            }
                        }
                    }
                }
                RouteTreeNode::Leaf { route_index, .. } => {
                    match seen_routes.get_mut(*route_index) {
                        Some(seen) if !*seen => *seen = true,
                        _ => return false,
                    }
                }
            }
        }

        // Root groups share one namespace as well
        let mut root_labels = HashSet::new();
        for node in self.root_nodes() {
            if let Some(label) = node.label() {
                if !root_labels.insert(label) {
                    return false;
                }
            }
        }

        seen_routes.into_iter().all(|seen| seen)
    }
}

impl std::ops::Index<NodeIndex> for RouteTree {
    type Output = RouteTreeNode;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Printing (pub)
// ============================================================================
impl RouteTree {
    /// Returns a visual outline of the tree, resolving leaves into `routes`.
    ///
    /// Groups show their label followed by `/`, leaves show the route label
    /// and path. Leaves whose route is missing show `?`.
    ///
    /// # Example Output
    /// ```text
    /// ├─ Intro (intro)
    /// └─ Inputs/
    ///    ├─ Input Usage (inputs-usage)
    ///    └─ Buttons/
    ///       ├─ Push Button (push-button)
    ///       └─ Reset Button (reset-button)
    /// ```
    pub fn to_outline(&self, routes: &[Route]) -> String {
        let mut outline = String::new();

        // (node, prefix, is last sibling); roots pushed reversed so the
        // first root is written first
        let mut stack: Vec<(NodeIndex, String, bool)> = Vec::with_capacity(self.roots.len());
        let num_roots = self.roots.len();
        for (position, &root) in self.roots.iter().enumerate().rev() {
            stack.push((root, String::new(), position + 1 == num_roots));
        }

        while let Some((index, prefix, is_last)) = stack.pop() {
            self.write_node(&mut outline, &mut stack, index, &prefix, is_last, routes);
        }
        outline
    }

    /// Prints the outline of [to_outline](Self::to_outline) to the console.
    pub fn print_tree(&self, routes: &[Route]) {
        print!("{}", self.to_outline(routes));
    }

    /// Helper function to write a single node line and schedule its children.
    fn write_node(
        &self,
        out: &mut String,
        stack: &mut Vec<(NodeIndex, String, bool)>,
        index: NodeIndex,
        prefix: &str,
        is_last: bool,
        routes: &[Route],
    ) {
        let connector = if is_last { "└─ " } else { "├─ " };

        // Writing into a String can not fail
        match &self[index] {
            RouteTreeNode::Leaf { route_index, .. } => match routes.get(*route_index) {
                Some(route) => {
                    let _ = writeln!(out, "{prefix}{connector}{} ({})", route.label, route.path);
                }
                None => {
                    let _ = writeln!(out, "{prefix}{connector}? [{route_index}]");
                }
            },
            RouteTreeNode::Group { label, children, .. } => {
                let _ = writeln!(out, "{prefix}{connector}{label}/");

                let new_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
                let num_children = children.len();
                for (position, &child) in children.iter().enumerate().rev() {
                    stack.push((child, new_prefix.clone(), position + 1 == num_children));
                }
            }
        }
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl RouteTree {
    /// Returns an iterator over the forest in pre-order (parents before
    /// children, siblings in first-occurrence order).
    ///
    /// This is the order in which a sidebar lists its entries.
    ///
    /// # Example
    /// ```
    /// use routetree::model::Route;
    /// use routetree::resolve_route_structure;
    ///
    /// let routes = vec![
    ///     Route::new("Intro", "intro"),
    ///     Route::new("Push Button", "push-button").with_group("Inputs"),
    /// ];
    /// let tree = resolve_route_structure(&routes);
    ///
    /// let kinds: Vec<bool> = tree.pre_order_iter().map(|n| n.is_group()).collect();
    /// assert_eq!(kinds, vec![false, true, false]);
    /// ```
    pub fn pre_order_iter(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(self)
    }
}

/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the forest without
/// recursion.
pub struct PreOrderIter<'a> {
    tree: &'a RouteTree,
    stack: Vec<NodeIndex>,
}

impl<'a> PreOrderIter<'a> {
    fn new(tree: &'a RouteTree) -> Self {
        // Push roots reversed, so the first root is processed first
        let stack = tree.roots.iter().rev().copied().collect();
        PreOrderIter { tree, stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = &'a RouteTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

/// Iterator walking from a node's parent up to its forest root.
struct Ancestors<'a> {
    tree: &'a RouteTree,
    next: Option<NodeIndex>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a RouteTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.tree[self.next?];
        self.next = node.parent();
        Some(node)
    }
}
