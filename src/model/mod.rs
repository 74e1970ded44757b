//! Data model for navigation route trees.
//!
//! # Tree representation
//! Trees are represented by [RouteTree], which uses the arena pattern to store
//! [RouteTreeNode]s. Each node is either a `Group` (one segment of a group
//! path, owning an ordered list of children) or a `Leaf` (referencing one
//! input [Route] by its position), referenced by [NodeIndex].
//!
//! For renderers and serialization, [RouteTree::to_items] converts the arena
//! into nested [RouteTreeItem]s.
//!
//! # Building trees
//! Trees are constructed by a [RouteTreeBuilder] from an ordered list of
//! routes. During a build, a [GroupRegistry] maps canonical group paths to
//! the group nodes already created, so each group exists exactly once.
//!
//! See the [tree_builder] module docs for details on this flow.

pub mod group_registry;
pub mod item;
pub mod node;
pub mod route;
pub mod tree;
pub mod tree_builder;

// Tree
pub use node::RouteTreeNode;
pub use tree::NodeIndex;
pub use tree::PreOrderIter;
pub use tree::RouteTree;
// Nested form
pub use item::RouteTreeItem;
// Input
pub use route::Route;
pub use route::RouteFramework;
pub use route::RouteIndex;
pub use route::routes_from_json;
// Building
pub use group_registry::GroupRegistry;
pub use tree_builder::Grouped;
pub use tree_builder::ResolveError;
pub use tree_builder::RouteTreeBuilder;
