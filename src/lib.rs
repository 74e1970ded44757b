//! Routetree is a library to build navigation sidebar trees from flat lists
//! of routes.
//!
//! Each route may carry a delimited group path such as `"Inputs/Buttons"`.
//! This crate resolves an ordered route list into a forest of group and
//! route nodes that a sidebar can render as collapsible sections.
//! Core functionality provided:
//! - Group paths: split into segments, each group identified by its
//!   canonical path (`"Inputs"`, `"Inputs/Buttons"`), see [crate::parser].
//! - Tree builder: [RouteTreeBuilder](crate::model::RouteTreeBuilder)
//!   resolves routes in a single pass, creating each group exactly once.
//! - Tree model: [RouteTree] uses the arena pattern; leaves only store the
//!   index of their route. See [crate::model] for more details.
//! - Configurability: delimiter and handling of empty segments
//!   (`"A//B"`), see [crate::config].
//!
//! Guarantees:
//! - One leaf per input route
//! - Routes sharing a group path prefix share the groups of that prefix
//! - Groups and leaves are ordered by the first route that created them
//!
//! Rendering, search filtering and expand/collapse state are left to the
//! consumer of the tree.
//!
//! # Usage patterns
//! 1. [resolve_route_structure] resolves with default settings.
//! 2. Configure a [RouteTreeBuilder](crate::model::RouteTreeBuilder) for
//!    full control over delimiter and empty segment policy.
//!
//! ## Example Default Configuration
//! ```
//! use routetree::model::{Route, RouteTreeItem};
//! use routetree::resolve_route_structure;
//!
//! let routes = vec![
//!     Route::new("Intro", "intro"),
//!     Route::new("Push Button", "push-button").with_group("Inputs/Buttons"),
//!     Route::new("Reset Button", "reset-button").with_group("Inputs/Buttons"),
//! ];
//! let tree = resolve_route_structure(&routes);
//!
//! assert_eq!(
//!     tree.to_items(),
//!     vec![
//!         RouteTreeItem::route(0),
//!         RouteTreeItem::group("Inputs", vec![
//!             RouteTreeItem::group("Buttons", vec![
//!                 RouteTreeItem::route(1),
//!                 RouteTreeItem::route(2),
//!             ]),
//!         ]),
//!     ]
//! );
//! ```
//!
//! ## Example Builder Configuration
//! ```
//! use routetree::config::EmptySegmentPolicy;
//! use routetree::model::{Route, RouteTreeBuilder};
//!
//! let routes = vec![
//!     Route::new("Push Button", "push-button").with_group("Inputs//Buttons"),
//! ];
//! let result = RouteTreeBuilder::new()
//!     .with_empty_segment_policy(EmptySegmentPolicy::Reject)
//!     .resolve(&routes);
//!
//! let error = result.unwrap_err();
//! assert_eq!(error.errors()[0].route_index(), 0);
//! assert_eq!(error.tree().num_leaves(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod model;
pub mod parser;

pub use crate::model::RouteTree;
use crate::model::{Route, RouteTreeItem, routes_from_json};

// ============================================================================
// Quick API
// ============================================================================
/// Resolves `routes` into a [RouteTree] using default settings.
///
/// Group paths are split at `/`, empty segments are dropped.
/// See [`model::tree_builder::resolve`] for full documentation.
pub fn resolve_route_structure(routes: &[Route]) -> RouteTree {
    model::tree_builder::resolve(routes)
}

/// Parses a JSON array of routes and resolves it using default settings,
/// returning the routes together with the nested tree items.
///
/// # Errors
/// Returns the JSON error if `json` is not an array of routes.
pub fn resolve_json(json: &str) -> Result<(Vec<Route>, Vec<RouteTreeItem>), serde_json::Error> {
    let routes = routes_from_json(json)?;
    let items = resolve_route_structure(&routes).to_items();
    Ok((routes, items))
}
