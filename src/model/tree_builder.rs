//! Construction of route trees from flat route lists.
//!
//! The [`RouteTreeBuilder`] turns an ordered list of routes, each optionally
//! tagged with a delimited group path, into a [`RouteTree`] forest.
//!
//! # Resolution
//! Routes are visited once, in input order. For each route:
//! 1. Without a group path, a leaf is appended to the forest roots.
//! 2. Otherwise the group path is split into segments and
//!    - **trace:** the canonical paths `A`, `A/B`, ... are looked up in the
//!      [`GroupRegistry`] until the first one that is not registered;
//!    - **build:** a group is created for every remaining segment, appended to
//!      the previous group in the chain (or the forest roots) and registered;
//!    - the leaf is appended to the innermost group.
//!
//! Routes sharing a prefix thus only pay for their unresolved suffix, and
//! groups and leaves appear in the order of the route that first caused
//! them to be created.
//!
//! # Input types
//! The builder only needs the group path of each route, expressed by the
//! [`Grouped`] trait. It is implemented for [`Route`] and for plain optional
//! strings, so callers can resolve their own route types as well.
//!
//! # Malformed group paths
//! Empty segments are handled according to the configured
//! [`EmptySegmentPolicy`]. With [`EmptySegmentPolicy::Reject`], a route with
//! a malformed group path is placed at the forest root and recorded; all
//! remaining routes are resolved as usual and the result is returned as
//! [`ResolveError`], which still carries the complete tree.

use crate::config::{EmptySegmentPolicy, ResolveConfig};
use crate::model::group_registry::GroupRegistry;
use crate::model::route::Route;
use crate::model::tree::{NodeIndex, RouteTree};
use crate::parser::group_path::GroupPath;
use crate::parser::group_path_error::GroupPathError;
use thiserror::Error;
use tracing::{debug, trace, warn};

// =#========================================================================#=
// GROUPED (trait)
// =#========================================================================T=
/// Anything that can be placed in a route tree by its group path.
pub trait Grouped {
    /// Returns the delimited group path, or `None` for the forest root.
    fn group(&self) -> Option<&str>;
}

impl Grouped for Route {
    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

impl Grouped for Option<String> {
    fn group(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl Grouped for Option<&str> {
    fn group(&self) -> Option<&str> {
        *self
    }
}

impl<T: Grouped + ?Sized> Grouped for &T {
    fn group(&self) -> Option<&str> {
        (**self).group()
    }
}

// =#========================================================================#=
// RESOLVE ERROR
// =#========================================================================#=
/// Group paths rejected while resolving, together with the resolved tree.
///
/// Every rejected route is placed at the forest root, so [tree](Self::tree)
/// still holds one leaf per input route.
#[derive(Debug, Error)]
#[error("{} route(s) with invalid group paths", .errors.len())]
pub struct ResolveError {
    errors: Vec<GroupPathError>,
    tree: RouteTree,
}

impl ResolveError {
    /// Returns the rejected group paths, in route order.
    pub fn errors(&self) -> &[GroupPathError] {
        &self.errors
    }

    /// Returns the tree resolved despite the rejected group paths.
    pub fn tree(&self) -> &RouteTree {
        &self.tree
    }

    /// Consumes the error, returning the resolved tree.
    pub fn into_tree(self) -> RouteTree {
        self.tree
    }
}

// =#========================================================================#=
// ROUTE TREE BUILDER
// =#========================================================================#=
/// Builder that resolves route lists into [RouteTree]s.
///
/// The builder only holds its [ResolveConfig]; all state of a build is local
/// to one [resolve](Self::resolve) call. A builder can therefore be reused
/// and shared between threads.
///
/// # Example
/// ```
/// use routetree::config::EmptySegmentPolicy;
/// use routetree::model::{Route, RouteTreeBuilder};
///
/// let routes = vec![
///     Route::new("Intro", "intro"),
///     Route::new("Push Button", "push-button").with_group("Inputs.Buttons"),
/// ];
/// let tree = RouteTreeBuilder::new()
///     .with_delimiter('.')
///     .with_empty_segment_policy(EmptySegmentPolicy::Reject)
///     .resolve(&routes)?;
///
/// assert_eq!(tree.num_groups(), 2);
/// assert_eq!(tree.leaf_indices(), vec![0, 1]);
/// # Ok::<(), routetree::model::ResolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTreeBuilder {
    config: ResolveConfig,
}

impl RouteTreeBuilder {
    /// Creates a builder with the default configuration:
    /// delimiter `/` and empty segments dropped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ResolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the character separating segments of a group path.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Sets the handling of empty segments.
    pub fn with_empty_segment_policy(mut self, policy: EmptySegmentPolicy) -> Self {
        self.config.empty_segments = policy;
        self
    }

    /// Returns the configuration of this builder.
    pub fn config(&self) -> &ResolveConfig {
        &self.config
    }

    /// Resolves the ordered `routes` into a route tree.
    ///
    /// # Returns
    /// A tree with one leaf per route, referencing routes by their position.
    ///
    /// # Errors
    /// Only with [EmptySegmentPolicy::Reject]: if any group path contains an
    /// empty segment, returns a [ResolveError] listing all of them. The tree
    /// inside the error is complete, with the affected routes at the root.
    pub fn resolve<R: Grouped>(&self, routes: &[R]) -> Result<RouteTree, ResolveError> {
        let _span = tracing::debug_span!("resolve", routes = routes.len()).entered();

        let mut tree = RouteTree::with_capacity(routes.len());
        let mut registry = GroupRegistry::with_capacity(routes.len());
        let mut errors = Vec::new();

        for (route_index, route) in routes.iter().enumerate() {
            let group = match route.group() {
                Some(group) if !group.is_empty() => group,
                _ => {
                    tree.add_leaf(route_index, None);
                    continue;
                }
            };

            match GroupPath::parse(group, &self.config) {
                Ok(path) => {
                    let parent = Self::resolve_group(&mut tree, &mut registry, &path);
                    tree.add_leaf(route_index, parent);
                }
                Err(kind) => {
                    let error = GroupPathError::new(kind, route_index, group);
                    warn!("{error}; placing route at root");
                    errors.push(error);
                    tree.add_leaf(route_index, None);
                }
            }
        }

        debug!(
            nodes = tree.num_nodes(),
            groups = registry.len(),
            rejected = errors.len(),
            "resolved route tree"
        );

        if errors.is_empty() {
            Ok(tree)
        } else {
            Err(ResolveError { errors, tree })
        }
    }

    /// Returns the innermost group of `path`, creating the groups of its
    /// unregistered suffix. Returns `None` for an empty path.
    fn resolve_group(
        tree: &mut RouteTree,
        registry: &mut GroupRegistry,
        path: &GroupPath<'_>,
    ) -> Option<NodeIndex> {
        let mut chain = path
            .segments()
            .iter()
            .zip(path.canonical_prefixes())
            .peekable();

        // Trace registered ancestors
        let mut parent = None;
        while let Some((_, canonical)) = chain.peek() {
            match registry.lookup(canonical) {
                Some(group) => {
                    parent = Some(group);
                    chain.next();
                }
                None => break,
            }
        }

        // Build missing suffix
        for (segment, canonical) in chain {
            let group = tree.add_group(segment, parent);
            trace!(group, canonical = canonical.as_str(), "created group");
            registry.register(canonical, group);
            parent = Some(group);
        }

        parent
    }
}

/// Resolves `routes` with the default configuration.
///
/// Empty segments are dropped, so this never fails; see
/// [RouteTreeBuilder::resolve] for the algorithm.
pub fn resolve<R: Grouped>(routes: &[R]) -> RouteTree {
    match RouteTreeBuilder::new().resolve(routes) {
        Ok(tree) => tree,
        Err(error) => error.into_tree(),
    }
}
