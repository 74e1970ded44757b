//! Group registry module for route tree construction.
//!
//! - `GroupRegistry`: Deduplicating lookup from canonical group path to group node.

use crate::model::tree::NodeIndex;
use std::collections::HashMap;
use std::fmt;

// =#========================================================================#=
// GROUP REGISTRY
// =#========================================================================#=
/// Maps canonical group paths to the group node created for them.
///
/// A canonical path is the full group path from the forest root down to and
/// including one segment, e.g. `"Inputs/Buttons"`. Keying by the full path,
/// rather than by segment name, lets `"A/B"` and `"A/C"` share the group `A`
/// while `"X/B"` gets a group `B` of its own.
///
/// A registry lives for a single build; entries are never removed.
///
/// # Example
/// ```
/// use routetree::model::GroupRegistry;
///
/// let mut registry = GroupRegistry::new();
/// registry.register("Inputs".to_string(), 0);
/// registry.register("Inputs/Buttons".to_string(), 2);
///
/// assert_eq!(registry.lookup("Inputs/Buttons"), Some(2));
/// assert_eq!(registry.lookup("Buttons"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupRegistry {
    /// Map from canonical path to group node index
    map: HashMap<String, NodeIndex>,
}

impl GroupRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new registry with pre-allocated capacity.
    ///
    /// # Arguments
    /// * `capacity` - Expected number of distinct canonical paths
    pub fn with_capacity(capacity: usize) -> Self {
        GroupRegistry {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Retrieves the group registered for a canonical path.
    ///
    /// # Returns
    /// `Some(index)` if the path is registered, `None` otherwise
    pub fn lookup(&self, canonical_path: &str) -> Option<NodeIndex> {
        self.map.get(canonical_path).copied()
    }

    /// Registers the group for a canonical path.
    ///
    /// # Panics
    /// Panics if `canonical_path` is already registered. A builder only
    /// registers paths it failed to look up, so this indicates a defect.
    pub fn register(&mut self, canonical_path: String, node: NodeIndex) {
        if let Some(existing) = self.map.get(&canonical_path) {
            panic!("group path {canonical_path:?} already registered for node {existing}");
        }
        self.map.insert(canonical_path, node);
    }

    /// Checks if a canonical path is registered.
    pub fn contains(&self, canonical_path: &str) -> bool {
        self.map.contains_key(canonical_path)
    }

    /// Returns the number of registered groups.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether no group is registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl fmt::Display for GroupRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by_key(|&(_, &node)| node);

        writeln!(f, "GroupRegistry ({} groups):", entries.len())?;
        for (path, node) in entries {
            writeln!(f, "  [{}] {}", node, path)?;
        }
        Ok(())
    }
}
