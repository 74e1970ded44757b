//! Route descriptors, the input of a route tree.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Index of a route in the input route list.
pub type RouteIndex = usize;

// =#========================================================================#=
// ROUTE
// =#========================================================================#=
/// A single navigation item.
///
/// Only [group](Route::group) is read while resolving a tree; everything else
/// is carried for the renderer, which resolves leaves back into the route
/// list by index.
///
/// Unknown fields (e.g. a component reference) are kept in
/// [metadata](Route::metadata) when deserializing.
///
/// # Example
/// ```
/// use routetree::model::Route;
///
/// let route = Route::new("Push Button", "push-button").with_group("Inputs/Buttons");
/// assert_eq!(route.group(), Some("Inputs/Buttons"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Display label of the navigation item
    pub label: String,
    /// Target the navigation item links to
    pub path: String,
    /// Delimited group path, e.g. `"Inputs/Buttons"`; `None` for the forest root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Framework rendering the route's content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework: Option<RouteFramework>,
    /// Opaque rendering data
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Route {
    /// Creates an ungrouped route.
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Route {
            label: label.into(),
            path: path.into(),
            group: None,
            framework: None,
            metadata: Map::new(),
        }
    }

    /// Places this route in the given group path.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Attaches the framework rendering this route.
    pub fn with_framework(mut self, framework: RouteFramework) -> Self {
        self.framework = Some(framework);
        self
    }

    /// Attaches an opaque metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Returns the group path, if any.
    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

// =#========================================================================#=
// ROUTE FRAMEWORK
// =#========================================================================#=
/// Framework used to render the content behind a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteFramework {
    Vue,
    React,
    Angular,
    Html,
}

/// Parses a JSON array of routes.
///
/// # Example
/// ```
/// use routetree::model::routes_from_json;
///
/// let routes = routes_from_json(r#"[
///     { "label": "Intro", "path": "intro" },
///     { "label": "Push Button", "path": "push-button", "group": "Inputs/Buttons" }
/// ]"#)?;
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes[1].group(), Some("Inputs/Buttons"));
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn routes_from_json(json: &str) -> Result<Vec<Route>, serde_json::Error> {
    serde_json::from_str(json)
}
