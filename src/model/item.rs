//! Nested route tree items for renderers and serialization.
//!
//! A [RouteTree](crate::model::RouteTree) stores its nodes in an arena;
//! renderers usually prefer a nested structure they can recurse into.
//! [RouteTreeItem] is that structure. With serde it maps to:
//!
//! ```text
//! { "type": "route", "index": 0 }
//! { "type": "group", "label": "Inputs", "children": [ ... ] }
//! ```

use crate::model::route::RouteIndex;
use serde::{Deserialize, Serialize};

/// A node of a route tree in nested form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RouteTreeItem {
    /// Group heading with its children in first-occurrence order
    Group {
        label: String,
        children: Vec<RouteTreeItem>,
    },
    /// Navigation item referencing the route at `index`
    Route { index: RouteIndex },
}

impl RouteTreeItem {
    /// Shorthand for a group item.
    pub fn group(label: impl Into<String>, children: Vec<RouteTreeItem>) -> Self {
        RouteTreeItem::Group {
            label: label.into(),
            children,
        }
    }

    /// Shorthand for a route item.
    pub fn route(index: RouteIndex) -> Self {
        RouteTreeItem::Route { index }
    }
}

/// Serializes nested items to a JSON string.
pub fn items_to_json(items: &[RouteTreeItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string(items)
}

/// Serializes nested items to an indented JSON string.
pub fn items_to_json_pretty(items: &[RouteTreeItem]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(items)
}
