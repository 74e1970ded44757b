//! Configuration for resolving route trees.
//!
//! [ResolveConfig] bundles the settings a
//! [RouteTreeBuilder](crate::model::RouteTreeBuilder) uses when splitting
//! group paths. It can be built in code or deserialized, e.g. from JSON:
//!
//! ```
//! use routetree::config::{EmptySegmentPolicy, ResolveConfig};
//!
//! let config = ResolveConfig::from_json(r#"{ "delimiter": ".", "empty_segments": "reject" }"#)?;
//! assert_eq!(config.delimiter, '.');
//! assert_eq!(config.empty_segments, EmptySegmentPolicy::Reject);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

/// Default delimiter between segments of a group path.
pub const DEFAULT_DELIMITER: char = '/';

// =#========================================================================#=
// EMPTY SEGMENT POLICY
// =#========================================================================#=
/// How empty segments of a group path are handled, as produced by a leading,
/// trailing or doubled delimiter (`"/A"`, `"A/"`, `"A//B"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySegmentPolicy {
    /// Remove empty segments, so `"A//B"` is the same group path as `"A/B"`.
    /// A path made only of delimiters places the route at the forest root.
    #[default]
    Drop,
    /// Report the group path as malformed. The route is placed at the forest
    /// root and the remaining routes are still resolved.
    Reject,
}

// =#========================================================================#=
// RESOLVE CONFIG
// =#========================================================================#=
/// Settings for splitting group paths while resolving a route tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveConfig {
    /// Character separating the segments of a group path
    pub delimiter: char,
    /// Handling of empty segments
    pub empty_segments: EmptySegmentPolicy,
}

impl ResolveConfig {
    /// Parses a configuration from a JSON object; missing fields take their
    /// default values.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ResolveConfig {
    fn default() -> Self {
        ResolveConfig {
            delimiter: DEFAULT_DELIMITER,
            empty_segments: EmptySegmentPolicy::default(),
        }
    }
}
