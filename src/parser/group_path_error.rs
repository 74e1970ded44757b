//! Error types for malformed group paths.
//!
//! This module provides [GroupPathError] and [GroupPathErrorType] for
//! representing group paths that can not be split into non-empty segments.

use thiserror::Error;

// =#========================================================================#=
// GROUP PATH ERROR TYPE
// =#========================================================================#=
/// Ways a group path can be malformed.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
pub enum GroupPathErrorType {
    /// Path starts with the delimiter, e.g. `"/A"`
    #[error("leading delimiter")]
    LeadingDelimiter,
    /// Path ends with the delimiter, e.g. `"A/"`
    #[error("trailing delimiter")]
    TrailingDelimiter,
    /// Two consecutive delimiters, e.g. `"A//B"`
    #[error("empty segment at position {position}")]
    EmptySegment {
        /// Zero-based position of the empty segment
        position: usize,
    },
}

impl GroupPathErrorType {
    /// Classifies the empty segment at `position` of a path with
    /// `num_segments` segments.
    pub(crate) fn for_empty_segment(position: usize, num_segments: usize) -> Self {
        if position == 0 {
            GroupPathErrorType::LeadingDelimiter
        } else if position + 1 == num_segments {
            GroupPathErrorType::TrailingDelimiter
        } else {
            GroupPathErrorType::EmptySegment { position }
        }
    }
}

// =#========================================================================#=
// GROUP PATH ERROR
// =#========================================================================$=
/// Malformed group path together with the route it belongs to.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
#[error("Invalid group path {group:?} of route {route_index} - {kind}")]
pub struct GroupPathError {
    kind: GroupPathErrorType,
    route_index: usize,
    group: String,
}

impl GroupPathError {
    /// Creates an error for the route at `route_index` with group path `group`.
    pub fn new(kind: GroupPathErrorType, route_index: usize, group: &str) -> Self {
        Self {
            kind,
            route_index,
            group: group.to_string(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> &GroupPathErrorType {
        &self.kind
    }

    /// Get the index of the route with the malformed group path
    pub fn route_index(&self) -> usize {
        self.route_index
    }

    /// Get the malformed group path as written
    pub fn group(&self) -> &str {
        &self.group
    }
}
