//! Parsing of group paths.
//!
//! - [group_path]: splits a delimited group path into segments and canonical paths
//! - [group_path_error]: error types for malformed group paths

pub mod group_path;
pub mod group_path_error;

pub use group_path::{CanonicalPrefixes, GroupPath, split_group_path};
pub use group_path_error::{GroupPathError, GroupPathErrorType};
