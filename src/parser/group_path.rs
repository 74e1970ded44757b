//! Splitting of delimited group paths.
//!
//! A group path such as `"Inputs/Buttons"` names the position of a route in
//! the navigation hierarchy. This module splits it into its segments
//! (`"Inputs"`, `"Buttons"`) and derives the canonical path of each segment,
//! that is, the path from the forest root down to and including that segment
//! (`"Inputs"`, `"Inputs/Buttons"`).

use crate::config::{EmptySegmentPolicy, ResolveConfig};
use crate::parser::group_path_error::GroupPathErrorType;

/// Splits `path` at every `delimiter`, returning the segments exactly as
/// written; no trimming, empty segments are kept.
///
/// # Examples
/// ```
/// use routetree::parser::split_group_path;
///
/// let segments: Vec<&str> = split_group_path("A/B/C", '/').collect();
/// assert_eq!(segments, vec!["A", "B", "C"]);
///
/// let segments: Vec<&str> = split_group_path("A//B ", '/').collect();
/// assert_eq!(segments, vec!["A", "", "B "]);
/// ```
pub fn split_group_path(path: &str, delimiter: char) -> std::str::Split<'_, char> {
    path.split(delimiter)
}

// =#========================================================================#=
// GROUP PATH
// =#========================================================================#=
/// A group path split into non-empty segments.
///
/// Segments borrow from the original string. An empty [GroupPath] stands for
/// "no group": the route belongs to the forest root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPath<'a> {
    segments: Vec<&'a str>,
    delimiter: char,
}

impl<'a> GroupPath<'a> {
    /// Parses `path` according to the delimiter and empty segment policy of
    /// `config`.
    ///
    /// An empty string yields an empty group path under every policy.
    ///
    /// # Errors
    /// With [EmptySegmentPolicy::Reject], returns the kind of the first empty
    /// segment found.
    ///
    /// # Examples
    /// ```
    /// use routetree::config::ResolveConfig;
    /// use routetree::parser::GroupPath;
    ///
    /// let path = GroupPath::parse("Inputs//Buttons", &ResolveConfig::default()).unwrap();
    /// assert_eq!(path.segments(), &["Inputs", "Buttons"]);
    /// ```
    pub fn parse(path: &'a str, config: &ResolveConfig) -> Result<Self, GroupPathErrorType> {
        let delimiter = config.delimiter;
        if path.is_empty() {
            return Ok(GroupPath {
                segments: Vec::new(),
                delimiter,
            });
        }

        let raw: Vec<&str> = split_group_path(path, delimiter).collect();
        let mut segments = Vec::with_capacity(raw.len());
        for (position, &segment) in raw.iter().enumerate() {
            if !segment.is_empty() {
                segments.push(segment);
                continue;
            }

            match config.empty_segments {
                EmptySegmentPolicy::Drop => {}
                EmptySegmentPolicy::Reject => {
                    return Err(GroupPathErrorType::for_empty_segment(position, raw.len()));
                }
            }
        }

        Ok(GroupPath {
            segments,
            delimiter,
        })
    }

    /// Returns the segments of this path, from outermost to innermost group.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns the number of segments, i.e. the depth of the innermost group.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether this path has no segments (route is ungrouped).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the delimiter used to join canonical paths.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Returns the full canonical path, with empty segments removed.
    pub fn canonical(&self) -> String {
        self.canonical_prefixes().last().unwrap_or_default()
    }

    /// Returns an iterator over the canonical path of each segment.
    ///
    /// # Examples
    /// ```
    /// use routetree::config::ResolveConfig;
    /// use routetree::parser::GroupPath;
    ///
    /// let path = GroupPath::parse("A/B/C", &ResolveConfig::default()).unwrap();
    /// let prefixes: Vec<String> = path.canonical_prefixes().collect();
    /// assert_eq!(prefixes, vec!["A", "A/B", "A/B/C"]);
    /// ```
    pub fn canonical_prefixes(&self) -> CanonicalPrefixes<'_, 'a> {
        CanonicalPrefixes {
            segments: self.segments.iter(),
            delimiter: self.delimiter,
            buffer: String::new(),
        }
    }
}

/// Iterator over the canonical paths of the segments of a [GroupPath],
/// from shortest to longest.
///
/// Each canonical path extends the previous one by a delimiter and the next
/// segment, so the whole iteration costs linear time in the path length
/// plus one allocation per yielded path.
pub struct CanonicalPrefixes<'p, 'a> {
    segments: std::slice::Iter<'p, &'a str>,
    delimiter: char,
    buffer: String,
}

impl Iterator for CanonicalPrefixes<'_, '_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.next()?;
        if !self.buffer.is_empty() {
            self.buffer.push(self.delimiter);
        }
        self.buffer.push_str(segment);
        Some(self.buffer.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.segments.size_hint()
    }
}

impl ExactSizeIterator for CanonicalPrefixes<'_, '_> {}
