//! Error types reported by the strict query parser.

use std::fmt;
use thiserror::Error;

/// Context for a query segment that failed strict validation.
///
/// # Examples
/// ```
/// use annotext_query::SegmentErrorInfo;
/// let info = SegmentErrorInfo::new("empty value", 1, "/Location");
/// assert_eq!(info.segment, 1);
/// assert_eq!(info.text, "/Location");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentErrorInfo {
    /// Short description of the problem.
    pub message: &'static str,
    /// Zero-based index of the comma-separated segment.
    pub segment: usize,
    /// The segment text as written in the query.
    pub text: String,
}

impl SegmentErrorInfo {
    /// Create a new description for a rejected segment.
    ///
    /// # Examples
    /// ```
    /// use annotext_query::SegmentErrorInfo;
    /// let info = SegmentErrorInfo::new("invalid", 0, "a/b/c");
    /// assert_eq!(info.message, "invalid");
    /// ```
    #[must_use]
    pub fn new(message: &'static str, segment: usize, text: impl Into<String>) -> Self {
        Self {
            message,
            segment,
            text: text.into(),
        }
    }
}

impl fmt::Display for SegmentErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in segment {} (zero-based): `{}`",
            self.message, self.segment, self.text
        )
    }
}

/// Errors surfaced by [`FilterQuery::parse_strict`](crate::FilterQuery::parse_strict).
///
/// The permissive parser never produces these.
///
/// # Examples
/// ```
/// use annotext_query::{QueryError, SegmentErrorInfo};
/// let info = SegmentErrorInfo::new("empty value", 2, "");
/// let err = QueryError::Segment(info.clone());
/// assert_eq!(err.to_string(), info.to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query holds no terms at all.
    #[error("filter query is empty")]
    Empty,
    /// A single segment is malformed.
    #[error("{0}")]
    Segment(SegmentErrorInfo),
    /// Two segments share the same lowercased value.
    #[error("duplicate filter term `{key}` in segments {first} and {second}")]
    DuplicateTerm {
        /// Lowercased value shared by both segments.
        key: String,
        /// Index of the earlier segment.
        first: usize,
        /// Index of the later segment.
        second: usize,
    },
}

pub(crate) fn segment_error(message: &'static str, segment: usize, text: &str) -> QueryError {
    QueryError::Segment(SegmentErrorInfo::new(message, segment, text))
}
