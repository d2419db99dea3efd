//! A single `VALUE[/ENTITY]` filter term.

use std::fmt;

use crate::errors::{QueryError, segment_error};
use crate::policy::TrimPolicy;
use crate::token::TaggedToken;

const ENTITY_SEPARATOR: char = '/';

/// Lowercase `text` the same way index keys are produced.
pub(crate) fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Compare two strings ignoring case.
///
/// Both sides are folded with [`fold_case`] so the comparison agrees with
/// index lookups, including context-sensitive mappings such as a
/// word-final sigma.
pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left == right || fold_case(left) == fold_case(right)
}

/// One comma-separated unit of a filter query.
///
/// A term matches a tag whose lemma equals [`value`](Self::value) ignoring
/// case. When a named-entity constraint is present the tag must also carry
/// that label.
///
/// # Examples
///
/// ```
/// use annotext_query::{FilterTerm, TrimPolicy};
///
/// let term = FilterTerm::parse("Nice/Location", TrimPolicy::Trim);
/// assert_eq!(term.value(), "Nice");
/// assert_eq!(term.named_entity(), Some("Location"));
/// assert_eq!(term.to_string(), "Nice/Location");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterTerm {
    value: String,
    named_entity: Option<String>,
}

impl FilterTerm {
    /// Create an unconstrained term.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            named_entity: None,
        }
    }

    /// Require matching tags to carry the named-entity `label`.
    #[must_use]
    pub fn with_named_entity(mut self, label: impl Into<String>) -> Self {
        self.named_entity = Some(label.into());
        self
    }

    /// Parse a segment permissively.
    ///
    /// Text before the first `/` is the value and text after it, up to any
    /// further `/`, is the named-entity constraint. Empty trailing parts are
    /// discarded, so `attack/` carries no constraint. Under
    /// [`TrimPolicy::Trim`] an empty constraint is always treated as absent;
    /// under [`TrimPolicy::Verbatim`] an empty constraint followed by further
    /// parts (`a//b`) is kept and matches only tags carrying an empty label.
    /// Parsing never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use annotext_query::{FilterTerm, TrimPolicy};
    ///
    /// let term = FilterTerm::parse("a/b/c", TrimPolicy::Trim);
    /// assert_eq!(term.value(), "a");
    /// assert_eq!(term.named_entity(), Some("b"));
    ///
    /// let bare = FilterTerm::parse("attack/", TrimPolicy::Trim);
    /// assert_eq!(bare.named_entity(), None);
    /// ```
    #[must_use]
    pub fn parse(segment: &str, policy: TrimPolicy) -> Self {
        let mut parts: Vec<&str> = policy
            .apply(segment)
            .split(ENTITY_SEPARATOR)
            .map(|part| policy.apply(part))
            .collect();
        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }
        let mut parts = parts.into_iter();
        let value = parts.next().unwrap_or_default();
        let named_entity = parts
            .next()
            .filter(|label| policy == TrimPolicy::Verbatim || !label.is_empty());
        Self {
            value: value.to_owned(),
            named_entity: named_entity.map(str::to_owned),
        }
    }

    /// Parse a segment, rejecting empty values, empty constraints and
    /// repeated separators.
    ///
    /// `position` is the zero-based segment index used in error reports.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Segment`] describing the first problem found.
    pub fn parse_strict(
        segment: &str,
        position: usize,
        policy: TrimPolicy,
    ) -> Result<Self, QueryError> {
        let mut parts = policy.apply(segment).split(ENTITY_SEPARATOR);
        let value = parts.next().map_or("", |value| policy.apply(value));
        let named_entity = parts.next().map(|label| policy.apply(label));
        if parts.next().is_some() {
            return Err(segment_error(
                "more than one `/` separator",
                position,
                segment,
            ));
        }
        if value.is_empty() {
            return Err(segment_error("empty value", position, segment));
        }
        if named_entity.is_some_and(str::is_empty) {
            return Err(segment_error(
                "empty named-entity constraint",
                position,
                segment,
            ));
        }
        Ok(Self {
            value: value.to_owned(),
            named_entity: named_entity.map(str::to_owned),
        })
    }

    /// The lemma this term matches, as written.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The named-entity label a matching tag must carry, if any.
    #[must_use]
    pub fn named_entity(&self) -> Option<&str> {
        self.named_entity.as_deref()
    }

    /// Index key for this term: the lowercased value.
    #[must_use]
    pub fn key(&self) -> String {
        fold_case(&self.value)
    }

    /// Evaluate the term against a single tag.
    ///
    /// The named-entity constraint is checked first, then the lemma is
    /// compared to the value ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use annotext_query::{FilterTerm, TaggedToken};
    ///
    /// struct Place;
    ///
    /// impl TaggedToken for Place {
    ///     fn lemma(&self) -> &str {
    ///         "nice"
    ///     }
    ///
    ///     fn has_named_entity(&self, label: &str) -> bool {
    ///         label == "Location"
    ///     }
    /// }
    ///
    /// assert!(FilterTerm::new("Nice").with_named_entity("Location").matches(&Place));
    /// assert!(!FilterTerm::new("Nice").with_named_entity("Person").matches(&Place));
    /// ```
    #[must_use]
    pub fn matches<T: TaggedToken + ?Sized>(&self, tag: &T) -> bool {
        self.named_entity
            .as_deref()
            .is_none_or(|label| tag.has_named_entity(label))
            && eq_ignore_case(tag.lemma(), &self.value)
    }
}

impl fmt::Display for FilterTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)?;
        if let Some(label) = &self.named_entity {
            write!(f, "{ENTITY_SEPARATOR}{label}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Tagged {
        lemma: &'static str,
        entities: &'static [&'static str],
    }

    impl TaggedToken for Tagged {
        fn lemma(&self) -> &str {
            self.lemma
        }

        fn has_named_entity(&self, label: &str) -> bool {
            self.entities.contains(&label)
        }
    }

    #[rstest]
    #[case("attack", TrimPolicy::Trim, "attack", None)]
    #[case(" attack ", TrimPolicy::Trim, "attack", None)]
    #[case(" attack", TrimPolicy::Verbatim, " attack", None)]
    #[case("Nice/Location", TrimPolicy::Trim, "Nice", Some("Location"))]
    #[case(" Nice / Location ", TrimPolicy::Trim, "Nice", Some("Location"))]
    #[case(" Nice / Location", TrimPolicy::Verbatim, " Nice ", Some(" Location"))]
    #[case("a/b/c", TrimPolicy::Trim, "a", Some("b"))]
    #[case("/Location", TrimPolicy::Trim, "", Some("Location"))]
    #[case("attack/", TrimPolicy::Trim, "attack", None)]
    #[case("/", TrimPolicy::Trim, "", None)]
    #[case("", TrimPolicy::Trim, "", None)]
    #[case("a//b", TrimPolicy::Trim, "a", None)]
    #[case("a/ /b", TrimPolicy::Trim, "a", None)]
    #[case("a//b", TrimPolicy::Verbatim, "a", Some(""))]
    #[case("a/", TrimPolicy::Verbatim, "a", None)]
    #[case("a//", TrimPolicy::Verbatim, "a", None)]
    #[case("/", TrimPolicy::Verbatim, "", None)]
    #[case("/Location", TrimPolicy::Verbatim, "", Some("Location"))]
    fn parses_permissively(
        #[case] segment: &str,
        #[case] policy: TrimPolicy,
        #[case] value: &str,
        #[case] entity: Option<&str>,
    ) {
        let term = FilterTerm::parse(segment, policy);
        assert_eq!(term.value(), value);
        assert_eq!(term.named_entity(), entity);
    }

    #[rstest]
    #[case("a/b/c", "more than one `/` separator")]
    #[case("/Location", "empty value")]
    #[case("  ", "empty value")]
    #[case("attack/", "empty named-entity constraint")]
    #[case("attack/ ", "empty named-entity constraint")]
    fn strict_parse_rejects_malformed_segments(#[case] segment: &str, #[case] message: &str) {
        let Err(err) = FilterTerm::parse_strict(segment, 4, TrimPolicy::Trim) else {
            panic!("segment {segment:?} should be rejected");
        };
        let QueryError::Segment(info) = err else {
            panic!("expected a segment error for {segment:?}");
        };
        assert_eq!(info.message, message);
        assert_eq!(info.segment, 4);
        assert_eq!(info.text, segment);
    }

    #[test]
    fn strict_parse_accepts_well_formed_segment() {
        assert_eq!(
            FilterTerm::parse_strict(" Nice/Location ", 0, TrimPolicy::Trim),
            Ok(FilterTerm::new("Nice").with_named_entity("Location"))
        );
    }

    #[test]
    fn key_is_lowercased_value() {
        assert_eq!(FilterTerm::new("ÉCOLE").key(), "école");
    }

    #[test]
    fn matches_lemma_ignoring_case() {
        let tag = Tagged {
            lemma: "Attack",
            entities: &[],
        };
        assert!(FilterTerm::new("attack").matches(&tag));
        assert!(!FilterTerm::new("attacks").matches(&tag));
    }

    #[test]
    fn entity_constraint_requires_label() {
        let person = Tagged {
            lemma: "nice",
            entities: &["Person"],
        };
        let place = Tagged {
            lemma: "nice",
            entities: &["Location", "City"],
        };
        let term = FilterTerm::new("Nice").with_named_entity("Location");
        assert!(!term.matches(&person));
        assert!(term.matches(&place));
    }

    #[test]
    fn entity_labels_compare_case_sensitively() {
        let place = Tagged {
            lemma: "nice",
            entities: &["Location"],
        };
        assert!(!FilterTerm::new("nice").with_named_entity("location").matches(&place));
    }

    #[test]
    fn final_sigma_matches_either_lowercase_form() {
        let final_form = Tagged {
            lemma: "οδος",
            entities: &[],
        };
        let term = FilterTerm::new("ΟΔΟΣ");
        assert_eq!(term.key(), "οδος");
        assert!(term.matches(&final_form));
    }

    #[test]
    fn verbatim_empty_constraint_rejects_labelled_tags() {
        let place = Tagged {
            lemma: "a",
            entities: &["Location"],
        };
        assert!(!FilterTerm::parse("a//b", TrimPolicy::Verbatim).matches(&place));
        assert!(FilterTerm::parse("a//b", TrimPolicy::Trim).matches(&place));
    }

    #[test]
    fn empty_value_matches_empty_lemma() {
        let empty = Tagged {
            lemma: "",
            entities: &[],
        };
        assert!(FilterTerm::parse("", TrimPolicy::Trim).matches(&empty));
    }

    #[test]
    fn displays_value_and_constraint() {
        assert_eq!(FilterTerm::new("Z").to_string(), "Z");
        assert_eq!(
            FilterTerm::new("X").with_named_entity("Y").to_string(),
            "X/Y"
        );
    }
}
