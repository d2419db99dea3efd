//! The view of an annotated tag that the query engine reads.

/// A lexical tag that filter terms can be evaluated against.
///
/// The engine only needs the lemma and a named-entity membership test, so
/// any tag representation can be queried by implementing this trait.
///
/// # Examples
///
/// ```
/// use annotext_query::{FilterQuery, TaggedToken, TrimPolicy};
///
/// struct Word(&'static str);
///
/// impl TaggedToken for Word {
///     fn lemma(&self) -> &str {
///         self.0
///     }
///
///     fn has_named_entity(&self, _label: &str) -> bool {
///         false
///     }
/// }
///
/// let query = FilterQuery::parse("attack", TrimPolicy::Trim);
/// assert!(query.matches_any([Word("calm"), Word("Attack")]));
/// ```
pub trait TaggedToken {
    /// Canonical base form of the token.
    fn lemma(&self) -> &str;

    /// Whether the tag carries the named-entity `label`.
    ///
    /// Labels are compared exactly, including case.
    fn has_named_entity(&self, label: &str) -> bool;
}

impl<T: TaggedToken + ?Sized> TaggedToken for &T {
    fn lemma(&self) -> &str {
        (**self).lemma()
    }

    fn has_named_entity(&self, label: &str) -> bool {
        (**self).has_named_entity(label)
    }
}
