//! Parsed filter queries and their evaluation over tags.

use std::fmt;

use hashbrown::HashMap;

use crate::errors::QueryError;
use crate::policy::TrimPolicy;
use crate::term::{FilterTerm, fold_case};
use crate::token::TaggedToken;

const TERM_SEPARATOR: char = ',';

/// Split a query on commas, dropping trailing segments that are empty under
/// `policy`.
fn segments(query: &str, policy: TrimPolicy) -> impl Iterator<Item = &str> {
    let parts: Vec<&str> = query.split(TERM_SEPARATOR).collect();
    let keep = parts
        .iter()
        .rposition(|part| !policy.apply(part).is_empty())
        .map_or(0, |last| last + 1);
    parts.into_iter().take(keep)
}

/// Index of filter terms keyed by their lowercased value.
///
/// Terms keep the order in which their key first appeared so the query can
/// be written back out with [`Display`](fmt::Display). When two terms share a
/// key the later one replaces the earlier one in place.
///
/// # Examples
///
/// ```
/// use annotext_query::{FilterQuery, TrimPolicy};
///
/// let query = FilterQuery::parse("a, a/City", TrimPolicy::Trim);
/// assert_eq!(query.len(), 1);
/// assert_eq!(query.get("A").and_then(|term| term.named_entity()), Some("City"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    terms: Vec<FilterTerm>,
    index: HashMap<String, usize>,
}

impl FilterQuery {
    /// Parse a query permissively.
    ///
    /// An absent query, or one that is empty under `policy`, yields an empty
    /// index that matches nothing. Malformed segments are accepted as terms
    /// and never reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use annotext_query::{FilterQuery, TrimPolicy};
    ///
    /// let query = FilterQuery::parse("Nice/Location, attack", TrimPolicy::Trim);
    /// assert_eq!(query.len(), 2);
    /// assert!(FilterQuery::parse(None, TrimPolicy::Trim).is_empty());
    /// ```
    #[must_use]
    pub fn parse<'a>(query: impl Into<Option<&'a str>>, policy: TrimPolicy) -> Self {
        let mut parsed = Self::default();
        let Some(query) = query.into() else {
            log::debug!("no filter query supplied");
            return parsed;
        };
        if policy.apply(query).is_empty() {
            log::debug!("filter query is empty under {policy} policy");
            return parsed;
        }
        for segment in segments(query, policy) {
            parsed.insert(FilterTerm::parse(segment, policy));
        }
        log::debug!(
            "parsed filter query {query:?} into {} term(s) using {policy} policy",
            parsed.len()
        );
        parsed
    }

    /// Parse a query, rejecting anything the permissive parser would let
    /// through silently.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] for a query without terms,
    /// [`QueryError::Segment`] for a malformed segment and
    /// [`QueryError::DuplicateTerm`] when two segments share a lowercased
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use annotext_query::{FilterQuery, QueryError, TrimPolicy};
    ///
    /// let query = FilterQuery::parse_strict("X/Y, Z", TrimPolicy::Trim)?;
    /// assert_eq!(query.to_string(), "X/Y,Z");
    ///
    /// assert!(matches!(
    ///     FilterQuery::parse_strict("a, A/City", TrimPolicy::Trim),
    ///     Err(QueryError::DuplicateTerm { first: 0, second: 1, .. })
    /// ));
    /// # Ok::<(), QueryError>(())
    /// ```
    pub fn parse_strict(query: &str, policy: TrimPolicy) -> Result<Self, QueryError> {
        if policy.apply(query).is_empty() {
            return Err(QueryError::Empty);
        }
        let mut parsed = Self::default();
        for (position, segment) in query.split(TERM_SEPARATOR).enumerate() {
            let term = FilterTerm::parse_strict(segment, position, policy)?;
            let key = term.key();
            if let Some(&first) = parsed.index.get(&key) {
                return Err(QueryError::DuplicateTerm {
                    key,
                    first,
                    second: position,
                });
            }
            parsed.insert(term);
        }
        Ok(parsed)
    }

    /// Add a term, returning the term it replaced when the key was taken.
    pub fn insert(&mut self, term: FilterTerm) -> Option<FilterTerm> {
        let key = term.key();
        if let Some(existing) = self
            .index
            .get(&key)
            .and_then(|&slot| self.terms.get_mut(slot))
        {
            log::trace!("filter term {term} replaces {existing} for key {key:?}");
            return Some(std::mem::replace(existing, term));
        }
        self.index.insert(key, self.terms.len());
        self.terms.push(term);
        None
    }

    /// Look up the term for `lemma`, ignoring case.
    #[must_use]
    pub fn get(&self, lemma: &str) -> Option<&FilterTerm> {
        self.index
            .get(&fold_case(lemma))
            .and_then(|&slot| self.terms.get(slot))
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the query holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in first-seen key order.
    #[must_use]
    pub fn terms(&self) -> &[FilterTerm] {
        &self.terms
    }

    /// Whether `tag` satisfies the term indexed under its lemma.
    #[must_use]
    pub fn matches<T: TaggedToken + ?Sized>(&self, tag: &T) -> bool {
        self.get(tag.lemma()).is_some_and(|term| term.matches(tag))
    }

    /// Return the first tag satisfying any term.
    ///
    /// Tags are consumed in order and iteration stops at the first match.
    #[must_use]
    pub fn first_match<I>(&self, tags: I) -> Option<I::Item>
    where
        I: IntoIterator,
        I::Item: TaggedToken,
    {
        if self.is_empty() {
            return None;
        }
        tags.into_iter().find(|tag| self.matches(tag))
    }

    /// Existential test: whether any tag satisfies any term.
    ///
    /// # Examples
    ///
    /// ```
    /// use annotext_query::{FilterQuery, TaggedToken, TrimPolicy};
    ///
    /// struct Lemma(&'static str);
    ///
    /// impl TaggedToken for Lemma {
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
    /// assert!(query.matches_any([Lemma("peace"), Lemma("ATTACK")]));
    /// assert!(!query.matches_any([Lemma("peace")]));
    /// ```
    #[must_use]
    pub fn matches_any<I>(&self, tags: I) -> bool
    where
        I: IntoIterator,
        I::Item: TaggedToken,
    {
        self.first_match(tags).is_some()
    }

    /// Every tag satisfying any term, in input order.
    pub fn matching<I>(&self, tags: I) -> impl Iterator<Item = I::Item>
    where
        I: IntoIterator,
        I::Item: TaggedToken,
    {
        tags.into_iter().filter(move |tag| self.matches(tag))
    }
}

impl fmt::Display for FilterQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, term) in self.terms.iter().enumerate() {
            if position > 0 {
                write!(f, "{TERM_SEPARATOR}")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}
