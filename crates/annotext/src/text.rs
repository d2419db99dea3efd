//! The annotated document: source text plus its ordered sentences.

use std::ops::Index;

use annotext_query::{FilterQuery, TrimPolicy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config;
use crate::sentence::Sentence;
use crate::tag::Tag;

/// Raw text decomposed into sentences by an external annotation pipeline.
///
/// Sentences are kept in insertion order until a sorting operation reorders
/// them. Flattened views ([`tokens`](Self::tokens), [`tags`](Self::tags))
/// visit sentences in their current order and each sentence's tags in its
/// own collection order. They are recomputed on every call.
///
/// # Examples
///
/// ```
/// use annotext::{AnnotatedText, Sentence, Tag};
///
/// let mut text = AnnotatedText::new("Nice was attacked.");
/// text.add_sentence(
///     Sentence::new(0, "Nice was attacked.")
///         .with_tag("0", Tag::new("nice").with_named_entity("Location"))
///         .with_tag("1", Tag::new("attack")),
/// );
///
/// assert_eq!(text.tokens(), ["nice", "attack"]);
/// assert!(text.filter("Nice/Location, attack"));
/// assert!(!text.filter("Nice/Person"));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnotatedText {
    #[cfg_attr(feature = "serde", serde(default))]
    text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    sentences: Vec<Sentence>,
}

impl AnnotatedText {
    /// Create an empty document for `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            sentences: Vec::new(),
        }
    }

    /// Original source text, if recorded.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Replace the recorded source text.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Append a sentence. Duplicates are permitted.
    pub fn add_sentence(&mut self, sentence: Sentence) {
        self.sentences.push(sentence);
    }

    /// Sentences in their current stored order.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Sentence at `index` in the current stored order.
    #[must_use]
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    /// Number of sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether the document holds no sentences.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Every tag in document order.
    ///
    /// This is the traversal [`filter`](Self::filter) scans.
    pub fn iter_tags(&self) -> impl Iterator<Item = &Tag> {
        self.sentences.iter().flat_map(Sentence::tags)
    }

    /// Every tag in document order, collected.
    #[must_use]
    pub fn tags(&self) -> Vec<&Tag> {
        self.iter_tags().collect()
    }

    /// Every tag's lemma in document order.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        self.iter_tags().map(Tag::lemma).collect()
    }

    /// Number of tokens across all sentences.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.iter_tags().count()
    }

    /// Sort the stored sentences by their natural order and return them.
    ///
    /// The reordering is permanent: later calls to [`tokens`](Self::tokens),
    /// [`tags`](Self::tags) and [`filter`](Self::filter) observe it. Use
    /// [`sorted_view`](Self::sorted_view) to leave storage untouched.
    pub fn sentences_sorted(&mut self) -> &[Sentence] {
        self.sort_in_place();
        &self.sentences
    }

    /// Sort the stored sentences by their natural order.
    ///
    /// The sort is stable, so sentences sharing a number keep their relative
    /// insertion order.
    pub fn sort_in_place(&mut self) {
        self.sentences.sort();
    }

    /// Sentences in natural order without reordering storage.
    #[must_use]
    pub fn sorted_view(&self) -> Vec<&Sentence> {
        let mut view: Vec<&Sentence> = self.sentences.iter().collect();
        view.sort();
        view
    }

    /// Whether any tag matches `query`, using the configured trimming policy.
    ///
    /// An absent or empty query matches nothing. See [`config::trim_policy`].
    #[must_use]
    pub fn filter<'q>(&self, query: impl Into<Option<&'q str>>) -> bool {
        self.filter_with(query, config::trim_policy())
    }

    /// Whether any tag matches `query` parsed under `policy`.
    #[must_use]
    pub fn filter_with<'q>(&self, query: impl Into<Option<&'q str>>, policy: TrimPolicy) -> bool {
        self.filter_query(&FilterQuery::parse(query, policy))
    }

    /// Whether any tag matches an already parsed query.
    ///
    /// Scanning stops at the first matching tag.
    #[must_use]
    pub fn filter_query(&self, query: &FilterQuery) -> bool {
        let hit = query.first_match(self.iter_tags());
        hit.map_or_else(
            || {
                log::debug!(
                    "filter {query} matched none of {} sentence(s)",
                    self.sentences.len()
                );
            },
            |tag| log::debug!("filter {query} matched lemma {:?}", tag.lemma()),
        );
        hit.is_some()
    }

    /// Every tag matching `query`, in document order.
    #[must_use]
    pub fn matching_tags(&self, query: &FilterQuery) -> Vec<&Tag> {
        query.matching(self.iter_tags()).collect()
    }
}

impl Index<usize> for AnnotatedText {
    type Output = Sentence;

    #[expect(
        clippy::indexing_slicing,
        reason = "out-of-bounds access is a caller contract violation and must panic"
    )]
    fn index(&self, index: usize) -> &Self::Output {
        &self.sentences[index]
    }
}

impl FromIterator<Sentence> for AnnotatedText {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        Self {
            text: None,
            sentences: iter.into_iter().collect(),
        }
    }
}

impl Extend<Sentence> for AnnotatedText {
    fn extend<I: IntoIterator<Item = Sentence>>(&mut self, iter: I) {
        self.sentences.extend(iter);
    }
}
