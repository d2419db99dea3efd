//! Sentences and their keyed tag collections.

use std::cmp::Ordering;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// One sentence of an annotated text.
///
/// Tags are keyed by a position key unique within the sentence and are
/// visited in key order. Sentences order by [`sentence_number`](Self::sentence_number)
/// alone, so two sentences with the same number compare equal even if their
/// text differs.
///
/// # Examples
///
/// ```
/// use annotext::{Sentence, Tag};
///
/// let mut sentence = Sentence::new(1, "Nice was attacked.");
/// sentence.add_tag("0", Tag::new("nice").with_named_entity("Location"));
/// sentence.add_tag("2", Tag::new("attack"));
/// assert_eq!(sentence.tag_count(), 2);
/// assert_eq!(sentence.tag("2").map(Tag::lemma), Some("attack"));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sentence {
    #[cfg_attr(feature = "serde", serde(default))]
    sentence: String,
    #[cfg_attr(feature = "serde", serde(default))]
    sentence_number: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    tags: BTreeMap<String, Tag>,
}

impl Sentence {
    /// Create an empty sentence.
    #[must_use]
    pub fn new(sentence_number: usize, sentence: impl Into<String>) -> Self {
        Self {
            sentence: sentence.into(),
            sentence_number,
            tags: BTreeMap::new(),
        }
    }

    /// Store `tag` under `key`, returning the tag previously stored there.
    pub fn add_tag(&mut self, key: impl Into<String>, tag: Tag) -> Option<Tag> {
        self.tags.insert(key.into(), tag)
    }

    /// Chainable form of [`add_tag`](Self::add_tag).
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, tag: Tag) -> Self {
        self.add_tag(key, tag);
        self
    }

    /// Look up the tag stored under `key`.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&Tag> {
        self.tags.get(key)
    }

    /// Tags in collection order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.values()
    }

    /// Keys and tags in collection order.
    pub fn keyed_tags(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.tags.iter().map(|(key, tag)| (key.as_str(), tag))
    }

    /// Number of tags in the sentence.
    #[must_use]
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Sentence text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.sentence
    }

    /// Natural ordering key.
    #[must_use]
    pub fn sentence_number(&self) -> usize {
        self.sentence_number
    }
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        self.sentence_number == other.sentence_number
    }
}

impl Eq for Sentence {}

impl Ord for Sentence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sentence_number.cmp(&other.sentence_number)
    }
}

impl PartialOrd for Sentence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
