//! Lexical tags produced by the annotation pipeline.

use std::collections::BTreeSet;

use annotext_query::TaggedToken;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const fn default_multiplicity() -> u32 {
    1
}

/// A single annotated token: its lemma, part-of-speech labels and
/// named-entity labels.
///
/// # Examples
///
/// ```
/// use annotext::Tag;
///
/// let tag = Tag::new("nice")
///     .with_original_value("Nice")
///     .with_pos("NNP")
///     .with_named_entity("Location");
/// assert_eq!(tag.lemma(), "nice");
/// assert!(tag.has_named_entity("Location"));
/// assert!(!tag.has_named_entity("location"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag {
    lemma: String,
    #[cfg_attr(feature = "serde", serde(default, rename = "ne"))]
    named_entities: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pos: Vec<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    original_value: Option<String>,
    #[cfg_attr(feature = "serde", serde(default = "default_multiplicity"))]
    multiplicity: u32,
}

impl Tag {
    /// Create a tag for `lemma` with no labels.
    #[must_use]
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            named_entities: BTreeSet::new(),
            pos: Vec::new(),
            original_value: None,
            multiplicity: default_multiplicity(),
        }
    }

    /// Add a named-entity label.
    #[must_use]
    pub fn with_named_entity(mut self, label: impl Into<String>) -> Self {
        self.named_entities.insert(label.into());
        self
    }

    /// Add a part-of-speech label.
    #[must_use]
    pub fn with_pos(mut self, pos: impl Into<String>) -> Self {
        self.pos.push(pos.into());
        self
    }

    /// Record the surface form the lemma was derived from.
    #[must_use]
    pub fn with_original_value(mut self, value: impl Into<String>) -> Self {
        self.original_value = Some(value.into());
        self
    }

    /// Set how many times the tag occurs within its sentence.
    #[must_use]
    pub fn with_multiplicity(mut self, multiplicity: u32) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Canonical base form of the token.
    #[must_use]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Named-entity labels attached to the tag.
    #[must_use]
    pub fn named_entities(&self) -> &BTreeSet<String> {
        &self.named_entities
    }

    /// Whether the tag carries `label`; comparison is case-sensitive.
    #[must_use]
    pub fn has_named_entity(&self, label: &str) -> bool {
        self.named_entities.contains(label)
    }

    /// Part-of-speech labels in pipeline order.
    #[must_use]
    pub fn pos(&self) -> &[String] {
        &self.pos
    }

    /// Surface form, when the pipeline recorded one.
    #[must_use]
    pub fn original_value(&self) -> Option<&str> {
        self.original_value.as_deref()
    }

    /// Occurrences of the tag within its sentence.
    #[must_use]
    pub fn multiplicity(&self) -> u32 {
        self.multiplicity
    }
}

impl TaggedToken for Tag {
    fn lemma(&self) -> &str {
        &self.lemma
    }

    fn has_named_entity(&self, label: &str) -> bool {
        self.named_entities.contains(label)
    }
}
