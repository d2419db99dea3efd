//! Annotated-text document model for annotext.
//!
//! An [`AnnotatedText`] holds the output of an external annotation pipeline:
//! the source text decomposed into [`Sentence`]s, each owning a keyed
//! collection of [`Tag`]s carrying a lemma, part-of-speech labels and
//! named-entity labels. The model offers flattened token and tag views and a
//! single query capability, [`AnnotatedText::filter`], testing whether any
//! tag satisfies a compact filter expression such as `"Nice/Location, attack"`.
//!
//! The query grammar lives in the `annotext-query` crate and is re-exported
//! here.

pub mod config;
mod sentence;
mod tag;
mod text;

pub use annotext_query::{
    FilterQuery, FilterTerm, QueryError, SegmentErrorInfo, TaggedToken, TrimPolicy,
    TrimPolicyParseError,
};
pub use sentence::Sentence;
pub use tag::Tag;
pub use text::AnnotatedText;
