//! End-to-end behaviour of annotated documents built by hand and from JSON.

use annotext::{AnnotatedText, FilterQuery, Sentence, Tag, TrimPolicy};

fn headline() -> AnnotatedText {
    let mut text = AnnotatedText::new("Attack in Nice. Obama responds.");
    text.add_sentence(
        Sentence::new(1, "Obama responds.")
            .with_tag("0", Tag::new("Obama").with_named_entity("Person"))
            .with_tag("1", Tag::new("respond")),
    );
    text.add_sentence(
        Sentence::new(0, "Attack in Nice.")
            .with_tag("0", Tag::new("attack"))
            .with_tag("2", Tag::new("Nice").with_named_entity("Location")),
    );
    text
}

#[test]
fn filter_scans_every_sentence() {
    let text = headline();
    assert!(text.filter("obama/Person"));
    assert!(text.filter("nice/Location"));
    assert!(!text.filter("obama/Location"));
    assert!(!text.filter("paris"));
}

#[test]
fn sorting_changes_traversal_order_seen_by_later_calls() {
    let mut text = headline();
    let query = FilterQuery::parse("obama, attack", TrimPolicy::Trim);
    let first_before = text.matching_tags(&query).first().copied().map(Tag::lemma);
    assert_eq!(first_before, Some("Obama"));

    let _ = text.sentences_sorted();
    let first_after = text.matching_tags(&query).first().copied().map(Tag::lemma);
    assert_eq!(first_after, Some("attack"));
    assert_eq!(text.tokens(), ["attack", "Nice", "Obama", "respond"]);
}

#[test]
fn matching_tags_is_empty_for_unmatched_query() {
    let text = headline();
    let query = FilterQuery::parse("Nice/Person", TrimPolicy::Trim);
    assert!(text.matching_tags(&query).is_empty());
}

fn single_tag(tag: Tag) -> AnnotatedText {
    let mut text = AnnotatedText::default();
    text.add_sentence(Sentence::new(0, "").with_tag("0", tag));
    text
}

#[test]
fn uppercase_query_matches_word_final_sigma() {
    let text = single_tag(Tag::new("οδος"));
    assert!(text.filter_with("ΟΔΟΣ", TrimPolicy::Trim));
    assert!(text.filter_with("ΟΔΟΣ", TrimPolicy::Verbatim));
}

#[test]
fn doubled_separator_keeps_empty_constraint_only_verbatim() {
    let text = single_tag(Tag::new("a").with_named_entity("Location"));
    assert!(!text.filter_with("a//b", TrimPolicy::Verbatim));
    assert!(text.filter_with("a//b", TrimPolicy::Trim));
    assert!(text.filter_with("a/", TrimPolicy::Verbatim));
}

#[cfg(feature = "serde")]
mod json {
    use super::*;

    fn fixture() -> AnnotatedText {
        let raw = include_str!("fixtures/nice.json");
        match serde_json::from_str(raw) {
            Ok(text) => text,
            Err(err) => panic!("fixture should deserialise: {err}"),
        }
    }

    #[test]
    fn deserialises_pipeline_output_ignoring_unknown_fields() {
        let text = fixture();
        assert_eq!(text.len(), 2);
        assert_eq!(text.text(), Some("Nice was attacked. Police arrived in Nice."));
        assert_eq!(text.num_terms(), 5);
        let first = text.sentence(0).and_then(|sentence| sentence.tag("3"));
        assert_eq!(first.and_then(Tag::original_value), Some("Nice"));
    }

    #[test]
    fn filters_deserialised_document() {
        let text = fixture();
        assert!(text.filter_with("Nice/Location, attack", TrimPolicy::Trim));
        assert!(text.filter_with("ARRIVE", TrimPolicy::Trim));
        assert!(!text.filter_with("police/Organization", TrimPolicy::Trim));
    }

    #[test]
    fn serialisation_round_trips_structure() {
        let text = fixture();
        let rendered = match serde_json::to_string(&text) {
            Ok(rendered) => rendered,
            Err(err) => panic!("document should serialise: {err}"),
        };
        let reparsed: AnnotatedText = match serde_json::from_str(&rendered) {
            Ok(reparsed) => reparsed,
            Err(err) => panic!("rendered document should deserialise: {err}"),
        };
        assert_eq!(reparsed.tokens(), text.tokens());
        assert_eq!(reparsed.tags(), text.tags());
        assert!(!rendered.contains("num_terms"));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let text: AnnotatedText = match serde_json::from_str("{}") {
            Ok(text) => text,
            Err(err) => panic!("empty object should deserialise: {err}"),
        };
        assert!(text.is_empty());
        assert_eq!(text.text(), None);
        assert!(!text.filter("anything"));
    }
}
