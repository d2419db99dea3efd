//! Helpers for rendering command output.

use std::io::Write;

use annotext::{Sentence, Tag};
use eyre::{Context, Result};

pub(crate) fn write_token(writer: &mut dyn Write, lemma: &str) -> Result<()> {
    writeln!(writer, "{lemma}").wrap_err_with(|| format!("failed to write token {lemma:?}"))
}

/// Render a tag as `lemma [labels] (pos)`, omitting empty parts.
pub(crate) fn format_tag(tag: &Tag) -> String {
    let mut line = tag.lemma().to_owned();
    if !tag.named_entities().is_empty() {
        let labels: Vec<&str> = tag.named_entities().iter().map(String::as_str).collect();
        line.push_str(&format!(" [{}]", labels.join(", ")));
    }
    if !tag.pos().is_empty() {
        line.push_str(&format!(" ({})", tag.pos().join(", ")));
    }
    line
}

pub(crate) fn write_tag(writer: &mut dyn Write, tag: &Tag) -> Result<()> {
    writeln!(writer, "{}", format_tag(tag))
        .wrap_err_with(|| format!("failed to write tag {:?}", tag.lemma()))
}

pub(crate) fn write_tags_json(writer: &mut dyn Write, tags: &[&Tag]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, tags).wrap_err("failed to serialise tags")?;
    writeln!(writer).wrap_err("failed to terminate JSON output")
}

pub(crate) fn write_sentence(writer: &mut dyn Write, sentence: &Sentence) -> Result<()> {
    writeln!(
        writer,
        "{}\t{}",
        sentence.sentence_number(),
        sentence.text()
    )
    .wrap_err_with(|| {
        format!(
            "failed to write sentence {}",
            sentence.sentence_number()
        )
    })
}

pub(crate) fn write_line(writer: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(writer, "{line}").wrap_err("failed to write output")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(write: impl FnOnce(&mut dyn Write) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        if let Err(err) = write(&mut buffer) {
            panic!("writing to a buffer should succeed: {err}");
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    #[test]
    fn formats_bare_tag() {
        assert_eq!(format_tag(&Tag::new("attack")), "attack");
    }

    #[test]
    fn formats_labels_and_pos() {
        let tag = Tag::new("paris")
            .with_named_entity("Location")
            .with_named_entity("City")
            .with_pos("NNP");
        assert_eq!(format_tag(&tag), "paris [City, Location] (NNP)");
    }

    #[test]
    fn writes_sentence_with_number() {
        let sentence = Sentence::new(4, "Nice was attacked.");
        let out = render(|w| write_sentence(w, &sentence));
        assert_eq!(out, "4\tNice was attacked.\n");
    }

    #[test]
    fn writes_tags_as_json_array() {
        let tag = Tag::new("nice").with_named_entity("Location");
        let out = render(|w| write_tags_json(w, &[&tag]));
        assert!(out.starts_with('['));
        assert!(out.contains("\"lemma\": \"nice\""));
        assert!(out.contains("\"ne\""));
    }
}
