// LTF stemming: rewrite the text of every <TOKEN> element of an LTF document
//
// Everything outside TOKEN text is copied through event by event, so the
// document structure, attributes and whitespace are preserved.

use std::fs;
use std::io;
use std::path::Path;

use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use crate::Stemmer;

/// Element whose text content is stemmed.
pub const TOKEN_ELEMENT: &[u8] = b"TOKEN";

/// File name suffix of LTF documents.
pub const LTF_SUFFIX: &str = ".ltf.xml";

#[derive(Debug, thiserror::Error)]
pub enum LtfError {
    #[error("malformed LTF document: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("stemmed document is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Stem the text of every `TOKEN` element in `xml`.
pub fn stem_document(stemmer: &Stemmer, xml: &str) -> Result<String, LtfError> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut in_token = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Start(start) => {
                in_token = start.name().as_ref() == TOKEN_ELEMENT;
                writer.write_event(Event::Start(start))?;
            }
            Event::End(end) => {
                if end.name().as_ref() == TOKEN_ELEMENT {
                    in_token = false;
                }
                writer.write_event(Event::End(end))?;
            }
            Event::Text(text) if in_token => {
                let raw = text.unescape().map_err(quick_xml::Error::from)?;
                let stem = stemmer.stem(&raw);
                writer.write_event(Event::Text(BytesText::new(&stem)))?;
            }
            event => writer.write_event(event)?,
        }
    }

    Ok(String::from_utf8(writer.into_inner())?)
}

/// Stem every `*.ltf.xml` file in `input_dir`, writing a file of the same
/// name into `output_dir`. Returns the number of documents written.
pub fn stem_dir(stemmer: &Stemmer, input_dir: &Path, output_dir: &Path) -> Result<usize, LtfError> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let is_ltf = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(LTF_SUFFIX));
        if is_ltf && path.is_file() {
            inputs.push(path);
        }
    }
    inputs.sort();

    for path in &inputs {
        let xml = fs::read_to_string(path)?;
        let stemmed = stem_document(stemmer, &xml)?;
        // Only files with a name were collected above.
        if let Some(name) = path.file_name() {
            fs::write(output_dir.join(name), stemmed)?;
        }
        debug!(path = %path.display(), "stemmed LTF document");
    }
    Ok(inputs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleTable;

    fn stemmer() -> Stemmer {
        Stemmer::new(
            RuleTable::from_records([("s$", "", "PL"), ("ed$", "", "PST")]).unwrap(),
            ["walk", "cat"].into_iter().collect(),
        )
    }

    const DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LCTL_TEXT><DOC id="d1"><TEXT><SEG id="s1">
<ORIGINAL_TEXT>cats walked</ORIGINAL_TEXT>
<TOKEN id="t1" start_char="0" end_char="3">cats</TOKEN>
<TOKEN id="t2" start_char="5" end_char="10">walked</TOKEN>
</SEG></TEXT></DOC></LCTL_TEXT>"#;

    #[test]
    fn token_text_is_stemmed() {
        let out = stem_document(&stemmer(), DOC).unwrap();
        assert!(out.contains(r#"<TOKEN id="t1" start_char="0" end_char="3">cat</TOKEN>"#));
        assert!(out.contains(r#"<TOKEN id="t2" start_char="5" end_char="10">walk</TOKEN>"#));
    }

    #[test]
    fn other_text_is_untouched() {
        let out = stem_document(&stemmer(), DOC).unwrap();
        assert!(out.contains("<ORIGINAL_TEXT>cats walked</ORIGINAL_TEXT>"));
        assert!(out.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn escaped_text_round_trips() {
        let out = stem_document(&stemmer(), "<TOKEN>&lt;cats</TOKEN>").unwrap();
        assert_eq!(out, "<TOKEN>&lt;cat</TOKEN>");
    }

    #[test]
    fn directory_mode_filters_by_suffix() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        fs::write(input.path().join("a.ltf.xml"), DOC).unwrap();
        fs::write(input.path().join("notes.txt"), "cats").unwrap();

        let n = stem_dir(&stemmer(), input.path(), output.path()).unwrap();
        assert_eq!(n, 1);
        let written = fs::read_to_string(output.path().join("a.ltf.xml")).unwrap();
        assert!(written.contains(">cat</TOKEN>"));
        assert!(!output.path().join("notes.txt").exists());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(stem_document(&stemmer(), "<TOKEN>cats</SEG>").is_err());
    }
}
