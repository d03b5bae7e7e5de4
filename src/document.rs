// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::io::{Read, BufReader};
use std::str::FromStr;

use snafu::ResultExt;

use crate::error::*;
use crate::scanner::{scan_lines, Line};
use crate::splicer::Splicer;

/// A Dockerfile undergoing rewrites.
///
/// A `Document` owns the raw text plus the logical lines scanned from it.
/// Rewrite passes never mutate a `Document` in place: each pass splices a
/// fresh content buffer and builds a new value from it, so every
/// intermediate result stays immutable and spans recorded against one
/// revision are never applied to another.
///
/// # Example
/// ```
/// use dockerfile_optimizer::Document;
///
/// let document = Document::new("FROM alpine:3.11\nRUN apk add curl\n");
/// assert_eq!(document.lines().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
  /// The raw content of the Dockerfile
  pub content: String,

  lines: Vec<Line>
}

impl Document {
  /// Scans a Dockerfile from a string.
  ///
  /// Scanning is fail-open and cannot error: malformed or unrecognized
  /// content still scans into lines and is carried through rewrites
  /// untouched.
  pub fn new<S: Into<String>>(input: S) -> Document {
    let content = input.into();
    let lines = scan_lines(&content);

    Document { content, lines }
  }

  /// Reads a Dockerfile from a reader.
  pub fn from_reader<R>(reader: R) -> Result<Document>
  where
    R: Read
  {
    let mut buf = String::new();
    let mut buf_reader = BufReader::new(reader);
    buf_reader.read_to_string(&mut buf).context(ReadError)?;

    Ok(Document::new(buf))
  }

  /// An ordered list of the document's logical lines.
  pub fn lines(&self) -> &[Line] {
    &self.lines
  }

  /// True if the document declares a base image.
  pub fn has_base_image(&self) -> bool {
    self.lines.iter().any(|line| line.has_keyword("FROM"))
  }

  /// The insertion point directly after the first base image (`FROM`)
  /// line, or `MalformedDocument` if the document has none.
  pub(crate) fn after_base_image(&self) -> Result<usize> {
    self.lines.iter()
      .find(|line| line.has_keyword("FROM"))
      .map(|line| line.span.end)
      .ok_or_else(missing_base_image)
  }

  /// The insertion point directly before the first run-entrypoint (`CMD`
  /// or `ENTRYPOINT`) line, falling back to the end of the document.
  pub(crate) fn before_entrypoint(&self) -> usize {
    self.lines.iter()
      .find(|line| line.has_keyword("CMD") || line.has_keyword("ENTRYPOINT"))
      .map(|line| line.span.start)
      .unwrap_or_else(|| self.content.len())
  }

  /// Creates a `Splicer` for this document.
  pub fn splicer(&self) -> Splicer {
    Splicer::from(self)
  }
}

impl FromStr for Document {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Document::new(s))
  }
}

#[cfg(test)]
mod tests {
  use indoc::indoc;
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn anchors() -> Result<()> {
    let document = Document::new(indoc!(r#"
      FROM ubuntu:18.04
      RUN echo hi
      EXPOSE 8080
      CMD ["sh"]
    "#));

    // directly after the FROM line's newline
    assert_eq!(document.after_base_image()?, 18);

    // at the start of the CMD line
    assert_eq!(document.before_entrypoint(), 42);

    Ok(())
  }

  #[test]
  fn anchor_missing_base_image() {
    let document = Document::new("RUN echo hi\n");

    assert!(!document.has_base_image());
    assert!(document.after_base_image().is_err());
  }

  #[test]
  fn entrypoint_anchor_falls_back_to_document_end() {
    let document = Document::new("FROM alpine:3.11\nRUN echo hi\n");

    assert_eq!(document.before_entrypoint(), document.content.len());
  }

  #[test]
  fn from_reader_matches_new() -> Result<()> {
    let s = "FROM alpine:3.11\nRUN echo hi\n";

    assert_eq!(Document::from_reader(s.as_bytes())?, Document::new(s));
    assert_eq!(s.parse::<Document>()?, Document::new(s));

    Ok(())
  }
}
