// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::convert::TryInto;

use crate::document::Document;

/// An offset used to adjust proceeding Spans after content has been spliced
#[derive(Debug)]
struct SpliceOffset {
  position: usize,
  offset: isize
}

/// A byte-index tuple representing a span of characters in a string
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Span {
  pub start: usize,
  pub end: usize
}

impl Span {
  pub fn new(start: usize, end: usize) -> Span {
    Span { start, end }
  }

  fn adjust_offsets(&self, offsets: &[SpliceOffset]) -> Span {
    let mut start = self.start as isize;
    let mut end = self.end as isize;

    for splice in offsets {
      if splice.position < start as usize {
        start += splice.offset;
        end += splice.offset;
      } else if splice.position < end as usize {
        end += splice.offset;
      }
    }

    Span {
      start: start.try_into().ok().unwrap_or(0),
      end: end.try_into().ok().unwrap_or(0)
    }
  }
}

/// A utility to repeatedly remove, replace, and insert spans of text within
/// a larger document.
///
/// Each call rewrites the `content` buffer and appends to the list of
/// internal offsets. Span bounds are adjusted at call-time, so removal by
/// recorded position keeps working even after earlier calls have shifted
/// one or both of the span bounds. Spans are never matched by content, so
/// two instructions with identical text cannot be confused for one another.
///
/// # Example
/// ```
/// use dockerfile_optimizer::*;
///
/// let document = Document::new("FROM alpine:3.10\nRUN foo\n");
/// let run = &document.lines()[1];
///
/// let mut splicer = document.splicer();
/// splicer.delete(&run.span);
///
/// assert_eq!(splicer.content, "FROM alpine:3.10\n");
/// ```
pub struct Splicer {
  /// The current content of the splice buffer.
  pub content: String,

  splice_offsets: Vec<SpliceOffset>
}

impl Splicer {
  /// Creates a new Splicer from the given document.
  pub(crate) fn from(document: &Document) -> Splicer {
    Splicer {
      content: document.content.clone(),
      splice_offsets: Vec::new()
    }
  }

  /// Replaces a Span with the given replacement string, mutating the
  /// `content` string.
  ///
  /// Note that spans are always relative to the *original input document*.
  /// Span offsets are recalculated at call-time to account for previous
  /// calls that may have shifted one or both of the span bounds.
  pub fn splice(&mut self, span: &Span, replacement: &str) {
    let span = span.adjust_offsets(&self.splice_offsets);

    // determine the splice offset (only used on subsequent splices)
    let prev_len = span.end - span.start;
    let new_len = replacement.len();
    let offset = new_len as isize - prev_len as isize;
    self.splice_offsets.push(
      SpliceOffset { position: span.start, offset }
    );

    // split and rebuild the content with the replacement instead
    let (beginning, rest) = self.content.split_at(span.start);
    let (_, end) = rest.split_at(span.end - span.start);
    self.content = format!("{}{}{}", beginning, replacement, end);
  }

  /// Removes a Span outright, mutating the `content` string.
  pub fn delete(&mut self, span: &Span) {
    self.splice(span, "");
  }

  /// Inserts text at the given position without replacing anything.
  ///
  /// The position is relative to the original input document, like any
  /// other span bound.
  pub fn insert(&mut self, position: usize, text: &str) {
    self.splice(&Span::new(position, position), text);
  }
}
