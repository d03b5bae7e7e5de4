// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use crate::splicer::Span;
use crate::util::join_continuations;

/// A single logical line in a Dockerfile.
///
/// A logical line covers one physical line plus any following lines pulled
/// in by trailing-backslash continuations. Scanning is fail-open: content
/// that isn't a recognized instruction still becomes a `Line`, and the
/// rewrite passes simply leave it alone.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Line {
  /// The byte range of the full logical line, including continuation lines
  /// and the trailing newline if present.
  pub span: Span,

  /// The continuation-joined text of the line, without the trailing newline.
  pub text: String,

  /// Whether this logical line spans more than one physical line.
  pub continued: bool
}

impl Line {
  /// Returns true if the line's first token is the given instruction
  /// keyword, ignoring case.
  pub fn has_keyword(&self, keyword: &str) -> bool {
    self.text.split_whitespace().next()
      .map(|token| token.eq_ignore_ascii_case(keyword))
      .unwrap_or(false)
  }
}

/// Splits raw content into logical lines, tracking byte offsets.
///
/// This is a single forward walk over the physical lines: a line whose
/// content ends with a trailing `\` pulls the next physical line into the
/// same logical line. An unterminated continuation at end of input still
/// yields a line rather than an error.
pub(crate) fn scan_lines(content: &str) -> Vec<Line> {
  let mut lines = Vec::new();

  let mut start = 0;
  let mut offset = 0;
  let mut physical_count = 0;

  while offset < content.len() {
    let line_end = match content[offset..].find('\n') {
      Some(i) => offset + i + 1,
      None => content.len()
    };

    if physical_count == 0 {
      start = offset;
    }
    physical_count += 1;

    let continues = content[offset..line_end].trim_end().ends_with('\\');
    if !continues {
      lines.push(make_line(content, start, line_end, physical_count));
      physical_count = 0;
    }

    offset = line_end;
  }

  if physical_count > 0 {
    lines.push(make_line(content, start, content.len(), physical_count));
  }

  lines
}

fn make_line(content: &str, start: usize, end: usize, physical_count: usize) -> Line {
  Line {
    span: Span::new(start, end),
    text: join_continuations(&content[start..end]).trim_end().to_string(),
    continued: physical_count > 1
  }
}
