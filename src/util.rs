// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
  // tolerates trailing whitespace after the backslash, like Docker's own
  // lenient handling of almost-valid continuations
  static ref ESCAPED_BREAK: Regex = Regex::new(r"\\[ \t]*\n").unwrap();

  static ref BLANK_RUN: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Removes escaped line breaks (\\\n) from a string, flattening a continued
/// instruction into a single logical command line.
pub(crate) fn join_continuations(s: &str) -> String {
  ESCAPED_BREAK.replace_all(s, "").into_owned()
}

/// Collapses any run of blank lines down to at most one.
///
/// Span removal can leave consecutive newlines behind where instructions
/// used to be; this squeezes them back out after a rewrite pass.
pub(crate) fn collapse_blank_lines(s: &str) -> String {
  BLANK_RUN.replace_all(s, "\n\n").into_owned()
}
