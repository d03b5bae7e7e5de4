// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Document;
use crate::error::*;
use crate::scanner::Line;
use crate::util::collapse_blank_lines;

use super::insert_block;

lazy_static! {
  // the two-argument form only: flags, extra sources, and anything else
  // unusual falls outside the recognized shape and is left untouched
  static ref COPY_LINE: Regex = Regex::new(
    r"(?i)^\s*copy\s+(\S+)\s+(\S+)$"
  ).unwrap();
}

/// Extracts the (source, destination) pair from a single-line two-argument
/// copy instruction, or None if the line isn't one.
pub(crate) fn extract_copy(line: &Line) -> Option<(String, String)> {
  if line.continued {
    return None;
  }

  COPY_LINE.captures(&line.text)
    .map(|fields| (fields[1].to_string(), fields[2].to_string()))
}

/// Copy payloads grouped by destination.
///
/// Groups are keyed by the destination string and kept in the order each
/// destination was first encountered, so the emitted instructions keep
/// their causal placement for a human reader. Sources within a group keep
/// insertion order; an identical (source, destination) pair collapses into
/// one entry.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct CopyGroups {
  groups: Vec<(String, Vec<String>)>
}

impl CopyGroups {
  pub(crate) fn add(&mut self, source: String, destination: String) {
    match self.groups.iter_mut().find(|(dest, _)| *dest == destination) {
      Some((_, sources)) => {
        if !sources.contains(&source) {
          sources.push(source);
        }
      },
      None => self.groups.push((destination, vec![source]))
    }
  }

  /// Emits one copy instruction per destination: the direct two-argument
  /// form for a single source, or every source followed by the destination
  /// as a directory target.
  pub(crate) fn canonical(&self) -> String {
    let mut instructions = Vec::new();

    for (destination, sources) in &self.groups {
      if sources.len() == 1 {
        instructions.push(format!("COPY {} {}", sources[0], destination));
      } else {
        let mut destination = destination.clone();
        if !destination.ends_with('/') {
          destination.push('/');
        }

        instructions.push(format!("COPY {} {}", sources.join(" "), destination));
      }
    }

    instructions.join("\n")
  }
}

/// Groups every recognized two-argument copy instruction by destination and
/// re-emits the grouped set directly before the first run-entrypoint line
/// (or at the end of the document if there is none).
///
/// Grouped multi-source instructions no longer match the two-argument form,
/// and regrouping the remaining direct copies reproduces them in place, so
/// the pass is stable across reruns.
pub fn group_copies(document: &Document) -> Result<Document> {
  let mut spans = Vec::new();
  let mut groups = CopyGroups::default();

  for line in document.lines() {
    if let Some((source, destination)) = extract_copy(line) {
      spans.push(line);
      groups.add(source, destination);
    }
  }

  if spans.is_empty() {
    return Ok(document.clone());
  }

  let anchor = document.before_entrypoint();

  let mut splicer = document.splicer();
  for line in &spans {
    splicer.delete(&line.span);
  }
  insert_block(
    &mut splicer,
    document,
    anchor,
    &format!("{}\n", groups.canonical())
  );

  Ok(Document::new(collapse_blank_lines(&splicer.content)))
}
