// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::document::Document;
use crate::error::*;
use crate::scanner::Line;
use crate::util::collapse_blank_lines;

use super::insert_block;

lazy_static! {
  // matched against the continuation-joined text of a logical line, so a
  // multi-line RUN is already flattened by the time this runs
  static ref PACKAGE_RUN: Regex = Regex::new(
    r"(?i)^\s*run\s+(?:apt-get\s+update\b|pip3?\s+install\b)"
  ).unwrap();
}

/// Returns true if a logical line holds a recognized package-install
/// command.
pub(crate) fn is_package_install(line: &Line) -> bool {
  PACKAGE_RUN.is_match(&line.text)
}

/// Extracts package names from a continuation-joined command line.
///
/// Tokens after every `install` directive are collected up to the next
/// shell `&&` or `;` separator. Flag tokens and stray continuation
/// backslashes are skipped. A command without an `install` directive
/// contributes an empty set; its span is still merged away with the rest.
pub(crate) fn extract_packages(text: &str) -> BTreeSet<String> {
  let mut packages = BTreeSet::new();
  let mut in_install = false;

  for token in text.split_whitespace() {
    if token == "&&" || token == ";" {
      in_install = false;
    } else if token.eq_ignore_ascii_case("install") {
      in_install = true;
    } else if in_install && !token.starts_with('-') && token != "\\" {
      match token.strip_suffix(';') {
        Some(package) => {
          if !package.is_empty() {
            packages.insert(package.to_string());
          }
          in_install = false;
        },
        None => {
          packages.insert(token.to_string());
        }
      }
    }
  }

  packages
}

/// Emits the single canonical install instruction for a merged package set:
/// one index update, one install of the full sorted set without recommended
/// extras, and a cache cleanup, joined with line continuations so the whole
/// step builds (and caches) as one layer.
pub(crate) fn canonical_install(packages: &BTreeSet<String>) -> String {
  let mut instruction = String::from("RUN apt-get update && \\\n");
  instruction.push_str("    DEBIAN_FRONTEND=noninteractive \\\n");
  instruction.push_str("    apt-get install -y --no-install-recommends \\\n");

  for package in packages {
    instruction.push_str("        ");
    instruction.push_str(package);
    instruction.push_str(" \\\n");
  }

  instruction.push_str("    && apt-get clean \\\n");
  instruction.push_str("    && rm -rf /var/lib/apt/lists/*");

  instruction
}

/// Merges every recognized package-install instruction into one canonical
/// instruction anchored directly after the base image line.
///
/// The package union is sorted lexicographically, so two documents
/// installing the same set in a different order rewrite to byte-identical
/// instructions. Re-running the pass on its own output extracts that same
/// set from the canonical instruction and emits it again unchanged, making
/// the rewrite a one-pass fixed point.
pub fn merge_package_installs(document: &Document) -> Result<Document> {
  let spans: Vec<&Line> = document.lines().iter()
    .filter(|line| is_package_install(line))
    .collect();

  if spans.is_empty() {
    return Ok(document.clone());
  }

  let mut packages = BTreeSet::new();
  for line in &spans {
    packages.extend(extract_packages(&line.text));
  }

  // nothing extracted from any span: an install instruction with no
  // packages would be worse than the original text
  if packages.is_empty() {
    return Ok(document.clone());
  }

  let anchor = document.after_base_image()?;

  let mut splicer = document.splicer();
  for line in &spans {
    splicer.delete(&line.span);
  }
  insert_block(
    &mut splicer,
    document,
    anchor,
    &format!("{}\n", canonical_install(&packages))
  );

  Ok(Document::new(collapse_blank_lines(&splicer.content)))
}
