// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use crate::document::Document;
use crate::error::*;
use crate::ignore::IgnoreList;
use crate::passes::{group_copies, merge_package_installs, prepend_build_args};

/// The result of a full rewrite: the optimized Dockerfile plus the build
/// context exclusions produced alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Optimized {
  /// The rewritten Dockerfile.
  pub document: Document,

  /// Path globs to exclude from the build context.
  pub ignore: IgnoreList
}

/// Rewrites a Dockerfile for better layer caching.
///
/// Passes run in a fixed order, each consuming the previous pass's output:
/// recognized package installs are merged into one canonical instruction
/// anchored after the base image, copy instructions are grouped by
/// destination before the run entrypoint, and the cache-related build
/// arguments are prepended. A failing pass aborts the whole rewrite; there
/// are no retries, since any failure is a structural property of the input.
///
/// The rewrite is idempotent: feeding the output back in reproduces it
/// byte for byte.
///
/// # Example
/// ```
/// use dockerfile_optimizer::optimize;
///
/// let optimized = optimize("FROM alpine:3.11\nRUN pip install flask\n")?;
/// assert!(optimized.document.content.contains("--no-install-recommends"));
/// # Ok::<(), dockerfile_optimizer::Error>(())
/// ```
pub fn optimize(input: &str) -> Result<Optimized> {
  let document = Document::new(input);

  // without a base image there is nothing to anchor insertions to, and the
  // input isn't a buildable Dockerfile to begin with
  if !document.has_base_image() {
    return Err(missing_base_image());
  }

  let document = merge_package_installs(&document)?;
  let document = group_copies(&document)?;
  let document = prepend_build_args(&document)?;

  Ok(Optimized {
    document,
    ignore: IgnoreList::standard()
  })
}
