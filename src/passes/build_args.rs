// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use crate::document::Document;
use crate::error::*;

/// The fixed cache-related build argument declarations prepended to every
/// rewritten Dockerfile.
pub const BUILD_ARG_BLOCK: &str = "\
# Build arguments for optimization
ARG BUILDKIT_INLINE_CACHE=1
ARG DOCKER_BUILDKIT=1
";

fn has_build_args(document: &Document) -> bool {
  document.lines().iter()
    .any(|line| line.text.trim() == "ARG BUILDKIT_INLINE_CACHE=1")
}

/// Prepends the fixed build argument declarations at the start of the
/// document.
///
/// A document already carrying the declarations is returned unchanged, so
/// repeated rewrites don't stack duplicate blocks on top of the file.
pub fn prepend_build_args(document: &Document) -> Result<Document> {
  if has_build_args(document) {
    return Ok(document.clone());
  }

  Ok(Document::new(format!("{}{}", BUILD_ARG_BLOCK, document.content)))
}
