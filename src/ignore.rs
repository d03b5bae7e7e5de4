// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::fs;
use std::path::Path;

use snafu::ResultExt;

use crate::error::*;

// version control metadata, Python caches and virtual environments, test
// tooling output, and node_modules
const STANDARD_GLOBS: &[&str] = &[
  ".git",
  ".gitignore",
  "Dockerfile",
  ".dockerignore",
  "__pycache__",
  "*.pyc",
  "*.pyo",
  "*.pyd",
  ".Python",
  "env",
  "pip-log.txt",
  "pip-delete-this-directory.txt",
  ".tox",
  ".coverage",
  ".coverage.*",
  "htmlcov",
  ".pytest_cache",
  ".env",
  ".venv",
  "venv",
  "node_modules",
  "npm-debug.log",
];

/// The set of path globs to exclude from the build context.
///
/// The list is a fixed curated constant: it never depends on the document
/// being rewritten, so every invocation yields the same globs in the same
/// order. Deciding whether and where to persist the list belongs to the
/// caller; `persist` refuses to overwrite an existing file so a
/// caller-managed ignore configuration is never clobbered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreList {
  globs: Vec<String>
}

impl IgnoreList {
  /// Returns the standard ignore list.
  pub fn standard() -> IgnoreList {
    IgnoreList {
      globs: STANDARD_GLOBS.iter().map(|glob| glob.to_string()).collect()
    }
  }

  /// The path globs, in stable emission order.
  pub fn globs(&self) -> &[String] {
    &self.globs
  }

  /// Renders the list in `.dockerignore` format, one glob per line.
  pub fn render(&self) -> String {
    let mut rendered = self.globs.join("\n");
    rendered.push('\n');
    rendered
  }

  /// Writes the rendered list to `path` unless a file already exists there.
  ///
  /// Returns true if the list was written, false if an existing file was
  /// left untouched.
  pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
      return Ok(false);
    }

    fs::write(path, self.render()).context(WriteError)?;
    Ok(true)
  }
}

impl Default for IgnoreList {
  fn default() -> IgnoreList {
    IgnoreList::standard()
  }
}
