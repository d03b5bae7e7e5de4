// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

mod packages;
pub use packages::*;

mod copies;
pub use copies::*;

mod build_args;
pub use build_args::*;

use crate::document::Document;
use crate::splicer::Splicer;

/// Inserts a block of full lines at `position`, nudging the block onto a
/// line boundary when the preceding content does not end with a newline
/// (e.g. an anchor line at the very end of an unterminated file).
pub(crate) fn insert_block(
  splicer: &mut Splicer,
  document: &Document,
  position: usize,
  block: &str
) {
  if position > 0 && !document.content[..position].ends_with('\n') {
    splicer.insert(position, &format!("\n{}", block));
  } else {
    splicer.insert(position, block);
  }
}
