// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use snafu::Snafu;

/// A Dockerfile rewriting error.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
  #[snafu(display(
    "malformed Dockerfile: {}", message
  ))]
  MalformedDocument {
    message: String
  },

  #[snafu(display(
    "could not read Dockerfile: {}", source
  ))]
  ReadError {
    source: std::io::Error
  },

  #[snafu(display(
    "could not write ignore list: {}", source
  ))]
  WriteError {
    source: std::io::Error
  }
}

/// A Dockerfile rewriting Result.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper to create a missing-anchor error.
///
/// A document with no base image gives the rewrite passes nothing to anchor
/// their insertions to, so the input is rejected rather than guessed at.
pub(crate) fn missing_base_image() -> Error {
  Error::MalformedDocument {
    message: "no base image (FROM) instruction found".into()
  }
}
