// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

#![forbid(unsafe_code)]

//! # Rust rewrite engine for Dockerfiles
//!
//! A pure Rust library for rewriting Dockerfiles into more cache-friendly,
//! fewer-layer equivalents. Recognized instruction patterns (package-manager
//! installs, file copies) are merged into canonical instructions and
//! re-anchored according to layer caching best practices; everything else in
//! the file is carried through untouched. A curated build-context ignore
//! list is produced alongside the rewrite.
//!
//! ## Quick start
//!
//! ```rust
//! use dockerfile_optimizer::optimize;
//!
//! let optimized = optimize(
//!   "FROM ubuntu:18.04\n\
//!    RUN apt-get update && apt-get install -y python3\n\
//!    RUN pip3 install flask\n\
//!    COPY app.py /app/\n\
//!    CMD [\"/app/app.py\"]\n"
//! ).unwrap();
//!
//! println!("{}", optimized.document.content);
//!
//! for glob in optimized.ignore.globs() {
//!   println!("{}", glob);
//! }
//! ```

mod error;
mod scanner;
mod util;
mod splicer;
mod document;
mod ignore;
mod passes;
mod pipeline;

pub use error::*;
pub use scanner::*;
pub use splicer::*;
pub use document::*;
pub use ignore::*;
pub use passes::*;
pub use pipeline::*;
