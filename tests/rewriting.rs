// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

extern crate dockerfile_optimizer;

use indoc::indoc;
use pretty_assertions::assert_eq;

use dockerfile_optimizer::*;

mod common;
use common::*;

// the kind of hand-grown Dockerfile the rewrite is aimed at: repeated
// installs across package managers, a copy, and an entrypoint
const EXAMPLE: &str = indoc!(r#"
  FROM ubuntu:latest
  RUN apt-get update && apt-get install -y python3
  RUN apt-get update && apt-get install -y nginx
  RUN pip3 install flask
  RUN pip3 install requests
  COPY app.py /app/
  RUN chmod +x /app/app.py
  EXPOSE 8080
  CMD ["/app/app.py"]
"#);

#[test]
fn rewrite_end_to_end() {
  assert_eq!(rewritten(EXAMPLE), indoc!(r#"
    # Build arguments for optimization
    ARG BUILDKIT_INLINE_CACHE=1
    ARG DOCKER_BUILDKIT=1
    FROM ubuntu:latest
    RUN apt-get update && \
        DEBIAN_FRONTEND=noninteractive \
        apt-get install -y --no-install-recommends \
            flask \
            nginx \
            python3 \
            requests \
        && apt-get clean \
        && rm -rf /var/lib/apt/lists/*
    RUN chmod +x /app/app.py
    EXPOSE 8080
    COPY app.py /app/
    CMD ["/app/app.py"]
  "#));
}

#[test]
fn rewrite_is_idempotent() {
  let once = rewritten(EXAMPLE);
  let twice = rewritten(&once);

  assert_eq!(once, twice);
}

#[test]
fn rewrite_is_deterministic_across_install_order() {
  let reordered = indoc!(r#"
    FROM ubuntu:latest
    RUN pip3 install requests
    RUN pip3 install flask
    RUN apt-get update && apt-get install -y nginx
    RUN apt-get update && apt-get install -y python3
    COPY app.py /app/
    RUN chmod +x /app/app.py
    EXPOSE 8080
    CMD ["/app/app.py"]
  "#);

  assert_eq!(rewritten(EXAMPLE), rewritten(reordered));
}

#[test]
fn rewrite_conserves_payloads() {
  let output = rewritten(EXAMPLE);

  for package in &["flask", "nginx", "python3", "requests"] {
    assert!(output.contains(package), "package {} lost in rewrite", package);
  }

  assert!(output.contains("COPY app.py /app/"));
}

#[test]
fn copies_group_by_destination() {
  let output = rewritten(indoc!(r#"
    FROM alpine:3.11
    COPY A /x
    COPY B /x
    COPY C /y
    CMD ["/bin/sh"]
  "#));

  assert_eq!(output, indoc!(r#"
    # Build arguments for optimization
    ARG BUILDKIT_INLINE_CACHE=1
    ARG DOCKER_BUILDKIT=1
    FROM alpine:3.11
    COPY A B /x/
    COPY C /y
    CMD ["/bin/sh"]
  "#));
}

#[test]
fn missing_base_image_fails_without_partial_output() {
  let result = optimize(indoc!(r#"
    RUN apt-get update && apt-get install -y python3
    COPY app.py /app/
    CMD ["/app/app.py"]
  "#));

  match result {
    Err(Error::MalformedDocument { .. }) => (),
    other => panic!("expected MalformedDocument, got {:?}", other)
  }
}

#[test]
fn ignore_list_ignores_document_content() {
  let plain = optimize("FROM alpine:3.11\n").unwrap();
  let busy = optimize(EXAMPLE).unwrap();

  assert_eq!(plain.ignore, busy.ignore);
  assert_eq!(plain.ignore.globs(), IgnoreList::standard().globs());
}

#[test]
fn persist_never_overwrites_an_existing_ignore_file() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join(".dockerignore");

  let ignore = IgnoreList::standard();

  assert!(ignore.persist(&path).unwrap());
  assert_eq!(std::fs::read_to_string(&path).unwrap(), ignore.render());

  // a caller-managed file stays exactly as the caller wrote it
  std::fs::write(&path, "custom\n").unwrap();
  assert!(!ignore.persist(&path).unwrap());
  assert_eq!(std::fs::read_to_string(&path).unwrap(), "custom\n");
}

#[test]
fn multiline_installs_keep_every_package() {
  let output = rewritten(indoc!(r#"
    FROM debian:bullseye
    RUN apt-get update && \
        apt-get install -y \
        git \
        curl
    CMD ["bash"]
  "#));

  assert_eq!(output, indoc!(r#"
    # Build arguments for optimization
    ARG BUILDKIT_INLINE_CACHE=1
    ARG DOCKER_BUILDKIT=1
    FROM debian:bullseye
    RUN apt-get update && \
        DEBIAN_FRONTEND=noninteractive \
        apt-get install -y --no-install-recommends \
            curl \
            git \
        && apt-get clean \
        && rm -rf /var/lib/apt/lists/*
    CMD ["bash"]
  "#));
}
