// (C) Copyright 2019 Hewlett Packard Enterprise Development LP

/// Runs a full rewrite and unwraps the resulting Dockerfile text.
pub fn rewritten(input: &str) -> String {
  dockerfile_optimizer::optimize(input).unwrap().document.content
}
