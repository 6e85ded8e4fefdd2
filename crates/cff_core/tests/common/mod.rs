/*
SPDX-License-Identifier: MIT OR Apache-2.0
*/

#![allow(dead_code)]

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Path to a file under `tests/data`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Route `tracing` output to the test harness; set `RUST_LOG` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A minimal valid document.
pub const MINIMAL: &str = "cff-version: 1.0.3
message: If you use this software, please cite it as below.
authors:
  - family-names: Druskat
    given-names: Stephan
date-released: 2017-12-11
title: My Research Tool
version: 1.0.4
";
