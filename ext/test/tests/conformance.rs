//! Conformance tests that run YAML fixtures against res
//!
//! Run with: cargo test -p res-test --test conformance --features res-test/fixtures
//!
//! Note: This test file requires the `fixtures` feature to be enabled.

#![cfg(feature = "fixtures")]

use res_test::fixture::Fixture;
use std::fs;
use std::path::{Path, PathBuf};

/// The fixtures directory next to this crate's manifest
fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and run every fixture in one file
fn run_fixture_file(file: &str) {
    let path = fixtures_dir().join(file);
    println!("Running fixture: {}", path.display());

    let yaml = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

    // Parse potentially multiple fixtures (separated by ---)
    let fixtures = Fixture::from_yaml_multi(&yaml).unwrap_or_else(|e| {
        panic!("Failed to parse {}: {}", path.display(), e);
    });
    assert!(!fixtures.is_empty(), "{} holds no fixtures", path.display());

    for fixture in fixtures {
        println!("  Running: {}", fixture.name);
        fixture.run_and_assert();
    }
}

#[test]
fn test_axis_classification() {
    run_fixture_file("01_axis_classification.yaml");
}

#[test]
fn test_anchors() {
    run_fixture_file("02_anchors.yaml");
}

#[test]
fn test_filter_sets() {
    run_fixture_file("03_filter_sets.yaml");
}

#[test]
fn test_highlight_precedence() {
    run_fixture_file("04_highlight_precedence.yaml");
}

#[test]
fn test_field_access() {
    run_fixture_file("05_field_access.yaml");
}
