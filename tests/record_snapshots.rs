//! Snapshot tests over the verified sample inputs
//!
//! The sample files under docs/samples/ are the canonical sources for
//! record content used by snapshot tests.

use std::fs;

use cubegame::processor::{process_input, OutputFormat};

/// Helper function to read sample input content
fn read_sample(name: &str) -> String {
    fs::read_to_string(format!("docs/samples/{}", name)).expect("Failed to read sample input")
}

#[test]
fn test_sample_canonical_rendering() {
    let content = read_sample("010-small-games.txt");
    let canonical = process_input(&content, OutputFormat::Canonical).unwrap();

    insta::assert_snapshot!(canonical.trim_end());
}

#[test]
fn test_sample_summary() {
    let content = read_sample("010-small-games.txt");
    let summary = process_input(&content, OutputFormat::Summary).unwrap();

    insta::assert_snapshot!(summary.trim_end());
}

#[test]
fn test_single_game_json() {
    let content = read_sample("000-single-game.txt");
    let json = process_input(&content, OutputFormat::Json).unwrap();

    insta::assert_snapshot!(json);
}
