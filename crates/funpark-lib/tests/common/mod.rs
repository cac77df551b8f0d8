#![allow(dead_code)]

use std::path::PathBuf;

use funpark_lib::{LocationGraph, Park};

pub fn builtin_park() -> Park {
    Park::builtin().expect("builtin park loads")
}

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/park.json")
}

/// Sum the edge weights along `steps`, failing if two consecutive steps are
/// not directly connected.
pub fn route_weight(graph: &LocationGraph, steps: &[String]) -> u64 {
    steps
        .windows(2)
        .map(|pair| {
            graph
                .weight(&pair[0], &pair[1])
                .unwrap_or_else(|| panic!("{} and {} are not connected", pair[0], pair[1]))
        })
        .sum()
}
