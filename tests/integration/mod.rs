//! Integration tests for rs-distiller
//!
//! These run the complete pipeline, from markup to `ExtractResult`, over
//! hand-written pages and the fixtures under `fixtures/`.

mod edge_cases;
mod feature_combinations;
mod real_world_articles;

use std::path::PathBuf;

/// Reads a fixture page from `tests/integration/fixtures`.
pub fn fixture(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "integration", "fixtures", name]
        .iter()
        .collect();
    match std::fs::read_to_string(&path) {
        Ok(html) => html,
        Err(err) => panic!("cannot read fixture {}: {err}", path.display()),
    }
}
