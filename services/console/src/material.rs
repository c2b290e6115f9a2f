//! Loads the reference material discussed in a session.

use anyhow::Context;
use discai_core::ReferenceMaterial;
use std::path::Path;

/// The built-in sample article, used when no material file is given.
const SAMPLE_MATERIAL: &str = include_str!("../assets/sample_material.json");

/// Parses the built-in sample material.
pub fn sample() -> anyhow::Result<ReferenceMaterial> {
    serde_json::from_str(SAMPLE_MATERIAL).context("built-in sample material is malformed")
}

/// Loads material from a JSON file, or falls back to the built-in sample.
pub fn load(path: Option<&Path>) -> anyhow::Result<ReferenceMaterial> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("could not read material file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("could not parse material file {}", path.display()))
        }
        None => sample(),
    }
}
