//! Item export loading for `import`.

use std::path::Path;

use anyhow::{Context, Result};
use fl_core::Item;

/// Parses a JSON array of items as exported by the order system.
pub fn parse_items_json(content: &str) -> Result<Vec<Item>> {
    serde_json::from_str(content).context("items export is not a JSON array of items")
}

pub fn load_items_json(path: &Path) -> Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read items from {}", path.display()))?;
    parse_items_json(&content)
}
