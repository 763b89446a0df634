use std::path::Path;

use anyhow::Result;
use fl_core::ports::ClockPort;
use fl_infra::fixtures::load_items_json;
use fl_infra::{DieselItemRepository, SystemClock};

pub fn run_import(repo: &DieselItemRepository, file: &Path) -> Result<()> {
    let items = load_items_json(file)?;
    let inserted = repo.import_items(&items, SystemClock.now_ms())?;
    println!(
        "Imported {inserted} of {} items ({} already present)",
        items.len(),
        items.len() - inserted
    );
    Ok(())
}
