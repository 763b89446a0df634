use anyhow::Result;
use fl_app::LabelActions;
use fl_platform::HtmlFilePrintSurface;

use super::build_request;
use crate::cli::SelectArgs;

pub async fn run_print(
    actions: &LabelActions,
    surface: &HtmlFilePrintSurface,
    args: &SelectArgs,
) -> Result<bool> {
    let request = build_request(actions, args).await?;
    let Ok(report) = actions.print(&request).await else {
        return Ok(false);
    };

    if let Some(sheet) = surface.written_sheets().last() {
        println!("Sheet: {}", sheet.display());
    }
    for skipped in &report.skipped {
        println!("  skipped {}: {}", skipped.item_id, skipped.reason);
    }
    Ok(true)
}
