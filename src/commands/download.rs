use std::path::Path;

use anyhow::Result;
use fl_app::LabelActions;

use super::build_request;
use crate::cli::SelectArgs;

pub async fn run_download(
    actions: &LabelActions,
    out_dir: &Path,
    args: &SelectArgs,
) -> Result<bool> {
    let request = build_request(actions, args).await?;
    let Ok(report) = actions.download(&request).await else {
        return Ok(false);
    };

    for saved in &report.saved {
        println!("{}", out_dir.join(&saved.file_name).display());
    }
    for failure in &report.failures {
        println!("  {:?} {}: {}", failure.kind, failure.item_id, failure.reason);
    }
    Ok(report.failures.is_empty())
}
