use anyhow::Result;
use fl_app::LabelActions;

use super::build_request;
use crate::cli::SelectArgs;

pub async fn run_generate(actions: &LabelActions, args: &SelectArgs) -> Result<bool> {
    let request = build_request(actions, args).await?;
    let Ok(report) = actions.generate(&request).await else {
        return Ok(false);
    };

    for failure in report
        .encoding_failures
        .iter()
        .chain(&report.persistence_failures)
    {
        println!("  {:?} {}: {}", failure.kind, failure.item_id, failure.reason);
    }
    Ok(report.failure_count() == 0)
}
