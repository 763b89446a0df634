use std::collections::HashSet;
use std::sync::Arc;

use fl_core::ports::{ItemRepositoryPort, LabelRendererPort, LabelSinkPort};
use fl_core::{FailureKind, ItemFailure, ItemId, LabelActionError, LabelImage, RenderOptions};
use tracing::{info, warn};

use super::render::render_labels;
use super::request::{load_selected_items, LabelRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedLabel {
    pub item_id: ItemId,
    pub file_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub saved: Vec<SavedLabel>,
    /// Render and sink failures, in selection order.
    pub failures: Vec<ItemFailure>,
}

/// File name for a label image: the item code with path separators and
/// other unsafe characters replaced by `_`.
pub fn label_file_name(item_code: &str, image: &LabelImage) -> String {
    let stem: String = item_code
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = stem.trim_start_matches('.');
    let stem = if stem.is_empty() { "label" } else { stem };
    format!("{stem}.{}", image.file_extension())
}

fn unique_name(name: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(name.clone()) {
        return name;
    }
    let (stem, ext) = name.rsplit_once('.').unwrap_or((name.as_str(), ""));
    let mut n = 2;
    loop {
        let candidate = format!("{stem}-{n}.{ext}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Renders the selected labels and hands each image to the sink.
/// Items are not marked printed.
pub struct DownloadLabels {
    repo: Arc<dyn ItemRepositoryPort>,
    renderer: Arc<dyn LabelRendererPort>,
    sink: Arc<dyn LabelSinkPort>,
    render_options: RenderOptions,
}

impl DownloadLabels {
    pub fn new(
        repo: Arc<dyn ItemRepositoryPort>,
        renderer: Arc<dyn LabelRendererPort>,
        sink: Arc<dyn LabelSinkPort>,
        render_options: RenderOptions,
    ) -> Self {
        Self {
            repo,
            renderer,
            sink,
            render_options,
        }
    }

    #[tracing::instrument(
        name = "usecase.download_labels.execute",
        skip(self, request),
        fields(selected_variants = request.selection.len())
    )]
    pub async fn execute(
        &self,
        request: &LabelRequest,
    ) -> Result<DownloadReport, LabelActionError> {
        let selected = load_selected_items(self.repo.as_ref(), request).await?;
        if !selected.iter().any(|item| item.has_payload()) {
            return Err(LabelActionError::NoPayloadsToPrint);
        }

        let (rendered, render_failures) =
            render_labels(self.renderer.as_ref(), selected, &self.render_options).await;
        if rendered.is_empty() {
            return Err(LabelActionError::NothingRendered);
        }

        let mut report = DownloadReport {
            failures: render_failures,
            ..Default::default()
        };
        let mut taken = HashSet::new();
        for (item, image) in rendered {
            let file_name = unique_name(label_file_name(&item.item_code, &image), &mut taken);
            match self.sink.save(&file_name, &image).await {
                Ok(()) => report.saved.push(SavedLabel {
                    item_id: item.id,
                    file_name,
                }),
                Err(e) => {
                    warn!(item_id = %item.id, error = %e, "Failed to save label image");
                    report.failures.push(ItemFailure::new(
                        item.id,
                        FailureKind::SinkFailure,
                        e.to_string(),
                    ));
                }
            }
        }

        info!(
            saved = report.saved.len(),
            failures = report.failures.len(),
            "Label images saved"
        );
        Ok(report)
    }
}
