use std::collections::HashSet;
use std::sync::Arc;

use fl_core::label::{LabelBlock, LabelSheet};
use fl_core::ports::{ClockPort, ItemRepositoryPort, LabelRendererPort, PrintSurfacePort};
use fl_core::{ActorId, ItemFailure, ItemId, LabelActionError, RenderOptions, VariantKey};
use tracing::{info, warn};

use super::render::render_labels;
use super::request::{load_selected_items, LabelRequest};

/// Sheet and attribution settings for printing.
#[derive(Debug, Clone)]
pub struct PrintSettings {
    pub title: String,
    pub render_options: RenderOptions,
    pub actor: ActorId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintReport {
    /// Items that made it onto the sheet.
    pub printed: Vec<ItemId>,
    /// Items dropped because their label failed to render.
    pub skipped: Vec<ItemFailure>,
    pub variant_count: usize,
    /// Items that moved to the printed state on this run.
    pub newly_marked: usize,
    /// Set when the sheet went out but recording it failed.
    pub mark_error: Option<String>,
}

impl PrintReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.mark_error.is_none()
    }
}

/// Renders the selected labels into one sheet, sends it to the print
/// surface and records the printed items.
pub struct PrintLabels {
    repo: Arc<dyn ItemRepositoryPort>,
    renderer: Arc<dyn LabelRendererPort>,
    surface: Arc<dyn PrintSurfacePort>,
    clock: Arc<dyn ClockPort>,
    settings: PrintSettings,
}

impl PrintLabels {
    pub fn new(
        repo: Arc<dyn ItemRepositoryPort>,
        renderer: Arc<dyn LabelRendererPort>,
        surface: Arc<dyn PrintSurfacePort>,
        clock: Arc<dyn ClockPort>,
        settings: PrintSettings,
    ) -> Self {
        Self {
            repo,
            renderer,
            surface,
            clock,
            settings,
        }
    }

    #[tracing::instrument(
        name = "usecase.print_labels.execute",
        skip(self, request),
        fields(selected_variants = request.selection.len())
    )]
    pub async fn execute(&self, request: &LabelRequest) -> Result<PrintReport, LabelActionError> {
        let selected = load_selected_items(self.repo.as_ref(), request).await?;
        if !selected.iter().any(|item| item.has_payload()) {
            return Err(LabelActionError::NoPayloadsToPrint);
        }

        let (rendered, skipped) =
            render_labels(self.renderer.as_ref(), selected, &self.settings.render_options).await;
        if rendered.is_empty() {
            warn!(skipped = skipped.len(), "Every selected label failed to render");
            return Err(LabelActionError::NothingRendered);
        }

        let variant_count = rendered
            .iter()
            .map(|(item, _)| VariantKey::for_item(item))
            .collect::<HashSet<_>>()
            .len();
        let printed: Vec<ItemId> = rendered.iter().map(|(item, _)| item.id.clone()).collect();
        let now_ms = self.clock.now_ms();
        let sheet = LabelSheet {
            title: self.settings.title.clone(),
            generated_at_ms: now_ms,
            variant_count,
            blocks: rendered
                .into_iter()
                .map(|(item, image)| LabelBlock::from_item(&item, image))
                .collect(),
        };

        self.send_to_surface(&sheet).await?;

        let mut report = PrintReport {
            printed,
            skipped,
            variant_count,
            ..Default::default()
        };
        match self
            .repo
            .mark_printed(&report.printed, &self.settings.actor, now_ms)
            .await
        {
            Ok(count) => report.newly_marked = count,
            Err(e) => {
                warn!(error = %e, "Labels printed but items could not be marked as printed");
                report.mark_error = Some(e.to_string());
            }
        }

        info!(
            printed = report.printed.len(),
            skipped = report.skipped.len(),
            newly_marked = report.newly_marked,
            "Label sheet sent to print"
        );
        Ok(report)
    }

    async fn send_to_surface(&self, sheet: &LabelSheet) -> Result<(), LabelActionError> {
        let mut surface = self
            .surface
            .open(&sheet.title)
            .await
            .map_err(|e| LabelActionError::PrintSurfaceUnavailable(e.to_string()))?;

        let document = sheet.render_html();
        let written = match surface.write(&document).await {
            Ok(()) => surface.print().await,
            Err(e) => Err(e),
        };
        if let Err(e) = surface.close().await {
            warn!(error = %e, "Failed to close print surface");
        }
        written.map_err(|e| LabelActionError::PrintSurfaceUnavailable(e.to_string()))
    }
}
