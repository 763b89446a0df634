//! Action boundary for the label workflow.
//!
//! Each action runs behind its own in-flight flag and ends with exactly one
//! notice, whether it succeeded, partially failed or was rejected. Errors
//! are still returned so callers can set an exit status.

use std::sync::Arc;

use fl_core::ports::{Notice, NotifierPort};
use fl_core::{ActionKind, LabelActionError, OrderId};
use tracing::{debug, warn};

use crate::deps::{AppDeps, LabelSettings};
use crate::in_flight::InFlight;
use crate::notices::{download_notice, error_notice, generation_notice, print_notice};
use crate::usecases::{
    DownloadLabels, DownloadReport, GenerateQrCodes, GenerationReport, LabelRequest, ListVariants,
    PrintLabels, PrintReport, PrintSettings, VariantListing,
};

pub struct LabelActions {
    list: ListVariants,
    generate: GenerateQrCodes,
    print: PrintLabels,
    download: DownloadLabels,
    notifier: Arc<dyn NotifierPort>,
    generating: InFlight,
    printing: InFlight,
    downloading: InFlight,
}

impl LabelActions {
    pub fn from_deps(deps: AppDeps, settings: LabelSettings) -> Self {
        let AppDeps {
            item_repo,
            encoder,
            renderer,
            print_surface,
            label_sink,
            notifier,
            clock,
        } = deps;

        Self {
            list: ListVariants::new(item_repo.clone()),
            generate: GenerateQrCodes::new(
                item_repo.clone(),
                encoder,
                settings.payload_content,
                settings.max_concurrency,
            ),
            print: PrintLabels::new(
                item_repo.clone(),
                renderer.clone(),
                print_surface,
                clock,
                PrintSettings {
                    title: settings.title,
                    render_options: settings.render_options,
                    actor: settings.actor,
                },
            ),
            download: DownloadLabels::new(item_repo, renderer, label_sink, settings.render_options),
            notifier,
            generating: InFlight::new(ActionKind::Generate),
            printing: InFlight::new(ActionKind::Print),
            downloading: InFlight::new(ActionKind::Download),
        }
    }

    /// Read-only; not guarded and does not notify.
    pub async fn list_variants(
        &self,
        order_id: Option<&OrderId>,
        filter: &str,
    ) -> Result<VariantListing, LabelActionError> {
        self.list.execute(order_id, filter).await
    }

    pub async fn generate(
        &self,
        request: &LabelRequest,
    ) -> Result<GenerationReport, LabelActionError> {
        let result = match self.generating.try_begin() {
            Ok(_guard) => self.generate.execute(request).await,
            Err(e) => Err(e),
        };
        self.finish(ActionKind::Generate, result, generation_notice)
    }

    pub async fn print(&self, request: &LabelRequest) -> Result<PrintReport, LabelActionError> {
        let result = match self.printing.try_begin() {
            Ok(_guard) => self.print.execute(request).await,
            Err(e) => Err(e),
        };
        self.finish(ActionKind::Print, result, print_notice)
    }

    pub async fn download(
        &self,
        request: &LabelRequest,
    ) -> Result<DownloadReport, LabelActionError> {
        let result = match self.downloading.try_begin() {
            Ok(_guard) => self.download.execute(request).await,
            Err(e) => Err(e),
        };
        self.finish(ActionKind::Download, result, download_notice)
    }

    pub fn is_busy(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Generate => self.generating.is_busy(),
            ActionKind::Print => self.printing.is_busy(),
            ActionKind::Download => self.downloading.is_busy(),
        }
    }

    fn finish<T>(
        &self,
        kind: ActionKind,
        result: Result<T, LabelActionError>,
        on_success: impl FnOnce(&T) -> Notice,
    ) -> Result<T, LabelActionError> {
        let notice = match &result {
            Ok(report) => on_success(report),
            Err(e) => {
                warn!(action = %kind, error = %e, "Label action did not complete");
                error_notice(kind, e)
            }
        };
        debug!(action = %kind, level = ?notice.level, title = %notice.title, "Notifying");
        self.notifier.notify(notice);
        result
    }
}
