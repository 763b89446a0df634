use std::sync::Arc;

use fl_core::label::PayloadContent;
use fl_core::ports::{ItemRepositoryPort, PayloadAssignment, QrEncoderPort};
use fl_core::{FailureKind, ItemFailure, ItemId, LabelActionError};
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::request::{load_selected_items, LabelRequest};

/// Outcome of a generate action. Encoding and persistence failures are
/// reported per item and never abort the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub requested: usize,
    pub already_encoded: usize,
    pub generated: Vec<ItemId>,
    pub encoding_failures: Vec<ItemFailure>,
    pub persistence_failures: Vec<ItemFailure>,
}

impl GenerationReport {
    /// True when every selected item already had a payload.
    pub fn nothing_to_generate(&self) -> bool {
        self.requested == self.already_encoded
    }

    pub fn failure_count(&self) -> usize {
        self.encoding_failures.len() + self.persistence_failures.len()
    }
}

/// Encodes payloads for the selected items that lack one and persists them.
pub struct GenerateQrCodes {
    repo: Arc<dyn ItemRepositoryPort>,
    encoder: Arc<dyn QrEncoderPort>,
    content: PayloadContent,
    max_concurrency: usize,
}

impl GenerateQrCodes {
    pub fn new(
        repo: Arc<dyn ItemRepositoryPort>,
        encoder: Arc<dyn QrEncoderPort>,
        content: PayloadContent,
        max_concurrency: usize,
    ) -> Self {
        Self {
            repo,
            encoder,
            content,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Runs the generate action.
    ///
    /// 1. Resolve the selection (fails with `EmptySelection` before any encode call).
    /// 2. Skip items that already hold a payload; if that is all of them, stop.
    /// 3. Encode the rest with at most `max_concurrency` calls in flight.
    /// 4. Persist the successful payloads in one bulk call.
    #[tracing::instrument(
        name = "usecase.generate_qr_codes.execute",
        skip(self, request),
        fields(selected_variants = request.selection.len())
    )]
    pub async fn execute(
        &self,
        request: &LabelRequest,
    ) -> Result<GenerationReport, LabelActionError> {
        let selected = load_selected_items(self.repo.as_ref(), request).await?;

        let (encoded, missing): (Vec<_>, Vec<_>) =
            selected.into_iter().partition(|item| item.has_payload());
        let mut report = GenerationReport {
            requested: encoded.len() + missing.len(),
            already_encoded: encoded.len(),
            ..Default::default()
        };

        if missing.is_empty() {
            info!(requested = report.requested, "All selected items already have QR codes");
            return Ok(report);
        }

        let encoder = self.encoder.as_ref();
        let results: Vec<_> = stream::iter(missing)
            .map(|item| {
                let content = self.content.for_item(&item);
                async move {
                    let result = encoder.encode(&content).await;
                    (item.id, result)
                }
            })
            .buffered(self.max_concurrency)
            .collect()
            .await;

        let mut assignments = Vec::with_capacity(results.len());
        for (item_id, result) in results {
            match result {
                Ok(payload) => assignments.push(PayloadAssignment { item_id, payload }),
                Err(e) => {
                    warn!(item_id = %item_id, error = %e, "QR encoding failed");
                    report.encoding_failures.push(ItemFailure::new(
                        item_id,
                        FailureKind::EncodingFailure,
                        e.to_string(),
                    ));
                }
            }
        }

        if !assignments.is_empty() {
            self.persist(assignments, &mut report).await;
        }

        info!(
            generated = report.generated.len(),
            encoding_failures = report.encoding_failures.len(),
            persistence_failures = report.persistence_failures.len(),
            "QR generation finished"
        );
        Ok(report)
    }

    async fn persist(&self, assignments: Vec<PayloadAssignment>, report: &mut GenerationReport) {
        match self.repo.persist_payloads(&assignments).await {
            Ok(outcomes) => {
                for outcome in outcomes {
                    match outcome.result {
                        Ok(()) => report.generated.push(outcome.item_id),
                        Err(e) => {
                            warn!(
                                item_id = %outcome.item_id,
                                error = %e,
                                "Failed to persist QR code"
                            );
                            report.persistence_failures.push(ItemFailure::new(
                                outcome.item_id,
                                FailureKind::PersistenceFailure,
                                e.to_string(),
                            ));
                        }
                    }
                }
            }
            Err(e) => {
                warn!(count = assignments.len(), error = %e, "Bulk QR persistence failed");
                report
                    .persistence_failures
                    .extend(assignments.into_iter().map(|a| {
                        ItemFailure::new(a.item_id, FailureKind::PersistenceFailure, e.to_string())
                    }));
            }
        }
    }
}
