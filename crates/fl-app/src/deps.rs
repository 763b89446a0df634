//! # Application Dependencies
//!
//! Parameter grouping for building `LabelActions`. Not a builder: every
//! port is required and nothing here has behavior beyond mapping config.

use std::sync::Arc;

use fl_core::label::PayloadContent;
use fl_core::ports::*;
use fl_core::{ActorId, AppConfig, RenderOptions};

/// Every port the label workflow drives.
pub struct AppDeps {
    // Items
    pub item_repo: Arc<dyn ItemRepositoryPort>,

    // QR
    pub encoder: Arc<dyn QrEncoderPort>,
    pub renderer: Arc<dyn LabelRendererPort>,

    // Output
    pub print_surface: Arc<dyn PrintSurfacePort>,
    pub label_sink: Arc<dyn LabelSinkPort>,

    // UI and system
    pub notifier: Arc<dyn NotifierPort>,
    pub clock: Arc<dyn ClockPort>,
}

/// Workflow settings derived from `AppConfig` plus the resolved operator.
#[derive(Debug, Clone)]
pub struct LabelSettings {
    pub title: String,
    pub render_options: RenderOptions,
    pub payload_content: PayloadContent,
    pub max_concurrency: usize,
    pub actor: ActorId,
}

impl LabelSettings {
    pub fn from_config(config: &AppConfig, actor: ActorId) -> Self {
        Self {
            title: config.label.title.clone(),
            render_options: config.render_options(),
            payload_content: config.payload_content(),
            max_concurrency: config.max_concurrency(),
            actor,
        }
    }
}
