use async_trait::async_trait;

use super::errors::RenderError;
use crate::label::{LabelImage, QrPayload, RenderOptions};

/// Renders a stored payload as a scannable image.
#[async_trait]
pub trait LabelRendererPort: Send + Sync {
    async fn render(
        &self,
        payload: &QrPayload,
        options: &RenderOptions,
    ) -> Result<LabelImage, RenderError>;
}
