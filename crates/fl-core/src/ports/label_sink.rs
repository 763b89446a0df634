use async_trait::async_trait;

use super::errors::LabelSinkError;
use crate::label::LabelImage;

/// Destination for downloaded label images.
#[async_trait]
pub trait LabelSinkPort: Send + Sync {
    async fn save(&self, file_name: &str, image: &LabelImage) -> Result<(), LabelSinkError>;
}
