use async_trait::async_trait;

use super::errors::EncodingError;
use crate::label::QrPayload;

/// Turns item content into the payload stored on the item.
#[async_trait]
pub trait QrEncoderPort: Send + Sync {
    async fn encode(&self, content: &str) -> Result<QrPayload, EncodingError>;
}
