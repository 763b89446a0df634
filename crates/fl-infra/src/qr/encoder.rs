use async_trait::async_trait;
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};

use fl_core::ports::{EncodingError, QrEncoderPort};
use fl_core::QrPayload;

/// Checks that content fits in a QR symbol at the configured error
/// correction level and returns it as the item's payload.
pub struct QrCodeEncoder {
    ec_level: EcLevel,
}

impl QrCodeEncoder {
    pub fn new(ec_level: EcLevel) -> Self {
        Self { ec_level }
    }
}

impl Default for QrCodeEncoder {
    fn default() -> Self {
        Self::new(EcLevel::M)
    }
}

#[async_trait]
impl QrEncoderPort for QrCodeEncoder {
    async fn encode(&self, content: &str) -> Result<QrPayload, EncodingError> {
        if content.is_empty() {
            return Err(EncodingError::Encoder("empty content".to_string()));
        }
        match QrCode::with_error_correction_level(content.as_bytes(), self.ec_level) {
            Ok(_) => Ok(QrPayload::new(content)),
            Err(QrError::DataTooLong) => Err(EncodingError::DataTooLong(format!(
                "{} bytes",
                content.len()
            ))),
            Err(e) => Err(EncodingError::Encoder(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_encodes_item_id() {
        let encoder = QrCodeEncoder::default();
        let payload = encoder.encode("9f0c2a4e-item").await.unwrap();
        assert_eq!(payload.as_str(), "9f0c2a4e-item");
    }

    #[tokio::test]
    async fn test_rejects_oversized_content() {
        let encoder = QrCodeEncoder::new(EcLevel::H);
        let content = "x".repeat(5000);
        assert!(matches!(
            encoder.encode(&content).await,
            Err(EncodingError::DataTooLong(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_empty_content() {
        assert!(QrCodeEncoder::default().encode("").await.is_err());
    }
}
