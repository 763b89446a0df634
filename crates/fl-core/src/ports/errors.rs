use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("content does not fit in a QR code: {0}")]
    DataTooLong(String),

    #[error("encoder failed: {0}")]
    Encoder(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("payload cannot be rendered: {0}")]
    InvalidPayload(String),

    #[error("image encoding failed: {0}")]
    Image(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ItemRepositoryError {
    #[error("item not found: {0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrintSurfaceError {
    #[error("print surface unavailable: {0}")]
    Unavailable(String),

    #[error("print surface write failed: {0}")]
    Write(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelSinkError {
    #[error("label sink unavailable: {0}")]
    Unavailable(String),

    #[error("failed to save {file_name}: {reason}")]
    Save { file_name: String, reason: String },
}
