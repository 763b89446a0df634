use async_trait::async_trait;

use super::errors::PrintSurfaceError;

/// An open document target: receives the sheet, prints it, closes.
#[async_trait]
pub trait PrintSurface: Send {
    async fn write(&mut self, document: &str) -> Result<(), PrintSurfaceError>;
    async fn print(&mut self) -> Result<(), PrintSurfaceError>;
    async fn close(&mut self) -> Result<(), PrintSurfaceError>;
}

#[async_trait]
pub trait PrintSurfacePort: Send + Sync {
    /// Fails with `PrintSurfaceError::Unavailable` when no surface can be
    /// obtained (blocked popup, unwritable target).
    async fn open(&self, title: &str) -> Result<Box<dyn PrintSurface>, PrintSurfaceError>;
}
