use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use fl_core::ports::{LabelSinkError, LabelSinkPort};
use fl_core::LabelImage;

/// Writes label images into one directory, creating it on first save.
pub struct FsLabelSink {
    dir: PathBuf,
}

impl FsLabelSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

#[async_trait]
impl LabelSinkPort for FsLabelSink {
    async fn save(&self, file_name: &str, image: &LabelImage) -> Result<(), LabelSinkError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| LabelSinkError::Unavailable(format!("{}: {e}", self.dir.display())))?;

        let path = self.dir.join(file_name);
        tokio::fs::write(&path, &image.bytes)
            .await
            .map_err(|e| LabelSinkError::Save {
                file_name: file_name.to_string(),
                reason: e.to_string(),
            })?;
        debug!(path = %path.display(), bytes = image.bytes.len(), "Saved label image");
        Ok(())
    }
}
