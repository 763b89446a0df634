//! Print surface that writes each sheet to a standalone HTML file.
//!
//! The file is the hand-off point: open it in a browser and print. An output
//! directory that cannot be created counts as an unavailable surface.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use fl_core::ports::{PrintSurface, PrintSurfaceError, PrintSurfacePort};

pub struct HtmlFilePrintSurface {
    out_dir: PathBuf,
    written: Arc<Mutex<Vec<PathBuf>>>,
}

impl HtmlFilePrintSurface {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Arc::default(),
        }
    }

    /// Paths of every sheet printed through this adapter, oldest first.
    pub fn written_sheets(&self) -> Vec<PathBuf> {
        self.written
            .lock()
            .map(|paths| paths.clone())
            .unwrap_or_default()
    }
}

fn file_stem(title: &str) -> String {
    let slug: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-');
    let slug = if slug.is_empty() { "labels" } else { slug };
    format!("{slug}-{}", Utc::now().format("%Y%m%d-%H%M%S%3f"))
}

async fn free_path(dir: &Path, stem: &str) -> PathBuf {
    let mut path = dir.join(format!("{stem}.html"));
    let mut n = 2;
    while tokio::fs::try_exists(&path).await.unwrap_or(false) {
        path = dir.join(format!("{stem}-{n}.html"));
        n += 1;
    }
    path
}

#[async_trait]
impl PrintSurfacePort for HtmlFilePrintSurface {
    async fn open(&self, title: &str) -> Result<Box<dyn PrintSurface>, PrintSurfaceError> {
        tokio::fs::create_dir_all(&self.out_dir).await.map_err(|e| {
            PrintSurfaceError::Unavailable(format!("{}: {e}", self.out_dir.display()))
        })?;

        let path = free_path(&self.out_dir, &file_stem(title)).await;
        debug!(path = %path.display(), "Opened print sheet");
        Ok(Box::new(HtmlSheet {
            path,
            document: None,
            written: self.written.clone(),
        }))
    }
}

struct HtmlSheet {
    path: PathBuf,
    document: Option<String>,
    written: Arc<Mutex<Vec<PathBuf>>>,
}

#[async_trait]
impl PrintSurface for HtmlSheet {
    async fn write(&mut self, document: &str) -> Result<(), PrintSurfaceError> {
        self.document = Some(document.to_string());
        Ok(())
    }

    async fn print(&mut self) -> Result<(), PrintSurfaceError> {
        let document = self
            .document
            .as_deref()
            .ok_or_else(|| PrintSurfaceError::Write("nothing was written".to_string()))?;
        tokio::fs::write(&self.path, document)
            .await
            .map_err(|e| PrintSurfaceError::Write(format!("{}: {e}", self.path.display())))?;

        if let Ok(mut written) = self.written.lock() {
            written.push(self.path.clone());
        }
        info!(path = %self.path.display(), "Label sheet ready to print");
        Ok(())
    }

    async fn close(&mut self) -> Result<(), PrintSurfaceError> {
        self.document = None;
        Ok(())
    }
}
