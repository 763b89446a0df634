//! Application configuration model.
//!
//! Pure data plus TOML mapping. Every section and key is optional in the
//! file; absent values take the defaults below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::label::{LabelColor, PayloadContent, RenderOptions};

pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
pub const DEFAULT_LABEL_TITLE: &str = "QR Labels";
pub const MIN_LABEL_IMAGE_SIZE: u32 = 32;
pub const MAX_LABEL_IMAGE_SIZE: u32 = 4096;
/// Quiet-zone width in modules.
pub const MAX_LABEL_MARGIN: u32 = 16;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
    pub qr: QrConfig,
    pub label: LabelConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recorded as `printed_by`. Empty means "resolve at startup".
    pub operator: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// SQLite file. Empty means the app data directory.
    pub database_path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where print sheets and downloaded images go. Empty means the app
    /// data directory.
    pub directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    pub payload_base_url: String,
    /// Width of the encode fan-out.
    pub max_concurrency: usize,
    /// One of L, M, Q, H.
    pub error_correction: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            payload_base_url: String::new(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            error_correction: "M".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub title: String,
    pub image_size: u32,
    pub margin: u32,
    pub dark_color: String,
    pub light_color: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            title: DEFAULT_LABEL_TITLE.to_string(),
            image_size: options.size,
            margin: options.margin,
            dark_color: "#000000".to_string(),
            light_color: "#FFFFFF".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render options with unparsable colors replaced by black on white.
    /// Size and margin are clamped to the supported ranges.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            size: self
                .label
                .image_size
                .clamp(MIN_LABEL_IMAGE_SIZE, MAX_LABEL_IMAGE_SIZE),
            margin: self.label.margin.min(MAX_LABEL_MARGIN),
            dark: LabelColor::parse_hex(&self.label.dark_color).unwrap_or(LabelColor::BLACK),
            light: LabelColor::parse_hex(&self.label.light_color).unwrap_or(LabelColor::WHITE),
        }
    }

    pub fn payload_content(&self) -> PayloadContent {
        PayloadContent::with_base_url(self.qr.payload_base_url.as_str())
    }

    pub fn max_concurrency(&self) -> usize {
        self.qr.max_concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.max_concurrency(), DEFAULT_MAX_CONCURRENCY);
        assert_eq!(config.label.title, DEFAULT_LABEL_TITLE);
    }

    #[test]
    fn test_reads_all_sections() {
        let config = AppConfig::from_toml_str(
            r##"
            [general]
            operator = "line-3"

            [storage]
            database_path = "/var/lib/fablabel/items.db"

            [output]
            directory = "/tmp/labels"

            [qr]
            payload_base_url = "https://ops.example.com"
            max_concurrency = 4
            error_correction = "H"

            [label]
            title = "Cutting room"
            image_size = 300
            margin = 2
            dark_color = "#112233"
            light_color = "#FFFFFF"
            "##,
        )
        .unwrap();

        assert_eq!(config.general.operator, "line-3");
        assert_eq!(
            config.storage.database_path,
            PathBuf::from("/var/lib/fablabel/items.db")
        );
        assert_eq!(config.output.directory, PathBuf::from("/tmp/labels"));
        assert_eq!(config.qr.error_correction, "H");
        assert_eq!(config.max_concurrency(), 4);

        let options = config.render_options();
        assert_eq!(options.size, 300);
        assert_eq!(options.margin, 2);
        assert_eq!(options.dark, LabelColor([0x11, 0x22, 0x33, 0xff]));
    }

    #[test]
    fn test_render_options_clamp_size_and_margin() {
        let config = AppConfig::from_toml_str(
            "[label]\nimage_size = 4\nmargin = 2147483648\n",
        )
        .unwrap();
        let options = config.render_options();
        assert_eq!(options.size, MIN_LABEL_IMAGE_SIZE);
        assert_eq!(options.margin, MAX_LABEL_MARGIN);

        let config = AppConfig::from_toml_str("[label]\nimage_size = 100000\n").unwrap();
        assert_eq!(config.render_options().size, MAX_LABEL_IMAGE_SIZE);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = AppConfig::from_toml_str("[label]\nimage_size = 120\n").unwrap();
        assert_eq!(config.label.image_size, 120);
        assert_eq!(config.label.margin, 1);
        assert_eq!(config.qr.max_concurrency, DEFAULT_MAX_CONCURRENCY);
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let config = AppConfig::from_toml_str("[qr]\nmax_concurrency = 0\n").unwrap();
        assert_eq!(config.max_concurrency(), 1);
    }

    #[test]
    fn test_bad_colors_fall_back() {
        let config = AppConfig::from_toml_str("[label]\ndark_color = \"nope\"\n").unwrap();
        assert_eq!(config.render_options().dark, LabelColor::BLACK);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(AppConfig::from_toml_str("[qr\n").is_err());
    }
}
