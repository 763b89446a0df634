use serde::{Deserialize, Serialize};

pub const UNKNOWN_SKU: &str = "Unknown SKU";
pub const UNKNOWN_SIZE: &str = "Unknown Size";
pub const UNKNOWN_COLOR: &str = "Unknown Color";
pub const UNKNOWN_STYLE: &str = "Unknown Style";
pub const UNKNOWN_BRAND: &str = "Unknown Brand";

/// Descriptive attributes of an item. Every field is optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemAttributes {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl ItemAttributes {
    pub fn sku_or_unknown(&self) -> &str {
        present(&self.sku).unwrap_or(UNKNOWN_SKU)
    }

    pub fn size_or_unknown(&self) -> &str {
        present(&self.size).unwrap_or(UNKNOWN_SIZE)
    }

    pub fn color_or_unknown(&self) -> &str {
        present(&self.color).unwrap_or(UNKNOWN_COLOR)
    }

    pub fn style_or_unknown(&self) -> &str {
        present(&self.style).unwrap_or(UNKNOWN_STYLE)
    }

    pub fn brand_or_unknown(&self) -> &str {
        present(&self.brand).unwrap_or(UNKNOWN_BRAND)
    }
}

/// Empty and whitespace-only values count as missing.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
