//! Printable label sheet.
//!
//! The sheet is a self-contained HTML document: inline styles, a header with
//! title and generation time, a count summary and a fixed 3-column grid of
//! label blocks. Each block embeds the code image, the SKU / Size / Color /
//! Style fields and the raw item id.

use std::fmt::Write;

use chrono::DateTime;

use super::LabelImage;
use crate::ids::ItemId;
use crate::item::Item;

pub const LABEL_GRID_COLUMNS: usize = 3;

/// One label on the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelBlock {
    pub item_id: ItemId,
    pub item_code: String,
    pub sku: String,
    pub size: String,
    pub color: String,
    pub style: String,
    pub image: LabelImage,
}

impl LabelBlock {
    pub fn from_item(item: &Item, image: LabelImage) -> Self {
        let attrs = &item.attributes;
        Self {
            item_id: item.id.clone(),
            item_code: item.item_code.clone(),
            sku: attrs.sku_or_unknown().to_string(),
            size: attrs.size_or_unknown().to_string(),
            color: attrs.color_or_unknown().to_string(),
            style: attrs.style_or_unknown().to_string(),
            image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSheet {
    pub title: String,
    pub generated_at_ms: i64,
    pub variant_count: usize,
    pub blocks: Vec<LabelBlock>,
}

const SHEET_STYLE: &str = "\
body { font-family: Arial, Helvetica, sans-serif; margin: 16px; color: #111; }
header { border-bottom: 1px solid #ccc; margin-bottom: 12px; }
header h1 { font-size: 20px; margin: 0 0 4px 0; }
header .generated { font-size: 12px; color: #555; margin: 0 0 8px 0; }
.summary { font-size: 13px; margin: 0 0 12px 0; }
.label { border: 1px dashed #999; padding: 8px; text-align: center; page-break-inside: avoid; }
.label img { width: 140px; height: 140px; }
.label .field { font-size: 11px; text-align: left; margin: 2px 0; }
.label .field span { font-weight: bold; }
.label .item-id { font-family: monospace; font-size: 9px; color: #444; margin-top: 4px; word-break: break-all; }
@media print { body { margin: 0; } .label { border-color: #ddd; } }
";

impl LabelSheet {
    pub fn summary_line(&self) -> String {
        format!(
            "{} QR codes for {} variants",
            self.blocks.len(),
            self.variant_count
        )
    }

    /// Builds the standalone print document.
    pub fn render_html(&self) -> String {
        let title = escape_html(&self.title);
        let mut html = String::with_capacity(4096 + self.blocks.len() * 512);

        // `write!` into a String cannot fail.
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{SHEET_STYLE}.grid {{ display: grid; grid-template-columns: repeat({LABEL_GRID_COLUMNS}, 1fr); gap: 12px; }}\n</style>\n</head>\n<body>\n"
        );
        let _ = write!(
            html,
            "<header>\n<h1>{title}</h1>\n<p class=\"generated\">Generated: {}</p>\n</header>\n",
            escape_html(&format_timestamp(self.generated_at_ms))
        );
        let _ = writeln!(
            html,
            "<p class=\"summary\">{}</p>",
            escape_html(&self.summary_line())
        );

        html.push_str("<div class=\"grid\">\n");
        for block in &self.blocks {
            write_block(&mut html, block);
        }
        html.push_str("</div>\n</body>\n</html>\n");
        html
    }
}

fn write_block(html: &mut String, block: &LabelBlock) {
    let _ = write!(
        html,
        "<div class=\"label\">\n<img src=\"{}\" alt=\"{}\">\n",
        block.image.data_uri(),
        escape_html(&block.item_code)
    );
    for (name, value) in [
        ("SKU", &block.sku),
        ("Size", &block.size),
        ("Color", &block.color),
        ("Style", &block.style),
    ] {
        let _ = writeln!(
            html,
            "<div class=\"field\"><span>{}:</span> {}</div>",
            name,
            escape_html(value)
        );
    }
    let _ = write!(
        html,
        "<div class=\"item-id\">{}</div>\n</div>\n",
        escape_html(block.item_id.as_str())
    );
}

fn format_timestamp(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| ms.to_string())
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
