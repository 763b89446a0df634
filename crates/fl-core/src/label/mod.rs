//! QR payloads, rendered label images and the printable label sheet.

mod image;
mod payload;
mod sheet;

pub use image::{LabelColor, LabelImage, RenderOptions};
pub use payload::{PayloadContent, QrPayload};
pub use sheet::{escape_html, LabelBlock, LabelSheet, LABEL_GRID_COLUMNS};
