//! Label workflow use cases
//!
//! items -> aggregate -> (filter) -> selection
//!        ↓
//! GenerateQrCodes   → encode missing payloads, persist
//! PrintLabels       → render, compose sheet, print, mark printed
//! DownloadLabels    → render, save images
//!
//! Every use case reloads the items and re-derives the groups; nothing is
//! cached between calls.

mod download_labels;
mod generate_qr_codes;
mod list_variants;
mod print_labels;
mod render;
mod request;

pub use download_labels::{label_file_name, DownloadLabels, DownloadReport, SavedLabel};
pub use generate_qr_codes::{GenerateQrCodes, GenerationReport};
pub use list_variants::{ListVariants, VariantListing};
pub use print_labels::{PrintLabels, PrintReport, PrintSettings};
pub use request::LabelRequest;
