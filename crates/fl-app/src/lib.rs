//! FabLabel Application Orchestration Layer
//!
//! This crate contains the label workflow use cases (generate, print,
//! download, list) and the action boundary that guards and reports them.

pub mod actions;
pub mod deps;
pub mod in_flight;
pub mod notices;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::LabelActions;
pub use deps::{AppDeps, LabelSettings};
pub use usecases::{
    DownloadLabels, DownloadReport, GenerateQrCodes, GenerationReport, LabelRequest,
    ListVariants, PrintLabels, PrintReport, VariantListing,
};
