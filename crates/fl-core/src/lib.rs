//! # fl-core
//!
//! Core domain models and business logic for FabLabel.
//!
//! This crate contains pure business logic without any infrastructure
//! dependencies: items and their QR lifecycle, variant grouping, the
//! selection set, the printable label sheet, and the ports the label
//! workflow drives.

pub mod config;
pub mod error;
pub mod ids;
pub mod item;
pub mod label;
pub mod ports;
pub mod selection;
pub mod variant;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use error::{ActionKind, FailureKind, ItemFailure, LabelActionError};
pub use ids::{ActorId, ItemId, OrderId};
pub use item::{Item, ItemAttributes, QrLifecycle};
pub use label::{LabelImage, QrPayload, RenderOptions};
pub use selection::VariantSelection;
pub use variant::{aggregate_variants, filter_variants, VariantGroup, VariantKey};
