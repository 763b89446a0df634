//! Variant grouping: key derivation, aggregation and filtering.

mod aggregate;
mod filter;
mod key;

pub use aggregate::{aggregate_variants, VariantGroup, VariantSummary};
pub use filter::filter_variants;
pub use key::{VariantKey, VARIANT_KEY_SEPARATOR};
