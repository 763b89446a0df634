//! Production items and their QR/print lifecycle.

mod attributes;
#[allow(clippy::module_inception)]
mod item;

pub use attributes::*;
pub use item::{Item, QrLifecycle, QrState};
