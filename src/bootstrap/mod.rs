pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{apply_overrides, load_config, ConfigOverrides};
pub use wiring::{resolve_operator, wire_dependencies, Wired, WiringError};
