//! Subcommand handlers. Each returns whether the action completed, which
//! `main` maps to the exit status; the user already saw the notice.

mod download;
mod generate;
mod import;
mod print;
mod selection;
mod variants;

pub use download::run_download;
pub use generate::run_generate;
pub use import::run_import;
pub use print::run_print;
pub use selection::{build_request, selection_from_keys};
pub use variants::{format_listing, run_variants};
