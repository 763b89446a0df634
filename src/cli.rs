use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fablabel",
    version,
    about = "Group production items by variant, generate QR codes and print label sheets"
)]
pub struct Cli {
    /// Config file (defaults to the per-user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Operator recorded on printed items.
    #[arg(long, global = true)]
    pub operator: Option<String>,

    /// SQLite item store.
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load items from a JSON export into the store.
    Import {
        file: PathBuf,
    },
    /// List variant groups with their print counters.
    Variants(ScopeArgs),
    /// Generate QR codes for selected variants that lack them.
    Generate(SelectArgs),
    /// Render selected labels into a print sheet and mark them printed.
    Print {
        #[command(flatten)]
        select: SelectArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Save selected labels as PNG files.
    Download {
        #[command(flatten)]
        select: SelectArgs,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScopeArgs {
    /// Only items of this order.
    #[arg(long)]
    pub order: Option<String>,

    /// Case-insensitive text matched against sku, size, color, style and brand.
    #[arg(long, default_value = "")]
    pub filter: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SelectArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,

    /// Select every visible (filtered) variant.
    #[arg(long, conflicts_with = "variant")]
    pub all: bool,

    /// Variant key `sku|size|color`; repeatable.
    #[arg(long = "variant", value_name = "KEY")]
    pub variant: Vec<String>,
}

impl Cli {
    pub fn out_override(&self) -> Option<PathBuf> {
        match &self.command {
            Command::Print { out, .. } | Command::Download { out, .. } => out.clone(),
            _ => None,
        }
    }
}
