use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use fablabel::bootstrap::{self, apply_overrides, load_config, wire_dependencies, ConfigOverrides};
use fablabel::cli::{Cli, Command};
use fablabel::commands;
use fl_platform::DirsAppDirsAdapter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("failed to resolve application directories")?;

    bootstrap::tracing::init_tracing_subscriber(Some(dirs.logs_dir().as_path()))?;

    let config_path = cli.config.clone().unwrap_or_else(|| dirs.config_file());
    let mut config = load_config(&config_path)?;
    apply_overrides(
        &mut config,
        ConfigOverrides {
            operator: cli.operator.clone(),
            database: cli.database.clone(),
            output_dir: cli.out_override(),
        },
    );

    let wired = wire_dependencies(&config, &dirs)?;

    let completed = match &cli.command {
        Command::Import { file } => {
            commands::run_import(&wired.item_repo, file)?;
            true
        }
        Command::Variants(scope) => {
            commands::run_variants(&wired.actions, scope).await?;
            true
        }
        Command::Generate(select) => commands::run_generate(&wired.actions, select).await?,
        Command::Print { select, .. } => {
            commands::run_print(&wired.actions, &wired.print_surface, select).await?
        }
        Command::Download { select, .. } => {
            commands::run_download(&wired.actions, &wired.output_dir, select).await?
        }
    };

    Ok(if completed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
