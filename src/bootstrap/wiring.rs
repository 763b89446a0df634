//! # Dependency Injection
//!
//! Builds the concrete adapters and hands them to `LabelActions` as ports.
//! The only place that depends on fl-app, fl-infra and fl-platform at once.
//! Assembly only: no workflow decisions are made here.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use fl_app::{AppDeps, LabelActions, LabelSettings};
use fl_core::{ActorId, AppConfig};
use fl_infra::db::pool::{init_db_pool, DbPool};
use fl_infra::qr::parse_ec_level;
use fl_infra::{DieselItemRepository, QrCodeEncoder, QrImageRenderer, SystemClock};
use fl_platform::{AppDirs, ConsoleNotifier, FsLabelSink, HtmlFilePrintSurface};
use tracing::info;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Assembled application. The concrete adapters stay reachable for the
/// commands that report file locations or import data.
pub struct Wired {
    pub actions: LabelActions,
    pub item_repo: Arc<DieselItemRepository>,
    pub print_surface: Arc<HtmlFilePrintSurface>,
    pub output_dir: PathBuf,
}

fn non_empty_or(path: &Path, fallback: PathBuf) -> PathBuf {
    if path.as_os_str().is_empty() {
        fallback
    } else {
        path.to_path_buf()
    }
}

pub fn database_path(config: &AppConfig, dirs: &AppDirs) -> PathBuf {
    non_empty_or(&config.storage.database_path, dirs.database_file())
}

pub fn output_dir(config: &AppConfig, dirs: &AppDirs) -> PathBuf {
    non_empty_or(&config.output.directory, dirs.labels_dir())
}

/// Configured operator, else the login name, else the host name.
pub fn resolve_operator(config: &AppConfig) -> ActorId {
    let configured = config.general.operator.trim();
    if !configured.is_empty() {
        return ActorId::from(configured);
    }
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .ok()
        .filter(|name| !name.trim().is_empty())
        .map(ActorId::from)
        .unwrap_or_else(|| ActorId::from(gethostname::gethostname().to_string_lossy().as_ref()))
}

fn create_db_pool(db_path: &Path) -> WiringResult<DbPool> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            WiringError::DatabaseInit(format!("Failed to create DB directory: {}", e))
        })?;
    }

    let db_url = db_path
        .to_str()
        .ok_or_else(|| WiringError::DatabaseInit("Invalid database path".to_string()))?;

    init_db_pool(db_url)
        .map_err(|e| WiringError::DatabaseInit(format!("Failed to initialize DB: {:#}", e)))
}

pub fn wire_dependencies(config: &AppConfig, dirs: &AppDirs) -> WiringResult<Wired> {
    let db_path = database_path(config, dirs);
    let output_dir = output_dir(config, dirs);
    let ec_level = parse_ec_level(&config.qr.error_correction)
        .map_err(|e| WiringError::Config(e.to_string()))?;

    let item_repo = Arc::new(DieselItemRepository::new(create_db_pool(&db_path)?));
    let print_surface = Arc::new(HtmlFilePrintSurface::new(&output_dir));
    let actor = resolve_operator(config);

    info!(
        database = %db_path.display(),
        output = %output_dir.display(),
        operator = %actor,
        "Wired label workflow"
    );

    let deps = AppDeps {
        item_repo: item_repo.clone(),
        encoder: Arc::new(QrCodeEncoder::new(ec_level)),
        renderer: Arc::new(QrImageRenderer::new(ec_level)),
        print_surface: print_surface.clone(),
        label_sink: Arc::new(FsLabelSink::new(&output_dir)),
        notifier: Arc::new(ConsoleNotifier),
        clock: Arc::new(SystemClock),
    };

    Ok(Wired {
        actions: LabelActions::from_deps(deps, LabelSettings::from_config(config, actor)),
        item_repo,
        print_surface,
        output_dir,
    })
}
